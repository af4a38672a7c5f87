//! # apparent
//!
//! A small, stateless HTTP service that turns temperature, humidity and wind
//! speed into apparent-temperature and comfort indices.
//!
//! ## Architecture
//!
//! - **Engine** ([`metrics`]): input validation, closed-form formulas (heat index,
//!   wind chill, dew point, discomfort index, feels-like) and threshold classifiers
//! - **API Layer** ([`handlers`], [`router`]): a single metrics endpoint plus a heartbeat
//! - **Ambient**: layered configuration, structured logging, typed errors

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod router;
pub mod state;

pub use config::Config;
pub use error::{ApparentError, Result, ValidationError};
pub use logging::{create_http_trace_layer, generate_request_id, init_tracing, log_error};
pub use metrics::{evaluate, MetricsInput, MetricsResult, RawMetricsInput, RawValue};
pub use router::build_router;
pub use state::AppState;
