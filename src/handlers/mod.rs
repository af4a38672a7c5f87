//! HTTP request handlers for the apparent API.
//!
//! This module contains all the endpoint handlers for the web server.

pub mod heartbeat;
pub mod metrics;

pub use heartbeat::heartbeat_handler;
pub use metrics::{metrics_body_handler, metrics_query_handler};
