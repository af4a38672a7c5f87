//! Shared, read-only application state.
//!
//! Nothing here changes after startup; request handling never mutates it.

use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::config::Config;

#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    /// Unique per server instance
    pub server_id: String,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            server_id: Uuid::new_v4().to_string(),
            started_at: Instant::now(),
        }
    }

    /// Static tag stamped into every metrics response
    pub fn location(&self) -> &str {
        &self.config.meta.location
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
