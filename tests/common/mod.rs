//! Common test utilities for apparent.
//!
//! This module provides shared utilities for testing the apparent server.

pub mod assertions;
pub mod http_client;
