//! # Application Constants
//!
//! This module defines configuration constants used throughout the checklist
//! service. These constants control connection pool sizing and defaults.

use std::time::Duration;

/// Maximum number of connections held by the database pool
///
/// Each request checks out at most one connection for the duration of its
/// single query, so a small pool goes a long way.
pub const DB_MAX_CONNECTIONS: u32 = 8;

/// How long to wait for a pooled connection before giving up
pub const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Address the server binds to when `BIND_ADDR` is not set
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8090";
