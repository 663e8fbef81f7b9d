use sqlx::PgPool;
use tracing::info;

/// Application state shared across requests. Needs to be thread-safe.
///
/// The connection pool is the only shared resource: handlers hold no state
/// of their own between requests, and the database remains the single
/// source of truth.
pub struct AppState {
    /// The PostgreSQL database connection pool.
    pub db_pool: PgPool,
}

impl AppState {
    /// Creates a new application state wrapping the connection pool.
    pub fn new(db_pool: PgPool) -> Self {
        info!("Initializing application state");

        Self { db_pool }
    }
}
