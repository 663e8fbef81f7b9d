//! # Checklist - To-do Item Backend
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the item CRUD endpoints
//! - [`models`] - The item entity, its data access, and shared state
//! - [`error`] - Centralized error type and HTTP response mapping
//! - [`utils`] - Configuration constants

pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;

use std::env;
use std::sync::Arc;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, put},
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::handlers::{create_item, delete_item, health_check, list_items, update_item};
use crate::models::AppState;

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `db_pool` - PostgreSQL database connection pool
///
/// # Environment Variables
///
/// - `CORS_ALLOW_ORIGIN` - Optional comma-separated list of allowed origins.
///   When unset, any origin is allowed.
///
/// # Returns
///
/// A configured Axum router with all application routes and the CORS layer
pub fn app(db_pool: PgPool) -> Router {
    let state = Arc::new(AppState::new(db_pool));

    Router::new()
        .route("/health-check", get(health_check))
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", put(update_item).delete(delete_item))
        .layer(cors_layer())
        .with_state(state)
}

/// Builds the CORS layer from `CORS_ALLOW_ORIGIN`.
///
/// Unparseable entries in the list are skipped. Methods and headers are
/// unrestricted either way; only the origin set is configurable.
fn cors_layer() -> CorsLayer {
    let allow_origin = match env::var("CORS_ALLOW_ORIGIN") {
        Ok(origins) => AllowOrigin::list(
            origins
                .split(',')
                .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok()),
        ),
        Err(_) => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
