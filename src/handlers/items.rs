//! # Item Handlers
//!
//! This module implements the CRUD endpoints for to-do items. Each handler
//! performs exactly one data access call and translates its outcome into an
//! HTTP response; the database is the sole source of truth between requests.
//!
//! Request parsing is explicit: the fallible extractors are accepted as
//! `Result` and mapped to `400 Bad Request`, instead of leaking the
//! framework's default rejection responses.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    extract::rejection::{JsonRejection, QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::models::{AppState, Item};

/// Payload for creating a new item.
///
/// Any `id` supplied by the caller is ignored; the database assigns one.
/// The completion flag defaults to `false` when omitted.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default, rename = "isComplete")]
    pub is_complete: bool,
}

/// Query parameters carrying the new completion flag value.
#[derive(Debug, Deserialize)]
pub struct CompletionParams {
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

/// Lists every item in the collection.
///
/// GET /items
///
/// Items are returned in backend-determined order; an empty collection
/// yields an empty array.
///
/// # Returns
///
/// - `200 OK` with an array of items
/// - `500 Internal Server Error` - Database error
#[instrument(skip_all)]
pub async fn list_items(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Item>>> {
    debug!("Processing item list request");

    let items = Item::list(&state.db_pool).await?;

    info!(count = items.len(), "Listed items");
    Ok(Json(items))
}

/// Creates a new item.
///
/// POST /items CreateItemRequest
///
/// The database assigns the identifier; the response carries the created
/// item and a `Location` header pointing at it.
///
/// # Returns
///
/// - `201 Created` with the created item and a `Location` header
/// - `400 Bad Request` - Malformed payload (e.g. missing name)
/// - `500 Internal Server Error` - Database error
#[instrument(skip_all)]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(%rejection, "Rejected malformed item payload");
        AppError::BadRequest("Invalid item payload")
    })?;

    debug!(name = %payload.name, "Processing item creation request");

    let item = Item::insert(&state.db_pool, &payload.name, payload.is_complete).await?;

    info!(item_id = item.id, "Created item");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/items/{}", item.id))],
        Json(item),
    ))
}

/// Sets the completion flag of an existing item.
///
/// PUT /items/{id}?isComplete=true
///
/// Only the completion flag is mutable through this endpoint; the name and
/// identifier are left untouched. The lookup and the write happen in a
/// single statement, so a missing identifier never creates a row.
///
/// # Returns
///
/// - `200 OK` with the updated item
/// - `400 Bad Request` - Missing or malformed `isComplete` parameter
/// - `404 Not Found` - No item with the given id (empty body)
/// - `500 Internal Server Error` - Database error
#[instrument(skip_all, fields(item_id = id))]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    params: Result<Query<CompletionParams>, QueryRejection>,
) -> AppResult<Json<Item>> {
    let Query(params) = params.map_err(|rejection| {
        warn!(%rejection, "Rejected malformed completion parameter");
        AppError::BadRequest("Invalid isComplete parameter")
    })?;

    debug!(
        is_complete = params.is_complete,
        "Processing item update request"
    );

    match Item::set_complete(&state.db_pool, id, params.is_complete).await? {
        Some(item) => {
            info!(is_complete = item.is_complete, "Updated item");
            Ok(Json(item))
        }
        None => {
            debug!("Item to update not found");
            Err(AppError::NotFound)
        }
    }
}

/// Permanently deletes an item.
///
/// DELETE /items/{id}
///
/// # Returns
///
/// - `200 OK` with an empty body - Item removed
/// - `404 Not Found` - No item with the given id (empty body)
/// - `500 Internal Server Error` - Database error
#[instrument(skip_all, fields(item_id = id))]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    debug!("Processing item deletion request");

    if Item::delete(&state.db_pool, id).await? {
        info!("Deleted item");
        Ok(StatusCode::OK)
    } else {
        debug!("Item to delete not found");
        Err(AppError::NotFound)
    }
}
