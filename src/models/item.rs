//! # To-do Item Model
//!
//! This module defines the Item entity stored in the `items` table, along with
//! its data access functions. Every function issues exactly one SQL statement;
//! mutations use `RETURNING` so callers always see the persisted row.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A single to-do item as stored in the database and serialized on the wire.
///
/// The identifier is assigned by the database on insert and is immutable
/// afterwards. The wire format uses `isComplete` for the completion flag:
/// `{ "id": 1, "name": "Buy milk", "isComplete": false }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

impl Item {
    /// Fetches every item, in backend-determined order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        sqlx::query_as::<_, Item>("SELECT id, name, is_complete FROM items")
            .fetch_all(pool)
            .await
    }

    /// Inserts a new item and returns it with its database-assigned id.
    pub async fn insert(pool: &PgPool, name: &str, is_complete: bool) -> Result<Item, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, is_complete) VALUES ($1, $2) \
             RETURNING id, name, is_complete",
        )
        .bind(name)
        .bind(is_complete)
        .fetch_one(pool)
        .await
    }

    /// Sets the completion flag of the item with the given id.
    ///
    /// Lookup and mutation happen in one statement; `None` means no such row
    /// exists (and nothing was created or changed).
    pub async fn set_complete(
        pool: &PgPool,
        id: i64,
        is_complete: bool,
    ) -> Result<Option<Item>, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET is_complete = $2 WHERE id = $1 \
             RETURNING id, name, is_complete",
        )
        .bind(id)
        .bind(is_complete)
        .fetch_optional(pool)
        .await
    }

    /// Permanently removes the item with the given id.
    ///
    /// Returns whether a row was actually deleted.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
