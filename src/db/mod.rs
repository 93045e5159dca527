pub mod inventory;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Item, NewItem};

pub use inventory::{DbConfig, DbInventory};

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Database query error: {0}")]
    Query(#[from] sqlx::Error),
}

/// Storage operations behind the item handlers.
///
/// Every method maps to exactly one statement. Writes that target an id
/// report the affected-row count so callers can detect missing rows.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    async fn list_items(&self) -> Result<Vec<Item>, PersistenceError>;

    /// Items whose name contains `term`
    async fn search_items(&self, term: &str) -> Result<Vec<Item>, PersistenceError>;

    async fn fetch_item(&self, id: i64) -> Result<Option<Item>, PersistenceError>;

    /// Insert and return the generated id
    async fn insert_item(&self, item: &NewItem) -> Result<i64, PersistenceError>;

    async fn update_item(&self, id: i64, item: &NewItem) -> Result<u64, PersistenceError>;

    async fn delete_item(&self, id: i64) -> Result<u64, PersistenceError>;
}
