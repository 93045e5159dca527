//! In-process stores used by the router tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use super::{ItemStore, PersistenceError};
use crate::models::{Item, NewItem};

fn stored(id: i64, item: &NewItem) -> Item {
    Item {
        id,
        name: item.name.clone(),
        quantity: item.quantity,
        description: item.description.clone(),
    }
}

/// Auto-incrementing map standing in for the inventory table
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<BTreeMap<i64, Item>>,
    next_id: RwLock<i64>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of statements issued so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list_items(&self) -> Result<Vec<Item>, PersistenceError> {
        self.record_call();
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn search_items(&self, term: &str) -> Result<Vec<Item>, PersistenceError> {
        self.record_call();
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|item| item.name.contains(term))
            .cloned()
            .collect())
    }

    async fn fetch_item(&self, id: i64) -> Result<Option<Item>, PersistenceError> {
        self.record_call();
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert_item(&self, item: &NewItem) -> Result<i64, PersistenceError> {
        self.record_call();
        let mut next_id = self.next_id.write().await;
        *next_id += 1;
        let id = *next_id;
        self.rows
            .write()
            .await
            .insert(id, stored(id, item));
        Ok(id)
    }

    async fn update_item(&self, id: i64, item: &NewItem) -> Result<u64, PersistenceError> {
        self.record_call();
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(existing) => {
                *existing = stored(id, item);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_item(&self, id: i64) -> Result<u64, PersistenceError> {
        self.record_call();
        Ok(self.rows.write().await.remove(&id).map_or(0, |_| 1))
    }
}

/// Store whose every statement fails like a lost connection
#[derive(Default)]
pub struct FailingStore;

fn unavailable() -> PersistenceError {
    PersistenceError::Query(sqlx::Error::PoolClosed)
}

#[async_trait]
impl ItemStore for FailingStore {
    async fn list_items(&self) -> Result<Vec<Item>, PersistenceError> {
        Err(unavailable())
    }

    async fn search_items(&self, _term: &str) -> Result<Vec<Item>, PersistenceError> {
        Err(unavailable())
    }

    async fn fetch_item(&self, _id: i64) -> Result<Option<Item>, PersistenceError> {
        Err(unavailable())
    }

    async fn insert_item(&self, _item: &NewItem) -> Result<i64, PersistenceError> {
        Err(unavailable())
    }

    async fn update_item(&self, _id: i64, _item: &NewItem) -> Result<u64, PersistenceError> {
        Err(unavailable())
    }

    async fn delete_item(&self, _id: i64) -> Result<u64, PersistenceError> {
        Err(unavailable())
    }
}
