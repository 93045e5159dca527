use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::Error as SqlxError;
use std::time::Duration;
use tracing::{debug, error, info};

use super::{ItemStore, PersistenceError};
use crate::models::{Item, NewItem};

const SELECT_COLUMNS: &str = "SELECT id, name, quantity, description FROM inventory";

/// Connection settings for the MySQL pool
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl DbConfig {
    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Inventory row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    quantity: f64,
    description: Option<String>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            description: row.description.unwrap_or_default(),
        }
    }
}

/// Database connection pool for the inventory table
pub struct DbInventory {
    pool: MySqlPool,
}

impl DbInventory {
    /// Create the connection pool.
    ///
    /// No connection is opened here; the first statement connects. Once
    /// `max_connections` are checked out, further acquisitions wait in the
    /// pool's queue.
    ///
    /// # Arguments
    /// * `config` - MySQL connection settings
    pub fn new(config: &DbConfig) -> Self {
        info!(
            "Creating database connection pool for {}@{}:{}/{} (max {} connections)",
            config.user, config.host, config.port, config.database, config.max_connections
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(0)
            .acquire_timeout(Duration::from_secs(3600))
            .connect_lazy_with(config.connect_options());

        info!("Database connection pool created successfully");

        Self { pool }
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }

    fn log_pool_stats(&self, operation: &str) {
        let pool_idle = self.pool.num_idle() as u32;
        let pool_size = self.pool.size();
        debug!(
            "{}. Pool connections: {} idle, {} in use",
            operation,
            pool_idle,
            pool_size.saturating_sub(pool_idle)
        );
    }

    fn query_failed(&self, operation: &str, e: SqlxError) -> PersistenceError {
        error!(
            "Database query error while {}: {}. Pool state: {} idle, {} total",
            operation,
            e,
            self.pool.num_idle(),
            self.pool.size()
        );
        PersistenceError::Query(e)
    }
}

#[async_trait]
impl ItemStore for DbInventory {
    async fn list_items(&self) -> Result<Vec<Item>, PersistenceError> {
        self.log_pool_stats("Listing items");

        let rows = sqlx::query_as::<_, ItemRow>(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.query_failed("listing items", e))?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn search_items(&self, term: &str) -> Result<Vec<Item>, PersistenceError> {
        self.log_pool_stats("Searching items");

        let sql = format!("{} WHERE name LIKE ?", SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(format!("%{}%", term))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.query_failed("searching items", e))?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn fetch_item(&self, id: i64) -> Result<Option<Item>, PersistenceError> {
        self.log_pool_stats("Fetching item");

        let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| self.query_failed("fetching item", e))?;

        Ok(row.map(Item::from))
    }

    async fn insert_item(&self, item: &NewItem) -> Result<i64, PersistenceError> {
        self.log_pool_stats("Inserting item");

        let result =
            sqlx::query("INSERT INTO inventory (name, quantity, description) VALUES (?, ?, ?)")
                .bind(&item.name)
                .bind(item.quantity)
                .bind(&item.description)
                .execute(&self.pool)
                .await
                .map_err(|e| self.query_failed("inserting item", e))?;

        Ok(result.last_insert_id() as i64)
    }

    async fn update_item(&self, id: i64, item: &NewItem) -> Result<u64, PersistenceError> {
        self.log_pool_stats("Updating item");

        // The driver negotiates CLIENT_FOUND_ROWS, so this counts matched rows
        // even when the new values equal the old ones.
        let result = sqlx::query(
            "UPDATE inventory SET name = ?, quantity = ?, description = ? WHERE id = ?",
        )
        .bind(&item.name)
        .bind(item.quantity)
        .bind(&item.description)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| self.query_failed("updating item", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_item(&self, id: i64) -> Result<u64, PersistenceError> {
        self.log_pool_stats("Deleting item");

        let result = sqlx::query("DELETE FROM inventory WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| self.query_failed("deleting item", e))?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_description_reads_as_empty() {
        let item = Item::from(ItemRow {
            id: 3,
            name: "Bolt".to_string(),
            quantity: 40.0,
            description: None,
        });
        assert_eq!(item.description, "");
        assert_eq!(item.id, 3);
    }

    #[tokio::test]
    async fn pool_is_created_without_connecting() {
        let config = DbConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "root".to_string(),
            password: String::new(),
            database: "inventory_db".to_string(),
            max_connections: 10,
        };
        let db = DbInventory::new(&config);
        assert_eq!(db.pool.size(), 0);
        assert_eq!(db.pool.options().get_max_connections(), 10);
    }
}
