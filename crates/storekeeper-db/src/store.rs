//! # Inventory Store
//!
//! The single owner of the products table: one SQLite connection, opened
//! once and used by every operation.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventory Store                                  │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(path) ← Configure the connection                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryStore::open(config).await ← Connect + initialize             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │   Mutex<SqliteConnection>  (exactly one) │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ Calls run one at a time, in issue order                        │
//! │       ▼                                                                 │
//! │  create ─► read_all ─► update ─► delete ...                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each operation is a single statement, so SQLite commits it atomically:
//! a record is never left half written.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use storekeeper_core::{NewProduct, Product, ProductId};

use crate::error::{StoreError, StoreResult};
use crate::schema;

/// Path that selects a private in-memory database.
const MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("/path/to/storeKeeper.db")
///     .busy_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file, or `:memory:`.
    pub database_path: PathBuf,

    /// Create the file when it does not exist.
    /// Default: true
    pub create_if_missing: bool,

    /// SQLite journal mode.
    /// Default: WAL for files, MEMORY for in-memory databases
    pub journal_mode: SqliteJournalMode,

    /// How long a statement waits on a locked file before failing.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Whether to run [`InventoryStore::initialize`] on open.
    /// Default: true
    pub initialize_schema: bool,
}

impl StoreConfig {
    /// Creates a configuration for the given database file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            database_path: path.into(),
            create_if_missing: true,
            journal_mode: SqliteJournalMode::Wal,
            busy_timeout: Duration::from_secs(5),
            initialize_schema: true,
        }
    }

    /// Creates an in-memory configuration (for testing).
    ///
    /// Every store opened from it gets its own empty database, which is
    /// gone once the store is dropped.
    pub fn in_memory() -> Self {
        StoreConfig::new(MEMORY_PATH).journal_mode(SqliteJournalMode::Memory)
    }

    /// Sets whether a missing file is created.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Sets the journal mode.
    pub fn journal_mode(mut self, mode: SqliteJournalMode) -> Self {
        self.journal_mode = mode;
        self
    }

    /// Sets the busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether the schema is ensured on open.
    pub fn initialize_schema(mut self, initialize: bool) -> Self {
        self.initialize_schema = initialize;
        self
    }

    fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == MEMORY_PATH
    }

    fn connect_options(&self) -> StoreResult<SqliteConnectOptions> {
        let options = if self.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(StoreError::unavailable)?
        } else {
            SqliteConnectOptions::new()
                .filename(&self.database_path)
                .create_if_missing(self.create_if_missing)
        };

        Ok(options
            .journal_mode(self.journal_mode)
            // NORMAL is durable in WAL mode; the last commit may roll back on power loss
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(self.busy_timeout))
    }
}

// =============================================================================
// Inventory Store
// =============================================================================

/// Handle to the products table.
///
/// Construct one at startup and pass it by reference to whatever needs it.
/// The connection sits behind a `Mutex`, so the store is `Send + Sync`
/// and calls from different tasks are serialized.
///
/// ## Usage
/// ```rust,ignore
/// let store = InventoryStore::open(StoreConfig::new("storeKeeper.db")).await?;
///
/// let id = store.create(&NewProduct::new("Mouse", 3, 15.50)).await?;
/// let products = store.read_all().await?;
/// ```
#[derive(Debug)]
pub struct InventoryStore {
    conn: Mutex<SqliteConnection>,
}

impl InventoryStore {
    /// Opens the database and, unless disabled, ensures the schema.
    ///
    /// ## Returns
    /// * `Ok(InventoryStore)` - Ready-to-use store
    /// * `Err(StoreError::StorageUnavailable)` - File cannot be opened or initialized
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Opening inventory store"
        );

        let conn = config
            .connect_options()?
            .connect()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to open database");
                StoreError::unavailable(e)
            })?;

        let store = InventoryStore {
            conn: Mutex::new(conn),
        };

        if config.initialize_schema {
            store.initialize().await?;
        }

        Ok(store)
    }

    /// Ensures the products table exists.
    ///
    /// Safe to call any number of times; existing rows are never touched.
    pub async fn initialize(&self) -> StoreResult<()> {
        let mut conn = self.conn.lock().await;
        schema::ensure_schema(&mut conn).await.map_err(|e| {
            error!(error = %e, "Failed to create products table");
            e
        })
    }

    /// Returns whether the products table exists.
    pub async fn is_initialized(&self) -> StoreResult<bool> {
        let mut conn = self.conn.lock().await;
        schema::table_exists(&mut conn).await
    }

    /// Inserts a new product and returns the id the store assigned.
    ///
    /// ## Errors
    /// * `InvalidInput` - Empty name, negative or non-finite price
    /// * `WriteFailed` - The insert did not commit (not retried)
    pub async fn create(&self, product: &NewProduct) -> StoreResult<ProductId> {
        product.validate()?;

        debug!(name = %product.name, "Inserting product");

        let mut conn = self.conn.lock().await;
        let result = sqlx::query(
            "INSERT INTO products (name, quantity, price, image) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price)
        .bind(product.image.as_deref())
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!(error = %e, "Error adding product");
            StoreError::write_failed("insert", &e)
        })?;

        let id = ProductId::new(result.last_insert_rowid());
        debug!(id = %id, "Product added");
        Ok(id)
    }

    /// Returns every stored product, ordered by id.
    ///
    /// An empty table yields an empty `Vec`. On failure nothing is returned;
    /// falling back to an empty list is the caller's decision.
    pub async fn read_all(&self) -> StoreResult<Vec<Product>> {
        let mut conn = self.conn.lock().await;
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price, image FROM products ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!(error = %e, "Error getting products");
            StoreError::read_failed(&e)
        })?;

        debug!(count = products.len(), "Read products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No such id
    pub async fn get(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let mut conn = self.conn.lock().await;
        sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price, image FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!(id = %id, error = %e, "Error getting product");
            StoreError::read_failed(&e)
        })
    }

    /// Replaces name, quantity, price and image of the product with `product.id`.
    ///
    /// ## Returns
    /// Number of rows changed. Zero means the id does not exist, which is
    /// not an error.
    pub async fn update(&self, product: &Product) -> StoreResult<u64> {
        product.validate()?;

        debug!(id = %product.id, "Updating product");

        let mut conn = self.conn.lock().await;
        let result = sqlx::query(
            "UPDATE products SET name = ?1, quantity = ?2, price = ?3, image = ?4 WHERE id = ?5",
        )
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price)
        .bind(product.image.as_deref())
        .bind(product.id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!(id = %product.id, error = %e, "Error updating product");
            StoreError::write_failed("update", &e)
        })?;

        let rows_affected = result.rows_affected();
        debug!(id = %product.id, rows_affected, "Product updated");
        Ok(rows_affected)
    }

    /// Permanently removes the product with the given id.
    ///
    /// ## Returns
    /// Number of rows removed. Zero means the id does not exist, which is
    /// not an error.
    pub async fn delete(&self, id: ProductId) -> StoreResult<u64> {
        debug!(id = %id, "Deleting product");

        let mut conn = self.conn.lock().await;
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!(id = %id, error = %e, "Error deleting product");
                StoreError::write_failed("delete", &e)
            })?;

        let rows_affected = result.rows_affected();
        debug!(id = %id, rows_affected, "Product deleted");
        Ok(rows_affected)
    }

    /// Counts stored products.
    pub async fn count(&self) -> StoreResult<i64> {
        let mut conn = self.conn.lock().await;
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| StoreError::read_failed(&e))
    }

    /// Closes the connection.
    ///
    /// Optional: dropping the store closes it as well. An in-memory
    /// database is discarded.
    pub async fn close(self) -> StoreResult<()> {
        info!("Closing inventory store");
        self.conn
            .into_inner()
            .close()
            .await
            .map_err(StoreError::unavailable)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> InventoryStore {
        InventoryStore::open(StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_config_builder() {
        let config = StoreConfig::new("/tmp/store.db")
            .busy_timeout(Duration::from_secs(1))
            .initialize_schema(false);

        assert_eq!(config.busy_timeout, Duration::from_secs(1));
        assert!(!config.initialize_schema);
        assert!(config.create_if_missing);
        assert!(!config.is_in_memory());
        assert!(StoreConfig::in_memory().is_in_memory());
    }

    #[tokio::test]
    async fn test_open_without_initialize_leaves_no_table() {
        let store = InventoryStore::open(StoreConfig::in_memory().initialize_schema(false))
            .await
            .unwrap();
        assert!(!store.is_initialized().await.unwrap());

        store.initialize().await.unwrap();
        assert!(store.is_initialized().await.unwrap());
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let store = memory_store().await;
        let id = store.create(&NewProduct::new("Widget", 10, 9.99)).await.unwrap();

        for _ in 0..5 {
            store.initialize().await.unwrap();
        }

        let tables: i64 = {
            let mut conn = store.conn.lock().await;
            sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE name = 'products'")
                .fetch_one(&mut *conn)
                .await
                .unwrap()
        };
        assert_eq!(tables, 1);

        let products = store.read_all().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, id);
    }

    #[tokio::test]
    async fn test_empty_table_reads_empty() {
        let store = memory_store().await;
        assert!(store.read_all().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_then_read_all() {
        let store = memory_store().await;
        let id = store.create(&NewProduct::new("Widget", 10, 9.99)).await.unwrap();

        let products = store.read_all().await.unwrap();
        assert_eq!(
            products,
            vec![Product::new(id, "Widget", 10, 9.99)]
        );
        assert!(products[0].image.is_none());
    }

    #[tokio::test]
    async fn test_image_reference_round_trips() {
        let store = memory_store().await;
        let id = store
            .create(&NewProduct::new("Lamp", 2, 30.0).with_image("file:///photos/lamp.jpg"))
            .await
            .unwrap();

        let lamp = store.get(id).await.unwrap().unwrap();
        assert_eq!(lamp.image.as_deref(), Some("file:///photos/lamp.jpg"));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let store = memory_store().await;
        let id = store
            .create(&NewProduct::new("Lamp", 2, 30.0).with_image("file:///lamp.jpg"))
            .await
            .unwrap();

        let changed = Product::new(id, "Desk Lamp", 7, 27.5);
        assert_eq!(store.update(&changed).await.unwrap(), 1);

        let products = store.read_all().await.unwrap();
        assert_eq!(products, vec![changed]);
        // image was replaced with None, not kept
        assert!(products[0].image.is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = memory_store().await;
        let keep = store.create(&NewProduct::new("Keep", 1, 1.0)).await.unwrap();
        let gone = store.create(&NewProduct::new("Gone", 2, 2.0)).await.unwrap();

        assert_eq!(store.delete(gone).await.unwrap(), 1);

        assert_eq!(
            store.read_all().await.unwrap(),
            vec![Product::new(keep, "Keep", 1, 1.0)]
        );
        assert!(store.get(gone).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_id_is_a_silent_no_op() {
        let store = memory_store().await;
        let id = store.create(&NewProduct::new("Mouse", 3, 15.5)).await.unwrap();
        let missing = ProductId::new(999_999);

        let ghost = Product::new(missing, "Ghost", 1, 1.0);
        assert_eq!(store.update(&ghost).await.unwrap(), 0);
        assert_eq!(store.delete(missing).await.unwrap(), 0);

        assert_eq!(
            store.read_all().await.unwrap(),
            vec![Product::new(id, "Mouse", 3, 15.5)]
        );
    }

    #[tokio::test]
    async fn test_ids_strictly_increase() {
        let store = memory_store().await;

        let mut ids = Vec::new();
        for i in 0..100 {
            let id = store
                .create(&NewProduct::new(format!("Item {}", i), i, 1.0))
                .await
                .unwrap();
            ids.push(id);
        }

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(store.count().await.unwrap(), 100);
    }

    #[tokio::test]
    async fn test_deleted_id_is_never_reused() {
        let store = memory_store().await;
        store.create(&NewProduct::new("A", 1, 1.0)).await.unwrap();
        let last = store.create(&NewProduct::new("B", 1, 1.0)).await.unwrap();

        store.delete(last).await.unwrap();
        let next = store.create(&NewProduct::new("C", 1, 1.0)).await.unwrap();

        assert!(next > last);
    }

    #[tokio::test]
    async fn test_mouse_and_cable_scenario() {
        let store = memory_store().await;

        let mouse = store.create(&NewProduct::new("Mouse", 3, 15.50)).await.unwrap();
        let cable = store.create(&NewProduct::new("Cable", 20, 4.00)).await.unwrap();
        assert_eq!(mouse, ProductId::new(1));
        assert_eq!(cable, ProductId::new(2));
        assert_eq!(store.read_all().await.unwrap().len(), 2);

        store
            .update(&Product::new(mouse, "Mouse", 0, 15.50))
            .await
            .unwrap();
        let products = store.read_all().await.unwrap();
        let updated = products.iter().find(|p| p.id == mouse).unwrap();
        assert_eq!(updated.quantity, 0);

        store.delete(cable).await.unwrap();
        assert_eq!(
            store.read_all().await.unwrap(),
            vec![Product::new(mouse, "Mouse", 0, 15.50)]
        );
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_storage() {
        let store = memory_store().await;

        let err = store.create(&NewProduct::new("  ", 1, 1.0)).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));

        let err = store
            .create(&NewProduct::new("Widget", 1, f64::NAN))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));

        let id = store.create(&NewProduct::new("Widget", 1, 1.0)).await.unwrap();
        let err = store
            .update(&Product::new(id, "Widget", 1, -5.0))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));

        assert_eq!(
            store.read_all().await.unwrap(),
            vec![Product::new(id, "Widget", 1, 1.0)]
        );
    }

    #[tokio::test]
    async fn test_storage_faults_are_categorized() {
        let store = memory_store().await;
        store.create(&NewProduct::new("Widget", 1, 1.0)).await.unwrap();

        {
            let mut conn = store.conn.lock().await;
            sqlx::query("DROP TABLE products")
                .execute(&mut *conn)
                .await
                .unwrap();
        }

        assert!(matches!(
            store.read_all().await,
            Err(StoreError::ReadFailed(_))
        ));
        assert!(matches!(
            store.create(&NewProduct::new("Widget", 1, 1.0)).await,
            Err(StoreError::WriteFailed { operation: "insert", .. })
        ));
        assert!(matches!(
            store.delete(ProductId::new(1)).await,
            Err(StoreError::WriteFailed { operation: "delete", .. })
        ));
        assert!(matches!(
            store
                .update(&Product::new(ProductId::new(1), "Widget", 1, 1.0))
                .await,
            Err(StoreError::WriteFailed { operation: "update", .. })
        ));
    }

    #[tokio::test]
    async fn test_unopenable_path_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("store.db");

        let err = InventoryStore::open(StoreConfig::new(path)).await.unwrap_err();
        assert!(matches!(err, StoreError::StorageUnavailable(_)));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_missing_file_without_create_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path().join("store.db")).create_if_missing(false);

        let err = InventoryStore::open(config).await.unwrap_err();
        assert!(matches!(err, StoreError::StorageUnavailable(_)));
    }

    #[tokio::test]
    async fn test_records_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storeKeeper.db");

        let store = InventoryStore::open(StoreConfig::new(&path)).await.unwrap();
        let id = store
            .create(&NewProduct::new("Mouse", 3, 15.5).with_image("file:///mouse.png"))
            .await
            .unwrap();
        store.close().await.unwrap();

        let store = InventoryStore::open(StoreConfig::new(&path)).await.unwrap();
        assert_eq!(
            store.read_all().await.unwrap(),
            vec![Product::new(id, "Mouse", 3, 15.5).with_image("file:///mouse.png")]
        );

        let next = store.create(&NewProduct::new("Cable", 20, 4.0)).await.unwrap();
        assert!(next > id);
        store.close().await.unwrap();
    }
}
