//! # Schema Initialization
//!
//! The products table and the idempotent statement that creates it.
//!
//! ## How Initialization Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Initialization                                     │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS products (...)                             │
//! │       │                                                                 │
//! │       ├── Table missing?  → created, empty                             │
//! │       └── Table present?  → untouched, rows kept                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  App continues startup                                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no later schema versions, so no migration table is kept.

use sqlx::SqliteConnection;
use tracing::info;

use crate::error::{StoreError, StoreResult};

/// Name of the one table the store manages.
pub const PRODUCTS_TABLE: &str = "products";

/// `AUTOINCREMENT` keeps ids strictly increasing and stops SQLite from
/// handing out the id of a deleted row again.
const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT    NOT NULL,
    quantity INTEGER NOT NULL,
    price    REAL    NOT NULL,
    image    TEXT
)
"#;

/// Creates the products table if it does not exist yet.
///
/// ## Safety
/// - Idempotent: safe to run on every start
/// - Never drops or rewrites existing rows
///
/// ## Errors
/// Any failure is reported as [`StoreError::StorageUnavailable`].
pub async fn ensure_schema(conn: &mut SqliteConnection) -> StoreResult<()> {
    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(&mut *conn)
        .await
        .map_err(StoreError::unavailable)?;

    info!(table = PRODUCTS_TABLE, "Schema ensured");
    Ok(())
}

/// Checks whether the products table exists.
pub async fn table_exists(conn: &mut SqliteConnection) -> StoreResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(PRODUCTS_TABLE)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| StoreError::read_failed(&e))?;

    Ok(count > 0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqliteConnectOptions;
    use sqlx::ConnectOptions;
    use std::str::FromStr;

    async fn memory_connection() -> SqliteConnection {
        SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .connect()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_ensure_schema_creates_table() {
        let mut conn = memory_connection().await;
        assert!(!table_exists(&mut conn).await.unwrap());

        ensure_schema(&mut conn).await.unwrap();
        assert!(table_exists(&mut conn).await.unwrap());
    }

    #[tokio::test]
    async fn test_column_layout() {
        let mut conn = memory_connection().await;
        ensure_schema(&mut conn).await.unwrap();

        let columns: Vec<(String, String, i64, i64)> = sqlx::query_as(
            r#"SELECT name, type, "notnull", pk FROM pragma_table_info('products') ORDER BY cid"#,
        )
        .fetch_all(&mut conn)
        .await
        .unwrap();

        assert_eq!(
            columns,
            vec![
                ("id".to_string(), "INTEGER".to_string(), 0, 1),
                ("name".to_string(), "TEXT".to_string(), 1, 0),
                ("quantity".to_string(), "INTEGER".to_string(), 1, 0),
                ("price".to_string(), "REAL".to_string(), 1, 0),
                ("image".to_string(), "TEXT".to_string(), 0, 0),
            ]
        );
    }

    #[tokio::test]
    async fn test_ensure_schema_keeps_rows() {
        let mut conn = memory_connection().await;
        ensure_schema(&mut conn).await.unwrap();

        sqlx::query("INSERT INTO products (name, quantity, price) VALUES ('Mouse', 3, 15.5)")
            .execute(&mut conn)
            .await
            .unwrap();

        ensure_schema(&mut conn).await.unwrap();
        ensure_schema(&mut conn).await.unwrap();

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut conn)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }
}
