//! # storekeeper-db: Inventory Store
//!
//! Durable storage for product records in a local SQLite file, reached
//! through one connection that lives as long as the store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storekeeper Data Flow                            │
//! │                                                                         │
//! │  Product list screen (readAll), Add/Edit screens (create/update)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storekeeper-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐    ┌───────────────┐    ┌─────────────┐   │   │
//! │  │   │ InventoryStore │    │    schema     │    │ StoreError  │   │   │
//! │  │   │   (store.rs)   │───►│  (schema.rs)  │    │ (error.rs)  │   │   │
//! │  │   │                │    │               │    │             │   │   │
//! │  │   │ one connection │    │ CREATE TABLE  │    │ Unavailable │   │   │
//! │  │   │ CRUD           │    │ IF NOT EXISTS │    │ Write/Read  │   │   │
//! │  │   └────────────────┘    └───────────────┘    └─────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                     storeKeeper.db                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Configuration and the store handle
//! - [`schema`] - Table definition and idempotent initialization
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storekeeper_db::{InventoryStore, StoreConfig};
//! use storekeeper_core::NewProduct;
//!
//! let store = InventoryStore::open(StoreConfig::new("storeKeeper.db")).await?;
//!
//! let id = store.create(&NewProduct::new("Mouse", 3, 15.50)).await?;
//! let products = store.read_all().await?;
//! store.delete(id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod schema;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{InventoryStore, StoreConfig};
