//! # storekeeper-core: Pure Domain Logic for Storekeeper
//!
//! Record types, validation rules and stock arithmetic for the local
//! inventory store. Nothing in here touches the disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storekeeper Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation layer (external)                   │   │
//! │  │   Product list ──► Add product ──► Edit product ──► Stats       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storekeeper-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐   ┌──────────────┐   ┌───────────────────┐    │   │
//! │  │   │   types    │   │  validation  │   │       stock       │    │   │
//! │  │   │  Product   │   │  name/price  │   │  StockStatus      │    │   │
//! │  │   │ NewProduct │   │   checks     │   │  InventorySummary │    │   │
//! │  │   └────────────┘   └──────────────┘   └───────────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               storekeeper-db (Inventory Store)                  │   │
//! │  │               products table, CRUD, schema                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Record types (`ProductId`, `Product`, `NewProduct`)
//! - [`error`] - Validation error types
//! - [`validation`] - Field checks applied at the store boundary
//! - [`stock`] - Stock status thresholds and inventory summary
//!
//! ## Example Usage
//!
//! ```rust
//! use storekeeper_core::{NewProduct, StockStatus};
//!
//! let widget = NewProduct::new("Widget", 10, 9.99);
//! assert!(widget.validate().is_ok());
//!
//! assert_eq!(StockStatus::for_quantity(3), StockStatus::OutOfStock);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use stock::{InventorySummary, StockStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantities below this are reported as out of stock.
pub const OUT_OF_STOCK_THRESHOLD: i64 = 5;

/// Quantities below this are reported as low stock.
///
/// The inventory summary counts every record under this threshold,
/// including the ones that are out of stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;
