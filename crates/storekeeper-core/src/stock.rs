//! # Stock Levels
//!
//! Classification of a single record's quantity and the aggregate figures
//! shown above the product list.
//!
//! ## Thresholds
//! ```text
//!   quantity:   0 ─────── 4 │ 5 ─────── 9 │ 10 ───────────►
//!   status:     Out of Stock│  Low Stock  │  In Stock
//!   summary:    ◄──── counted as low stock ─┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;
use crate::{LOW_STOCK_THRESHOLD, OUT_OF_STOCK_THRESHOLD};

/// Stock status of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Classifies a quantity against the stock thresholds.
    pub fn for_quantity(quantity: i64) -> Self {
        if quantity < OUT_OF_STOCK_THRESHOLD {
            StockStatus::OutOfStock
        } else if quantity < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

impl Product {
    /// Stock status of this record.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::for_quantity(self.quantity)
    }
}

/// Aggregate figures over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventorySummary {
    /// Sum of all quantities.
    #[ts(type = "number")]
    pub stock_level: i64,

    /// Records below the low-stock threshold.
    pub low_stock_items: usize,

    /// Number of records.
    pub total_products: usize,
}

impl InventorySummary {
    /// Computes the summary for the given records.
    pub fn from_products(products: &[Product]) -> Self {
        products
            .iter()
            .fold(InventorySummary::default(), |mut summary, product| {
                summary.stock_level += product.quantity;
                if product.quantity < LOW_STOCK_THRESHOLD {
                    summary.low_stock_items += 1;
                }
                summary.total_products += 1;
                summary
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
