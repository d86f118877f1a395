//! # Domain Types
//!
//! Record types exchanged between the presentation layer and the store.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   NewProduct    │   │     Product     │   │    ProductId    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  id             │   │  i64 surrogate  │       │
//! │  │  quantity       │   │  name           │   │  assigned by    │       │
//! │  │  price          │   │  quantity       │   │  the store      │       │
//! │  │  image?         │   │  price, image?  │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │     create(...)          read_all / update                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `NewProduct` has no id: the store assigns one on insert. Every update
//! writes a whole `Product`, never individual fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::validation::{self, ValidationResult};

// =============================================================================
// Product ID
// =============================================================================

/// Surrogate key of a stored product.
///
/// Assigned by the store, strictly increasing and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[ts(export)]
pub struct ProductId(#[ts(type = "number")] i64);

impl ProductId {
    /// Wraps a raw row id.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        ProductId(raw)
    }

    /// Returns the raw row id.
    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A stored stock-keeping record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,

    /// Display name, never empty.
    pub name: String,

    /// Units on hand.
    #[ts(type = "number")]
    pub quantity: i64,

    /// Unit price.
    pub price: f64,

    /// Opaque image reference (usually a local file URI).
    pub image: Option<String>,
}

impl Product {
    /// Builds a full record, e.g. for an update.
    pub fn new(id: ProductId, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Product {
            id,
            name: name.into(),
            quantity,
            price,
            image: None,
        }
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Checks the mutable fields before they are written.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_fields(&self.name, self.price)
    }

    /// SKU label shown next to the product: the id padded to six digits.
    ///
    /// ```rust
    /// use storekeeper_core::{Product, ProductId};
    ///
    /// let p = Product::new(ProductId::new(42), "Mouse", 3, 15.5);
    /// assert_eq!(p.display_sku(), "000042");
    /// ```
    pub fn display_sku(&self) -> String {
        format!("{:06}", self.id.get())
    }
}

// =============================================================================
// New Product
// =============================================================================

/// The fields of a product that does not exist yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    #[ts(type = "number")]
    pub quantity: i64,
    pub price: f64,
    pub image: Option<String>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        NewProduct {
            name: name.into(),
            quantity,
            price,
            image: None,
        }
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Checks the fields before they are inserted.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_fields(&self.name, self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_sku_pads_to_six_digits() {
        let p = Product::new(ProductId::new(1), "Mouse", 3, 15.5);
        assert_eq!(p.display_sku(), "000001");

        let p = Product::new(ProductId::new(1_234_567), "Cable", 20, 4.0);
        assert_eq!(p.display_sku(), "1234567");
    }

    #[test]
    fn test_product_json_shape() {
        let p = Product::new(ProductId::new(3), "Mouse", 0, 15.5);
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Mouse");
        assert_eq!(json["quantity"], 0);
        assert_eq!(json["price"], 15.5);
        assert!(json["image"].is_null());
    }

    #[test]
    fn test_product_id_is_a_bare_number_in_json() {
        assert_eq!(serde_json::to_string(&ProductId::new(12)).unwrap(), "12");

        let id: ProductId = serde_json::from_str("12").unwrap();
        assert_eq!(id, ProductId::new(12));
    }

    #[test]
    fn test_new_product_from_json_without_image() {
        let p: NewProduct =
            serde_json::from_str(r#"{"name":"Cable","quantity":20,"price":4.0,"image":null}"#)
                .unwrap();
        assert_eq!(p, NewProduct::new("Cable", 20, 4.0));
    }
}
