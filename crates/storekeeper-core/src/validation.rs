//! # Validation Module
//!
//! Field checks applied to records at the store boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (external)                                      │
//! │  ├── Parses form input into numbers                                    │
//! │  └── Business rules (e.g. "quantity must be positive")                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (called by the store)                            │
//! │  ├── name present                                                       │
//! │  └── price finite and not negative                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SQLite                                                        │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity is deliberately not range-checked here: the store accepts any
//! integer and leaves stock rules to its callers.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Rules
/// - Must contain something other than whitespace
///
/// ## Example
/// ```rust
/// use storekeeper_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Widget").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be finite (SQLite turns NaN into NULL, which the column rejects)
/// - Must be zero or greater
///
/// ## Example
/// ```rust
/// use storekeeper_core::validation::validate_price;
///
/// assert!(validate_price(9.99).is_ok());
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Runs every field check shared by inserts and updates.
pub(crate) fn validate_fields(name: &str, price: f64) -> ValidationResult<()> {
    validate_product_name(name)?;
    validate_price(price)
}

// =============================================================================
// Unit Tests
// =============================================================================
