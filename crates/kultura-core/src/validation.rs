//! # Validation Module
//!
//! Input validation for products entering the cart or the catalog.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Catalog load (kultura-catalog)                                         │
//! │  └── validate_catalog_product: id format, name, price                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  CartStore::add_to_cart                                                 │
//! │  └── validate_product: id present, price >= 0                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Everything else (missing ids on remove/update) is a no-op, not an      │
//! │  error                                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kultura_core::validation::{validate_product_id, validate_search_query};
//!
//! assert!(validate_product_id("nail-001").is_ok());
//! assert_eq!(validate_search_query("  rose ").unwrap(), "rose");
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ID_LEN: usize = 64;
const MAX_NAME_LEN: usize = 200;
const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// Product Validators
// =============================================================================

/// The minimum a product must satisfy to enter the cart.
///
/// ## Rules
/// - `id` must not be blank
/// - `price` must not be negative
///
/// ## Example
/// ```rust
/// use kultura_core::{Category, Money, Product};
/// use kultura_core::validation::validate_product;
///
/// let mut product = Product {
///     id: "toys-001".to_string(),
///     name: "Jeepney Pull Toy".to_string(),
///     short_description: "Hand-painted wood".to_string(),
///     price: Money::from_cents(1800),
///     image: "/images/toys-001.jpg".to_string(),
///     category: Category::Toys,
/// };
/// assert!(validate_product(&product).is_ok());
///
/// product.id = "  ".to_string();
/// assert!(validate_product(&product).is_err());
/// ```
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    validate_price(product.price)
}

/// Stricter rules applied when a catalog is loaded.
pub fn validate_catalog_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price(product.price)
}

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Letters, digits, hyphens, underscores only (ids end up in URLs)
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.trim() != id {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not have leading or trailing whitespace".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Zero is allowed (free items); negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog search query.
///
/// ## Returns
/// The trimmed query string. An empty query is valid and matches everything.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
