//! # Error Types
//!
//! Domain-specific error types for kultura-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kultura-core errors (this file)                                        │
//! │  ├── CoreError        - Rejected calls into the cart and domain types   │
//! │  └── ValidationError  - Field-level reasons for a rejection             │
//! │                                                                         │
//! │  kultura-catalog errors (separate crate)                                │
//! │  └── CatalogError     - Catalog loading and lookup failures             │
//! │                                                                         │
//! │  storefront app errors                                                  │
//! │  └── ApiError         - What a view sees (code + message)               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → view                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Cart operations that name a product id the cart does not hold are
//! no-ops. Only a malformed `Product` handed to `add_to_cart` is rejected,
//! because that is a caller bug rather than a runtime condition.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A malformed argument was passed to a store operation.
    ///
    /// ## When This Occurs
    /// - `add_to_cart` with a product whose id is empty
    /// - `add_to_cart` with a negative price
    ///
    /// The call is rejected and the cart is left untouched. The session
    /// carries on.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// A product id could not be resolved against the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A category slug that is not one of the fixed catalog categories.
    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two catalog entries sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
