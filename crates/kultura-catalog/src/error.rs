//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / ValidationError                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds path / product id context            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in storefront app) ← code + message for the view             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use kultura_core::ValidationError;
use thiserror::Error;

/// Catalog loading and lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with this id.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a JSON array of products.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A product failed validation on load.
    ///
    /// ## When This Occurs
    /// - Blank or malformed id
    /// - Blank name
    /// - Negative price
    /// - Two products sharing an id
    #[error("Invalid product '{id}': {source}")]
    InvalidProduct {
        id: String,
        #[source]
        source: ValidationError,
    },

    /// A search query was rejected.
    #[error("Invalid query: {0}")]
    InvalidQuery(#[source] ValidationError),
}

impl CatalogError {
    pub fn not_found(id: impl Into<String>) -> Self {
        CatalogError::NotFound(id.into())
    }

    pub fn duplicate(id: impl Into<String>) -> Self {
        let id = id.into();
        CatalogError::InvalidProduct {
            source: ValidationError::Duplicate {
                field: "id".to_string(),
                value: id.clone(),
            },
            id,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
