//! # kultura-catalog: Product Provider for the Kultura Storefront
//!
//! Supplies `Product` records by id, category or search query. The cart
//! never writes back here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Kultura Data Flow                                   │
//! │                                                                         │
//! │  CategoryPage ──► Catalog::by_category("perfume")                       │
//! │  "Add to Cart" ─► Catalog::require(id) ──► CartStore::add_to_cart(&p)   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  kultura-catalog (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐    │   │
//! │  │   │   Catalog     │    │     seed      │    │    error     │    │   │
//! │  │   │ (catalog.rs)  │◄───│ built-in set  │    │ CatalogError │    │   │
//! │  │   │ id index      │    └───────────────┘    └──────────────┘    │   │
//! │  │   │ by_category   │◄─── catalog.json (optional, serde_json)     │   │
//! │  │   └───────────────┘                                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use kultura_catalog::Catalog;
//! use kultura_core::Category;
//!
//! let catalog = Catalog::builtin()?;
//! let toys = catalog.by_category(Category::Toys);
//! assert!(!toys.is_empty());
//! # Ok::<(), kultura_catalog::CatalogError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod seed;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
