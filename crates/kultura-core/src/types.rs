//! # Domain Types
//!
//! Catalog reference data shared by the cart, the catalog provider and
//! every view.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                 │
//! │  │      Product        │        │      Category       │                 │
//! │  │  ─────────────────  │        │  ─────────────────  │                 │
//! │  │  id                 │───────►│  NailArt  nail-art  │                 │
//! │  │  name               │        │  Perfume  perfume   │                 │
//! │  │  short_description  │        │  Toys     toys      │                 │
//! │  │  price (Money)      │        └─────────────────────┘                 │
//! │  │  image              │                                                │
//! │  │  category           │                                                │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are owned by the catalog and are never mutated by the cart.
//! The cart keeps whatever `Product` value it was handed at add-time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    NailArt,
    Perfume,
    Toys,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 3] = [Category::NailArt, Category::Perfume, Category::Toys];

    /// URL slug, as used in `/category/:slug`.
    pub const fn slug(&self) -> &'static str {
        match self {
            Category::NailArt => "nail-art",
            Category::Perfume => "perfume",
            Category::Toys => "toys",
        }
    }

    /// Human-readable label for navigation links.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::NailArt => "Nail Art",
            Category::Perfume => "Perfume",
            Category::Toys => "Toys",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == slug)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product offered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, e.g. `nail-001`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// One-line description shown under the name in the cart.
    pub short_description: String,

    /// Unit price in cents.
    pub price: Money,

    /// Path of the display image.
    pub image: String,

    pub category: Category,
}

impl Product {
    /// Returns `price × quantity`.
    #[inline]
    pub fn price_for(&self, quantity: i64) -> Money {
        self.price.multiply_quantity(quantity)
    }
}
