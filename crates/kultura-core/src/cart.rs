//! # Cart State
//!
//! The immutable cart snapshot and its derived values.
//!
//! ## Snapshot Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Snapshots                                       │
//! │                                                                         │
//! │  CartStore publishes           Views read                               │
//! │  ──────────────────            ──────────                               │
//! │                                                                         │
//! │  Arc<CartState> v1  ─────────► nav badge, drawer   (v1 never changes)   │
//! │        │                                                                │
//! │   add_to_cart(a)                                                        │
//! │        │  clone v1, apply, publish                                      │
//! │        ▼                                                                │
//! │  Arc<CartState> v2  ─────────► nav badge, drawer, cart page             │
//! │                                                                         │
//! │  total_items() / total_price() are computed from `lines` on every       │
//! │  call, so no reader can see a count that disagrees with the lines.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The mutating helpers on [`CartState`] are crate-private: only
//! [`CartStore`](crate::store::CartStore) calls them, and only on a fresh
//! clone that has not been published yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Drawer Visibility
// =============================================================================

/// Visibility of the cart drawer.
///
/// ```text
///            open_cart / toggle_cart
///   ┌────────┐ ─────────────────────► ┌────────┐
///   │ Closed │                        │  Open  │
///   └────────┘ ◄───────────────────── └────────┘
///            close_cart / toggle_cart
/// ```
///
/// `open_cart` on Open and `close_cart` on Closed are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    #[inline]
    pub const fn is_open(&self) -> bool {
        matches!(self, DrawerState::Open)
    }

    /// The opposite state.
    #[inline]
    pub const fn toggled(&self) -> Self {
        match self {
            DrawerState::Open => DrawerState::Closed,
            DrawerState::Closed => DrawerState::Open,
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One product in the cart paired with a quantity.
///
/// ## Invariants
/// - `quantity >= 1`; a line whose quantity would drop to zero is removed
/// - `product` is the value handed to `add_to_cart`, never a second copy
///   fetched later
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,

    pub quantity: i64,

    /// When the product first entered the cart. Re-adding keeps this.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product: Product, quantity: i64) -> Self {
        CartLine {
            product,
            quantity,
            added_at: Utc::now(),
        }
    }

    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price_for(self.quantity)
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The full cart snapshot: ordered lines plus drawer visibility.
///
/// ## Invariants
/// - Every product id appears at most once in `lines`
/// - Lines keep insertion order among distinct products
/// - No line has `quantity <= 0`
/// - `drawer` is independent of `lines`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    lines: Vec<CartLine>,
    drawer: DrawerState,
}

impl CartState {
    /// An empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered lines.
    #[inline]
    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    #[inline]
    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.drawer.is_open()
    }

    /// Looks up the line for a product id.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Number of distinct products.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities over all lines. Saturates on overflow.
    pub fn total_items(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |total, l| total.saturating_add(l.quantity))
    }

    /// Sum of `price × quantity` over all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    // =========================================================================
    // Transitions (store-only)
    // =========================================================================
    // Each returns whether the state changed. Callers pass already
    // validated, positive quantities.

    pub(crate) fn add_line(&mut self, product: &Product, quantity: i64) -> bool {
        debug_assert!(quantity > 0);

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return true;
        }

        self.lines.push(CartLine::new(product.clone(), quantity));
        true
    }

    pub(crate) fn take_line(&mut self, product_id: &str) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product.id == product_id)?;
        Some(self.lines.remove(index))
    }

    pub(crate) fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        debug_assert!(quantity > 0);

        match self.lines.iter_mut().find(|l| l.product.id == product_id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear_lines(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        true
    }

    pub(crate) fn set_drawer(&mut self, drawer: DrawerState) -> bool {
        if self.drawer == drawer {
            return false;
        }
        self.drawer = drawer;
        true
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Totals summary for serialization to the page tree.
///
/// Always built from a snapshot, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_items: i64,
    pub total_price: Money,
}

impl From<&CartState> for CartTotals {
    fn from(cart: &CartState) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}
