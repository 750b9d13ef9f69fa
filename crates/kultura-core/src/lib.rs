//! # kultura-core: Cart State for the Kultura Storefront
//!
//! This crate is the **heart** of the storefront. It owns the cart: the
//! single shared source of truth that the navigation badge, the cart
//! drawer, the cart page and the checkout page all read and mutate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Kultura Storefront                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Page Tree (views)                            │   │
//! │  │   Navigation ── CartDrawer ── CartPage ── CheckoutPage          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │               subscribe() ▲    │ add_to_cart, toggle_cart, ...          │
//! │                           │    ▼                                        │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ kultura-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │   store   │   │   │
//! │  │   │  Product  │  │   Money   │  │ CartState │  │ CartStore │   │   │
//! │  │   │ Category  │  │  (cents)  │  │ CartLine  │  │  (watch)  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │           kultura-catalog (Product provider)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Immutable cart snapshot and derived totals
//! - [`store`] - The cart store: the only writer, publishing snapshots
//! - [`error`] - Domain error types
//! - [`validation`] - Product and query validation
//!
//! ## Example Usage
//!
//! ```rust
//! use kultura_core::{CartStore, Category, Money, Product};
//!
//! let store = CartStore::new();
//! let polish = Product {
//!     id: "nail-001".to_string(),
//!     name: "Banig Weave Polish Set".to_string(),
//!     short_description: "Five woven-pattern shades".to_string(),
//!     price: Money::from_cents(1250),
//!     image: "/images/nail-001.jpg".to_string(),
//!     category: Category::NailArt,
//! };
//!
//! store.add_to_cart(&polish, 2)?;
//! store.toggle_cart();
//!
//! assert_eq!(store.total_items(), 2);
//! assert_eq!(store.total_price(), Money::from_cents(2500));
//! assert!(store.is_cart_open());
//! # Ok::<(), kultura_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLine, CartState, CartTotals, DrawerState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{CartStore, CartSubscription};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity used when a view adds a product without choosing one.
pub const DEFAULT_ADD_QUANTITY: i64 = 1;
