//! # Views
//!
//! Consumers of the cart store. They read snapshots and call store
//! operations; none owns a copy of the cart.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NavigationBar  badge = total_items (hidden at 0)                       │
//! │  CartDrawer     open-only render, scroll lock + Escape                  │
//! │  pages          home, category, cart, checkout, not found               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod drawer;
mod navigation;
pub mod pages;

pub use drawer::CartDrawer;
pub use navigation::NavigationBar;
