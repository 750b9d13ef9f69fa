//! # Storefront Commands
//!
//! Functions the page tree calls. Each takes the `SessionState` and returns
//! either a serializable response or an `ApiError`.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart.rs                           catalog.rs                           │
//! │  • get_cart                        • list_categories                    │
//! │  • add_to_cart                     • list_category                      │
//! │  • update_cart_item                • search_products                    │
//! │  • step_cart_item                                                       │
//! │  • remove_from_cart                                                     │
//! │  • clear_cart                                                           │
//! │  • open_cart / close_cart / toggle_cart                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
