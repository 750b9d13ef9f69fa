//! # Cart Commands
//!
//! The cart surface exposed to the page tree. Each command takes the
//! session, calls one `CartStore` operation, and answers with the cart as
//! the store now sees it.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_to_cart("perfume-002", None)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.require(id) ── missing ──► ApiError NOT_FOUND                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.add_to_cart(&product, 1) ── malformed ──► ApiError VALIDATION    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartResponse { items, totals, isOpen }  (from the new snapshot)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use kultura_core::{CartLine, CartState, CartTotals, DEFAULT_ADD_QUANTITY};

use crate::error::ApiError;
use crate::state::SessionState;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
    pub is_open: bool,
}

impl From<&CartState> for CartResponse {
    fn from(cart: &CartState) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
            is_open: cart.is_open(),
        }
    }
}

/// Result of a removal: the line that left the cart, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveResponse {
    pub removed: Option<CartLine>,
    pub cart: CartResponse,
}

fn respond(session: &SessionState) -> CartResponse {
    CartResponse::from(&*session.cart.snapshot())
}

/// Gets the current cart contents.
pub fn get_cart(session: &SessionState) -> CartResponse {
    debug!("get_cart command");
    respond(session)
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases, line keeps its position
/// - Product not in cart: appended as a new line
/// - `quantity <= 0`: nothing changes
///
/// ## Arguments
/// * `product_id` - Catalog id to add
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    session: &SessionState,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(DEFAULT_ADD_QUANTITY);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let product = session.catalog.require(product_id)?;
    session.cart.add_to_cart(product, quantity)?;

    Ok(respond(session))
}

/// Sets the quantity of a line. Zero or less removes it.
pub fn update_cart_item(session: &SessionState, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");
    session.cart.update_quantity(product_id, quantity);
    respond(session)
}

/// Moves a line's quantity by `delta`, as the drawer's +/- buttons do.
///
/// Unknown ids are ignored.
pub fn step_cart_item(session: &SessionState, product_id: &str, delta: i64) -> CartResponse {
    debug!(product_id = %product_id, delta = %delta, "step_cart_item command");

    let current = session.cart.snapshot().line(product_id).map(|l| l.quantity);
    if let Some(quantity) = current {
        session
            .cart
            .update_quantity(product_id, quantity.saturating_add(delta));
    }

    respond(session)
}

/// Removes a line from the cart.
pub fn remove_from_cart(session: &SessionState, product_id: &str) -> RemoveResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    let removed = session.cart.remove_from_cart(product_id);
    RemoveResponse {
        removed,
        cart: respond(session),
    }
}

/// Clears all items from the cart. The drawer stays as it was.
pub fn clear_cart(session: &SessionState) -> CartResponse {
    debug!("clear_cart command");
    session.cart.clear_cart();
    respond(session)
}

pub fn open_cart(session: &SessionState) -> CartResponse {
    session.cart.open_cart();
    respond(session)
}

pub fn close_cart(session: &SessionState) -> CartResponse {
    session.cart.close_cart();
    respond(session)
}

pub fn toggle_cart(session: &SessionState) -> CartResponse {
    session.cart.toggle_cart();
    respond(session)
}
