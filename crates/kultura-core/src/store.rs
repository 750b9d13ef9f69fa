//! # Cart Store
//!
//! The single owner and only writer of the cart.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Operations                                 │
//! │                                                                         │
//! │  View Action              Store Operation          Snapshot Change      │
//! │  ───────────              ───────────────          ───────────────      │
//! │                                                                         │
//! │  Add to Cart ───────────► add_to_cart() ─────────► line += qty / push   │
//! │  +/- buttons ───────────► update_quantity() ─────► line.qty = n         │
//! │  Remove (x) ────────────► remove_from_cart() ────► line removed         │
//! │  Clear ─────────────────► clear_cart() ──────────► lines = []           │
//! │  Bag icon ──────────────► toggle_cart() ─────────► drawer flipped       │
//! │  Backdrop / Escape ─────► close_cart() ──────────► drawer = Closed      │
//! │                                                                         │
//! │  Every change: clone current → apply → publish new Arc<CartState>       │
//! │  No change (missing id, qty <= 0 add, already open): nothing published  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Notification
//! The store publishes through a `tokio::sync::watch` channel. Publishing
//! happens inside the operation, so when an operation returns every
//! receiver already reports `has_changed() == true` and `borrow()` yields
//! the new snapshot. Nothing is spawned and nothing awaits; the store works
//! the same with or without a runtime.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::cart::{CartLine, CartState, DrawerState};
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_product;
use crate::DEFAULT_ADD_QUANTITY;

/// Receiver half handed to views.
pub type CartSubscription = watch::Receiver<Arc<CartState>>;

/// Shared cart state container.
///
/// Construct one per session and pass it by reference (or `Arc`) to every
/// consumer; there is no global instance.
#[derive(Debug)]
pub struct CartStore {
    tx: watch::Sender<Arc<CartState>>,
}

impl CartStore {
    /// Creates a store holding an empty, closed cart.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Arc::new(CartState::new()));
        CartStore { tx }
    }

    // =========================================================================
    // Subscription & Reads
    // =========================================================================

    /// Subscribes to snapshot changes.
    ///
    /// The receiver starts out "seen": `has_changed()` turns true only after
    /// the next published mutation.
    pub fn subscribe(&self) -> CartSubscription {
        self.tx.subscribe()
    }

    /// The current snapshot. It will never change under the caller.
    pub fn snapshot(&self) -> Arc<CartState> {
        Arc::clone(&self.tx.borrow())
    }

    /// Ordered lines of the current snapshot.
    pub fn items(&self) -> Vec<CartLine> {
        self.tx.borrow().items().to_vec()
    }

    pub fn is_cart_open(&self) -> bool {
        self.tx.borrow().is_open()
    }

    pub fn total_items(&self) -> i64 {
        self.tx.borrow().total_items()
    }

    pub fn total_price(&self) -> Money {
        self.tx.borrow().total_price()
    }

    // =========================================================================
    // Cart Mutations
    // =========================================================================

    /// Adds `quantity` of `product`.
    ///
    /// ## Behavior
    /// - Product already in cart: its line grows by `quantity`, keeping its
    ///   position
    /// - Product not in cart: appended as a new line
    /// - `quantity <= 0`: silently ignored
    ///
    /// ## Errors
    /// `CoreError::InvalidArgument` if the product has a blank id or a
    /// negative price. The cart is left untouched.
    pub fn add_to_cart(&self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_product(product)?;

        if quantity <= 0 {
            debug!(product_id = %product.id, quantity, "add_to_cart ignored: non-positive quantity");
            return Ok(());
        }

        self.publish("add_to_cart", |cart| cart.add_line(product, quantity));
        debug!(product_id = %product.id, quantity, "add_to_cart");
        Ok(())
    }

    /// Adds a single unit of `product`.
    pub fn add_one(&self, product: &Product) -> CoreResult<()> {
        self.add_to_cart(product, DEFAULT_ADD_QUANTITY)
    }

    /// Removes the line for `product_id`, returning it.
    ///
    /// Returns `None` (and publishes nothing) if the product is not in the
    /// cart.
    pub fn remove_from_cart(&self, product_id: &str) -> Option<CartLine> {
        let mut removed = None;
        self.publish("remove_from_cart", |cart| {
            removed = cart.take_line(product_id);
            removed.is_some()
        });

        debug!(product_id, removed = removed.is_some(), "remove_from_cart");
        removed
    }

    /// Sets the quantity of `product_id` to exactly `quantity`.
    ///
    /// `quantity <= 0` removes the line, same as [`remove_from_cart`].
    /// Unknown ids are ignored.
    ///
    /// [`remove_from_cart`]: CartStore::remove_from_cart
    pub fn update_quantity(&self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        let changed = self.publish("update_quantity", |cart| {
            cart.set_quantity(product_id, quantity)
        });
        debug!(product_id, quantity, changed, "update_quantity");
    }

    /// Empties the cart. Drawer visibility is left as it is.
    pub fn clear_cart(&self) {
        let changed = self.publish("clear_cart", CartState::clear_lines);
        debug!(changed, "clear_cart");
    }

    // =========================================================================
    // Drawer Visibility
    // =========================================================================

    pub fn open_cart(&self) {
        self.set_drawer(DrawerState::Open);
    }

    pub fn close_cart(&self) {
        self.set_drawer(DrawerState::Closed);
    }

    pub fn toggle_cart(&self) {
        let changed = self.publish("toggle_cart", |cart| {
            let next = cart.drawer().toggled();
            cart.set_drawer(next)
        });
        debug!(changed, open = self.is_cart_open(), "toggle_cart");
    }

    fn set_drawer(&self, drawer: DrawerState) {
        let changed = self.publish("set_drawer", |cart| cart.set_drawer(drawer));
        debug!(?drawer, changed, "drawer visibility");
    }

    // =========================================================================
    // Publishing
    // =========================================================================

    /// Applies `apply` to a private clone of the current snapshot and, if it
    /// reports a change, publishes the clone as the new snapshot.
    ///
    /// Previously published snapshots are never touched.
    fn publish<F>(&self, op: &'static str, apply: F) -> bool
    where
        F: FnOnce(&mut CartState) -> bool,
    {
        self.tx.send_if_modified(|current| {
            let mut next = CartState::clone(current);
            if !apply(&mut next) {
                debug!(op, "no change, nothing published");
                return false;
            }
            *current = Arc::new(next);
            true
        })
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::types::Category;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            short_description: format!("About {}", id),
            price: Money::from_cents(price_cents),
            image: format!("/images/{}.jpg", id),
            category: Category::NailArt,
        }
    }

    fn quantities(store: &CartStore) -> Vec<(String, i64)> {
        store
            .items()
            .into_iter()
            .map(|l| (l.product.id, l.quantity))
            .collect()
    }

    fn assert_totals_consistent(store: &CartStore) {
        let snapshot = store.snapshot();
        let items: i64 = snapshot.items().iter().map(|l| l.quantity).sum();
        let price: i64 = snapshot
            .items()
            .iter()
            .map(|l| l.product.price.cents() * l.quantity)
            .sum();
        assert_eq!(store.total_items(), items);
        assert_eq!(store.total_price().cents(), price);
    }

    // -------------------------------------------------------------------------
    // add_to_cart
    // -------------------------------------------------------------------------

    #[test]
    fn test_distinct_adds_each_get_one_line() {
        let store = CartStore::new();
        let ids = ["a", "b", "c", "d", "e"];

        for id in ids {
            store.add_one(&test_product(id, 100)).unwrap();
        }

        let items = store.items();
        assert_eq!(items.len(), ids.len());
        assert!(items.iter().all(|l| l.quantity == 1));
        let order: Vec<_> = items.iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn test_repeated_add_accumulates() {
        let store = CartStore::new();
        let p = test_product("a", 1000);

        store.add_to_cart(&p, 2).unwrap();
        store.add_to_cart(&p, 5).unwrap();

        assert_eq!(quantities(&store), vec![("a".to_string(), 7)]);
    }

    #[test]
    fn test_readd_does_not_move_line() {
        let store = CartStore::new();
        store.add_one(&test_product("a", 1)).unwrap();
        store.add_one(&test_product("b", 1)).unwrap();
        store.add_one(&test_product("a", 1)).unwrap();

        assert_eq!(
            quantities(&store),
            vec![("a".to_string(), 2), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn test_add_non_positive_quantity_is_noop() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.add_to_cart(&test_product("a", 1000), 0).unwrap();
        store.add_to_cart(&test_product("a", 1000), -2).unwrap();

        assert!(store.items().is_empty());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_add_malformed_product_is_rejected() {
        let store = CartStore::new();

        let err = store.add_one(&test_product("", 1000)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidArgument(ValidationError::Required { .. })
        ));

        let err = store.add_one(&test_product("a", -5)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidArgument(ValidationError::MustBeNonNegative { .. })
        ));

        assert!(store.items().is_empty());
    }

    #[test]
    fn test_add_keeps_product_value_given() {
        let store = CartStore::new();
        let mut p = test_product("a", 1000);
        store.add_one(&p).unwrap();

        p.price = Money::from_cents(9999);
        p.name = "Renamed".to_string();

        let line = store.snapshot().line("a").cloned().unwrap();
        assert_eq!(line.product.price, Money::from_cents(1000));
        assert_eq!(line.product.name, "Product a");
    }

    // -------------------------------------------------------------------------
    // update / remove / clear
    // -------------------------------------------------------------------------

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        for q in [0, -3] {
            let store = CartStore::new();
            store.add_to_cart(&test_product("a", 1000), 2).unwrap();
            store.add_one(&test_product("b", 500)).unwrap();

            store.update_quantity("a", q);

            assert_eq!(quantities(&store), vec![("b".to_string(), 1)]);
            assert_totals_consistent(&store);
        }
    }

    #[test]
    fn test_update_quantity_is_absolute() {
        let store = CartStore::new();
        store.add_to_cart(&test_product("a", 1000), 3).unwrap();

        store.update_quantity("a", 1);
        assert_eq!(quantities(&store), vec![("a".to_string(), 1)]);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let store = CartStore::new();
        store.add_one(&test_product("a", 1000)).unwrap();
        let before = store.snapshot();

        store.update_quantity("missing", 4);
        store.update_quantity("missing", 0);

        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_remove_missing_id_leaves_state_unchanged() {
        let store = CartStore::new();
        store.add_one(&test_product("a", 1000)).unwrap();
        store.open_cart();
        let before = store.snapshot();
        let mut rx = store.subscribe();

        assert!(store.remove_from_cart("missing").is_none());

        let after = store.snapshot();
        assert_eq!(before.items(), after.items());
        assert_eq!(before.is_open(), after.is_open());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_remove_returns_line() {
        let store = CartStore::new();
        store.add_to_cart(&test_product("a", 1000), 2).unwrap();

        let removed = store.remove_from_cart("a").unwrap();
        assert_eq!(removed.quantity, 2);
        assert_eq!(removed.product.name, "Product a");
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_clear_leaves_drawer_alone() {
        for open in [true, false] {
            let store = CartStore::new();
            store.add_one(&test_product("a", 1000)).unwrap();
            store.add_to_cart(&test_product("b", 500), 2).unwrap();
            if open {
                store.open_cart();
            }

            store.clear_cart();

            assert!(store.items().is_empty());
            assert_eq!(store.total_items(), 0);
            assert!(store.total_price().is_zero());
            assert_eq!(store.is_cart_open(), open);
        }
    }

    // -------------------------------------------------------------------------
    // Drawer visibility
    // -------------------------------------------------------------------------

    #[test]
    fn test_drawer_starts_closed_and_is_idempotent() {
        let store = CartStore::new();
        assert!(!store.is_cart_open());

        store.open_cart();
        store.open_cart();
        assert!(store.is_cart_open());

        store.close_cart();
        store.close_cart();
        assert!(!store.is_cart_open());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let store = CartStore::new();
        for start_open in [false, true] {
            if start_open {
                store.open_cart();
            } else {
                store.close_cart();
            }
            store.toggle_cart();
            assert_eq!(store.is_cart_open(), !start_open);
            store.toggle_cart();
            assert_eq!(store.is_cart_open(), start_open);
        }
    }

    #[test]
    fn test_visibility_never_touches_lines() {
        let store = CartStore::new();
        store.add_to_cart(&test_product("a", 1000), 2).unwrap();
        let lines = store.items();

        store.open_cart();
        store.toggle_cart();
        store.toggle_cart();
        store.close_cart();

        assert_eq!(store.items(), lines);
    }

    // -------------------------------------------------------------------------
    // Scenario
    // -------------------------------------------------------------------------

    #[test]
    fn test_scenario_add_update_remove_clear() {
        let store = CartStore::new();
        let a = test_product("a", 10);
        let b = test_product("b", 5);

        store.add_to_cart(&a, 1).unwrap();
        store.add_to_cart(&b, 2).unwrap();
        assert_eq!(store.total_items(), 3);
        assert_eq!(store.total_price(), Money::from_cents(20));
        assert_eq!(
            quantities(&store),
            vec![("a".to_string(), 1), ("b".to_string(), 2)]
        );

        store.update_quantity("a", 4);
        assert_eq!(
            quantities(&store),
            vec![("a".to_string(), 4), ("b".to_string(), 2)]
        );
        assert_eq!(store.total_price(), Money::from_cents(50));

        store.remove_from_cart("b");
        assert_eq!(quantities(&store), vec![("a".to_string(), 4)]);
        assert_eq!(store.total_items(), 4);
        assert_eq!(store.total_price(), Money::from_cents(40));

        let was_open = store.is_cart_open();
        store.clear_cart();
        assert!(store.items().is_empty());
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), Money::zero());
        assert_eq!(store.is_cart_open(), was_open);
    }

    #[test]
    fn test_totals_consistent_after_every_operation() {
        let store = CartStore::new();
        let products: Vec<_> = (1..=4).map(|i| test_product(&format!("p{}", i), i * 250)).collect();

        store.add_to_cart(&products[0], 3).unwrap();
        assert_totals_consistent(&store);
        store.add_to_cart(&products[1], 1).unwrap();
        assert_totals_consistent(&store);
        store.add_to_cart(&products[0], 2).unwrap();
        assert_totals_consistent(&store);
        store.update_quantity("p2", 7);
        assert_totals_consistent(&store);
        store.add_to_cart(&products[3], 4).unwrap();
        assert_totals_consistent(&store);
        store.remove_from_cart("p1");
        assert_totals_consistent(&store);
        store.update_quantity("p4", -1);
        assert_totals_consistent(&store);
        store.clear_cart();
        assert_totals_consistent(&store);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let store = CartStore::new();
        store.add_to_cart(&test_product("a", 1), i64::MAX).unwrap();
        store.add_to_cart(&test_product("b", 1), 1).unwrap();

        assert_eq!(store.items().len(), 2);
        assert_eq!(store.total_items(), i64::MAX);
        assert_eq!(store.total_price(), Money::from_cents(i64::MAX));
    }

    // -------------------------------------------------------------------------
    // Snapshots & subscription
    // -------------------------------------------------------------------------

    #[test]
    fn test_published_snapshots_are_never_mutated() {
        let store = CartStore::new();
        store.add_one(&test_product("a", 1000)).unwrap();
        let old = store.snapshot();

        store.add_one(&test_product("a", 1000)).unwrap();
        store.open_cart();

        assert_eq!(old.line("a").map(|l| l.quantity), Some(1));
        assert!(!old.is_open());
        assert_eq!(store.snapshot().line("a").map(|l| l.quantity), Some(2));
    }

    #[test]
    fn test_subscribers_see_change_before_operation_returns() {
        let store = CartStore::new();
        let mut nav = store.subscribe();
        let mut drawer = store.subscribe();

        store.add_to_cart(&test_product("a", 1000), 2).unwrap();

        assert!(nav.has_changed().unwrap());
        assert!(drawer.has_changed().unwrap());
        let from_nav = nav.borrow_and_update().clone();
        let from_drawer = drawer.borrow_and_update().clone();
        assert!(Arc::ptr_eq(&from_nav, &from_drawer));
        assert_eq!(from_nav.total_items(), 2);
    }

    #[tokio::test]
    async fn test_subscription_wakes_on_change() {
        let store = Arc::new(CartStore::new());
        let mut rx = store.subscribe();

        let writer = Arc::clone(&store);
        let handle = tokio::spawn(async move {
            writer.open_cart();
        });

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_open());
        handle.await.unwrap();
    }
}
