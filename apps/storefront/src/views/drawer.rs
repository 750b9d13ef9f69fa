//! # Cart Drawer
//!
//! The slide-out cart. Rendered only while the cart is open, and the only
//! view that holds page-level effects.
//!
//! ## Effect Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Closed ──── open_cart / toggle_cart ───► Open                         │
//! │     ▲          sync(): lock body scroll,     │                          │
//! │     │                  attach Escape         │                          │
//! │     │                                        │                          │
//! │     └── close_cart / Escape / /checkout ─────┘                          │
//! │          sync(): drop both guards                                       │
//! │                                                                         │
//! │   Drawer dropped while Open ──► guards dropped with it                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use kultura_core::{CartStore, CartSubscription};
use tracing::debug;

use crate::dom::{Document, Key, KeyListenerGuard, ScrollLock};
use crate::state::StorefrontConfig;

/// Held for exactly as long as the drawer is open.
struct DrawerEffects {
    _scroll: ScrollLock,
    _escape: KeyListenerGuard,
}

impl Drop for DrawerEffects {
    fn drop(&mut self) {
        debug!("Drawer effects released");
    }
}

pub struct CartDrawer {
    cart: Arc<CartStore>,
    updates: CartSubscription,
    document: Document,
    effects: Option<DrawerEffects>,
}

impl CartDrawer {
    /// Mounts the drawer and applies the current open state.
    pub fn mount(cart: Arc<CartStore>, document: Document) -> Self {
        let updates = cart.subscribe();
        let mut drawer = CartDrawer {
            cart,
            updates,
            document,
            effects: None,
        };
        drawer.sync();
        drawer
    }

    /// Brings the drawer's effects in line with the latest snapshot.
    pub fn sync(&mut self) {
        let open = self.updates.borrow_and_update().is_open();

        match (open, self.effects.is_some()) {
            (true, false) => {
                let cart = Arc::clone(&self.cart);
                let escape = self.document.add_key_listener(move |key| {
                    if *key == Key::Escape {
                        cart.close_cart();
                    }
                });

                self.effects = Some(DrawerEffects {
                    _scroll: self.document.lock_scroll(),
                    _escape: escape,
                });
                debug!("Drawer effects acquired");
            }
            (false, true) => {
                self.effects = None;
            }
            _ => {}
        }
    }

    pub fn has_effects(&self) -> bool {
        self.effects.is_some()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn render(&self, config: &StorefrontConfig) -> Option<String> {
        let state = self.cart.snapshot();
        if !state.is_open() {
            return None;
        }

        let rule = "-".repeat(40);
        let mut lines = vec![format!("Your Cart ({})", state.total_items()), rule.clone()];

        if state.is_empty() {
            lines.push("Your cart is empty".to_string());
            lines.push("Discover our curated collection of nail art, perfumes, and toys.".to_string());
            lines.push("[Continue Shopping]".to_string());
        } else {
            for line in state.items() {
                lines.push(format!("{}  [x]", line.product.name));
                lines.push(format!("  {}", line.product.short_description));
                lines.push(format!(
                    "  [-] {} [+]    {}",
                    line.quantity,
                    config.format_currency(line.line_total())
                ));
            }

            lines.push(rule);
            lines.push(format!("Subtotal  {}", config.format_currency(state.total_price())));
            lines.push("[Checkout] [View Full Cart] [Continue Shopping]".to_string());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kultura_core::{Category, Money, Product};

    fn product(id: &str, name: &str, cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            short_description: "test item".to_string(),
            price: Money::from_cents(cents),
            image: String::new(),
            category: Category::Toys,
        }
    }

    fn mounted() -> (Arc<CartStore>, Document, CartDrawer) {
        let cart = Arc::new(CartStore::new());
        let document = Document::new();
        let drawer = CartDrawer::mount(Arc::clone(&cart), document.clone());
        (cart, document, drawer)
    }

    #[test]
    fn test_effects_follow_open_state() {
        let (cart, document, mut drawer) = mounted();
        assert!(!drawer.has_effects());
        assert!(!document.is_scroll_locked());

        cart.open_cart();
        drawer.sync();
        assert!(drawer.has_effects());
        assert!(document.is_scroll_locked());
        assert_eq!(document.key_listener_count(), 1);

        cart.open_cart();
        drawer.sync();
        assert_eq!(document.key_listener_count(), 1);

        cart.close_cart();
        drawer.sync();
        assert!(!drawer.has_effects());
        assert!(!document.is_scroll_locked());
        assert_eq!(document.key_listener_count(), 0);
    }

    #[test]
    fn test_escape_closes_drawer() {
        let (cart, document, mut drawer) = mounted();
        cart.open_cart();
        drawer.sync();

        document.dispatch_key(&Key::Enter);
        assert!(cart.is_cart_open());

        document.dispatch_key(&Key::Escape);
        assert!(!cart.is_cart_open());

        drawer.sync();
        assert_eq!(document.dispatch_key(&Key::Escape), 0);
    }

    #[test]
    fn test_unmount_while_open_releases_effects() {
        let (cart, document, mut drawer) = mounted();
        cart.open_cart();
        drawer.sync();
        assert!(document.is_scroll_locked());

        drop(drawer);
        assert!(!document.is_scroll_locked());
        assert_eq!(document.key_listener_count(), 0);
        assert!(cart.is_cart_open());
    }

    #[test]
    fn test_mount_while_open_acquires_immediately() {
        let cart = Arc::new(CartStore::new());
        cart.open_cart();
        let document = Document::new();

        let drawer = CartDrawer::mount(Arc::clone(&cart), document.clone());
        assert!(drawer.has_effects());
        assert!(document.is_scroll_locked());
    }

    #[test]
    fn test_render() {
        let (cart, _document, drawer) = mounted();
        let config = StorefrontConfig::default();
        assert!(drawer.render(&config).is_none());

        cart.open_cart();
        let empty = drawer.render(&config).unwrap();
        assert!(empty.contains("Your Cart (0)"));
        assert!(empty.contains("Your cart is empty"));

        cart.add_to_cart(&product("a", "Sipa Set", 800), 2).unwrap();
        let full = drawer.render(&config).unwrap();
        assert!(full.contains("Your Cart (2)"));
        assert!(full.contains("[-] 2 [+]    $16.00"));
        assert!(full.contains("Subtotal  $16.00"));
        assert!(full.ends_with("[Checkout] [View Full Cart] [Continue Shopping]\n"));
    }
}
