//! # Navigation Bar
//!
//! Store name, category links and the cart button with its item badge.

use std::sync::Arc;

use kultura_core::{CartState, CartStore};

use crate::router::{nav_links, Route};

pub struct NavigationBar {
    cart: Arc<CartStore>,
}

impl NavigationBar {
    pub fn new(cart: Arc<CartStore>) -> Self {
        NavigationBar { cart }
    }

    /// Badge text for the cart button, hidden for an empty cart.
    pub fn badge(state: &CartState) -> Option<String> {
        let count = state.total_items();
        (count > 0).then(|| count.to_string())
    }

    pub fn render(&self, store_name: &str, current: &Route) -> String {
        let state = self.cart.snapshot();

        let links: Vec<String> = nav_links()
            .into_iter()
            .map(|link| {
                if link.is_active(current) {
                    format!("*{}*", link.label())
                } else {
                    link.label().to_string()
                }
            })
            .collect();

        let cart = match Self::badge(&state) {
            Some(badge) => format!("[Cart ({})]", badge),
            None => "[Cart]".to_string(),
        };

        format!("{}  |  {}  |  {}", store_name, links.join("  "), cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kultura_core::{Category, Money, Product};

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            short_description: String::new(),
            price: Money::from_cents(100),
            image: String::new(),
            category: Category::Perfume,
        }
    }

    #[test]
    fn test_badge_hidden_when_empty() {
        let cart = Arc::new(CartStore::new());
        let nav = NavigationBar::new(Arc::clone(&cart));

        assert_eq!(NavigationBar::badge(&cart.snapshot()), None);
        assert!(nav.render("Kultura", &Route::Home).ends_with("[Cart]"));

        cart.add_to_cart(&product("a"), 2).unwrap();
        cart.add_to_cart(&product("b"), 1).unwrap();
        assert_eq!(NavigationBar::badge(&cart.snapshot()), Some("3".to_string()));
        assert!(nav.render("Kultura", &Route::Home).ends_with("[Cart (3)]"));
    }

    #[test]
    fn test_active_link_marked() {
        let nav = NavigationBar::new(Arc::new(CartStore::new()));
        let line = nav.render("Kultura", &Route::Category(Category::Toys));
        assert_eq!(line, "Kultura  |  Nail Art  Perfume  *Toys*  |  [Cart]");
    }
}
