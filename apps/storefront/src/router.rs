//! # Router
//!
//! Maps paths to pages and applies the one navigation rule the cart cares
//! about: entering the cart page or checkout closes the drawer.
//!
//! ## Route Table
//! ```text
//! /                    → Home
//! /category/:slug      → Category (nail-art | perfume | toys)
//! /cart                → Cart        (closes drawer)
//! /checkout            → Checkout    (closes drawer)
//! anything else        → NotFound
//! ```

use std::fmt;

use kultura_core::{CartStore, Category};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Category(Category),
    Cart,
    Checkout,
    NotFound(String),
}

impl Route {
    /// Resolves a path. Query strings, fragments and a trailing slash are
    /// ignored.
    pub fn parse(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Home,
            "/cart" => Route::Cart,
            "/checkout" => Route::Checkout,
            other => other
                .strip_prefix("/category/")
                .and_then(|slug| slug.parse::<Category>().ok())
                .map(Route::Category)
                .unwrap_or_else(|| Route::NotFound(path.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Category(category) => format!("/category/{}", category.slug()),
            Route::Cart => "/cart".to_string(),
            Route::Checkout => "/checkout".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Whether arriving here closes the cart drawer.
    pub fn closes_cart(&self) -> bool {
        matches!(self, Route::Cart | Route::Checkout)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A category link in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub category: Category,
}

impl NavLink {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn route(&self) -> Route {
        Route::Category(self.category)
    }

    pub fn is_active(&self, current: &Route) -> bool {
        *current == self.route()
    }
}

/// The category links, in menu order.
pub fn nav_links() -> Vec<NavLink> {
    Category::ALL
        .into_iter()
        .map(|category| NavLink { category })
        .collect()
}

/// Tracks the current route for one session.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn new() -> Self {
        Router {
            current: Route::Home,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Moves to `path`, closing the drawer first when the target route
    /// requires it.
    pub fn navigate(&mut self, path: &str, cart: &CartStore) -> &Route {
        let route = Route::parse(path);

        if route.closes_cart() {
            cart.close_cart();
        }

        debug!(from = %self.current, to = %route, "Navigate");
        self.current = route;
        &self.current
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
