//! # Session State
//!
//! Everything one browsing session shares: the cart store, the catalog and
//! the configuration.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SessionState                                    │
//! │                                                                         │
//! │  cart: Arc<CartStore> ──┬──► NavigationBar (reads, toggle_cart)         │
//! │                         ├──► CartDrawer    (reads, update/remove/close) │
//! │                         ├──► Escape key listener (close_cart)           │
//! │                         └──► commands::cart (JSON surface)              │
//! │                                                                         │
//! │  catalog: Arc<Catalog> ───► category pages, add_to_cart lookups         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is exactly one store per session. Views hold a clone of the `Arc`,
//! never a copy of the cart.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kultura_catalog::{Catalog, CatalogResult};
use kultura_core::CartStore;
use tracing::info;
use uuid::Uuid;

use super::config::StorefrontConfig;

#[derive(Debug, Clone)]
pub struct SessionState {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub cart: Arc<CartStore>,
    pub catalog: Arc<Catalog>,
    pub config: StorefrontConfig,
}

impl SessionState {
    /// Starts a session with an empty cart.
    ///
    /// Loads the catalog named in the config, or the built-in one.
    pub fn start(config: StorefrontConfig) -> CatalogResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::builtin()?,
        };

        Ok(Self::with_catalog(config, catalog))
    }

    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        let session = SessionState {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            cart: Arc::new(CartStore::new()),
            catalog: Arc::new(catalog),
            config,
        };

        info!(
            session_id = %session.id,
            products = session.catalog.len(),
            "Session started"
        );
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_with_builtin_catalog() {
        let session = SessionState::start(StorefrontConfig::default()).unwrap();
        assert_eq!(session.catalog.len(), 12);
        assert!(session.cart.snapshot().is_empty());
        assert!(!session.cart.is_cart_open());
    }

    #[test]
    fn test_start_with_missing_catalog_file() {
        let config = StorefrontConfig {
            catalog_path: Some("/definitely/not/here.json".into()),
            ..Default::default()
        };
        assert!(SessionState::start(config).is_err());
    }

    #[test]
    fn test_sessions_do_not_share_carts() {
        let a = SessionState::start(StorefrontConfig::default()).unwrap();
        let b = SessionState::start(StorefrontConfig::default()).unwrap();

        let product = a.catalog.require("toys-002").unwrap().clone();
        a.cart.add_one(&product).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.cart.total_items(), 1);
        assert_eq!(b.cart.total_items(), 0);
    }
}
