//! # Session State Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SessionState                      StorefrontConfig                     │
//! │  • session id                      • store name                         │
//! │  • Arc<CartStore>                  • currency display                   │
//! │  • Arc<Catalog>                    • catalog path                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigResult, StorefrontConfig};
pub use session::SessionState;
