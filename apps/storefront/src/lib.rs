//! # Kultura Storefront Library
//!
//! The storefront's page tree and the session loop that drives it.
//!
//! ## Module Organization
//! ```text
//! kultura_storefront/
//! ├── lib.rs           ◄─── You are here (logging, session loop)
//! ├── app.rs           ◄─── UiEvent parsing + Storefront (one session)
//! ├── router.rs        ◄─── Route table, nav links
//! ├── dom.rs           ◄─── Document: scroll lock, key listeners
//! ├── notifications.rs ◄─── Toast queue
//! ├── state/
//! │   ├── config.rs    ◄─── StorefrontConfig (TOML + env)
//! │   └── session.rs   ◄─── SessionState (store, catalog, config)
//! ├── commands/
//! │   ├── cart.rs      ◄─── Cart commands → CartResponse
//! │   └── catalog.rs   ◄─── Product queries
//! ├── views/
//! │   ├── navigation.rs◄─── Nav bar + cart badge
//! │   ├── drawer.rs    ◄─── Cart drawer (holds scroll lock + Escape)
//! │   └── pages.rs     ◄─── Home, category, cart, checkout
//! └── error.rs         ◄─── API error type for commands
//! ```
//!
//! ## Single Source of Truth
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            ┌──────────────────────────────┐                             │
//! │            │   CartStore (one per session) │                            │
//! │            └──────┬───────────────▲────────┘                            │
//! │        snapshots  │               │  operations                         │
//! │     ┌─────────────┼───────────────┼──────────────┐                      │
//! │     ▼             ▼               │              ▼                      │
//! │  NavBar        Drawer         Router         Pages                      │
//! │  (badge)    (lines, effects) (close on      (cart, checkout)            │
//! │                               /cart, /checkout)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod commands;
pub mod dom;
pub mod error;
pub mod notifications;
pub mod router;
pub mod state;
pub mod views;

use std::path::PathBuf;

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use app::{Flow, Storefront};
use kultura_core::CartSubscription;
use state::{SessionState, StorefrontConfig};

/// Runs one storefront session over stdin/stdout.
///
/// ## Session Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load Config ─────► defaults ← storefront.toml ← KULTURA_* env       │
/// │  2. Start Session ───► catalog (file or built-in), empty CartStore      │
/// │  3. Mount Views ─────► nav bar, drawer, router at "/"                   │
/// │  4. Event Loop ──────► one stdin line = one UiEvent, then redraw        │
/// │  5. Teardown ────────► EOF / quit drops the views and their effects     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::load(StorefrontConfig::resolve_path(config_path))?;
    info!(store = %config.store_name, "Starting Kultura storefront");

    let session = SessionState::start(config)?;
    tokio::spawn(log_cart_changes(session.cart.subscribe()));

    let mut app = Storefront::new(session);
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(app.render().as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let output = match app.handle_line(&line) {
            Flow::Quit => break,
            Flow::Render => app.render(),
            Flow::Print(text) => text,
        };

        stdout.write_all(output.as_bytes()).await?;
        stdout.flush().await?;
    }

    let session = app.session();
    info!(
        session_id = %session.id,
        duration_secs = (Utc::now() - session.started_at).num_seconds(),
        "Session ended"
    );
    Ok(())
}

/// Logs every published cart snapshot until the store goes away.
async fn log_cart_changes(mut updates: CartSubscription) {
    while updates.changed().await.is_ok() {
        let state = updates.borrow_and_update().clone();
        debug!(
            lines = state.line_count(),
            total_items = state.total_items(),
            total_price = %state.total_price(),
            open = state.is_open(),
            "Cart snapshot published"
        );
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kultura_core=trace` - Trace for the cart store only
/// - Default: `info,kultura=debug`
///
/// Logs go to stderr; stdout carries the rendered page.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kultura=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
