//! # Storefront Session
//!
//! Wires one session's store, router and views together and turns UI
//! events into store operations.
//!
//! ## Event Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "inc nail-001"                                                         │
//! │       │ parse                                                           │
//! │       ▼                                                                 │
//! │  UiEvent::Increment ──► commands::cart::step_cart_item ──► CartStore    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  drawer.sync()   acquire/release effects for the new snapshot           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  render()        nav + page + drawer + toasts, all from one snapshot    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use kultura_core::Product;
use tracing::{debug, warn};

use crate::commands;
use crate::dom::{Document, Key};
use crate::error::ApiError;
use crate::notifications::{ToastKind, Toaster};
use crate::router::{Route, Router};
use crate::state::SessionState;
use crate::views::{pages, CartDrawer, NavigationBar};

pub const HELP: &str = "\
Commands:
  add <id> [qty]     add a product (default 1)
  remove <id>        remove a line from the cart
  inc <id>           increase a line's quantity by one
  dec <id>           decrease a line's quantity by one
  qty <id> <n>       set a line's quantity (0 removes)
  clear              empty the cart
  open | close       show or hide the cart drawer
  toggle             press the cart button
  key <name>         press a key (e.g. `key escape`)
  goto <path>        navigate (/, /category/<slug>, /cart, /checkout)
  search <query>     search the catalog
  json               print the cart as JSON
  show               redraw the page
  help               this text
  quit               leave the session
";

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Add {
        product_id: String,
        quantity: Option<i64>,
    },
    Remove(String),
    Increment(String),
    Decrement(String),
    SetQuantity {
        product_id: String,
        quantity: i64,
    },
    Clear,
    Open,
    Close,
    Toggle,
    Key(Key),
    Goto(String),
    Search(String),
    Json,
    Show,
    Help,
    Quit,
}

fn parse_quantity(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation(format!("'{}' is not a whole number", raw)))
}

fn required<'a>(arg: Option<&'a str>, usage: &str) -> Result<&'a str, ApiError> {
    arg.ok_or_else(|| ApiError::validation(format!("usage: {}", usage)))
}

impl FromStr for UiEvent {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let event = match command.to_ascii_lowercase().as_str() {
            "add" => {
                let product_id = required(args.next(), "add <id> [qty]")?.to_string();
                let quantity = args.next().map(parse_quantity).transpose()?;
                UiEvent::Add {
                    product_id,
                    quantity,
                }
            }
            "remove" | "rm" => UiEvent::Remove(required(args.next(), "remove <id>")?.to_string()),
            "inc" => UiEvent::Increment(required(args.next(), "inc <id>")?.to_string()),
            "dec" => UiEvent::Decrement(required(args.next(), "dec <id>")?.to_string()),
            "qty" => {
                let product_id = required(args.next(), "qty <id> <n>")?.to_string();
                let quantity = parse_quantity(required(args.next(), "qty <id> <n>")?)?;
                UiEvent::SetQuantity {
                    product_id,
                    quantity,
                }
            }
            "clear" => UiEvent::Clear,
            "open" => UiEvent::Open,
            "close" => UiEvent::Close,
            "toggle" | "cart" => UiEvent::Toggle,
            "key" => UiEvent::Key(Key::from(required(args.next(), "key <name>")?)),
            "goto" | "go" => UiEvent::Goto(required(args.next(), "goto <path>")?.to_string()),
            "search" => UiEvent::Search(rest.to_string()),
            "json" => UiEvent::Json,
            "show" | "" => UiEvent::Show,
            "help" | "?" => UiEvent::Help,
            "quit" | "exit" => UiEvent::Quit,
            other => {
                return Err(ApiError::validation(format!(
                    "unknown command '{}' (try `help`)",
                    other
                )))
            }
        };

        Ok(event)
    }
}

/// What the driver should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Redraw the page.
    Render,
    /// Print this text instead of redrawing.
    Print(String),
    Quit,
}

pub struct Storefront {
    session: SessionState,
    document: Document,
    router: Router,
    nav: NavigationBar,
    drawer: CartDrawer,
    toaster: Toaster,
    search: Option<(String, Vec<Product>)>,
}

impl Storefront {
    pub fn new(session: SessionState) -> Self {
        let document = Document::new();
        let nav = NavigationBar::new(session.cart.clone());
        let drawer = CartDrawer::mount(session.cart.clone(), document.clone());
        let toaster = Toaster::new(session.config.toast_capacity);

        Storefront {
            session,
            document,
            router: Router::new(),
            nav,
            drawer,
            toaster,
            search: None,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    /// Parses and handles one input line. Bad input becomes an error toast.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        match line.parse::<UiEvent>() {
            Ok(event) => self.handle(event),
            Err(e) => {
                self.toaster.error(e.message);
                Flow::Render
            }
        }
    }

    pub fn handle(&mut self, event: UiEvent) -> Flow {
        debug!(?event, "UI event");

        let flow = match self.dispatch(event) {
            Ok(flow) => flow,
            Err(e) => {
                warn!(error = %e, "Event failed");
                self.toaster.error(e.message);
                Flow::Render
            }
        };

        self.drawer.sync();
        flow
    }

    fn dispatch(&mut self, event: UiEvent) -> Result<Flow, ApiError> {
        let session = &self.session;

        match event {
            UiEvent::Add {
                product_id,
                quantity,
            } => {
                let before = session.cart.total_items();
                let cart = commands::cart::add_to_cart(session, &product_id, quantity)?;
                if cart.totals.total_items != before {
                    if let Some(line) = cart.items.iter().find(|l| l.product.id == product_id) {
                        self.toaster.added(&line.product.name);
                    }
                }
            }
            UiEvent::Remove(product_id) => {
                let response = commands::cart::remove_from_cart(session, &product_id);
                if let Some(line) = response.removed {
                    self.toaster.removed(&line.product.name);
                }
            }
            UiEvent::Increment(product_id) => {
                commands::cart::step_cart_item(session, &product_id, 1);
            }
            UiEvent::Decrement(product_id) => {
                commands::cart::step_cart_item(session, &product_id, -1);
            }
            UiEvent::SetQuantity {
                product_id,
                quantity,
            } => {
                commands::cart::update_cart_item(session, &product_id, quantity);
            }
            UiEvent::Clear => {
                commands::cart::clear_cart(session);
            }
            UiEvent::Open => {
                commands::cart::open_cart(session);
            }
            UiEvent::Close => {
                commands::cart::close_cart(session);
            }
            UiEvent::Toggle => {
                commands::cart::toggle_cart(session);
            }
            UiEvent::Key(key) => {
                self.document.dispatch_key(&key);
            }
            UiEvent::Goto(path) => {
                self.search = None;
                self.router.navigate(&path, &session.cart);
            }
            UiEvent::Search(query) => {
                let results = commands::catalog::search_products(session, &query)?;
                self.search = Some((query, results));
            }
            UiEvent::Json => {
                let cart = commands::cart::get_cart(session);
                let json = serde_json::to_string_pretty(&cart)
                    .map_err(|e| ApiError::internal(e.to_string()))?;
                return Ok(Flow::Print(format!("{}\n", json)));
            }
            UiEvent::Show => {}
            UiEvent::Help => return Ok(Flow::Print(HELP.to_string())),
            UiEvent::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Render)
    }

    /// Draws the whole page from the current snapshot and flushes toasts.
    pub fn render(&mut self) -> String {
        let config = &self.session.config;
        let state = self.session.cart.snapshot();

        let mut out = self.nav.render(&config.store_name, self.router.current());
        out.push('\n');
        out.push_str(&"=".repeat(72));
        out.push('\n');

        let page = match (&self.search, self.router.current()) {
            (Some((query, results)), _) => pages::search_results(query, results, config),
            (None, Route::Home) => {
                pages::home(&commands::catalog::list_categories(&self.session))
            }
            (None, Route::Category(category)) => {
                match commands::catalog::list_category(&self.session, category.slug()) {
                    Ok(products) => pages::category(*category, &products, config),
                    Err(e) => format!("{}\n", e.message),
                }
            }
            (None, Route::Cart) => pages::cart_page(&state, config),
            (None, Route::Checkout) => pages::checkout_page(&state, config),
            (None, Route::NotFound(path)) => pages::not_found(path),
        };
        out.push_str(&page);

        if let Some(drawer) = self.drawer.render(config) {
            out.push('\n');
            out.push_str(&drawer);
        }

        for toast in self.toaster.drain() {
            let marker = match toast.kind {
                ToastKind::Success => '✓',
                ToastKind::Error => '!',
            };
            out.push_str(&format!("{} {}\n", marker, toast.message));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StorefrontConfig;
    use kultura_core::Money;

    fn storefront() -> Storefront {
        Storefront::new(SessionState::start(StorefrontConfig::default()).unwrap())
    }

    #[test]
    fn test_parse_events() {
        assert_eq!(
            "add nail-001".parse::<UiEvent>().unwrap(),
            UiEvent::Add {
                product_id: "nail-001".to_string(),
                quantity: None
            }
        );
        assert_eq!(
            "qty toys-002 -3".parse::<UiEvent>().unwrap(),
            UiEvent::SetQuantity {
                product_id: "toys-002".to_string(),
                quantity: -3
            }
        );
        assert_eq!(
            "search  ilang ilang ".parse::<UiEvent>().unwrap(),
            UiEvent::Search("ilang ilang".to_string())
        );
        assert_eq!("KEY Escape".parse::<UiEvent>().unwrap(), UiEvent::Key(Key::Escape));
        assert!("add".parse::<UiEvent>().is_err());
        assert!("qty a two".parse::<UiEvent>().is_err());
        assert!("dance".parse::<UiEvent>().is_err());
    }

    #[test]
    fn test_add_toasts_and_updates_badge() {
        let mut app = storefront();
        assert_eq!(app.handle_line("add perfume-003 2"), Flow::Render);

        let page = app.render();
        assert!(page.contains("[Cart (2)]"));
        assert!(page.contains("Calamansi Cologne added to cart"));

        app.handle_line("add perfume-003 0");
        assert!(!app.render().contains("added to cart"));
    }

    #[test]
    fn test_unknown_product_is_an_error_toast() {
        let mut app = storefront();
        app.handle_line("add perfume-999");
        let page = app.render();
        assert!(page.contains("! Product not found: perfume-999"));
        assert_eq!(app.session().cart.total_items(), 0);
    }

    #[test]
    fn test_drawer_effects_follow_events() {
        let mut app = storefront();
        app.handle_line("toggle");
        assert!(app.document().is_scroll_locked());

        app.handle_line("key escape");
        assert!(!app.session().cart.is_cart_open());
        assert!(!app.document().is_scroll_locked());
        assert_eq!(app.document().key_listener_count(), 0);
    }

    #[test]
    fn test_checkout_link_closes_drawer() {
        let mut app = storefront();
        app.handle_line("add toys-004");
        app.handle_line("open");
        assert!(app.render().contains("Your Cart (1)"));

        app.handle_line("goto /checkout");
        assert_eq!(app.route(), &Route::Checkout);
        assert!(!app.document().is_scroll_locked());

        let page = app.render();
        assert!(!page.contains("Your Cart"));
        assert!(page.contains("Order summary"));
    }

    #[test]
    fn test_drawer_session_scenario() {
        let mut app = storefront();
        for line in ["add nail-003", "add toys-003 2", "open", "inc nail-003", "dec toys-003"] {
            app.handle_line(line);
        }

        let cart = app.session().cart.snapshot();
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Money::from_cents(900 * 2 + 650));

        app.handle_line("remove nail-003");
        let page = app.render();
        assert!(page.contains("Capiz Shell Topcoat removed from cart"));
        assert!(page.contains("Your Cart (1)"));

        app.handle_line("clear");
        assert!(app.render().contains("Your cart is empty"));
        assert!(app.session().cart.is_cart_open());
    }

    #[test]
    fn test_quantity_buttons_ignore_missing_lines() {
        let mut app = storefront();
        app.handle_line("add toys-002");
        app.handle_line("dec toys-002");
        assert!(app.session().cart.snapshot().is_empty());

        app.handle_line("inc toys-002");
        app.handle_line("remove toys-002");
        let page = app.render();
        assert!(page.contains("[Cart]"));
        assert!(!page.contains("removed from cart"));
    }

    #[test]
    fn test_cart_button_and_close() {
        let mut app = storefront();
        app.handle_line("toggle");
        assert!(app.session().cart.is_cart_open());
        app.handle_line("toggle");
        assert!(!app.session().cart.is_cart_open());

        app.handle_line("open");
        app.handle_line("close");
        assert!(!app.session().cart.is_cart_open());
        assert!(!app.document().is_scroll_locked());
    }

    #[test]
    fn test_badge_survives_huge_quantities() {
        let mut app = storefront();
        app.handle_line("add nail-001 9223372036854775807");
        app.handle_line("add nail-002");

        assert_eq!(app.session().cart.total_items(), i64::MAX);
        assert!(app.render().contains("[Cart (9223372036854775807)]"));
    }

    #[test]
    fn test_home_and_category_pages() {
        let mut app = storefront();
        let home = app.render();
        assert!(home.contains("Shop by category"));
        assert!(home.contains("Perfume    4 products"));

        app.handle_line("goto /category/toys");
        let page = app.render();
        assert!(page.contains("Sungka Board"));
        assert!(!page.contains("Calamansi"));
    }

    #[test]
    fn test_search_then_navigate() {
        let mut app = storefront();
        app.handle_line("search sampaguita");
        assert!(app.render().contains("Results for \"sampaguita\" (2)"));

        app.handle_line("goto /category/nail-art");
        let page = app.render();
        assert!(page.contains("*Nail Art*"));
        assert!(!page.contains("Results for"));
    }

    #[test]
    fn test_json_and_quit() {
        let mut app = storefront();
        app.handle_line("add nail-001");

        match app.handle_line("json") {
            Flow::Print(json) => assert!(json.contains("\"totalItems\": 1")),
            other => panic!("expected json output, got {:?}", other),
        }
        assert_eq!(app.handle_line("quit"), Flow::Quit);
    }

    #[test]
    fn test_dropping_app_releases_drawer_effects() {
        let mut app = storefront();
        app.handle_line("open");
        let document = app.document().clone();
        assert!(document.is_scroll_locked());

        drop(app);
        assert!(!document.is_scroll_locked());
        assert_eq!(document.key_listener_count(), 0);
    }
}
