//! # Pages
//!
//! Full-page views. Each is a pure function of a cart snapshot (or of the
//! catalog command results, for product listings); none keeps cart data
//! between renders.
//!
//! ```text
//! Route::Home          → home()
//! Route::Category(c)   → category()
//! Route::Cart          → cart_page()
//! Route::Checkout      → checkout_page()
//! Route::NotFound(p)   → not_found()
//! ```

use kultura_core::{CartState, Category, Product};

use crate::commands::catalog::CategorySummary;
use crate::state::StorefrontConfig;

pub fn home(categories: &[CategorySummary]) -> String {
    let mut out = String::from("Shop by category\n");
    for summary in categories {
        out.push_str(&format!(
            "  {:<10} {} products   (goto /category/{})\n",
            summary.label,
            summary.product_count,
            summary.category.slug()
        ));
    }
    out
}

pub fn category(category: Category, products: &[Product], config: &StorefrontConfig) -> String {
    let mut out = format!("{}\n", category.label());
    out.push_str(&product_list(products, config));
    out
}

/// Search results, listed like a category page.
pub fn search_results(query: &str, products: &[Product], config: &StorefrontConfig) -> String {
    let mut out = format!("Results for \"{}\" ({})\n", query, products.len());
    out.push_str(&product_list(products, config));
    out
}

fn product_list(products: &[Product], config: &StorefrontConfig) -> String {
    products
        .iter()
        .map(|product| {
            format!(
                "  {:<12} {:<28} {:>10}   {}\n",
                product.id,
                product.name,
                config.format_currency(product.price),
                product.short_description
            )
        })
        .collect()
}

pub fn cart_page(state: &CartState, config: &StorefrontConfig) -> String {
    let mut out = String::from("Shopping Cart\n");

    if state.is_empty() {
        out.push_str("Your cart is empty\n");
        out.push_str("(goto / to continue shopping)\n");
        return out;
    }

    for line in state.items() {
        out.push_str(&format!(
            "  {:<28} {:>4} x {:>10} = {:>10}\n",
            line.product.name,
            line.quantity,
            config.format_currency(line.product.price),
            config.format_currency(line.line_total())
        ));
    }
    out.push_str(&format!(
        "Subtotal ({} items)  {}\n",
        state.total_items(),
        config.format_currency(state.total_price())
    ));
    out.push_str("[Proceed to Checkout]\n");
    out
}

pub fn checkout_page(state: &CartState, config: &StorefrontConfig) -> String {
    let mut out = String::from("Checkout\n");

    if state.is_empty() {
        out.push_str("There is nothing to check out yet.\n");
        out.push_str("(goto / to browse the catalog)\n");
        return out;
    }

    out.push_str("Order summary\n");
    for line in state.items() {
        out.push_str(&format!(
            "  {} x{}  {}\n",
            line.product.name,
            line.quantity,
            config.format_currency(line.line_total())
        ));
    }
    out.push_str(&format!("Items     {}\n", state.total_items()));
    out.push_str(&format!("Subtotal  {}\n", config.format_currency(state.total_price())));
    out
}

pub fn not_found(path: &str) -> String {
    format!("Page not found: {}\n", path)
}
