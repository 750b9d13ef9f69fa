//! # Catalog Commands
//!
//! Read-only product queries for the home page, category pages and search
//! box.

use serde::Serialize;
use tracing::debug;

use kultura_core::{Category, Product};

use crate::error::ApiError;
use crate::state::SessionState;

/// One entry in the category menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    pub label: &'static str,
    pub product_count: usize,
}

pub fn list_categories(session: &SessionState) -> Vec<CategorySummary> {
    session
        .catalog
        .categories()
        .into_iter()
        .map(|(category, product_count)| CategorySummary {
            category,
            label: category.label(),
            product_count,
        })
        .collect()
}

/// Products for a category slug such as `nail-art`.
pub fn list_category(session: &SessionState, slug: &str) -> Result<Vec<Product>, ApiError> {
    debug!(slug = %slug, "list_category command");
    let category: Category = slug.parse()?;

    Ok(session
        .catalog
        .by_category(category)
        .into_iter()
        .cloned()
        .collect())
}

/// Searches product names and descriptions.
pub fn search_products(session: &SessionState, query: &str) -> Result<Vec<Product>, ApiError> {
    debug!(query = %query, "search_products command");

    Ok(session
        .catalog
        .search(query)?
        .into_iter()
        .cloned()
        .collect())
}
