//! # Catalog
//!
//! Read-only product lookup for the storefront.
//!
//! The catalog hands out `&Product`; the cart clones whatever it is given at
//! add-time and never comes back to refresh it.

use std::collections::HashMap;
use std::path::Path;

use kultura_core::validation::{validate_catalog_product, validate_search_query};
use kultura_core::{Category, Product};
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::seed;

/// An in-memory, validated product set.
///
/// ## Invariants
/// - Product ids are unique
/// - Iteration order is the order products were loaded in
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, validating every product and rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            validate_catalog_product(product).map_err(|source| CatalogError::InvalidProduct {
                id: product.id.clone(),
                source,
            })?;

            if by_id.insert(product.id.clone(), index).is_some() {
                return Err(CatalogError::duplicate(&product.id));
            }
        }

        Ok(Catalog { products, by_id })
    }

    /// The catalog the storefront ships with.
    pub fn builtin() -> CatalogResult<Self> {
        Self::new(seed::products())
    }

    /// Parses a JSON array of products.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Loads a JSON catalog file.
    ///
    /// ## File Format
    /// ```json
    /// [
    ///   {
    ///     "id": "nail-001",
    ///     "name": "Banig Weave Polish Set",
    ///     "shortDescription": "Five woven-pattern shades",
    ///     "price": 1250,
    ///     "image": "/images/nail-001.jpg",
    ///     "category": "nail-art"
    ///   }
    /// ]
    /// ```
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&contents)?;
        info!(?path, products = catalog.len(), "Catalog loaded from file");
        Ok(catalog)
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).and_then(|&i| self.products.get(i))
    }

    /// Like [`get`](Catalog::get), but a missing id is an error.
    pub fn require(&self, id: &str) -> CatalogResult<&Product> {
        self.get(id).ok_or_else(|| CatalogError::not_found(id))
    }

    /// Products in `category`, in catalog order.
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive substring match on name and short description.
    ///
    /// An empty query returns every product.
    pub fn search(&self, query: &str) -> CatalogResult<Vec<&Product>> {
        let query = validate_search_query(query)
            .map_err(CatalogError::InvalidQuery)?
            .to_lowercase();

        let matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.short_description.to_lowercase().contains(&query)
            })
            .collect();

        debug!(query = %query, count = matches.len(), "Catalog search");
        Ok(matches)
    }

    /// Categories with at least one product, with their product counts.
    pub fn categories(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.products.iter().filter(|p| p.category == c).count()))
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
