//! # Built-in Catalog
//!
//! The products the storefront ships with when no catalog file is
//! configured. Ids follow `{category}-{index}`; images live under
//! `/images/`.

use kultura_core::{Category, Money, Product};

/// (id suffix, name, short description, price in cents) per category.
const CATEGORIES: &[(Category, &str, &[(&str, &str, &str, i64)])] = &[
    (
        Category::NailArt,
        "nail",
        &[
            ("001", "Banig Weave Polish Set", "Five woven-pattern shades", 1250),
            ("002", "Sampaguita Press-Ons", "24 hand-painted tips", 1800),
            ("003", "Capiz Shell Topcoat", "Pearl shimmer finish", 900),
            ("004", "Jeepney Stripe Decals", "120 water-slide decals", 650),
        ],
    ),
    (
        Category::Perfume,
        "perfume",
        &[
            ("001", "Ilang-Ilang Eau de Parfum", "50ml, floral", 4500),
            ("002", "Sampaguita Eau de Parfum", "50ml, white floral", 4800),
            ("003", "Calamansi Cologne", "100ml, citrus", 3200),
            ("004", "Kamias Rollerball", "10ml, green", 1500),
        ],
    ),
    (
        Category::Toys,
        "toys",
        &[
            ("001", "Jeepney Pull Toy", "Hand-painted wood", 2200),
            ("002", "Sipa Set", "Two rattan sipa balls", 800),
            ("003", "Trumpo Spinning Top", "Lathe-turned, with string", 650),
            ("004", "Sungka Board", "Carved narra, 98 shells", 5400),
        ],
    ),
];

/// Builds the built-in product list in navigation order.
pub fn products() -> Vec<Product> {
    CATEGORIES
        .iter()
        .flat_map(|(category, prefix, items)| {
            items.iter().map(move |(suffix, name, short_description, cents)| {
                let id = format!("{}-{}", prefix, suffix);
                Product {
                    image: format!("/images/{}.jpg", id),
                    id,
                    name: name.to_string(),
                    short_description: short_description.to_string(),
                    price: Money::from_cents(*cents),
                    category: *category,
                }
            })
        })
        .collect()
}
