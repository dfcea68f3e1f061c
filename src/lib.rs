//! Tag-based insurance product matching.
//!
//! Load a [`Catalog`] once, then ask a [`ProductMatcher`] for the product that
//! best fits the tags a user picked:
//!
//! ```no_run
//! use std::path::Path;
//! use hilight::{Catalog, ProductMatcher, TagsByCategory};
//!
//! let catalog = Catalog::load(Path::new("catalog_tags.json"));
//! let mut selected = TagsByCategory::new();
//! selected.insert("위험".to_string(), vec!["#화재".to_string()]);
//! let product = ProductMatcher::new(&catalog).best_product(&selected);
//! ```

pub mod core;
pub mod tags;

pub use crate::core::{CatalogError, Config};
pub use tags::{
    best_product, tag_similarity, Catalog, Category, Product, ProductMatcher, ProductScore,
    TagsByCategory,
};
