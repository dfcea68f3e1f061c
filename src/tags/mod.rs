//! Tag matching module for Hilight
//!
//! Scores catalog products against the tags a user selected.
//!
//! # Components
//!
//! - `category`: Category labels and the tag map type
//! - `similarity`: Exact and keyword-overlap scoring of two tag lists
//! - `catalog`: Product catalog loaded from JSON
//! - `matcher`: Best-product selection over the catalog
//! - `interests`: Built-in interest tag map

pub mod catalog;
pub mod category;
pub mod interests;
pub mod matcher;
pub mod similarity;

pub use catalog::{Catalog, Product};
pub use category::{flatten, Category, TagsByCategory};
pub use interests::{all_interests, all_tags_by_category, recommended_tags_for_interest};
pub use matcher::{best_product, ProductMatcher, ProductScore};
pub use similarity::{keyword, tag_similarity, MatchWeights};
