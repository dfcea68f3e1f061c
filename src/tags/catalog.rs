//! Product catalog loaded from `catalog_tags.json`
//!
//! Layout of the resource:
//!
//! ```json
//! {
//!   "product_tags": {
//!     "<product name>": { "tags": { "<category>": ["#tag", ...] }, "summary": "..." }
//!   },
//!   "all_tags": { "<category>": ["#tag", ...] }
//! }
//! ```
//!
//! Product order follows the file and decides ties during matching.

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::category::{flatten, TagsByCategory};
use crate::core::error::{CatalogError, Result};

/// An insurance product and its tag classification
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub tags: TagsByCategory,
    /// Display text only, never scored
    pub summary: String,
}

#[derive(Debug, Default, Deserialize)]
struct ProductBody {
    #[serde(default)]
    tags: TagsByCategory,
    #[serde(default)]
    summary: String,
}

impl Product {
    pub fn new(name: impl Into<String>, tags: TagsByCategory) -> Self {
        Self {
            name: name.into(),
            tags,
            summary: String::new(),
        }
    }

    /// All tags across categories
    pub fn flat_tags(&self) -> Vec<&str> {
        flatten(&self.tags)
    }

    /// Tags of a single category, empty when the product has none
    pub fn tags_in(&self, category: &str) -> &[String] {
        self.tags.get(category).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Read-only product catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    all_tags: TagsByCategory,
}

impl Catalog {
    /// Empty catalog; every match against it fails closed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from products already in memory, keeping their order
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products,
            all_tags: TagsByCategory::new(),
        }
    }

    /// Load the catalog, substituting an empty one when the file is missing
    /// or malformed
    pub fn load(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(catalog) => {
                tracing::debug!(
                    "Loaded {} products from {}",
                    catalog.len(),
                    path.display()
                );
                catalog
            }
            Err(CatalogError::NotFound { .. }) => {
                tracing::warn!(
                    "Catalog {} not found. No product will be recommended.",
                    path.display()
                );
                Self::empty()
            }
            Err(e) => {
                tracing::warn!("{}. Using an empty catalog.", e);
                Self::empty()
            }
        }
    }

    /// Strict loader: reports why the catalog could not be read
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)?;
        let root = root.as_object().ok_or_else(|| CatalogError::Shape {
            message: "top level must be an object".to_string(),
        })?;

        let mut products = Vec::new();
        match root.get("product_tags") {
            None | Some(Value::Null) => {}
            Some(Value::Object(entries)) => {
                for (name, body) in entries {
                    let body: ProductBody = serde_json::from_value(body.clone())?;
                    products.push(Product {
                        name: name.clone(),
                        tags: body.tags,
                        summary: body.summary,
                    });
                }
            }
            Some(_) => {
                return Err(CatalogError::Shape {
                    message: "\"product_tags\" must be an object".to_string(),
                })
            }
        }

        Ok(Self {
            products,
            all_tags: root.get("all_tags").map(string_lists).unwrap_or_default(),
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in file order
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Category tag lists published alongside the products
    pub fn all_tags(&self) -> &TagsByCategory {
        &self.all_tags
    }

    /// Summary for a product name as it may come back from a language model.
    ///
    /// Tries the exact name first, then the first product whose name contains
    /// or is contained in the requested one. Empty summaries count as absent.
    pub fn summary_for(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        if let Some(summary) = self
            .get(name)
            .map(|p| p.summary.as_str())
            .filter(|s| !s.is_empty())
        {
            return Some(summary);
        }

        self.products
            .iter()
            .find(|p| p.name.contains(name) || name.contains(p.name.as_str()))
            .map(|p| p.summary.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Keep only `category -> [string, ...]` entries of a loosely shaped object
fn string_lists(value: &Value) -> TagsByCategory {
    let Some(map) = value.as_object() else {
        return TagsByCategory::new();
    };

    map.iter()
        .filter_map(|(category, tags)| {
            let tags = tags.as_array()?;
            let tags: Vec<String> = tags
                .iter()
                .filter_map(|t| t.as_str().map(str::to_string))
                .collect();
            Some((category.clone(), tags))
        })
        .collect()
}
