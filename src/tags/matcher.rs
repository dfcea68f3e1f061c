//! Product matcher for recommending an insurance product from selected tags
//!
//! Every catalog product is scored as tag similarity plus a bonus for risk
//! tags shared exactly. The best product is recommended only when its score
//! reaches the threshold.

use serde::Serialize;
use std::collections::HashSet;

use super::catalog::{Catalog, Product};
use super::category::{flatten, TagsByCategory};
use super::similarity::MatchWeights;
use crate::core::config::MatchingConfig;

/// Score breakdown for one product
#[derive(Debug, Clone, Serialize)]
pub struct ProductScore {
    pub name: String,
    pub similarity: f64,
    pub risk_bonus: f64,
    pub score: f64,
    /// Score reaches the recommendation threshold
    pub eligible: bool,
}

/// Matcher over a loaded catalog
pub struct ProductMatcher<'a> {
    catalog: &'a Catalog,
    weights: MatchWeights,
    risk_category: String,
    risk_weight: f64,
    /// Minimum final score for a recommendation
    threshold: f64,
}

impl<'a> ProductMatcher<'a> {
    /// Create a matcher with the default weights and threshold
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_config(catalog, &MatchingConfig::default())
    }

    pub fn with_config(catalog: &'a Catalog, config: &MatchingConfig) -> Self {
        Self {
            catalog,
            weights: config.weights(),
            risk_category: config.risk_category.clone(),
            risk_weight: config.risk_weight,
            threshold: config.threshold,
        }
    }

    /// Set recommendation threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Name of the best matching product, or None when nothing reaches the
    /// threshold. Ties go to the product listed first in the catalog.
    pub fn best_product(&self, selected: &TagsByCategory) -> Option<String> {
        if self.catalog.is_empty() {
            return None;
        }

        let user_tags = flatten(selected);
        let mut best_match: Option<&Product> = None;
        let mut best_score = 0.0;

        for product in self.catalog.products() {
            let (_, _, score) = self.score_product(&user_tags, selected, product);
            if score > best_score {
                best_score = score;
                best_match = Some(product);
            }
        }

        tracing::debug!(
            "Best candidate {:?} scored {:.2} (threshold {:.2})",
            best_match.map(|p| p.name.as_str()),
            best_score,
            self.threshold
        );

        if best_score >= self.threshold {
            best_match.map(|p| p.name.clone())
        } else {
            None
        }
    }

    /// Score every product, best first. Equal scores keep catalog order.
    pub fn rank(&self, selected: &TagsByCategory) -> Vec<ProductScore> {
        let user_tags = flatten(selected);

        let mut scores: Vec<ProductScore> = self
            .catalog
            .products()
            .map(|product| {
                let (similarity, risk_bonus, score) =
                    self.score_product(&user_tags, selected, product);
                ProductScore {
                    name: product.name.clone(),
                    similarity,
                    risk_bonus,
                    score,
                    eligible: score > 0.0 && score >= self.threshold,
                }
            })
            .collect();

        // Stable sort keeps catalog order among ties
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));

        scores
    }

    /// Recommendation entry point used by the consultation flow.
    ///
    /// The interest and free-text situation are recorded for tracing only;
    /// the choice depends on the selected tags alone.
    pub fn recommend(
        &self,
        interest: &str,
        selected: &TagsByCategory,
        situation: &str,
    ) -> Option<String> {
        let recommended = self.best_product(selected);
        tracing::info!(
            interest,
            situation_chars = situation.chars().count(),
            selected = flatten(selected).len(),
            product = recommended.as_deref().unwrap_or("-"),
            "Tag recommendation"
        );
        recommended
    }

    fn score_product(
        &self,
        user_tags: &[&str],
        selected: &TagsByCategory,
        product: &Product,
    ) -> (f64, f64, f64) {
        let similarity = self.weights.score(user_tags, &product.flat_tags());

        let user_risk: HashSet<&str> = selected
            .get(&self.risk_category)
            .map(|tags| tags.iter().map(String::as_str).collect())
            .unwrap_or_default();
        let risk_overlap = product
            .tags_in(&self.risk_category)
            .iter()
            .map(String::as_str)
            .collect::<HashSet<&str>>()
            .intersection(&user_risk)
            .count();
        let risk_bonus = risk_overlap as f64 * self.risk_weight;

        (similarity, risk_bonus, similarity + risk_bonus)
    }
}

/// Best product with the default weights and threshold
pub fn best_product(catalog: &Catalog, selected: &TagsByCategory) -> Option<String> {
    ProductMatcher::new(catalog).best_product(selected)
}
