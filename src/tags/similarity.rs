//! Tag similarity scoring
//!
//! Scores a flat list of user tags against a flat list of product tags:
//! every shared tag earns the exact weight, and every user tag whose keyword
//! overlaps the keyword of some other product tag earns the partial weight once.

use std::collections::HashSet;

/// Weights and marker used by the scorer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub exact: f64,
    pub partial: f64,
    /// Marker character stripped before keyword comparison
    pub marker: char,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            exact: 1.0,
            partial: 0.5,
            marker: '#',
        }
    }
}

impl MatchWeights {
    /// Similarity between user tags and product tags. Always >= 0.
    ///
    /// Exact matches are counted over the deduplicated intersection. The
    /// partial scan only skips the product tag identical to the user tag, so
    /// an exactly matched tag can still overlap a different product tag.
    /// The scan stops at the first overlapping product tag.
    pub fn score<U, P>(&self, user_tags: &[U], product_tags: &[P]) -> f64
    where
        U: AsRef<str>,
        P: AsRef<str>,
    {
        if user_tags.is_empty() || product_tags.is_empty() {
            return 0.0;
        }

        let user_set: HashSet<&str> = user_tags.iter().map(AsRef::as_ref).collect();
        let product_set: HashSet<&str> = product_tags.iter().map(AsRef::as_ref).collect();
        let exact = user_set.intersection(&product_set).count();

        let mut score = exact as f64 * self.exact;

        let product_keywords: Vec<(&str, String)> = product_tags
            .iter()
            .map(|tag| (tag.as_ref(), keyword(tag.as_ref(), self.marker)))
            .collect();

        for user_tag in user_tags.iter().map(AsRef::as_ref) {
            let user_kw = keyword(user_tag, self.marker);
            let overlaps = product_keywords.iter().any(|(product_tag, product_kw)| {
                *product_tag != user_tag
                    && (product_kw.contains(user_kw.as_str())
                        || user_kw.contains(product_kw.as_str()))
            });

            if overlaps {
                score += self.partial;
            }
        }

        score
    }
}

/// Similarity with the default weights (1.0 exact, 0.5 partial, `#` marker)
pub fn tag_similarity<U, P>(user_tags: &[U], product_tags: &[P]) -> f64
where
    U: AsRef<str>,
    P: AsRef<str>,
{
    MatchWeights::default().score(user_tags, product_tags)
}

/// Comparable keyword for a tag: markers removed, lower-cased
pub fn keyword(tag: &str, marker: char) -> String {
    tag.replace(marker, "").to_lowercase()
}
