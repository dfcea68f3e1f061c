use anyhow::{bail, Result};
use colored::*;
use serde::Serialize;

use hilight::core::paths::ProjectPaths;
use hilight::tags::{flatten, Catalog, Category, ProductMatcher, ProductScore, TagsByCategory};

#[derive(Serialize)]
struct RecommendResult {
    product: Option<String>,
    summary: Option<String>,
    threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranking: Option<Vec<ProductScore>>,
}

pub fn run(
    raw_tags: &[String],
    interest: Option<&str>,
    situation: Option<&str>,
    explain: bool,
    json: bool,
) -> Result<()> {
    let selected = parse_selection(raw_tags)?;

    let paths = ProjectPaths::new();
    let catalog = Catalog::load(&paths.catalog);
    let matcher = ProductMatcher::with_config(&catalog, &paths.get_config().matching);

    let product = matcher.recommend(
        interest.unwrap_or_default(),
        &selected,
        situation.unwrap_or_default(),
    );
    let summary = product
        .as_deref()
        .and_then(|name| catalog.summary_for(name))
        .map(str::to_string);

    let result = RecommendResult {
        product,
        summary,
        threshold: matcher.threshold(),
        ranking: explain.then(|| matcher.rank(&selected)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result, &selected, catalog.len());
    }

    Ok(())
}

/// Parse `category=tag` arguments. The category may be the Korean label or
/// its English name; the tag gains a `#` marker when it has none.
pub fn parse_selection(raw_tags: &[String]) -> Result<TagsByCategory> {
    let mut selected = TagsByCategory::new();

    for raw in raw_tags {
        let Some((category, tag)) = raw.split_once('=') else {
            bail!("Expected <category>=<tag>, got '{}'", raw);
        };

        let Some(category) = Category::from_label(category) else {
            bail!(
                "Unknown category '{}' (must be: {})",
                category.trim(),
                Category::ALL
                    .iter()
                    .map(|c| format!("{}/{}", c.label(), c.english()))
                    .collect::<Vec<_>>()
                    .join("|")
            );
        };

        let tag = tag.trim();
        if tag.is_empty() {
            bail!("Empty tag in '{}'", raw);
        }
        let tag = if tag.starts_with('#') {
            tag.to_string()
        } else {
            format!("#{}", tag)
        };

        let tags = selected.entry(category.label().to_string()).or_default();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    Ok(selected)
}

fn print_report(result: &RecommendResult, selected: &TagsByCategory, catalog_size: usize) {
    println!("{}", "Product Recommendation".bold());
    println!("{}", "=".repeat(50));
    println!("Selected tags: {}", flatten(selected).join(" ").dimmed());
    println!("Catalog products: {}", catalog_size);
    println!();

    match &result.product {
        Some(name) => {
            println!("{} {}", "✓".green(), name.cyan().bold());
            if let Some(summary) = &result.summary {
                println!("  📌 {}", summary);
            }
        }
        None => {
            println!("{}", "No suitable product found for the selected tags.".yellow());
        }
    }

    if let Some(ranking) = &result.ranking {
        println!();
        println!(
            "{} (threshold {:.1})",
            "Scores:".cyan().bold(),
            result.threshold
        );
        println!("{}", "-".repeat(50));
        for (i, s) in ranking.iter().enumerate() {
            let score = format!("{:.1}", s.score);
            let score_colored = if s.eligible {
                score.green()
            } else if s.score > 0.0 {
                score.yellow()
            } else {
                score.red()
            };
            println!(
                "  {}. [{}] {} {}",
                i + 1,
                score_colored,
                s.name,
                format!("(tags {:.1} + risk {:.1})", s.similarity, s.risk_bonus).dimmed()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_selection() {
        let selected = parse_selection(&args(&["위험=#화재", "risk=배상책임", "who=#가족"])).unwrap();
        assert_eq!(selected["위험"], vec!["#화재", "#배상책임"]);
        assert_eq!(selected["누구"], vec!["#가족"]);
    }

    #[test]
    fn test_parse_selection_skips_duplicates() {
        let selected = parse_selection(&args(&["위험=#화재", "위험=화재"])).unwrap();
        assert_eq!(selected["위험"].len(), 1);
    }

    #[test]
    fn test_parse_selection_rejects_bad_input() {
        assert!(parse_selection(&args(&["#화재"])).is_err());
        assert!(parse_selection(&args(&["budget=#cheap"])).is_err());
        assert!(parse_selection(&args(&["위험= "])).is_err());
    }
}
