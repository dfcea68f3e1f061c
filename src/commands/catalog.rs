//! Catalog inspection command

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use hilight::core::paths::ProjectPaths;
use hilight::tags::{Catalog, TagsByCategory};

#[derive(Serialize)]
struct CatalogEntry {
    name: String,
    tag_count: usize,
    categories: Vec<String>,
    summary: String,
}

#[derive(Serialize)]
struct CatalogReport {
    products: Vec<CatalogEntry>,
    all_tags: TagsByCategory,
}

pub fn run(strict: bool, json: bool) -> Result<()> {
    let paths = ProjectPaths::new();

    let catalog = if strict {
        Catalog::load_from_file(&paths.catalog)
            .with_context(|| format!("Catalog check failed for {}", paths.catalog.display()))?
    } else {
        Catalog::load(&paths.catalog)
    };

    let entries: Vec<CatalogEntry> = catalog
        .products()
        .map(|p| CatalogEntry {
            name: p.name.clone(),
            tag_count: p.flat_tags().len(),
            categories: p.tags.keys().cloned().collect(),
            summary: p.summary.clone(),
        })
        .collect();

    if json {
        let report = CatalogReport {
            products: entries,
            all_tags: catalog.all_tags().clone(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Product Catalog".bold());
    println!("{}", "=".repeat(60));
    println!("Source: {}", paths.catalog.display().to_string().dimmed());
    println!("Products: {}", entries.len());
    println!();

    if entries.is_empty() {
        println!(
            "{}",
            "⚠️  Catalog is empty. No product will be recommended.".yellow()
        );
        return Ok(());
    }

    let name_width = entries
        .iter()
        .map(|e| UnicodeWidthStr::width(e.name.as_str()))
        .max()
        .unwrap_or(0);

    for entry in &entries {
        let padding = name_width - UnicodeWidthStr::width(entry.name.as_str());
        println!(
            "  {}{}  {:>3} tags  {}",
            entry.name.cyan(),
            " ".repeat(padding),
            entry.tag_count,
            entry.categories.join(",").dimmed()
        );
        if !entry.summary.is_empty() {
            println!("    {}", truncate(&entry.summary, 70).dimmed());
        }
    }
    println!();

    if !catalog.all_tags().is_empty() {
        println!("{}", "Published tags:".cyan().bold());
        println!("{}", "-".repeat(60));
        for (category, tags) in catalog.all_tags() {
            println!("  {} ({})  {}", category.bold(), tags.len(), tags.join(" ").dimmed());
        }
        println!();
    }

    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}
