//! Interest and tag listing commands

use anyhow::{bail, Result};
use colored::*;

use hilight::tags::interests::find_interest;
use hilight::tags::{all_interests, all_tags_by_category, recommended_tags_for_interest};
use hilight::tags::{Category, TagsByCategory};

pub fn run_list(json: bool) -> Result<()> {
    let interests = all_interests();

    if json {
        println!("{}", serde_json::to_string_pretty(&interests)?);
        return Ok(());
    }

    println!("{}", "Interests".bold());
    println!("{}", "=".repeat(40));
    for (i, name) in interests.iter().enumerate() {
        println!("  {}. {}", i + 1, name.cyan());
    }
    println!();
    println!(
        "{}",
        "Run 'hilight tags <interest>' to see recommended tags.".dimmed()
    );

    Ok(())
}

pub fn run_tags(interest: &str, all: bool, json: bool) -> Result<()> {
    if find_interest(interest).is_none() {
        bail!(
            "Unknown interest '{}' (must be: {})",
            interest,
            all_interests().join("|")
        );
    }

    let recommended = recommended_tags_for_interest(interest);
    let tags: TagsByCategory = if all {
        Category::ALL
            .into_iter()
            .map(|c| (c.label().to_string(), all_tags_by_category(c)))
            .collect()
    } else {
        recommended.clone()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    let title = if all {
        format!("{} - all tags", interest)
    } else {
        format!("{} - recommended tags", interest)
    };
    println!("{}", title.bold());
    println!("{}", "=".repeat(50));

    for category in Category::ALL {
        let list = tags.get(category.label()).map(Vec::as_slice).unwrap_or(&[]);
        let picks = recommended.get(category.label());
        println!();
        println!(
            "{} {}",
            category.label().cyan().bold(),
            format!("({})", category.english()).dimmed()
        );
        if list.is_empty() {
            println!("  {}", "-".dimmed());
            continue;
        }
        let rendered: Vec<String> = list
            .iter()
            .map(|t| {
                // With --all, the interest's own recommendations stand out
                if all && picks.is_some_and(|p| p.contains(t)) {
                    t.green().bold().to_string()
                } else {
                    t.to_string()
                }
            })
            .collect();
        println!("  {}", rendered.join("  "));
    }
    println!();

    Ok(())
}
