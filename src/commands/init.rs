//! Project initialization command

use anyhow::Result;
use colored::*;

use hilight::core::config::{Config, PROJECT_CONFIG_PATH};
use hilight::core::paths::ProjectPaths;

pub fn run(force: bool) -> Result<()> {
    let paths = ProjectPaths::new();
    let root = paths.root;
    let config_path = root.join(PROJECT_CONFIG_PATH);

    println!("{}", "Hilight Configuration Generator".bold());
    println!("{}", "=".repeat(50));
    println!();

    if config_path.exists() && !force {
        println!(
            "{} Config already exists: {} (use --force to overwrite)",
            "→".blue(),
            config_path.display()
        );
        return Ok(());
    }

    let config = Config::default();
    let written = config.save(&root)?;
    println!("{} Wrote {}", "✓".green(), written.display());

    let catalog_path = config.catalog_path(&root);
    if !catalog_path.exists() {
        println!(
            "{} Catalog not found at {}. Recommendations stay empty until it exists.",
            "!".yellow().bold(),
            catalog_path.display()
        );
    }

    println!();
    println!("{}", "Configuration:".cyan());
    println!("{}", Config::default_json()?);
    println!();

    Ok(())
}
