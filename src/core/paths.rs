//! Project path management
//!
//! Handles project root detection and catalog path resolution.

use std::path::PathBuf;

use super::config::Config;

/// Environment variable for project root configuration
pub const HOME_ENV: &str = "HILIGHT_HOME";
/// Environment variable that overrides the configured catalog path
pub const CATALOG_ENV: &str = "HILIGHT_CATALOG";

/// Project paths wrapper that combines config and resolved paths
pub struct ProjectPaths {
    pub root: PathBuf,
    pub catalog: PathBuf,
    pub config: Config,
}

impl ProjectPaths {
    /// Create ProjectPaths from environment variable or current directory.
    /// Loads config from the project root.
    pub fn new() -> Self {
        let root = get_project_root();
        Self::from_root(root)
    }

    /// Create ProjectPaths from a specific root directory
    pub fn from_root(root: PathBuf) -> Self {
        let config = Config::load(&root);
        Self::from_root_with_config(root, config)
    }

    /// Create ProjectPaths with explicit config
    pub fn from_root_with_config(root: PathBuf, config: Config) -> Self {
        let catalog = match std::env::var(CATALOG_ENV) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => config.catalog_path(&root),
        };

        Self {
            root,
            catalog,
            config,
        }
    }

    /// Get the loaded configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::new()
    }
}

/// Get project root path from environment variable or current directory.
/// Priority: HILIGHT_HOME env var > current directory > "."
pub fn get_project_root() -> PathBuf {
    if let Ok(path) = std::env::var(HOME_ENV) {
        let root = PathBuf::from(&path);
        if root.exists() {
            return root;
        }
        tracing::warn!(
            "{} is set to '{}' but path does not exist. Falling back to current directory.",
            HOME_ENV,
            path
        );
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_from_root_resolve_catalog() {
        if std::env::var(CATALOG_ENV).is_ok() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.catalog.path = "data/catalog_tags.json".to_string();

        let paths = ProjectPaths::from_root_with_config(dir.path().to_path_buf(), config);
        assert_eq!(paths.root, dir.path());
        assert_eq!(paths.catalog, dir.path().join("data/catalog_tags.json"));
        assert_eq!(paths.get_config().catalog.path, "data/catalog_tags.json");
    }
}
