//! Hilight configuration module
//!
//! Config loading priority:
//! 1. Project config: .hilight/config.json
//! 2. Legacy fallback: .hilight.json
//! 3. Built-in defaults
//!
//! Every field has a default, so a partial file only overrides what it names.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::tags::similarity::MatchWeights;

/// Project config path
pub const PROJECT_CONFIG_PATH: &str = ".hilight/config.json";
/// Legacy config path (backward compatibility)
pub const LEGACY_CONFIG_FILE: &str = ".hilight.json";
pub const CONFIG_VERSION: u32 = 1;

/// Default catalog resource name, relative to the project root
pub const DEFAULT_CATALOG_FILE: &str = "catalog_tags.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub matching: MatchingConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Where the product catalog lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_FILE.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Scoring weights and the recommendation floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default = "default_exact_weight", rename = "exactWeight")]
    pub exact_weight: f64,

    #[serde(default = "default_partial_weight", rename = "partialWeight")]
    pub partial_weight: f64,

    #[serde(default = "default_risk_weight", rename = "riskWeight")]
    pub risk_weight: f64,

    #[serde(default = "default_risk_category", rename = "riskCategory")]
    pub risk_category: String,

    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default = "default_tag_marker", rename = "tagMarker")]
    pub tag_marker: char,
}

fn default_exact_weight() -> f64 {
    1.0
}

fn default_partial_weight() -> f64 {
    0.5
}

fn default_risk_weight() -> f64 {
    0.5
}

fn default_risk_category() -> String {
    crate::tags::Category::Risk.label().to_string()
}

fn default_threshold() -> f64 {
    1.5
}

fn default_tag_marker() -> char {
    '#'
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            exact_weight: default_exact_weight(),
            partial_weight: default_partial_weight(),
            risk_weight: default_risk_weight(),
            risk_category: default_risk_category(),
            threshold: default_threshold(),
            tag_marker: default_tag_marker(),
        }
    }
}

impl MatchingConfig {
    /// Weights must be finite and non-negative so scores never drop below 0
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("exactWeight", self.exact_weight),
            ("partialWeight", self.partial_weight),
            ("riskWeight", self.risk_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be a non-negative number, got {}", name, value);
            }
        }
        if !self.threshold.is_finite() {
            bail!("threshold must be a finite number, got {}", self.threshold);
        }
        Ok(())
    }

    /// Scorer weights derived from this section
    pub fn weights(&self) -> MatchWeights {
        MatchWeights {
            exact: self.exact_weight,
            partial: self.partial_weight,
            marker: self.tag_marker,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            catalog: CatalogConfig::default(),
            matching: MatchingConfig::default(),
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Self {
        let project_config_path = root.join(PROJECT_CONFIG_PATH);
        let legacy_config_path = root.join(LEGACY_CONFIG_FILE);

        if project_config_path.exists() {
            match Self::load_from_file(&project_config_path) {
                Ok(config) => {
                    let config = config.with_valid_matching();
                    if config.version > CONFIG_VERSION {
                        tracing::warn!(
                            "Config version {} is newer than supported version {}",
                            config.version,
                            CONFIG_VERSION
                        );
                    }
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load project config: {:#}. Trying legacy path.", e);
                }
            }
        }

        if legacy_config_path.exists() {
            match Self::load_from_file(&legacy_config_path) {
                Ok(config) => {
                    let config = config.with_valid_matching();
                    tracing::info!(
                        "Using legacy config {}. Consider moving it to {}.",
                        LEGACY_CONFIG_FILE,
                        PROJECT_CONFIG_PATH
                    );
                    return config;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load {}: {:#}. Using defaults.",
                        LEGACY_CONFIG_FILE,
                        e
                    );
                }
            }
        }

        Self::default()
    }

    /// Replace an invalid matching section with the defaults
    fn with_valid_matching(mut self) -> Self {
        if let Err(e) = self.matching.validate() {
            tracing::warn!("Invalid matching config: {:#}. Using default weights.", e);
            self.matching = MatchingConfig::default();
        }
        self
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<PathBuf> {
        let config_path = root.join(PROJECT_CONFIG_PATH);
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(config_path)
    }

    /// Generate default config file content
    pub fn default_json() -> Result<String> {
        Ok(serde_json::to_string_pretty(&Config::default())?)
    }

    /// Catalog location resolved against the project root
    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        let path = Path::new(&self.catalog.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.catalog.path, "catalog_tags.json");
        assert_eq!(config.matching.threshold, 1.5);
        assert_eq!(config.matching.risk_category, "위험");
        assert_eq!(config.matching.tag_marker, '#');
    }

    #[test]
    fn test_parse_partial_config() {
        let json = r#"{"matching": {"threshold": 2.0}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.matching.threshold, 2.0);
        assert_eq!(config.matching.partial_weight, 0.5);
        assert_eq!(config.catalog.path, DEFAULT_CATALOG_FILE);
    }

    #[test]
    fn test_load_prefers_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(LEGACY_CONFIG_FILE),
            r#"{"catalog": {"path": "legacy.json"}}"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join(".hilight")).unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_PATH),
            r#"{"catalog": {"path": "project.json"}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path());
        assert_eq!(config.catalog.path, "project.json");
    }

    #[test]
    fn test_broken_config_falls_back() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(LEGACY_CONFIG_FILE), "{ not json").unwrap();

        let config = Config::load(dir.path());
        assert_eq!(config.catalog.path, DEFAULT_CATALOG_FILE);
    }

    #[test]
    fn test_negative_weight_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(LEGACY_CONFIG_FILE),
            r#"{"catalog": {"path": "kept.json"}, "matching": {"partialWeight": -0.5, "threshold": 2.0}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path());
        assert_eq!(config.catalog.path, "kept.json");
        assert_eq!(config.matching.partial_weight, 0.5);
        assert_eq!(config.matching.threshold, 1.5);
    }

    #[test]
    fn test_validate_matching() {
        assert!(MatchingConfig::default().validate().is_ok());

        let mut matching = MatchingConfig::default();
        matching.exact_weight = -1.0;
        assert!(matching.validate().is_err());

        let mut matching = MatchingConfig::default();
        matching.risk_weight = f64::NAN;
        assert!(matching.validate().is_err());

        let mut matching = MatchingConfig::default();
        matching.threshold = f64::INFINITY;
        assert!(matching.validate().is_err());

        let mut matching = MatchingConfig::default();
        matching.partial_weight = 0.0;
        assert!(matching.validate().is_ok());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.matching.threshold = 3.0;
        let written = config.save(dir.path()).unwrap();
        assert!(written.ends_with("config.json"));

        let loaded = Config::load(dir.path());
        assert_eq!(loaded.matching.threshold, 3.0);
    }

    #[test]
    fn test_catalog_path_resolution() {
        let config = Config::default();
        let root = Path::new("/srv/hilight");
        assert_eq!(
            config.catalog_path(root),
            PathBuf::from("/srv/hilight/catalog_tags.json")
        );
    }
}
