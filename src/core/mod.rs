//! Project plumbing: configuration, paths, errors and logging.

pub mod config;
pub mod error;
pub mod logger;
pub mod paths;

pub use config::{CatalogConfig, Config, MatchingConfig};
pub use error::{CatalogError, Result};
pub use paths::ProjectPaths;
