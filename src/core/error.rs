use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the product catalog resource.
///
/// These only surface through the strict loaders. `Catalog::load` turns
/// every variant into an empty catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog shape: {message}")]
    Shape { message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
