//! Catalog errors

use thiserror::Error;

use super::PostId;

/// Errors raised while loading or validating a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: PostId },

    #[error("Invalid {kind} id: {id} (ids must be positive)")]
    InvalidId { kind: &'static str, id: PostId },

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
