//! # Error Types
//!
//! Errors raised while loading catalogs and build files. Filtering itself
//! never fails.

use std::path::PathBuf;

use thiserror::Error;

use rig_core::RigError;

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error loading or resolving catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML document did not match the expected shape.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON document did not match the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two catalog entries share an id.
    #[error("duplicate component id: {0}")]
    DuplicateId(String),

    /// A price that is negative, NaN or infinite.
    #[error("component {id} has invalid price {price}")]
    InvalidPrice {
        /// Offending component.
        id: String,
        /// The rejected price.
        price: f64,
    },

    /// A build file or command referenced an id the catalog lacks.
    #[error("unknown component id: {0}")]
    UnknownComponent(String),

    /// A component was assigned to a slot of another category.
    #[error(transparent)]
    Slot(#[from] RigError),
}
