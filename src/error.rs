//! Configuration error types.
//!
//! Queries never fail; only loading and validating configuration can.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::EntityKind;

/// Errors that can occur while loading engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid JSON for `EngineConfig`
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Field weight outside (0, 1]
    #[error("{entity} field '{field}' has weight {weight}, expected a value in (0, 1]")]
    InvalidWeight {
        entity: EntityKind,
        field: String,
        weight: f64,
    },

    /// Field spec with a blank name
    #[error("{entity} has a field spec with an empty name")]
    EmptyFieldName { entity: EntityKind },

    /// Same field listed twice for one entity
    #[error("{entity} lists field '{field}' more than once")]
    DuplicateField { entity: EntityKind, field: String },

    /// Entity with nothing to search
    #[error("{entity} has no searchable fields")]
    NoFields { entity: EntityKind },
}
