//! Engine configuration: which fields are searched, how much they weigh,
//! and how characters are compared.
//!
//! Everything here has a sensible default, so `EngineConfig::default()` is
//! what the planner ships with. A JSON file can override any subset.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::{EntityKind, FieldSpec};
use crate::utils::Folding;

/// Matching behavior shared by every index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatcherConfig {
    /// Compare characters exactly instead of case-folding both sides.
    pub case_sensitive: bool,

    /// Treat "é" and "e" as the same character.
    pub ignore_diacritics: bool,

    /// Keep scanning after the best window to collect more highlight ranges.
    /// Does not change scores.
    pub find_all_matches: bool,

    /// Ranges shorter than this are dropped. A field left without ranges
    /// does not match.
    pub min_match_char_length: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            ignore_diacritics: false,
            find_all_matches: true,
            min_match_char_length: 1,
        }
    }
}

impl MatcherConfig {
    pub fn folding(&self) -> Folding {
        Folding {
            case_sensitive: self.case_sensitive,
            ignore_diacritics: self.ignore_diacritics,
        }
    }
}

/// Overall engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub task_fields: Vec<FieldSpec>,
    pub list_fields: Vec<FieldSpec>,
    pub label_fields: Vec<FieldSpec>,
    pub matcher: MatcherConfig,
}

fn default_task_fields() -> Vec<FieldSpec> {
    vec![FieldSpec::new("name", 0.7), FieldSpec::new("description", 0.3)]
}

fn default_list_fields() -> Vec<FieldSpec> {
    vec![FieldSpec::new("name", 0.8), FieldSpec::new("description", 0.2)]
}

fn default_label_fields() -> Vec<FieldSpec> {
    vec![FieldSpec::new("name", 1.0)]
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            task_fields: default_task_fields(),
            list_fields: default_list_fields(),
            label_fields: default_label_fields(),
            matcher: MatcherConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Field specs for one entity kind.
    pub fn fields(&self, kind: EntityKind) -> &[FieldSpec] {
        match kind {
            EntityKind::Task => &self.task_fields,
            EntityKind::List => &self.list_fields,
            EntityKind::Label => &self.label_fields,
        }
    }

    /// Parse and validate a JSON config. Missing sections take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "Loaded engine config");
        Ok(config)
    }

    /// Check every entity's field specs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in EntityKind::ALL {
            validate_fields(kind, self.fields(kind))?;
        }
        Ok(())
    }
}

fn validate_fields(entity: EntityKind, fields: &[FieldSpec]) -> Result<(), ConfigError> {
    if fields.is_empty() {
        return Err(ConfigError::NoFields { entity });
    }
    let mut seen = HashSet::new();
    for spec in fields {
        if spec.name.trim().is_empty() {
            return Err(ConfigError::EmptyFieldName { entity });
        }
        // NaN fails both comparisons
        if !(spec.weight > 0.0 && spec.weight <= 1.0) {
            return Err(ConfigError::InvalidWeight {
                entity,
                field: spec.name.clone(),
                weight: spec.weight,
            });
        }
        if !seen.insert(spec.name.as_str()) {
            return Err(ConfigError::DuplicateField {
                entity,
                field: spec.name.clone(),
            });
        }
    }
    Ok(())
}
