// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Planner data files.
//!
//! ```json
//! {
//!   "tasks":  [{ "id": 1, "name": "Buy groceries", "description": "milk", "completed": false }],
//!   "lists":  [{ "id": "inbox", "name": "Inbox" }],
//!   "labels": [{ "id": 7, "name": "errands" }]
//! }
//! ```
//!
//! Every section is optional. Ids may be numbers or strings.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use planner_search::{EngineConfig, Record, RecordId, SearchIndexes};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ItemId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct Item {
    id: ItemId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    completed: bool,
}

impl Item {
    fn into_record(self) -> Record {
        let id = match self.id {
            ItemId::Number(n) => RecordId::from(n),
            ItemId::Text(s) => RecordId::from(s),
        };
        let mut record = Record::new(id).with_field("name", self.name).with_completed(self.completed);
        if let Some(description) = self.description {
            record = record.with_field("description", description);
        }
        record
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DataFile {
    #[serde(default)]
    tasks: Vec<Item>,
    #[serde(default)]
    lists: Vec<Item>,
    #[serde(default)]
    labels: Vec<Item>,
}

impl DataFile {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Data file is not valid planner JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file {}", path.display()))?;
        let data = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            tasks = data.tasks.len(),
            lists = data.lists.len(),
            labels = data.labels.len(),
            "Loaded planner data"
        );
        Ok(data)
    }

    /// Build all three indexes in file order.
    pub fn into_indexes(self, config: &EngineConfig) -> SearchIndexes {
        let convert = |items: Vec<Item>| -> Vec<Record> { items.into_iter().map(Item::into_record).collect() };
        SearchIndexes::build_all(config, convert(self.tasks), convert(self.lists), convert(self.labels))
    }
}

/// Load the engine config from `path`, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path).with_context(|| format!("Invalid config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}
