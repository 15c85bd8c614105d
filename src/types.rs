// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search engine.
//!
//! Records come in, scored results and highlight segments go out. Everything
//! in between (patterns, indexes, aggregation) is expressed in terms of the
//! types defined here.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **MatchRange**: `start <= end`, both inclusive character offsets into the
//!   original (unfolded) field text. Ranges in a `FieldMatchResult` are sorted
//!   ascending and never overlap.
//!
//! - **FieldMatchResult**: `sub_score ∈ [0, 1]`, lower is better, 0 is exact.
//!   A field that did not match never produces one of these.
//!
//! - **ScoredResult**: `score ∈ [0, 1]`, `per_field` non-empty. A record with
//!   no matching field is excluded, not scored 1.0.
//!
//! - **FieldSpec**: `weight ∈ (0, 1]`. Enforced when configuration is loaded,
//!   tolerated defensively by the aggregator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default number of results per category.
pub const DEFAULT_LIMIT: usize = 20;

/// Default error tolerance (0 = exact only, 1 = match anything).
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Quick-search preset used by autocomplete: fewer, tighter results.
pub const QUICK_SEARCH_LIMIT: usize = 5;
pub const QUICK_SEARCH_THRESHOLD: f64 = 0.3;

/// Maximum number of suggestion strings returned.
pub const MAX_SUGGESTIONS: usize = 10;

/// Partial queries shorter than this (in characters) yield no suggestions.
pub const MIN_SUGGESTION_QUERY_CHARS: usize = 2;

// =============================================================================
// RECORDS
// =============================================================================

/// Opaque record identifier, as handed out by the repository.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id.to_string())
    }
}

/// The three kinds of things a planner lets you search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Task,
    List,
    Label,
}

impl EntityKind {
    /// All kinds, in the order categories are reported.
    pub const ALL: [EntityKind; 3] = [EntityKind::Task, EntityKind::List, EntityKind::Label];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Task => "task",
            EntityKind::List => "list",
            EntityKind::Label => "label",
        }
    }

    /// Field whose text is shown as the suggestion/display name.
    pub fn display_field(self) -> &'static str {
        "name"
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable snapshot of one task, list or label.
///
/// `fields` maps field name to text. `completed` only has meaning for tasks;
/// it drives the `include_completed` filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    #[serde(default)]
    pub completed: bool,
}

impl Record {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
            completed: false,
        }
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.fields.insert(name.into(), text.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A searchable field and its importance. Tasks default to
/// `name = 0.7, description = 0.3`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub weight: f64,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

// =============================================================================
// MATCH RESULTS
// =============================================================================

/// Inclusive character span `[start, end]` in the original field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }

    /// Always false: a range covers at least one character.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position <= self.end
    }
}

/// How well one field of one record matched the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatchResult {
    pub field_name: String,
    pub sub_score: f64,
    pub ranges: Vec<MatchRange>,
}

/// One record that made it through threshold filtering.
///
/// `position` is the record's slot in the index it came from; it is the
/// stable tie-break and carries no relevance meaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub record: Arc<Record>,
    pub position: usize,
    pub score: f64,
    pub per_field: Vec<FieldMatchResult>,
}

impl ScoredResult {
    /// Match details for a single field, if that field matched.
    pub fn field_match(&self, name: &str) -> Option<&FieldMatchResult> {
        self.per_field.iter().find(|m| m.field_name == name)
    }

    /// The record's display name (its `name` field), if present.
    pub fn display_name(&self, kind: EntityKind) -> Option<&str> {
        self.record.field(kind.display_field())
    }
}

/// Per-category results of a multi-entity search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResults {
    pub tasks: Vec<ScoredResult>,
    pub lists: Vec<ScoredResult>,
    pub labels: Vec<ScoredResult>,
    /// Sum of the three result lengths, after limits were applied.
    pub total_matches: usize,
}

impl CombinedResults {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn for_kind(&self, kind: EntityKind) -> &[ScoredResult] {
        match kind {
            EntityKind::Task => &self.tasks,
            EntityKind::List => &self.lists,
            EntityKind::Label => &self.labels,
        }
    }

    /// Every result tagged with its category, categories in `EntityKind::ALL` order.
    pub fn iter_all(&self) -> impl Iterator<Item = (EntityKind, &ScoredResult)> + '_ {
        EntityKind::ALL
            .into_iter()
            .flat_map(move |kind| self.for_kind(kind).iter().map(move |r| (kind, r)))
    }

    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }
}

/// A run of text that is either plain or part of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Which categories a multi-entity search touches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    #[default]
    All,
    #[serde(alias = "tasks")]
    TasksOnly,
    #[serde(alias = "lists")]
    ListsOnly,
    #[serde(alias = "labels")]
    LabelsOnly,
}

impl Scope {
    pub fn includes(self, kind: EntityKind) -> bool {
        match self {
            Scope::All => true,
            Scope::TasksOnly => kind == EntityKind::Task,
            Scope::ListsOnly => kind == EntityKind::List,
            Scope::LabelsOnly => kind == EntityKind::Label,
        }
    }
}

/// Per-query knobs. Deserializes from a partial object; missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub limit: usize,
    pub threshold: f64,
    pub scope: Scope,
    /// Tasks only: keep tasks marked completed.
    pub include_completed: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            threshold: DEFAULT_THRESHOLD,
            scope: Scope::All,
            include_completed: false,
        }
    }
}

impl SearchOptions {
    /// The autocomplete preset: `limit = 5`, `threshold = 0.3`.
    pub fn quick() -> Self {
        Self {
            limit: QUICK_SEARCH_LIMIT,
            threshold: QUICK_SEARCH_THRESHOLD,
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_include_completed(mut self, include: bool) -> Self {
        self.include_completed = include;
        self
    }

    /// Clamp out-of-range values instead of rejecting them.
    ///
    /// Threshold goes to `[0, 1]` (NaN falls back to the default), limit to `>= 1`.
    pub fn normalized(&self) -> Self {
        let threshold = if self.threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            self.threshold.clamp(0.0, 1.0)
        };
        Self {
            limit: self.limit.max(1),
            threshold,
            ..self.clone()
        }
    }
}
