//! Per-entity search indexes and their lifecycle.
//!
//! An [`Index`] is a snapshot of one entity type's records plus the field
//! specs used to score them. It is owned by the caller and rebuilt explicitly:
//! there is no change notification and no incremental update. `refresh`
//! replaces the whole record set and bumps the version.
//!
//! # Invariants
//!
//! 1. **ORDER_PRESERVED**: records keep the order they were supplied in. The
//!    order is only a tie-break between equal scores.
//! 2. **VERSIONED**: `version() == 0` means never built. Each build or
//!    refresh moves the version forward by one.
//!
//! # Lazy builds
//!
//! An index can be handed a [`RecordSource`] instead of records. The first
//! query against an unbuilt index pulls from that source. Without a source an
//! unbuilt index simply has nothing to search.

use std::fmt;
use std::sync::Arc;

use crate::config::{EngineConfig, MatcherConfig};
use crate::types::{EntityKind, FieldSpec, Record};

/// Supplies the current full set of records for an entity type.
///
/// This is the seam to whatever persists the planner's data. Implemented for
/// plain closures so tests and small callers don't need a named type.
pub trait RecordSource {
    fn records(&self, kind: EntityKind) -> Vec<Record>;
}

impl<F> RecordSource for F
where
    F: Fn(EntityKind) -> Vec<Record>,
{
    fn records(&self, kind: EntityKind) -> Vec<Record> {
        self(kind)
    }
}

/// Shared handle to a record source.
pub type SharedSource = Arc<dyn RecordSource + Send + Sync>;

/// Searchable snapshot of one entity type.
#[derive(Clone)]
pub struct Index {
    kind: EntityKind,
    fields: Vec<FieldSpec>,
    matcher: MatcherConfig,
    records: Vec<Arc<Record>>,
    version: u64,
    source: Option<SharedSource>,
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("kind", &self.kind)
            .field("fields", &self.fields)
            .field("records", &self.records.len())
            .field("version", &self.version)
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

impl Index {
    /// An unbuilt, empty index.
    pub fn new(kind: EntityKind, fields: Vec<FieldSpec>) -> Self {
        Self {
            kind,
            fields,
            matcher: MatcherConfig::default(),
            records: Vec::new(),
            version: 0,
            source: None,
        }
    }

    /// An unbuilt index that will load from `source` on first use.
    pub fn with_source(kind: EntityKind, fields: Vec<FieldSpec>, source: SharedSource) -> Self {
        Self {
            source: Some(source),
            ..Self::new(kind, fields)
        }
    }

    /// A built index over `records`, in the given order.
    pub fn build(kind: EntityKind, fields: Vec<FieldSpec>, records: Vec<Record>) -> Self {
        let mut index = Self::new(kind, fields);
        index.refresh(records);
        index
    }

    /// Replace the matcher configuration.
    pub fn with_matcher(mut self, matcher: MatcherConfig) -> Self {
        self.matcher = matcher;
        self
    }

    /// Remember `source` for later lazy builds and `rebuild_from_source`.
    pub fn set_source(&mut self, source: SharedSource) {
        self.source = Some(source);
    }

    /// Replace every record and advance the version.
    pub fn refresh(&mut self, records: Vec<Record>) {
        self.records = records.into_iter().map(Arc::new).collect();
        self.version += 1;
        tracing::debug!(
            entity = %self.kind,
            records = self.records.len(),
            version = self.version,
            "Built search index"
        );
    }

    /// Reload from the record source. Returns false (and leaves the index
    /// untouched) when no source was ever supplied.
    pub fn rebuild_from_source(&mut self) -> bool {
        let Some(source) = self.source.clone() else {
            return false;
        };
        let records = source.records(self.kind);
        self.refresh(records);
        true
    }

    /// Build from the source if this index has never been built.
    pub fn ensure_built(&mut self) {
        if !self.is_built() {
            tracing::debug!(entity = %self.kind, "Lazy build on first query");
            self.rebuild_from_source();
        }
    }

    pub fn is_built(&self) -> bool {
        self.version > 0
    }

    /// Number of builds and refreshes so far. 0 = never built.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn matcher(&self) -> &MatcherConfig {
        &self.matcher
    }

    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The three indexes the planner searches together.
#[derive(Debug, Clone)]
pub struct SearchIndexes {
    pub tasks: Index,
    pub lists: Index,
    pub labels: Index,
}

impl Default for SearchIndexes {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl SearchIndexes {
    /// Unbuilt indexes using `config`'s field specs and matcher settings.
    pub fn from_config(config: &EngineConfig) -> Self {
        let make = |kind| Index::new(kind, config.fields(kind).to_vec()).with_matcher(config.matcher.clone());
        Self {
            tasks: make(EntityKind::Task),
            lists: make(EntityKind::List),
            labels: make(EntityKind::Label),
        }
    }

    /// Unbuilt indexes that load lazily from `source`.
    pub fn from_source(config: &EngineConfig, source: SharedSource) -> Self {
        let mut indexes = Self::from_config(config);
        for kind in EntityKind::ALL {
            indexes.index_mut(kind).set_source(source.clone());
        }
        indexes
    }

    /// Built indexes over the given records.
    pub fn build_all(
        config: &EngineConfig,
        tasks: Vec<Record>,
        lists: Vec<Record>,
        labels: Vec<Record>,
    ) -> Self {
        let mut indexes = Self::from_config(config);
        indexes.tasks.refresh(tasks);
        indexes.lists.refresh(lists);
        indexes.labels.refresh(labels);
        indexes
    }

    pub fn index(&self, kind: EntityKind) -> &Index {
        match kind {
            EntityKind::Task => &self.tasks,
            EntityKind::List => &self.lists,
            EntityKind::Label => &self.labels,
        }
    }

    pub fn index_mut(&mut self, kind: EntityKind) -> &mut Index {
        match kind {
            EntityKind::Task => &mut self.tasks,
            EntityKind::List => &mut self.lists,
            EntityKind::Label => &mut self.labels,
        }
    }

    /// Replace one category's records.
    pub fn refresh(&mut self, kind: EntityKind, records: Vec<Record>) {
        self.index_mut(kind).refresh(records);
    }

    /// Reload every category from its source. Returns how many reloaded.
    pub fn rebuild_all_from_source(&mut self) -> usize {
        EntityKind::ALL
            .into_iter()
            .filter(|&kind| self.index_mut(kind).rebuild_from_source())
            .count()
    }
}
