//! Fuzzy search and relevance ranking for a task planner.
//!
//! Tasks, lists and labels are held in caller-owned [`Index`] snapshots. A query
//! is compiled once into bitap masks, matched against every record's weighted
//! fields with bounded typo tolerance, aggregated into a single score per
//! record (0 = exact, lower is better), filtered by threshold, and sorted.
//! Results carry the character ranges that matched so they can be highlighted.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ fuzzy::      │────▶│ fuzzy::bitap │────▶│  scoring     │
//! │ pattern      │     │ (match_text) │     │ (aggregate)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//! ┌──────────────┐     ┌──────────────┐            ▼
//! │   index      │────▶│search::query │◀───────────┘
//! │ (Index,      │     │ (search)     │
//! │ RecordSource)│     └──────────────┘
//! └──────────────┘            │
//!                             ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │search::multi │────▶│  highlight   │
//!                     │ (search_all, │     │ (segments)   │
//!                     │ suggestions) │     └──────────────┘
//!                     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use planner_search::{EngineConfig, Record, SearchIndexes, SearchOptions};
//!
//! let mut indexes = SearchIndexes::build_all(
//!     &EngineConfig::default(),
//!     vec![
//!         Record::new(1u64).with_field("name", "Buy groceries"),
//!         Record::new(2u64).with_field("name", "Walk the dog"),
//!     ],
//!     vec![],
//!     vec![],
//! );
//!
//! let results = indexes.search_all("grocries", &SearchOptions::default());
//! assert_eq!(results.tasks.len(), 1);
//! assert_eq!(indexes.suggestions("bu"), vec!["Buy groceries"]);
//! ```
//!
//! Nothing on the query path returns an error: bad input degrades to empty
//! results. Only configuration loading can fail (see [`ConfigError`]).

pub mod config;
pub mod contracts;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod index;
pub mod scoring;
pub mod search;
pub mod types;
pub mod testing;
pub mod utils;

pub use config::{EngineConfig, MatcherConfig};
pub use error::ConfigError;
pub use fuzzy::{compile, compile_with, match_text, CompiledPattern, TextMatch};
pub use highlight::{highlight, highlight_field, normalize_ranges};
pub use index::{Index, RecordSource, SearchIndexes, SharedSource};
pub use scoring::aggregate;
pub use search::{search, search_snapshot};
pub use types::{
    CombinedResults, EntityKind, FieldMatchResult, FieldSpec, MatchRange, Record, RecordId, Scope,
    ScoredResult, SearchOptions, Segment, DEFAULT_LIMIT, DEFAULT_THRESHOLD, MAX_SUGGESTIONS,
    MIN_SUGGESTION_QUERY_CHARS, QUICK_SEARCH_LIMIT, QUICK_SEARCH_THRESHOLD,
};
