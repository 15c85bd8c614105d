// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-entity search: one query across tasks, lists and labels.
//!
//! Each category is searched independently with the same query and options,
//! and its results stay in their own bucket. Categories outside the scope
//! come back empty. `total_matches` counts what was returned, after limits.
//!
//! Quick search is the same call with the autocomplete preset. Suggestions
//! are quick-search display names, best score first, deduplicated.

use std::collections::HashSet;

use crate::contracts;
use crate::index::SearchIndexes;
use crate::search::query;
use crate::types::{
    CombinedResults, EntityKind, ScoredResult, SearchOptions, MAX_SUGGESTIONS, MIN_SUGGESTION_QUERY_CHARS,
};
use crate::utils::normalize_query;

impl SearchIndexes {
    /// Search one category.
    pub fn search_entity(&mut self, kind: EntityKind, query: &str, options: &SearchOptions) -> Vec<ScoredResult> {
        query::search(self.index_mut(kind), query, options)
    }

    /// Search every category in `options.scope`.
    pub fn search_all(&mut self, query: &str, options: &SearchOptions) -> CombinedResults {
        if normalize_query(query).is_none() {
            return CombinedResults::empty();
        }

        let mut combined = CombinedResults::empty();
        for kind in EntityKind::ALL {
            if !options.scope.includes(kind) {
                continue;
            }
            let results = self.search_entity(kind, query, options);
            match kind {
                EntityKind::Task => combined.tasks = results,
                EntityKind::List => combined.lists = results,
                EntityKind::Label => combined.labels = results,
            }
        }
        combined.total_matches = combined.tasks.len() + combined.lists.len() + combined.labels.len();

        contracts::check_total_matches(&combined);
        tracing::debug!(
            scope = ?options.scope,
            tasks = combined.tasks.len(),
            lists = combined.lists.len(),
            labels = combined.labels.len(),
            "Multi-entity search complete"
        );
        combined
    }

    /// `search_all` with the autocomplete preset (limit 5, threshold 0.3).
    pub fn quick_search(&mut self, query: &str) -> CombinedResults {
        self.search_all(query, &SearchOptions::quick())
    }

    /// Display names for an autocomplete dropdown.
    ///
    /// Names are returned exactly as stored, best score first (category
    /// order, then index order, on ties), without duplicates, at most 10.
    /// Partial queries under two characters yield nothing.
    pub fn suggestions(&mut self, partial: &str) -> Vec<String> {
        let Some(partial) = normalize_query(partial) else {
            return Vec::new();
        };
        if partial.chars().count() < MIN_SUGGESTION_QUERY_CHARS {
            return Vec::new();
        }

        let combined = self.quick_search(partial);
        let mut ranked: Vec<(EntityKind, &ScoredResult)> = combined.iter_all().collect();
        // Stable: ties keep category order, then position
        ranked.sort_by(|(_, a), (_, b)| a.score.total_cmp(&b.score));

        let mut seen = HashSet::new();
        ranked
            .into_iter()
            .filter_map(|(kind, result)| result.display_name(kind))
            .filter(|name| seen.insert(*name))
            .take(MAX_SUGGESTIONS)
            .map(str::to_string)
            .collect()
    }
}
