// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole-planner search.
//!
//! Arbitrary queries and options against the sample planner: the engine must
//! never panic, and every result set must be bounded, ordered and in range.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use planner_search::testing::sample_planner;
use planner_search::{EntityKind, Scope, SearchOptions};

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    limit: u8,
    threshold: f64,
    scope: u8,
    include_completed: bool,
}

fuzz_target!(|input: QueryInput| {
    let query: String = input.query.chars().take(200).collect();
    let scope = match input.scope % 4 {
        0 => Scope::All,
        1 => Scope::TasksOnly,
        2 => Scope::ListsOnly,
        _ => Scope::LabelsOnly,
    };
    let options = SearchOptions::default()
        .with_limit(usize::from(input.limit))
        .with_threshold(input.threshold)
        .with_scope(scope)
        .with_include_completed(input.include_completed);
    let effective = options.normalized();

    let mut indexes = sample_planner();
    let combined = indexes.search_all(&query, &options);

    let mut total = 0;
    for kind in EntityKind::ALL {
        let results = combined.for_kind(kind);
        total += results.len();
        assert!(results.len() <= effective.limit);
        if !scope.includes(kind) {
            assert!(results.is_empty());
        }
        for result in results {
            assert!(result.score >= 0.0 && result.score <= effective.threshold);
        }
        for pair in results.windows(2) {
            assert!(pair[0].score.total_cmp(&pair[1].score).then(pair[0].position.cmp(&pair[1].position)).is_lt());
        }
    }
    assert_eq!(combined.total_matches, total);

    if query.trim().is_empty() {
        assert!(combined.is_empty());
    }

    let suggestions = indexes.suggestions(&query);
    assert!(suggestions.len() <= planner_search::MAX_SUGGESTIONS);
});
