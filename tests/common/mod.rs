//! Shared test utilities and fixtures.

#![allow(dead_code)]

use planner_search::{CombinedResults, EntityKind, MatchRange, ScoredResult, Segment};

// Re-export canonical fixtures from planner_search::testing
pub use planner_search::testing::{
    grocery_indexes, grocery_tasks, make_completed_task, make_label, make_list, make_task,
    make_task_with_description, sample_planner, task_index,
};

/// Record ids of `results`, in order.
pub fn ids(results: &[ScoredResult]) -> Vec<String> {
    results.iter().map(|r| r.record.id.to_string()).collect()
}

/// Display names of `results`, in order.
pub fn names(results: &[ScoredResult]) -> Vec<String> {
    results
        .iter()
        .filter_map(|r| r.record.field("name"))
        .map(str::to_string)
        .collect()
}

/// Concatenate segment texts.
pub fn joined(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Only the matched segment texts.
pub fn matched_text(segments: &[Segment]) -> Vec<String> {
    segments.iter().filter(|s| s.matched).map(|s| s.text.clone()).collect()
}

/// Assert the invariants every result list must satisfy.
pub fn assert_results_well_formed(results: &[ScoredResult]) {
    for pair in results.windows(2) {
        assert!(
            (pair[0].score, pair[0].position) < (pair[1].score, pair[1].position),
            "results out of order: {:?} then {:?}",
            (pair[0].score, pair[0].position),
            (pair[1].score, pair[1].position)
        );
    }
    for result in results {
        assert!((0.0..=1.0).contains(&result.score), "score {} out of range", result.score);
        assert!(!result.per_field.is_empty(), "result without a matched field");
        for field in &result.per_field {
            let text_len = result
                .record
                .field(&field.field_name)
                .map(|t| t.chars().count())
                .unwrap_or(0);
            assert_ranges_well_formed(&field.ranges, text_len);
        }
    }
}

/// Ranges sorted, disjoint and inside the text.
pub fn assert_ranges_well_formed(ranges: &[MatchRange], text_len: usize) {
    for range in ranges {
        assert!(range.start <= range.end, "inverted range {:?}", range);
        assert!(range.end < text_len, "range {:?} past end {}", range, text_len);
    }
    for pair in ranges.windows(2) {
        assert!(pair[0].end < pair[1].start, "overlapping ranges {:?}", pair);
    }
}

/// Assert `total_matches` and per-category invariants.
pub fn assert_combined_well_formed(combined: &CombinedResults) {
    let sum: usize = EntityKind::ALL.iter().map(|&k| combined.for_kind(k).len()).sum();
    assert_eq!(combined.total_matches, sum);
    for kind in EntityKind::ALL {
        assert_results_well_formed(combined.for_kind(kind));
    }
}
