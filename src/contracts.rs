//! Runtime contracts for the engine's invariants.
//!
//! Debug-mode assertions that fire as close as possible to the code that
//! would break an invariant. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Panic with a message starting `Contract violation` so tests can match on it
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Invariant                                         |
//! |--------------------------------|---------------------------------------------------|
//! | `check_score_in_unit_interval` | sub-scores and aggregate scores lie in `[0, 1]`   |
//! | `check_ranges_well_formed`     | ranges sorted, disjoint, inside the field text    |
//! | `check_results_sorted`         | results ascending by `(score, position)`          |
//! | `check_within_limit`           | no category returns more than `limit` results     |
//! | `check_total_matches`          | `total_matches` equals the sum of category sizes  |
//!
//! # Usage
//!
//! ```ignore
//! use planner_search::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_results_sorted(&results);
//!
//! // In release builds, this is a no-op
//! ```

use crate::types::{CombinedResults, MatchRange, ScoredResult};

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a score lies in `[0, 1]` (NaN fails).
#[inline]
pub fn check_score_in_unit_interval(score: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: score {} outside [0, 1]",
        score
    );
}

// ============================================================================
// RANGE CONTRACTS
// ============================================================================

/// Check that ranges are sorted, non-overlapping, and inside `text_len` chars.
///
/// # Panics (debug builds only)
/// Panics on an inverted range, a range past the end, or two ranges that
/// overlap or are out of order.
#[inline]
pub fn check_ranges_well_formed(ranges: &[MatchRange], text_len: usize) {
    for (i, range) in ranges.iter().enumerate() {
        debug_assert!(
            range.start <= range.end,
            "Contract violation: ranges[{}] is inverted ({}..={})",
            i,
            range.start,
            range.end
        );
        debug_assert!(
            range.end < text_len,
            "Contract violation: ranges[{}] ends at {} but text has {} chars",
            i,
            range.end,
            text_len
        );
    }
    for (i, pair) in ranges.windows(2).enumerate() {
        debug_assert!(
            pair[0].end < pair[1].start,
            "Contract violation: ranges[{}] ({}..={}) overlaps or precedes ranges[{}] ({}..={})",
            i + 1,
            pair[1].start,
            pair[1].end,
            i,
            pair[0].start,
            pair[0].end
        );
    }
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that results are in final ranking order.
#[inline]
pub fn check_results_sorted(results: &[ScoredResult]) {
    for (i, pair) in results.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        debug_assert!(
            a.score < b.score || (a.score == b.score && a.position < b.position),
            "Contract violation: results[{}] (score {}, position {}) must rank after results[{}] (score {}, position {})",
            i,
            a.score,
            a.position,
            i + 1,
            b.score,
            b.position
        );
    }
}

/// Check that a category respects its limit.
#[inline]
pub fn check_within_limit(results: &[ScoredResult], limit: usize) {
    debug_assert!(
        results.len() <= limit,
        "Contract violation: {} results exceed limit {}",
        results.len(),
        limit
    );
}

/// Check that `total_matches` is the post-limit sum of the categories.
#[inline]
pub fn check_total_matches(combined: &CombinedResults) {
    let sum = combined.tasks.len() + combined.lists.len() + combined.labels.len();
    debug_assert_eq!(
        combined.total_matches, sum,
        "Contract violation: total_matches {} != {} results across categories",
        combined.total_matches, sum
    );
}
