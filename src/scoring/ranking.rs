// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: ascending score, then original index position.
//!
//! Positions are unique within one index, so the order is total and every
//! query produces the same ranking for the same records.

use crate::types::ScoredResult;
use std::cmp::Ordering;

/// Compare two results from the same index.
///
/// Sort order:
/// 1. **Score** - lower is better (0 = exact)
/// 2. **Position** - earlier records first, so equal scores keep insertion order
pub fn compare_scored(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    match a.score.total_cmp(&b.score) {
        Ordering::Equal => a.position.cmp(&b.position),
        ord => ord,
    }
}

/// Sort results into final ranking order.
pub fn rank(results: &mut [ScoredResult]) {
    results.sort_by(compare_scored);
}
