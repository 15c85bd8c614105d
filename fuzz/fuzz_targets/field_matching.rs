// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bitap field matcher.
//!
//! Checks the matcher against the reference edit-distance DP and verifies
//! that every reported range lies inside the text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use planner_search::fuzzy::{compile, match_text, substring_distance};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    text: String,
    /// Threshold in hundredths, folded into [0, 1]
    threshold: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to keep the reference DP cheap
    let query: String = input.query.chars().take(40).collect();
    let text: String = input.text.chars().take(120).collect();
    let threshold = f64::from(input.threshold % 101) / 100.0;

    let pattern = compile(&query, threshold);
    let Some(found) = match_text(&pattern, &text) else {
        return;
    };

    assert!((0.0..=1.0).contains(&found.sub_score));
    assert!(!found.ranges.is_empty());

    let text_len = pattern.fold_text(&text).len();
    for range in &found.ranges {
        assert!(range.start <= range.end && range.end < text_len, "bad range {:?}", range);
    }
    for pair in found.ranges.windows(2) {
        assert!(pair[0].end < pair[1].start, "overlapping ranges {:?}", pair);
    }

    // Single-chunk patterns must agree with the DP exactly
    if pattern.chunks().len() == 1 {
        let expected = substring_distance(pattern.chunks()[0].chars(), &pattern.fold_text(&text));
        assert_eq!(found.errors, expected, "query {:?} text {:?}", query, text);
    }
});
