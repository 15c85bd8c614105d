// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! Ranges come straight from the fuzzer, so most are malformed. Segments must
//! still reassemble into the original text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use planner_search::{highlight, normalize_ranges, MatchRange};

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    ranges: Vec<(u16, u16)>,
}

fuzz_target!(|input: HighlightInput| {
    let ranges: Vec<MatchRange> = input
        .ranges
        .iter()
        .take(32)
        .map(|&(start, end)| MatchRange::new(usize::from(start), usize::from(end)))
        .collect();

    let segments = highlight(&input.text, &ranges);

    let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(rebuilt, input.text);
    assert!(segments.iter().all(|s| !s.text.is_empty()));
    for pair in segments.windows(2) {
        assert_ne!(pair[0].matched, pair[1].matched);
    }

    let text_len = input.text.chars().count();
    let normalized = normalize_ranges(&ranges, text_len);
    for pair in normalized.windows(2) {
        assert!(pair[0].end + 1 < pair[1].start);
    }
    assert!(normalized.iter().all(|r| r.end < text_len));
});
