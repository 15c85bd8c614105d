// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting: split field text into matched and unmatched runs.
//!
//! Ranges coming out of the matcher are already sorted and disjoint. Ranges
//! from anywhere else are repaired (sorted, clamped, merged) before use, so a
//! bad range yields an imperfect highlight instead of a panic.

use std::mem;

use crate::types::{MatchRange, ScoredResult, Segment};

/// Sort, clamp to `text_len` characters, and merge overlapping or adjacent
/// ranges.
///
/// Ranges with `start > end` or starting past the end of the text are
/// dropped.
pub fn normalize_ranges(ranges: &[MatchRange], text_len: usize) -> Vec<MatchRange> {
    if text_len == 0 {
        return Vec::new();
    }
    let mut sorted: Vec<MatchRange> = ranges
        .iter()
        .filter(|r| r.start <= r.end && r.start < text_len)
        .map(|r| MatchRange::new(r.start, r.end.min(text_len - 1)))
        .collect();
    sorted.sort_unstable();

    let mut merged: Vec<MatchRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end + 1 => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Are `ranges` sorted, disjoint, non-adjacent and inside `text_len`?
fn is_well_formed(ranges: &[MatchRange], text_len: usize) -> bool {
    ranges.iter().all(|r| r.start <= r.end && r.end < text_len)
        && ranges.windows(2).all(|w| w[0].end + 1 < w[1].start)
}

/// Split `text` into segments along `ranges` (inclusive character offsets).
///
/// Concatenating the returned segment texts always gives back `text`.
/// Adjacent segments never share the same `matched` flag.
pub fn highlight(text: &str, ranges: &[MatchRange]) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    let text_len = text.chars().count();

    let repaired;
    let ranges = if is_well_formed(ranges, text_len) {
        ranges
    } else {
        repaired = normalize_ranges(ranges, text_len);
        tracing::debug!(
            given = ranges.len(),
            merged = repaired.len(),
            "Repaired malformed highlight ranges"
        );
        &repaired
    };

    let mut segments = Vec::new();
    let mut next = ranges.iter().peekable();
    let mut buffer = String::new();
    let mut matched = false;

    for (idx, ch) in text.chars().enumerate() {
        while next.peek().is_some_and(|r| r.end < idx) {
            next.next();
        }
        let in_range = next.peek().is_some_and(|r| r.contains(idx));
        if in_range != matched {
            if !buffer.is_empty() {
                segments.push(Segment {
                    text: mem::take(&mut buffer),
                    matched,
                });
            }
            matched = in_range;
        }
        buffer.push(ch);
    }

    if !buffer.is_empty() {
        segments.push(Segment {
            text: buffer,
            matched,
        });
    }
    segments
}

/// Highlight one field of a result. Unmatched fields come back as a single
/// plain segment; missing fields as nothing.
pub fn highlight_field(result: &ScoredResult, field: &str) -> Vec<Segment> {
    let Some(text) = result.record.field(field) else {
        return Vec::new();
    };
    match result.field_match(field) {
        Some(m) => highlight(text, &m.ranges),
        None => highlight(text, &[]),
    }
}
