// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The field matcher: bitap (Baeza-Yates–Gonnet / Wu-Manber) approximate
//! substring search.
//!
//! State is one 64-bit word per error level `d ∈ 0..=k`. Bit `i` of `R[d]` is
//! set when `pattern[..=i]` aligns with some text window ending at the current
//! character using at most `d` edits. Each text character costs O(k) word
//! operations:
//!
//! ```text
//! R'[0] = ((R[0] << 1) | 1) & mask(c)
//! R'[d] = ((R[d] << 1) | 1) & mask(c)        match
//!       | (R[d-1] << 1) | 1                  substitution
//!       | R[d-1]                             insertion (extra text char)
//!       | (R'[d-1] << 1) | 1                 deletion (skipped pattern char)
//! ```
//!
//! A full match ends wherever bit `m - 1` is set. The scan keeps the lowest
//! error count seen, leftmost on ties; location is otherwise ignored. The
//! window start is recovered afterwards with a short reverse DP
//! (see `levenshtein::recover_window_start`).

use crate::contracts;
use crate::fuzzy::levenshtein::recover_window_start;
use crate::fuzzy::pattern::{CompiledPattern, PatternChunk};
use crate::highlight::normalize_ranges;
use crate::scoring::sub_score;
use crate::types::MatchRange;

/// Successful match of a compiled pattern against one text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMatch {
    /// Edits used by the best window (summed over chunks).
    pub errors: usize,
    /// `errors / pattern length` for the best window, in `[0, 1]`. 0 = exact.
    pub sub_score: f64,
    /// Sorted, disjoint, inclusive character ranges into the original text.
    pub ranges: Vec<MatchRange>,
}

/// Best window found by one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Found {
    errors: usize,
    /// `None` when the alignment consumed no text.
    window: Option<MatchRange>,
}

#[inline]
fn low_bits(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// Scan `text[lo..hi]` for the lowest-error window of `chunk`.
fn scan(chunk: &PatternChunk, text: &[char], lo: usize, hi: usize) -> Option<Found> {
    let m = chunk.len();
    if m == 0 || lo >= hi {
        return None;
    }
    let k = chunk.max_errors().min(m);
    let accept = 1u64 << (m - 1);

    // Before any text: the first d pattern chars can be deleted for d edits.
    let mut state: Vec<u64> = (0..=k).map(low_bits).collect();
    let mut best: Option<(usize, usize)> = None;

    for j in lo..hi {
        let mask = chunk.mask(text[j]);

        let mut prev_old = state[0];
        state[0] = ((prev_old << 1) | 1) & mask;
        let mut prev_new = state[0];

        for d in 1..=k {
            let old = state[d];
            state[d] = (((old << 1) | 1) & mask) | ((prev_old | prev_new) << 1) | 1 | prev_old;
            prev_old = old;
            prev_new = state[d];
        }

        if let Some(errors) = state.iter().position(|s| s & accept != 0) {
            if best.map_or(true, |(e, _)| errors < e) {
                best = Some((errors, j));
                if errors == 0 {
                    break;
                }
            }
        }
    }

    let (errors, end) = best?;
    let window = recover_window_start(chunk.chars(), text, lo, end, errors)
        .map(|start| MatchRange::new(start, end));
    Some(Found { errors, window })
}

/// After the best window, keep scanning the text on either side of every
/// accepted window for further non-overlapping windows within the threshold.
fn collect_more(
    chunk: &PatternChunk,
    text: &[char],
    first: MatchRange,
    threshold: f64,
    out: &mut Vec<MatchRange>,
) {
    let mut pending = vec![(0, first.start), (first.end + 1, text.len())];
    while let Some((lo, hi)) = pending.pop() {
        let Some(found) = scan(chunk, text, lo, hi) else {
            continue;
        };
        let Some(window) = found.window else {
            continue;
        };
        if found.errors as f64 / chunk.len() as f64 > threshold {
            continue;
        }
        out.push(window);
        pending.push((lo, window.start));
        pending.push((window.end + 1, hi));
    }
}

/// Match a compiled pattern against one field's text.
///
/// Returns `None` (no match) when the text is empty, when any chunk exceeds
/// its error budget, or when no range of at least `min_match_char_length`
/// characters survives.
pub fn match_text(pattern: &CompiledPattern, text: &str) -> Option<TextMatch> {
    if pattern.is_empty() {
        return None;
    }
    let folded = pattern.fold_text(text);
    if folded.is_empty() {
        return None;
    }

    let mut errors = 0;
    let mut score_sum = 0.0;
    let mut ranges = Vec::new();

    for chunk in pattern.chunks() {
        let found = scan(chunk, &folded, 0, folded.len())?;
        errors += found.errors;
        score_sum += sub_score(found.errors, chunk.len());

        if let Some(window) = found.window {
            ranges.push(window);
            if pattern.find_all_matches() {
                collect_more(chunk, &folded, window, pattern.threshold(), &mut ranges);
            }
        }
    }

    let mut ranges = normalize_ranges(&ranges, folded.len());
    ranges.retain(|r| r.len() >= pattern.min_match_char_length());
    if ranges.is_empty() {
        return None;
    }

    let sub_score = (score_sum / pattern.chunks().len() as f64).clamp(0.0, 1.0);
    contracts::check_score_in_unit_interval(sub_score);
    contracts::check_ranges_well_formed(&ranges, folded.len());

    Some(TextMatch {
        errors,
        sub_score,
        ranges,
    })
}
