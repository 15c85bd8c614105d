// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit-distance dynamic programming, in the two shapes the matcher needs.
//!
//! The bitap scan only tells us where a match *ends* and how many errors it
//! took. `recover_window_start` walks backwards from that end with a small
//! DP to find where it starts. `substring_distance` is the plain O(nm)
//! reference: best edit distance of the pattern against any substring of the
//! text. The bitap scan must agree with it whenever it reports a match.

/// Minimum edit distance between `pattern` and any substring of `text`
/// (including the empty substring, which costs `pattern.len()`).
///
/// Classic semi-global alignment: the first DP row is all zeros so a match
/// may start anywhere in the text.
pub fn substring_distance(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    // col[i] = best cost of aligning pattern[..i] ending at the current text position
    let mut col: Vec<usize> = (0..=m).collect();
    let mut best = col[m];

    for &tc in text {
        let mut diag = col[0];
        col[0] = 0;
        for i in 1..=m {
            let up = col[i];
            let cost = usize::from(pattern[i - 1] != tc);
            col[i] = (up + 1).min(col[i - 1] + 1).min(diag + cost);
            diag = up;
        }
        best = best.min(col[m]);
    }

    best
}

/// Is `pattern` within `max` edits of some substring of `text`?
pub fn substring_distance_within(pattern: &[char], text: &[char], max: usize) -> Option<usize> {
    let distance = substring_distance(pattern, text);
    (distance <= max).then_some(distance)
}

/// Find the start of a match window that ends at `end` (inclusive).
///
/// Aligns the reversed pattern against `text[lo..=end]` read right to left,
/// considering at most `pattern.len() + errors` characters. Among the window
/// lengths that reach the minimum cost, the one closest to the pattern length
/// wins, longer on ties.
///
/// Returns `None` when the best alignment consumes no text at all (every
/// pattern character deleted).
pub fn recover_window_start(
    pattern: &[char],
    text: &[char],
    lo: usize,
    end: usize,
    errors: usize,
) -> Option<usize> {
    let m = pattern.len();
    if end < lo || end >= text.len() {
        return None;
    }
    let max_len = (m + errors).min(end + 1 - lo);

    // col[i] = distance between the last i pattern chars and the last t text chars
    let mut col: Vec<usize> = (0..=m).collect();
    let mut best_len = 0usize;
    let mut best_cost = col[m];

    for t in 1..=max_len {
        let tc = text[end + 1 - t];
        let mut diag = col[0];
        col[0] = t;
        for i in 1..=m {
            let up = col[i];
            let cost = usize::from(pattern[m - i] != tc);
            col[i] = (up + 1).min(col[i - 1] + 1).min(diag + cost);
            diag = up;
        }

        let cost = col[m];
        let better = cost < best_cost
            || (cost == best_cost && {
                let cur = t.abs_diff(m);
                let prev = best_len.abs_diff(m);
                cur < prev || (cur == prev && t > best_len)
            });
        if better {
            best_cost = cost;
            best_len = t;
        }
    }

    (best_len > 0).then(|| end + 1 - best_len)
}
