// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pattern compilation: everything about the query that doesn't depend on
//! the text being searched.
//!
//! A query is folded, measured, and turned into one bitmask per distinct
//! character: bit `i` of `mask(c)` is set when `pattern[i] == c`. That table
//! is all the bitap scan needs. It is built once per query and then shared
//! read-only by every record and field in that query.
//!
//! The scan works on a single machine word, so patterns longer than 64
//! characters are split into consecutive chunks. Each chunk carries its own
//! mask table and error budget.

use std::collections::HashMap;

use crate::config::MatcherConfig;
use crate::utils::Folding;

/// Pattern characters that fit in one bitap state word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Error budget for a pattern of `len` characters: `round(threshold * len)`.
///
/// Threshold is clamped to `[0, 1]`; NaN counts as 0.
pub fn max_errors_for(threshold: f64, len: usize) -> usize {
    let threshold = if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    };
    (threshold * len as f64).round() as usize
}

/// One word-sized slice of a compiled pattern.
#[derive(Debug, Clone)]
pub struct PatternChunk {
    chars: Vec<char>,
    max_errors: usize,
    masks: HashMap<char, u64>,
}

impl PatternChunk {
    fn new(chars: Vec<char>, threshold: f64) -> Self {
        debug_assert!(!chars.is_empty() && chars.len() <= WORD_BITS);
        let mut masks: HashMap<char, u64> = HashMap::new();
        for (i, &c) in chars.iter().enumerate() {
            *masks.entry(c).or_insert(0) |= 1u64 << i;
        }
        let max_errors = max_errors_for(threshold, chars.len());
        Self {
            chars,
            max_errors,
            masks,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn max_errors(&self) -> usize {
        self.max_errors
    }

    /// Positions of `c` in this chunk as a bitmask (0 if absent).
    #[inline]
    pub fn mask(&self, c: char) -> u64 {
        self.masks.get(&c).copied().unwrap_or(0)
    }
}

/// A query ready to be matched against any number of fields.
///
/// Immutable after `compile`; safe to share across threads by reference.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    folded: String,
    len: usize,
    threshold: f64,
    max_errors: usize,
    chunks: Vec<PatternChunk>,
    folding: Folding,
    find_all_matches: bool,
    min_match_char_length: usize,
}

/// Compile `query` with the default matcher configuration.
pub fn compile(query: &str, threshold: f64) -> CompiledPattern {
    compile_with(query, threshold, &MatcherConfig::default())
}

/// Compile `query`: trim, fold, derive the error budget, build mask tables.
///
/// An empty query yields an empty pattern that matches nothing. Callers are
/// expected to reject empty queries before getting here.
pub fn compile_with(query: &str, threshold: f64, config: &MatcherConfig) -> CompiledPattern {
    let folding = config.folding();
    let chars = folding.fold_chars(query.trim());
    let len = chars.len();
    let threshold = if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    };

    let chunks = chars
        .chunks(WORD_BITS)
        .map(|chunk| PatternChunk::new(chunk.to_vec(), threshold))
        .collect();

    CompiledPattern {
        folded: chars.into_iter().collect(),
        len,
        threshold,
        max_errors: max_errors_for(threshold, len),
        chunks,
        folding,
        find_all_matches: config.find_all_matches,
        min_match_char_length: config.min_match_char_length.max(1),
    }
}

impl CompiledPattern {
    /// The folded query text.
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Pattern length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Error budget for the whole pattern.
    pub fn max_errors(&self) -> usize {
        self.max_errors
    }

    pub fn chunks(&self) -> &[PatternChunk] {
        &self.chunks
    }

    pub fn folding(&self) -> Folding {
        self.folding
    }

    pub fn find_all_matches(&self) -> bool {
        self.find_all_matches
    }

    pub fn min_match_char_length(&self) -> usize {
        self.min_match_char_length
    }

    /// Fold field text the same way the query was folded.
    pub fn fold_text(&self, text: &str) -> Vec<char> {
        self.folding.fold_chars(text)
    }
}
