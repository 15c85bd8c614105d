// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character folding for queries and field text.
//!
//! Folding is strictly one character in, one character out. That is what lets
//! a match found in folded text be reported as a `MatchRange` over the
//! original text without any offset mapping.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// How characters are folded before comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Folding {
    pub case_sensitive: bool,
    pub ignore_diacritics: bool,
}

impl Folding {
    /// Fold a single character.
    ///
    /// - diacritics: "é" → "e" (NFD, keep the base character)
    /// - case: "B" → "b" (first char of the lowercase mapping, so "İ" → "i")
    #[inline]
    pub fn fold(self, c: char) -> char {
        let base = if self.ignore_diacritics {
            strip_diacritic(c)
        } else {
            c
        };
        if self.case_sensitive {
            base
        } else if base.is_ascii() {
            base.to_ascii_lowercase()
        } else {
            base.to_lowercase().next().unwrap_or(base)
        }
    }

    /// Fold a whole string into a char vector of identical length.
    pub fn fold_chars(self, text: &str) -> Vec<char> {
        text.chars().map(|c| self.fold(c)).collect()
    }
}

/// Reduce a character to its base letter.
///
/// Without the `unicode-normalization` feature this is the identity.
#[cfg(feature = "unicode-normalization")]
fn strip_diacritic(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    std::iter::once(c)
        .nfd()
        .find(|d| !is_combining_mark(*d))
        .unwrap_or(c)
}

#[cfg(not(feature = "unicode-normalization"))]
fn strip_diacritic(c: char) -> char {
    c
}

/// Trim a raw query; `None` when nothing searchable is left.
pub fn normalize_query(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
