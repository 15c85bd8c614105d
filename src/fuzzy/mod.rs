// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo-tolerant substring search via bitap.
//!
//! `pattern` compiles a query once into per-character bitmasks, `bitap` runs
//! it against field text, and `levenshtein` holds the edit-distance DP used to
//! locate window starts (and as a reference oracle in tests).

mod levenshtein;
pub mod bitap;
pub mod pattern;

pub use bitap::{match_text, TextMatch};
pub use levenshtein::{recover_window_start, substring_distance, substring_distance_within};
pub use pattern::{compile, compile_with, max_errors_for, CompiledPattern, PatternChunk, WORD_BITS};
