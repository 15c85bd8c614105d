// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! ```text
//! score = Σ(weight_i × subScore_i) / Σ(weight_i)     over matched fields i
//! ```
//!
//! Fields that did not match are absent from `per_field` and contribute to
//! neither sum. With nothing matched the record has no score at all; it is
//! excluded, not ranked last.

use crate::types::{FieldMatchResult, FieldSpec};

/// Sub-score for `errors` edits against a pattern of `pattern_len` characters.
///
/// `errors / max(len, 1)`, clamped to `[0, 1]`.
#[inline]
pub fn sub_score(errors: usize, pattern_len: usize) -> f64 {
    (errors as f64 / pattern_len.max(1) as f64).clamp(0.0, 1.0)
}

/// Weight configured for `field`, if it is a searchable field with a usable weight.
fn weight_of(field: &str, specs: &[FieldSpec]) -> Option<f64> {
    specs
        .iter()
        .find(|spec| spec.name == field)
        .map(|spec| spec.weight)
        .filter(|w| w.is_finite() && *w > 0.0)
}

/// Combine one record's matched fields into a single score.
///
/// Returns `None` when nothing usable matched. Results for fields that have
/// no spec (or a non-positive weight) are ignored.
pub fn aggregate(per_field: &[FieldMatchResult], specs: &[FieldSpec]) -> Option<f64> {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;

    for result in per_field {
        let Some(weight) = weight_of(&result.field_name, specs) else {
            continue;
        };
        weighted += weight * result.sub_score.clamp(0.0, 1.0);
        total_weight += weight;
    }

    if total_weight <= 0.0 {
        return None;
    }
    Some((weighted / total_weight).clamp(0.0, 1.0))
}
