// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: one query against one index.
//!
//! Full scan. The pattern is compiled once, then every record's configured
//! fields go through the matcher. Each field must clear the threshold on its
//! own to count as matched; the record's score is the weighted average of
//! the fields that did. All records are scored; `limit` only cuts the output.
//!
//! Completed tasks are dropped before the limit is applied, so they never
//! take a slot from an open task.

use crate::contracts;
use crate::fuzzy::{compile_with, match_text, CompiledPattern};
use crate::index::Index;
use crate::scoring::{aggregate, ranking};
use crate::types::{EntityKind, FieldMatchResult, FieldSpec, Record, ScoredResult, SearchOptions};
use crate::utils::normalize_query;

/// Search `index`, building it from its record source first if needed.
pub fn search(index: &mut Index, query: &str, options: &SearchOptions) -> Vec<ScoredResult> {
    if normalize_query(query).is_none() {
        return Vec::new();
    }
    index.ensure_built();
    search_snapshot(index, query, options)
}

/// Search `index` exactly as it is. An unbuilt index has no records and
/// returns nothing.
pub fn search_snapshot(index: &Index, query: &str, options: &SearchOptions) -> Vec<ScoredResult> {
    let Some(query) = normalize_query(query) else {
        return Vec::new();
    };
    let options = options.normalized();
    let pattern = compile_with(query, options.threshold, index.matcher());

    let mut results: Vec<ScoredResult> = index
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| keep_record(index.kind(), record, &options))
        .filter_map(|(position, record)| {
            let (score, per_field) = score_record(&pattern, record, index.fields())?;
            (score <= options.threshold).then(|| ScoredResult {
                record: record.clone(),
                position,
                score,
                per_field,
            })
        })
        .collect();

    let matched = results.len();
    ranking::rank(&mut results);
    results.truncate(options.limit);

    contracts::check_results_sorted(&results);
    contracts::check_within_limit(&results, options.limit);

    tracing::debug!(
        entity = %index.kind(),
        query_chars = pattern.len(),
        scanned = index.len(),
        matched,
        returned = results.len(),
        "Query complete"
    );
    results
}

/// Entity-specific predicates applied to every candidate.
fn keep_record(kind: EntityKind, record: &Record, options: &SearchOptions) -> bool {
    match kind {
        EntityKind::Task => options.include_completed || !record.completed,
        EntityKind::List | EntityKind::Label => true,
    }
}

/// Match every configured field of `record` and aggregate.
///
/// Returns `None` when no field matched within the pattern's threshold.
pub fn score_record(
    pattern: &CompiledPattern,
    record: &Record,
    fields: &[FieldSpec],
) -> Option<(f64, Vec<FieldMatchResult>)> {
    let threshold = pattern.threshold();
    let per_field: Vec<FieldMatchResult> = fields
        .iter()
        .filter_map(|spec| {
            let text = record.field(&spec.name)?;
            let m = match_text(pattern, text)?;
            if m.sub_score > threshold {
                tracing::trace!(field = %spec.name, sub_score = m.sub_score, "Field over threshold");
                return None;
            }
            Some(FieldMatchResult {
                field_name: spec.name.clone(),
                sub_score: m.sub_score,
                ranges: m.ranges,
            })
        })
        .collect();

    let score = aggregate(&per_field, fields)?;
    contracts::check_score_in_unit_interval(score);
    Some((score, per_field))
}
