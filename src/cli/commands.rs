// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use planner_search::{highlight_field, CombinedResults, EngineConfig, EntityKind, SearchOptions};

use super::data::{load_config, DataFile};
use super::display::*;

/// Options for the `search` subcommand, as parsed.
pub struct SearchArgs<'a> {
    pub data: &'a Path,
    pub query: &'a str,
    pub options: SearchOptions,
    pub config: Option<&'a Path>,
    pub json: bool,
}

pub fn run_search(args: SearchArgs<'_>) -> Result<()> {
    let config = load_config(args.config)?;
    let mut indexes = DataFile::load(args.data)?.into_indexes(&config);
    let results = indexes.search_all(args.query, &args.options);

    if args.json {
        let json = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{}", json);
        return Ok(());
    }

    print_results(args.query, &results);
    Ok(())
}

fn print_results(query: &str, results: &CombinedResults) {
    section_top(&format!("{} result(s) for \"{}\"", results.total_matches, query));
    if results.is_empty() {
        row(&themed(GRAY, &[], "  no matches"));
    }
    for (kind, result) in results.iter_all() {
        let name = highlighted(&highlight_field(result, kind.display_field()));
        row(&format!(
            "  {} {}  {}{}",
            kind_badge(kind),
            score_value(result.score),
            name,
            completed_marker(result.record.completed)
        ));
        // Only show the description when the match came from there
        if result.field_match("description").is_some() {
            let description = highlighted(&highlight_field(result, "description"));
            row(&format!("  {}  {}", " ".repeat(5 + 1 + 5), description));
        }
    }
    section_bot();
}

pub fn run_suggest(data: &Path, partial: &str, config: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let mut indexes = DataFile::load(data)?.into_indexes(&config);
    let suggestions = indexes.suggestions(partial);

    if json {
        let json = serde_json::to_string(&suggestions).context("Failed to serialize suggestions")?;
        println!("{}", json);
    } else {
        for suggestion in &suggestions {
            println!("{}", suggestion);
        }
    }
    Ok(())
}

pub fn run_inspect(data: &Path, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let indexes = DataFile::load(data)?.into_indexes(&config);

    section_top(&format!("{}", data.display()));
    for kind in EntityKind::ALL {
        let index = indexes.index(kind);
        let completed = index.records().iter().filter(|r| r.completed).count();
        let mut line = format!("  {} {:>6} records", kind_badge(kind), index.len());
        if kind == EntityKind::Task {
            line.push_str(&format!(" ({} completed)", completed));
        }
        row(&line);
        row(&format!("        {}", describe_fields(&config, kind)));
    }
    let matcher = &config.matcher;
    row(&themed(
        GRAY,
        &[],
        &format!(
            "  case_sensitive={} ignore_diacritics={} find_all_matches={} min_match_char_length={}",
            matcher.case_sensitive, matcher.ignore_diacritics, matcher.find_all_matches, matcher.min_match_char_length
        ),
    ));
    section_bot();
    Ok(())
}

fn describe_fields(config: &EngineConfig, kind: EntityKind) -> String {
    config
        .fields(kind)
        .iter()
        .map(|spec| format!("{}={}", spec.name, spec.weight))
        .collect::<Vec<_>>()
        .join(", ")
}
