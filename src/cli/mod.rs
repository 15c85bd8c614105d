// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the planner-search command-line interface.
//!
//! Three subcommands over a planner data file: `search` runs a multi-entity
//! query and prints highlighted results, `suggest` prints autocomplete
//! strings, and `inspect` shows what would be searched and how it is weighted.

pub mod commands;
pub mod data;
pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use planner_search::Scope;

#[derive(Parser)]
#[command(
    name = "planner-search",
    about = "Fuzzy search over planner tasks, lists and labels",
    version
)]
pub struct Cli {
    /// Log engine activity to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which categories to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    All,
    Tasks,
    Lists,
    Labels,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::All => Scope::All,
            ScopeArg::Tasks => Scope::TasksOnly,
            ScopeArg::Lists => Scope::ListsOnly,
            ScopeArg::Labels => Scope::LabelsOnly,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search tasks, lists and labels
    Search {
        /// Path to planner data (JSON)
        data: PathBuf,

        /// Search query
        query: String,

        /// Categories to search
        #[arg(short, long, value_enum, default_value = "all")]
        scope: ScopeArg,

        /// Maximum results per category
        #[arg(short, long)]
        limit: Option<usize>,

        /// Error tolerance, 0 (exact) to 1 (anything)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Keep completed tasks in the results
        #[arg(long)]
        include_completed: bool,

        /// Engine config (JSON): field weights and matcher options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Autocomplete suggestions for a partial query
    Suggest {
        /// Path to planner data (JSON)
        data: PathBuf,

        /// Partial query (at least two characters)
        partial: String,

        /// Engine config (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show record counts and field weights
    Inspect {
        /// Path to planner data (JSON)
        data: PathBuf,

        /// Engine config (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
