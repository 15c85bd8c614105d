// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! `query` runs one query against one index. `multi` fans the same query out
//! to tasks, lists and labels, and builds quick search and suggestions on top.

pub mod multi;
pub mod query;

pub use query::{score_record, search, search_snapshot};
