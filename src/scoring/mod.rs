// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores run the other way from most search engines: 0 is a perfect match and
//! larger is worse. A record's score is the weighted average of the sub-scores
//! of the fields that actually matched, so a strong description hit is not
//! dragged down just because the name missed.

mod core;
pub mod ranking;

pub use core::*;
