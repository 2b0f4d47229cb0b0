// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search candidates get their numbers and their order.
//!
//! `core` turns one (query, label) pair into a score. `ranking` applies that
//! to a list of candidates, takes the best field per candidate, and sorts.

mod core;
pub mod ranking;

pub use self::core::*;
