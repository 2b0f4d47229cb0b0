// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for match scoring invariants.
//!
//! Any pair of strings must score without panicking, land at or below the
//! exact-match score, and agree with the tier classification.

#![no_main]

use libfuzzer_sys::fuzz_target;
use periodica::{classify_match, score_match, MatchTier};

fuzz_target!(|input: (String, String)| {
    let (query, text) = input;

    // The fuzzy tier is quadratic in label length
    let query: String = query.chars().take(64).collect();
    let text: String = text.chars().take(256).collect();

    let score = score_match(&query, &text);
    assert_eq!(score, score_match(&query, &text), "scoring is not deterministic");
    assert!(score <= 1000, "score {} above exact", score);

    match classify_match(&query, &text) {
        Some(m) => {
            assert_eq!(m.score, score);
            if m.tier == MatchTier::Exact {
                assert_eq!(score, 1000);
            } else {
                assert!(score < 1000, "{:?} tier scored {}", m.tier, score);
            }
        }
        None => assert_eq!(score, 0),
    }
});
