// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog parsing.
//!
//! Malformed JSON must come back as an error, never a panic. Whatever does
//! parse must then rank and render cleanly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use periodica::{render, Catalog, RankOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(catalog) = Catalog::from_json_str(json) else {
        return;
    };

    let ranked = catalog.search("c", &RankOptions::by_score());
    assert_eq!(ranked.len(), catalog.len());

    for molecule in catalog.iter().take(16) {
        let scene = render(molecule, 400.0, 300.0);
        assert_eq!(scene.circles().count(), molecule.atoms.len());
    }
});
