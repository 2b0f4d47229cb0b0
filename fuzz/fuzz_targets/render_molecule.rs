// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the renderer.
//!
//! Arbitrary coordinates (NaN and infinity included), arbitrary bond indices
//! and arbitrary canvas sizes must always produce a scene with one circle per
//! atom and a usable canvas.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use periodica::render::svg::to_svg;
use periodica::{render, Atom, Bond, Molecule, RenderStyle};

#[derive(Debug, Arbitrary)]
struct Input {
    atoms: Vec<(Option<f64>, Option<f64>)>,
    bonds: Vec<(u16, u16)>,
    width: f64,
    height: f64,
}

fuzz_target!(|input: Input| {
    let atoms: Vec<Atom> = input
        .atoms
        .into_iter()
        .take(256)
        .map(|(x, y)| Atom {
            element: "C".to_string(),
            x,
            y,
        })
        .collect();
    let bonds: Vec<Bond> = input
        .bonds
        .into_iter()
        .take(512)
        .map(|(a, b)| Bond::new(a as usize, b as usize))
        .collect();
    let molecule = Molecule::from_parts(atoms, bonds);

    let scene = render(&molecule, input.width, input.height);

    assert!(scene.width.is_finite() && scene.width > 0.0);
    assert!(scene.height.is_finite() && scene.height > 0.0);
    assert_eq!(scene.circles().count(), molecule.atoms.len());
    assert_eq!(
        scene.lines().count(),
        molecule.bonds.len() - molecule.dangling_bond_count()
    );

    for c in scene.circles() {
        assert!(c.cx.is_finite() && c.cy.is_finite(), "({}, {})", c.cx, c.cy);
    }
    for l in scene.lines() {
        assert!([l.x1, l.y1, l.x2, l.y2].iter().all(|v| v.is_finite()));
    }

    let svg = to_svg(&scene, &RenderStyle::default());
    assert!(svg.starts_with("<svg") && svg.ends_with("</svg>"));
    assert!(!svg.contains("NaN") && !svg.contains("inf"));
});
