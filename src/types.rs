// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The molecule graph: atoms, bonds, and the catalog metadata around them.
//!
//! A molecule is a flat list of atoms plus a list of bonds that point into it
//! by index. Nothing here validates those indices. Consumers that walk bonds
//! (the 2D renderer, `Molecule::resolved_bonds`) skip the ones that dangle.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Atom identity**: an atom's position in `atoms` is its id. Reordering
//!   atoms silently rewires every bond.
//! - **Coordinates**: `x`/`y` are optional on the wire. Read them through
//!   [`Atom::x`] and [`Atom::y`], which default to `0.0` (NaN and infinities too).
//! - **Bond**: `from`/`to` may be out of range. That is a data problem, not a
//!   reason to fail.

use serde::{Deserialize, Serialize};

// =============================================================================
// ATOMS AND BONDS
// =============================================================================

/// One atom: an element symbol and an optional 2D position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Atom {
    /// Element symbol as displayed ("C", "Na", "Cl").
    pub element: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Atom {
    /// Atom with both coordinates set.
    pub fn new(element: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            element: element.into(),
            x: Some(x),
            y: Some(y),
        }
    }

    /// Atom with no coordinates at all. Lands on the origin.
    pub fn unplaced(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            x: None,
            y: None,
        }
    }

    /// X coordinate, 0 when missing or not finite.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x.filter(|v| v.is_finite()).unwrap_or(0.0)
    }

    /// Y coordinate, 0 when missing or not finite.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y.filter(|v| v.is_finite()).unwrap_or(0.0)
    }

    /// Position with unusable coordinates read as zero.
    #[inline]
    pub fn position(&self) -> (f64, f64) {
        (self.x(), self.y())
    }
}

/// A bond between two atoms, by index into [`Molecule::atoms`].
///
/// On the wire this is a two-element array `[from, to]`, matching the
/// compact form the molecule datasets use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Bond {
    pub from: usize,
    pub to: usize,
}

impl Bond {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl From<[usize; 2]> for Bond {
    fn from([from, to]: [usize; 2]) -> Self {
        Bond { from, to }
    }
}

impl From<Bond> for [usize; 2] {
    fn from(bond: Bond) -> Self {
        [bond.from, bond.to]
    }
}

// =============================================================================
// MOLECULE
// =============================================================================

/// A molecule as the catalog and the renderer see it.
///
/// The metadata fields all default to empty, so `{"atoms": [], "bonds": []}`
/// deserializes fine. The renderer only ever looks at `atoms` and `bonds`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Molecule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Display formula, may contain Unicode subscripts ("H₂O").
    #[serde(default)]
    pub formula: String,
    /// Wikipedia article title, underscores for spaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_title: Option<String>,
    #[serde(default)]
    pub atoms: Vec<Atom>,
    #[serde(default)]
    pub bonds: Vec<Bond>,
}

impl Molecule {
    /// Bare structure with no catalog metadata.
    pub fn from_parts(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        Self {
            atoms,
            bonds,
            ..Self::default()
        }
    }

    /// Look up an atom by index. `None` for out-of-range indices.
    #[inline]
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Bonds whose endpoints both exist, paired with those endpoints.
    ///
    /// Dangling bonds are dropped here, in their original order otherwise.
    pub fn resolved_bonds(&self) -> impl Iterator<Item = (&Atom, &Atom)> + '_ {
        self.bonds
            .iter()
            .filter_map(|bond| Some((self.atom(bond.from)?, self.atom(bond.to)?)))
    }

    /// Number of bonds that point outside `atoms`.
    pub fn dangling_bond_count(&self) -> usize {
        self.bonds
            .iter()
            .filter(|bond| self.atom(bond.from).is_none() || self.atom(bond.to).is_none())
            .count()
    }

    /// English Wikipedia URL for this molecule, if it has a title.
    pub fn wiki_url(&self) -> Option<String> {
        self.wiki_title
            .as_deref()
            .filter(|title| !title.is_empty())
            .map(|title| format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_")))
    }
}
