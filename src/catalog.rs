// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Molecule catalogs: the built-in dataset and user-supplied JSON files.
//!
//! A catalog is just an ordered list of molecules. Order matters: it is the
//! tie-break order for score ranking. The JSON form is an array of molecule
//! objects, bonds as `[from, to]` pairs:
//!
//! ```json
//! [{"id": "h2o", "name": "Water", "formula": "H₂O",
//!   "atoms": [{"element": "O", "x": 0, "y": 0}], "bonds": []}]
//! ```

use crate::error::{Error, Result};
use crate::scoring::ranking::{rank, RankOptions, Ranked, Searchable};
use crate::types::Molecule;
use std::path::Path;

/// The built-in dataset, compiled in.
const BUILTIN_JSON: &str = include_str!("../data/molecules.json");

impl Searchable for Molecule {
    /// Molecules match on name, formula and id.
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.formula.as_str(), self.id.as_str()]
    }

    fn sort_key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    molecules: Vec<Molecule>,
}

impl Catalog {
    pub fn new(molecules: Vec<Molecule>) -> Self {
        Self { molecules }
    }

    /// The molecules shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let molecules: Vec<Molecule> = serde_json::from_str(json)?;
        let dangling: usize = molecules.iter().map(Molecule::dangling_bond_count).sum();
        if dangling > 0 {
            log::warn!("catalog has {} bonds pointing at missing atoms", dangling);
        }
        log::debug!("parsed catalog with {} molecules", molecules.len());
        Ok(Self { molecules })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::from_json_str(&json)?;
        log::info!("loaded {} molecules from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Find a molecule by id, ignoring case.
    pub fn get(&self, id: &str) -> Option<&Molecule> {
        let id = id.trim();
        self.molecules.iter().find(|m| m.id.eq_ignore_ascii_case(id))
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: &str) -> Result<&Molecule> {
        self.get(id)
            .ok_or_else(|| Error::UnknownMolecule(id.to_string()))
    }

    /// Rank every molecule against `query`.
    pub fn search(&self, query: &str, options: &RankOptions) -> Vec<Ranked<'_, Molecule>> {
        rank(query, &self.molecules, options)
    }

    pub fn molecules(&self) -> &[Molecule] {
        &self.molecules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Molecule> {
        self.molecules.iter()
    }

    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Molecule;
    type IntoIter = std::slice::Iter<'a, Molecule>;

    fn into_iter(self) -> Self::IntoIter {
        self.molecules.iter()
    }
}
