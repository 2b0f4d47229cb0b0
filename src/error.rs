// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the fallible edges: loading catalogs and parsing options.
//!
//! Scoring and rendering never fail. Everything that can go wrong lives out
//! at the boundary where bytes come in.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no molecule with id '{0}'")]
    UnknownMolecule(String),

    #[error("unknown sort mode '{0}' (expected 'az' or 'score')")]
    InvalidSortMode(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
