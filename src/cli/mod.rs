// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the periodica command-line interface.
//!
//! Three subcommands over a molecule catalog: `search` ranks molecules for a
//! query, `render` writes a molecule's 2D drawing as SVG, and `show` dumps a
//! molecule's atoms and bonds. The built-in catalog is used unless
//! `--catalog` points at a JSON file.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use periodica::SortMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "periodica",
    about = "Search molecules and draw them in 2D",
    version
)]
pub struct Cli {
    /// Molecule catalog (JSON array). Defaults to the built-in dataset.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog molecules against a query
    Search {
        /// Search query (empty lists everything)
        #[arg(default_value = "")]
        query: String,

        /// Ordering: "az" (alphabetical when the query is empty) or "score"
        #[arg(short, long, default_value = "az", value_parser = parse_sort_mode)]
        sort: SortMode,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Hide molecules that do not match at all
        #[arg(long)]
        only_matches: bool,
    },

    /// Draw a molecule as SVG
    Render {
        /// Molecule id, e.g. "h2o"
        id: String,

        /// Canvas width
        #[arg(long, default_value = "800")]
        width: f64,

        /// Canvas height
        #[arg(long, default_value = "200")]
        height: f64,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a molecule's metadata, atoms and bonds
    Show {
        /// Molecule id, e.g. "benzene"
        id: String,
    },
}

fn parse_sort_mode(value: &str) -> Result<SortMode, String> {
    value.parse().map_err(|e: periodica::Error| e.to_string())
}
