//! Match scoring and flat molecule drawings for a periodic-table explorer.
//!
//! Two independent pieces, each usable without the other:
//!
//! - **Scoring**: [`score_match`] rates how well a search-box query matches a
//!   label, and [`rank`] orders a whole candidate list with it.
//! - **Rendering**: [`render`] turns a molecule's atoms and bonds into a
//!   [`Scene`] of lines and labeled circles, fitted to a canvas.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  catalog.rs  │────▶│  scoring/    │
//! │ (Molecule,  │     │ (built-in +  │     │ (score_match,│
//! │  Atom, Bond)│     │  JSON files) │     │  rank)       │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     render/                          │
//! │  (Bounds, Viewport → Scene → SVG, Surface)           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Neither core does I/O or keeps state between calls. Both are safe to call
//! from any number of threads at once.
//!
//! # Usage
//!
//! ```
//! use periodica::{rank, render, Catalog, RankOptions};
//!
//! let catalog = Catalog::builtin()?;
//!
//! let hits = rank("benz", catalog.molecules(), &RankOptions::by_score().limit(3));
//! assert_eq!(hits[0].item.name, "Benzene");
//!
//! let water = catalog.require("h2o")?;
//! let scene = render(water, 400.0, 300.0);
//! assert_eq!(scene.circles().count(), 3);
//! assert_eq!(scene.lines().count(), 2);
//! # Ok::<(), periodica::Error>(())
//! ```

// Module declarations
pub mod catalog;
mod error;
pub mod render;
pub mod scoring;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use render::{render, render_with_style, CanvasSize, RenderStyle, Scene, Surface};
pub use scoring::ranking::{
    best_match, best_score, rank, RankOptions, Ranked, Searchable, SortMode,
};
pub use scoring::{classify_match, score_match, Match, MatchTier};
pub use types::{Atom, Bond, Molecule};
pub use utils::normalize_query;
