// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate ranking: how a search box orders its list.
//!
//! Each candidate exposes a few labels (a molecule has name, formula and id).
//! Its score is the best [`score_match`] over those labels. Ordering then
//! depends on the explicit [`SortMode`]:
//!
//! - **Alphabetical** with an empty query: case-insensitive by sort key.
//! - Anything else: descending score, stable. Equal scores keep input order,
//!   with no further tie-break, so the UI stays put while typing.
//!
//! The sort mode is always passed in. Nothing here remembers the last one.

use super::core::{classify_match, score_match, Match};
use crate::error::Error;
use crate::utils::{fold_case, normalize_query};
use std::cmp::Ordering;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Something a search box can list.
pub trait Searchable {
    /// Labels the query is scored against. The best one wins.
    fn search_fields(&self) -> Vec<&str>;

    /// Label used for alphabetical ordering.
    fn sort_key(&self) -> &str;
}

impl Searchable for str {
    fn search_fields(&self) -> Vec<&str> {
        vec![self]
    }

    fn sort_key(&self) -> &str {
        self
    }
}

impl Searchable for String {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.as_str()]
    }

    fn sort_key(&self) -> &str {
        self.as_str()
    }
}

/// How to order candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// A to Z by sort key when there is no query; by score otherwise.
    #[default]
    Alphabetical,
    /// Always by score, input order for ties.
    Score,
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "az" | "a-z" | "alpha" | "alphabetical" => Ok(SortMode::Alphabetical),
            "score" | "relevance" => Ok(SortMode::Score),
            _ => Err(Error::InvalidSortMode(value.to_string())),
        }
    }
}

/// Knobs for [`rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankOptions {
    pub sort: SortMode,
    /// Drop zero-score candidates when the query is non-empty.
    pub only_matches: bool,
    /// Keep at most this many results.
    pub limit: Option<usize>,
}

impl RankOptions {
    pub fn by_score() -> Self {
        Self {
            sort: SortMode::Score,
            ..Self::default()
        }
    }

    pub fn only_matches(mut self) -> Self {
        self.only_matches = true;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A candidate with the score it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a, T: ?Sized> {
    pub item: &'a T,
    pub score: u32,
}

/// Best score for `item` across all its search fields. 0 for an empty query.
pub fn best_score<T: Searchable + ?Sized>(query: &str, item: &T) -> u32 {
    item.search_fields()
        .into_iter()
        .map(|field| score_match(query, field))
        .max()
        .unwrap_or(0)
}

/// The match behind [`best_score`]: highest score over all fields, the
/// earliest field winning ties. `None` when no field matches at all.
pub fn best_match<T: Searchable + ?Sized>(query: &str, item: &T) -> Option<Match> {
    item.search_fields()
        .into_iter()
        .filter_map(|field| classify_match(query, field))
        .fold(None, |best: Option<Match>, m| match best {
            Some(b) if b.score >= m.score => Some(b),
            _ => Some(m),
        })
}

/// Compare two ranked candidates for score order.
///
/// Higher score sorts first. Ties compare `Equal` so a stable sort leaves
/// them in input order.
pub fn compare_by_score<T: ?Sized>(a: &Ranked<'_, T>, b: &Ranked<'_, T>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Compare two candidates alphabetically, ignoring case.
pub fn compare_by_name<T: Searchable + ?Sized>(a: &T, b: &T) -> Ordering {
    fold_case(a.sort_key()).cmp(&fold_case(b.sort_key()))
}

/// Score and order `items` for `query`.
///
/// The query is trimmed first. See the module docs for ordering rules.
pub fn rank<'a, T>(query: &str, items: &'a [T], options: &RankOptions) -> Vec<Ranked<'a, T>>
where
    T: Searchable + Sync,
{
    let query = normalize_query(query);
    let mut ranked = score_all(query, items);

    if query.is_empty() {
        if options.sort == SortMode::Alphabetical {
            ranked.sort_by(|a, b| compare_by_name(a.item, b.item));
        }
    } else {
        if options.only_matches {
            ranked.retain(|r| r.score > 0);
        }
        ranked.sort_by(compare_by_score);
    }

    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }

    log::trace!(
        "ranked {} of {} candidates for {:?}",
        ranked.len(),
        items.len(),
        query
    );
    ranked
}

#[cfg(feature = "parallel")]
fn score_all<'a, T: Searchable + Sync>(query: &str, items: &'a [T]) -> Vec<Ranked<'a, T>> {
    // Indexed collect keeps input order, which the stable sort depends on.
    items
        .par_iter()
        .map(|item| Ranked {
            item,
            score: best_score(query, item),
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all<'a, T: Searchable + Sync>(query: &str, items: &'a [T]) -> Vec<Ranked<'a, T>> {
    items
        .iter()
        .map(|item| Ranked {
            item,
            score: best_score(query, item),
        })
        .collect()
}
