// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind match scoring.
//!
//! Every (query, label) pair falls into exactly one tier, tried in order:
//! exact, prefix, substring, ordered subsequence, fuzzy run. The first tier
//! that applies decides the score. Inside a tier the score moves by the
//! tier's own formula (a length penalty or a per-character bonus), nothing else.
//!
//! # Tier bases
//!
//! | Tier        | Score                            |
//! |-------------|----------------------------------|
//! | Exact       | 1000                             |
//! | Prefix      | 900 - (len(text) - len(query))   |
//! | Substring   | 700 - (len(text) - len(query))   |
//! | Subsequence | 300 + 10 * matched               |
//! | Fuzzy       | 200 + 10 * longest shared run    |
//!
//! Lengths are in characters after case folding. Scores saturate at zero,
//! so an absurdly long label can fall out of its tier but never goes negative.
//!
//! The tiers do not strictly dominate each other. A long query can score
//! higher on subsequence than a long label scores on substring. That overlap
//! is inherited behavior and rankings built on top rely on the exact numbers.

use crate::utils::{char_boundaries, char_len, fold_case};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Score for a case-insensitive exact match.
pub const EXACT_SCORE: u32 = 1000;

/// Base score for a label that starts with the query.
pub const PREFIX_BASE_SCORE: u32 = 900;

/// Base score for a label that contains the query somewhere.
pub const SUBSTRING_BASE_SCORE: u32 = 700;

/// Base score for an ordered-subsequence match.
pub const SUBSEQUENCE_BASE_SCORE: u32 = 300;

/// Base score for the fuzzy shared-run fallback.
pub const FUZZY_BASE_SCORE: u32 = 200;

/// Bonus per matched character in the subsequence and fuzzy tiers.
pub const PER_CHAR_BONUS: u32 = 10;

/// Which rule produced a score.
///
/// Ordered best first, so `a < b` means `a` is the stronger kind of match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    Exact,
    Prefix,
    Substring,
    Subsequence,
    Fuzzy,
}

impl MatchTier {
    /// Short lowercase name, used by the CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Prefix => "prefix",
            MatchTier::Substring => "substring",
            MatchTier::Subsequence => "subsequence",
            MatchTier::Fuzzy => "fuzzy",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored match: the tier it landed in and the number it earned there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub tier: MatchTier,
    pub score: u32,
}

/// Score `text` against `query`. Higher is better, 0 means no match.
///
/// Never fails: empty query, empty text, any Unicode. Pure, so it is safe to
/// call from as many threads as you like.
///
/// ```
/// use periodica::score_match;
///
/// assert_eq!(score_match("water", "Water"), 1000);
/// assert_eq!(score_match("eth", "Ethanol"), 896);
/// assert_eq!(score_match("", "Water"), 0);
/// ```
pub fn score_match(query: &str, text: &str) -> u32 {
    classify_match(query, text).map_or(0, |m| m.score)
}

/// Like [`score_match`], but also reports which tier matched.
///
/// Returns `None` exactly when `score_match` would return 0 because nothing
/// matched. A tier match whose formula saturated to 0 still comes back as
/// `Some` with `score == 0`.
pub fn classify_match(query: &str, text: &str) -> Option<Match> {
    if query.is_empty() {
        return None;
    }

    let query = fold_case(query);
    let text = fold_case(text);

    if text == query {
        return Some(Match {
            tier: MatchTier::Exact,
            score: EXACT_SCORE,
        });
    }

    // Containment implies text is at least as long as query, so this never wraps.
    let length_penalty = || (char_len(&text) - char_len(&query)) as u32;

    if text.starts_with(&query) {
        return Some(Match {
            tier: MatchTier::Prefix,
            score: PREFIX_BASE_SCORE.saturating_sub(length_penalty()),
        });
    }

    if text.contains(&query) {
        return Some(Match {
            tier: MatchTier::Substring,
            score: SUBSTRING_BASE_SCORE.saturating_sub(length_penalty()),
        });
    }

    let matched = greedy_subsequence_len(&query, &text);
    if matched > 0 {
        return Some(Match {
            tier: MatchTier::Subsequence,
            score: per_char_score(SUBSEQUENCE_BASE_SCORE, matched),
        });
    }

    let run = longest_run_in(&text, &query);
    if run > 0 {
        return Some(Match {
            tier: MatchTier::Fuzzy,
            score: per_char_score(FUZZY_BASE_SCORE, run),
        });
    }

    None
}

fn per_char_score(base: u32, count: usize) -> u32 {
    let bonus = u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(PER_CHAR_BONUS);
    base.saturating_add(bonus)
}

/// Count query characters matched in order by a single greedy pass over `text`.
///
/// A query character is consumed only when it matches the current text
/// character; the text cursor always advances. No backtracking, so this can
/// undercount compared to a true longest common subsequence.
pub fn greedy_subsequence_len(query: &str, text: &str) -> usize {
    let mut query_chars = query.chars().peekable();
    let mut matched = 0;

    for tc in text.chars() {
        match query_chars.peek() {
            Some(&qc) if qc == tc => {
                matched += 1;
                query_chars.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    matched
}

/// Length in characters of the longest substring of `text` found anywhere in `pattern`.
///
/// Asymmetric on purpose: the candidates come from `text`, containment is
/// checked against `pattern`. Quadratic in `text` length, fine for names and
/// formulas.
pub fn longest_run_in(text: &str, pattern: &str) -> usize {
    let bounds = char_boundaries(text);
    let char_count = bounds.len() - 1;
    let mut longest = 0;

    for start in 0..char_count {
        // No run starting here can beat the current best.
        if char_count - start <= longest {
            break;
        }
        for end in (start + 1)..=char_count {
            if !pattern.contains(&text[bounds[start]..bounds[end]]) {
                // Extending a non-occurring run never makes it occur.
                break;
            }
            longest = longest.max(end - start);
        }
    }

    longest
}
