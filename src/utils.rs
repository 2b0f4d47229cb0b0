// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Fold a string for case-insensitive comparison.
///
/// Plain Unicode lowercasing, nothing else. Whitespace and diacritics are
/// left alone so that lengths in the scoring formulas mean what the user typed.
#[inline]
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Length in characters, not bytes.
///
/// Score penalties are per character, so "CO₂" is 3 long, not 5.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Trim a raw search box value down to the query that gets scored.
#[inline]
pub fn normalize_query(value: &str) -> &str {
    value.trim()
}

/// Byte offsets of every character boundary, including the end of the string.
///
/// `boundaries[i]..boundaries[j]` is always a valid slice for `i <= j`.
pub fn char_boundaries(value: &str) -> Vec<usize> {
    value
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(value.len()))
        .collect()
}
