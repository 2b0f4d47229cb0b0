//! One test group per tier, plus the edges between tiers.

use periodica::scoring::{greedy_subsequence_len, longest_run_in};
use periodica::{classify_match, score_match, Match, MatchTier};

// ============================================================================
// EXACT
// ============================================================================

#[test]
fn test_exact_ignores_case() {
    assert_eq!(score_match("Water", "WATER"), 1000);
    assert_eq!(score_match("nacl", "NaCl"), 1000);
}

#[test]
fn test_exact_with_subscripts() {
    assert_eq!(score_match("h₂o", "H₂O"), 1000);
}

// ============================================================================
// PREFIX
// ============================================================================

#[test]
fn test_prefix_loses_one_point_per_extra_char() {
    assert_eq!(score_match("benz", "Benzene"), 897);
    assert_eq!(score_match("benz", "Benzaldehyde"), 892);
    assert_eq!(score_match("eth", "Ethanol"), 896);
}

#[test]
fn test_prefix_counts_chars_not_bytes() {
    // "h₂o₂" is 4 chars but 8 bytes
    assert_eq!(score_match("h₂", "H₂O₂"), 898);
}

#[test]
fn test_prefix_beats_substring_of_same_length() {
    assert!(score_match("sod", "Sodium") > score_match("diu", "Sodium"));
}

// ============================================================================
// SUBSTRING
// ============================================================================

#[test]
fn test_substring_scoring() {
    assert_eq!(score_match("chlor", "Sodium chloride"), 690);
    assert_eq!(score_match("oxide", "Carbon dioxide"), 691);
    assert_eq!(
        classify_match("oxide", "Carbon dioxide"),
        Some(Match {
            tier: MatchTier::Substring,
            score: 691
        })
    );
}

// ============================================================================
// SUBSEQUENCE
// ============================================================================

#[test]
fn test_subsequence_rewards_each_matched_char() {
    assert_eq!(score_match("bnz", "Benzene"), 330);
    assert_eq!(classify_match("bnz", "Benzene").unwrap().tier, MatchTier::Subsequence);
}

#[test]
fn test_subsequence_partial_match_still_counts() {
    // only "b" lines up in order before the text runs out
    assert_eq!(greedy_subsequence_len("ba", "ab"), 1);
    assert_eq!(score_match("ba", "ab"), 310);
}

#[test]
fn test_greedy_pass_never_skips_a_query_char() {
    // "x" never appears, so nothing after it is ever tried
    assert_eq!(greedy_subsequence_len("xab", "ab"), 0);
}

// ============================================================================
// FUZZY
// ============================================================================

#[test]
fn test_fuzzy_when_subsequence_finds_nothing() {
    assert_eq!(score_match("xa", "a"), 210);
    assert_eq!(
        classify_match("xab", "ab"),
        Some(Match {
            tier: MatchTier::Fuzzy,
            score: 220
        })
    );
}

#[test]
fn test_longest_run_is_asymmetric() {
    assert_eq!(longest_run_in("ethanol", "methane"), 5);
    assert_eq!(longest_run_in("methane", "ethanol"), 5);
    assert_eq!(longest_run_in("ab", "xab"), 2);
    assert_eq!(longest_run_in("xab", "ab"), 2);
    assert_eq!(longest_run_in("", "anything"), 0);
}

// ============================================================================
// NO MATCH
// ============================================================================

#[test]
fn test_unrelated_labels_score_zero() {
    assert_eq!(score_match("au", "gold"), 0);
    assert_eq!(classify_match("au", "gold"), None);
}

#[test]
fn test_no_shared_letters_scores_zero() {
    // "sodium" has neither "n" nor "a"
    assert_eq!(score_match("na", "sodium"), 0);
}

#[test]
fn test_empty_inputs() {
    assert_eq!(score_match("", "Water"), 0);
    assert_eq!(score_match("water", ""), 0);
    assert_eq!(classify_match("", ""), None);
}

// ============================================================================
// SATURATION AND TIER OVERLAP
// ============================================================================

#[test]
fn test_huge_label_saturates_at_zero() {
    let label = format!("a{}", "b".repeat(2000));
    assert_eq!(score_match("a", &label), 0);
    assert_eq!(
        classify_match("a", &label),
        Some(Match {
            tier: MatchTier::Prefix,
            score: 0
        })
    );
}

#[test]
fn test_tiers_can_overlap_numerically() {
    let long_query = "abcdefghijklmnopqrstuvwxyzabcdefghijklmnopqrstuvwxyz";
    let spaced: String = long_query.chars().flat_map(|c| [c, '-']).collect();
    let subsequence = score_match(long_query, &spaced);
    assert_eq!(subsequence, 300 + 10 * 52);

    let substring = score_match("z", &format!("{}z", "y".repeat(300)));
    assert!(subsequence > substring);
}

#[test]
fn test_tier_order_and_names() {
    assert!(MatchTier::Exact < MatchTier::Prefix);
    assert!(MatchTier::Subsequence < MatchTier::Fuzzy);
    assert_eq!(MatchTier::Substring.to_string(), "substring");
}
