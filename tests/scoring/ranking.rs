//! Ordering of candidate lists.

use super::common::BUILTIN;
use periodica::{best_score, rank, RankOptions, Ranked, SortMode};

fn names<T: AsRef<str> + ?Sized>(ranked: &[Ranked<'_, T>]) -> Vec<String> {
    ranked.iter().map(|r| r.item.as_ref().to_string()).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ============================================================================
// SCORE ORDER
// ============================================================================

#[test]
fn test_higher_score_first() {
    let items = strings(&["Methane", "Ethanol", "Ethane"]);
    let ranked = rank("eth", &items, &RankOptions::default());
    assert_eq!(names(&ranked), vec!["Ethane", "Ethanol", "Methane"]);
    let scores: Vec<u32> = ranked.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![897, 896, 696]);
}

#[test]
fn test_ties_keep_input_order() {
    let items = strings(&["Xenon", "Argon", "Neon"]);
    let ranked = rank("on", &items, &RankOptions::by_score());
    // Neon 698, then Xenon and Argon tied at 697 in input order
    assert_eq!(names(&ranked), vec!["Neon", "Xenon", "Argon"]);

    let items = strings(&["Argon", "Xenon", "Neon"]);
    let ranked = rank("on", &items, &RankOptions::by_score());
    assert_eq!(names(&ranked), vec!["Neon", "Argon", "Xenon"]);
}

#[test]
fn test_query_is_trimmed() {
    let items = strings(&["Methane", "Ethanol", "Ethane"]);
    let padded = rank("  eth\t", &items, &RankOptions::default());
    let plain = rank("eth", &items, &RankOptions::default());
    assert_eq!(padded, plain);
}

#[test]
fn test_sort_mode_does_not_matter_with_a_query() {
    let items = strings(&["zinc", "Zirconium", "Argon"]);
    let az = rank("zi", &items, &RankOptions::default());
    let score = rank("zi", &items, &RankOptions::by_score());
    assert_eq!(az, score);
    assert_eq!(az[0].item, "zinc");
}

// ============================================================================
// EMPTY QUERY
// ============================================================================

#[test]
fn test_empty_query_alphabetical_ignores_case() {
    let items = strings(&["zinc", "Argon", "boron"]);
    let ranked = rank("", &items, &RankOptions::default());
    assert_eq!(names(&ranked), vec!["Argon", "boron", "zinc"]);
    assert!(ranked.iter().all(|r| r.score == 0));
}

#[test]
fn test_empty_query_score_mode_keeps_input_order() {
    let items = strings(&["zinc", "Argon", "boron"]);
    let ranked = rank("   ", &items, &RankOptions::by_score());
    assert_eq!(names(&ranked), vec!["zinc", "Argon", "boron"]);
}

#[test]
fn test_empty_query_keeps_everything_even_with_only_matches() {
    let items = strings(&["zinc", "Argon"]);
    let ranked = rank("", &items, &RankOptions::default().only_matches());
    assert_eq!(ranked.len(), 2);
}

// ============================================================================
// FILTERING AND LIMITS
// ============================================================================

#[test]
fn test_only_matches_drops_zero_scores() {
    let items = strings(&["Sulfur", "Zinc oxide", "Gold"]);
    let all = rank("zinc", &items, &RankOptions::by_score());
    assert_eq!(all.len(), 3);

    let hits = rank("zinc", &items, &RankOptions::by_score().only_matches());
    assert_eq!(names(&hits), vec!["Zinc oxide"]);
}

#[test]
fn test_limit_applies_after_sorting() {
    let items = strings(&["Methane", "Ethanol", "Ethane"]);
    let ranked = rank("eth", &items, &RankOptions::default().limit(1));
    assert_eq!(names(&ranked), vec!["Ethane"]);

    let none = rank("eth", &items, &RankOptions::default().limit(0));
    assert!(none.is_empty());
}

#[test]
fn test_empty_candidate_list() {
    let items: Vec<String> = Vec::new();
    assert!(rank("water", &items, &RankOptions::default()).is_empty());
}

// ============================================================================
// SORT MODE PARSING
// ============================================================================

#[test]
fn test_sort_mode_names() {
    assert_eq!("az".parse::<SortMode>().unwrap(), SortMode::Alphabetical);
    assert_eq!("A-Z".parse::<SortMode>().unwrap(), SortMode::Alphabetical);
    assert_eq!(" Score ".parse::<SortMode>().unwrap(), SortMode::Score);
    assert_eq!("relevance".parse::<SortMode>().unwrap(), SortMode::Score);
}

#[test]
fn test_unknown_sort_mode_names_the_input() {
    let err = "shuffle".parse::<SortMode>().unwrap_err();
    assert!(err.to_string().contains("shuffle"), "{}", err);
}

// ============================================================================
// BUILT-IN CATALOG
// ============================================================================

#[test]
fn test_molecule_scores_best_field() {
    let water = BUILTIN.get("h2o").unwrap();
    // name "Water" misses, id "h2o" is exact
    assert_eq!(best_score("h2o", water), 1000);
    assert_eq!(best_score("wat", water), 898);
}

#[test]
fn test_catalog_search_ranks_by_best_field() {
    let hits = BUILTIN.search("h2o", &RankOptions::by_score());
    assert_eq!(hits.len(), BUILTIN.len());
    assert_eq!(hits[0].item.name, "Water");
    assert_eq!(hits[0].score, 1000);
    assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_catalog_prefix_search() {
    let hits = BUILTIN.search("benz", &RankOptions::by_score().only_matches().limit(5));
    assert_eq!(hits[0].item.id, "benzene");
    assert_eq!(hits[0].score, 897);
    assert!(hits.len() <= 5);
}

#[test]
fn test_catalog_listing_is_alphabetical() {
    let listed = BUILTIN.search("", &RankOptions::default());
    let keys: Vec<String> = listed.iter().map(|r| r.item.name.to_lowercase()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
