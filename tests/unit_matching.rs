// Unit tests for symptom matching.
//
// Covers the reference scenarios against a three-illness database, then the
// general properties every result set must satisfy: counts equal the true
// overlap, ordering, threshold filtering, and purity.

use std::collections::HashSet;

use triage::matching::normalize::normalize_tag;
use triage::matching::{find_matches, find_matches_default, DEFAULT_MIN_MATCHES};
use triage::{Database, MatchResult, Record};

fn sample_db() -> Database {
    [
        Record::new("Flu", ["fever", "body aches", "cough", "fatigue"]),
        Record::new("Common Cold", ["sore throat", "runny nose", "cough", "sneezing"]),
        Record::new("Allergies", ["sneezing", "runny nose", "itchy eyes"]),
    ]
    .into_iter()
    .collect()
}

fn true_overlap(query: &[&str], db: &Database, category: &str) -> usize {
    let q: HashSet<String> = query.iter().map(|s| normalize_tag(s)).collect();
    let tags: HashSet<&String> = db.get(category).unwrap().iter().collect();
    tags.iter().filter(|t| q.contains(t.as_str())).count()
}

// ============================================================
// Reference scenarios
// ============================================================

#[test]
fn mixed_case_query_matches_common_cold() {
    let db = sample_db();
    let results = find_matches(&["Cough", "RUNNY NOSE", "sore throat"], &db, 2);
    assert_eq!(results, vec![MatchResult::new("Common Cold", 3)]);
}

#[test]
fn tied_counts_both_returned() {
    let db = sample_db();
    let results = find_matches(&["sneezing", "runny nose"], &db, 2);

    let as_set: HashSet<(String, usize)> = results
        .iter()
        .map(|r| (r.category.clone(), r.count))
        .collect();
    let expected: HashSet<(String, usize)> = [
        ("Common Cold".to_string(), 2),
        ("Allergies".to_string(), 2),
    ]
    .into_iter()
    .collect();
    assert_eq!(as_set, expected);
}

#[test]
fn tied_counts_ordered_by_name() {
    let db = sample_db();
    let results = find_matches(&["sneezing", "runny nose"], &db, 2);
    assert_eq!(
        results,
        vec![
            MatchResult::new("Allergies", 2),
            MatchResult::new("Common Cold", 2),
        ]
    );
}

#[test]
fn single_overlap_below_threshold_is_empty() {
    let db = sample_db();
    assert!(find_matches(&["cough", "headache"], &db, 2).is_empty());
}

#[test]
fn empty_query_with_threshold_one_is_empty() {
    let db = sample_db();
    assert!(find_matches::<&str>(&[], &db, 1).is_empty());
}

// ============================================================
// Thresholds and defaults
// ============================================================

#[test]
fn default_threshold_is_two() {
    let db = sample_db();
    assert_eq!(DEFAULT_MIN_MATCHES, 2);
    assert_eq!(
        find_matches_default(&["cough", "fever"], &db),
        find_matches(&["cough", "fever"], &db, 2)
    );
}

#[test]
fn threshold_zero_admits_every_illness() {
    let db = sample_db();
    let results = find_matches(&["itchy eyes"], &db, 0);
    assert_eq!(results.len(), db.len());
    assert_eq!(results[0], MatchResult::new("Allergies", 1));
}

#[test]
fn threshold_above_any_overlap_is_empty() {
    let db = sample_db();
    assert!(find_matches(&["fever", "cough", "fatigue", "body aches"], &db, 5).is_empty());
}

#[test]
fn blank_query_entries_are_ignored() {
    let db = sample_db();
    let results = find_matches(&["", "   ", "itchy eyes"], &db, 1);
    assert_eq!(results, vec![MatchResult::new("Allergies", 1)]);
}

#[test]
fn empty_database_yields_no_matches() {
    let db = Database::new();
    assert!(find_matches(&["fever"], &db, 0).is_empty());
}

// ============================================================
// Properties over a spread of queries
// ============================================================

const QUERIES: &[&[&str]] = &[
    &["fever", "cough", "fatigue"],
    &["SNEEZING", "runny nose", "itchy eyes", "cough"],
    &["sore throat", "sore throat", "Sore Throat "],
    &["body aches", "itchy eyes"],
    &["cough"],
    &[],
];

#[test]
fn counts_equal_true_overlap_and_meet_threshold() {
    let db = sample_db();
    for &query in QUERIES {
        for threshold in 0..=4 {
            for r in find_matches(query, &db, threshold) {
                assert_eq!(r.count, true_overlap(query, &db, &r.category));
                assert!(r.count >= threshold);
            }
        }
    }
}

#[test]
fn results_sorted_by_count_descending() {
    let db = sample_db();
    for &query in QUERIES {
        let results = find_matches(query, &db, 0);
        assert!(
            results.windows(2).all(|w| w[0].count >= w[1].count),
            "Results out of order for {query:?}: {results:?}"
        );
    }
}

#[test]
fn results_only_name_known_illnesses() {
    let db = sample_db();
    for &query in QUERIES {
        for r in find_matches(query, &db, 0) {
            assert!(db.contains(&r.category), "Unknown illness {}", r.category);
        }
    }
}

#[test]
fn every_qualifying_illness_is_returned() {
    let db = sample_db();
    for &query in QUERIES {
        let results = find_matches(query, &db, 1);
        let expected = db
            .categories()
            .filter(|c| true_overlap(query, &db, c) >= 1)
            .count();
        assert_eq!(results.len(), expected);
    }
}

#[test]
fn matching_is_idempotent() {
    let db = sample_db();
    let before = db.clone();
    for &query in QUERIES {
        assert_eq!(find_matches(query, &db, 1), find_matches(query, &db, 1));
    }
    assert_eq!(db, before, "Matching must not mutate the database");
}

#[test]
fn owned_strings_are_accepted() {
    let db = sample_db();
    let query: Vec<String> = vec!["Fever".to_string(), "Fatigue".to_string()];
    assert_eq!(
        find_matches(&query, &db, 2),
        vec![MatchResult::new("Flu", 2)]
    );
}

// ============================================================
// Records are always stored normalized
// ============================================================

#[test]
fn padded_mixed_case_record_tags_still_match() {
    let db: Database = [Record::new("Flu", ["FEVER", " cough", "Body Aches  "])]
        .into_iter()
        .collect();
    assert_eq!(db.get("Flu").unwrap(), &["fever", "cough", "body aches"]);
    assert_eq!(
        find_matches(&["fever", "cough"], &db, 1),
        vec![MatchResult::new("Flu", 2)]
    );
}

// ============================================================
// Sharing a database across threads
// ============================================================

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn database_is_send_and_sync() {
    assert_send_sync::<Database>();
    assert_send_sync::<MatchResult>();
}

#[test]
fn concurrent_matchers_share_one_database() {
    let db = sample_db();
    let (cold, flu) = std::thread::scope(|s| {
        let cold = s.spawn(|| find_matches(&["sneezing", "sore throat", "cough"], &db, 2));
        let flu = s.spawn(|| find_matches(&["fever", "fatigue", "cough"], &db, 2));
        (cold.join().unwrap(), flu.join().unwrap())
    });
    assert_eq!(cold, vec![MatchResult::new("Common Cold", 3)]);
    assert_eq!(flu, vec![MatchResult::new("Flu", 3)]);
}
