// Symptom overlap matching.
//
// For every illness, count how many distinct query symptoms appear in its
// symptom list. Illnesses at or above the threshold are returned, most
// matches first. Ties are broken by illness name so output is stable across
// runs and database orderings.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use super::normalize::normalize_tag;
use crate::db::models::{Database, MatchResult};

/// Minimum shared symptoms for an illness to count as a match.
pub const DEFAULT_MIN_MATCHES: usize = 2;

/// Rank illnesses by how many of `query`'s symptoms they share.
///
/// Query entries are normalized and de-duplicated first; blank entries are
/// ignored. A `min_matches` of 0 admits every illness, including ones with
/// no overlap at all.
pub fn find_matches<S: AsRef<str>>(
    query: &[S],
    db: &Database,
    min_matches: usize,
) -> Vec<MatchResult> {
    let query_set = normalize_query(query);

    let mut matches: Vec<MatchResult> = db
        .iter()
        .filter_map(|record| {
            let count = overlap_count(&query_set, &record.tag_set());
            (count >= min_matches).then(|| MatchResult::new(record.category(), count))
        })
        .collect();

    matches.sort_by(rank_order);

    debug!(
        query_symptoms = query_set.len(),
        min_matches,
        matched = matches.len(),
        "Matched symptoms against database"
    );

    matches
}

/// `find_matches` with `DEFAULT_MIN_MATCHES`.
pub fn find_matches_default<S: AsRef<str>>(query: &[S], db: &Database) -> Vec<MatchResult> {
    find_matches(query, db, DEFAULT_MIN_MATCHES)
}

fn normalize_query<S: AsRef<str>>(query: &[S]) -> HashSet<String> {
    query
        .iter()
        .map(|s| normalize_tag(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

fn overlap_count(query: &HashSet<String>, tags: &HashSet<&str>) -> usize {
    tags.iter().filter(|tag| query.contains(**tag)).count()
}

/// Count descending, then illness name ascending.
fn rank_order(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.category.cmp(&b.category))
}
