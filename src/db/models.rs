// Data models — the in-memory illness database and match results.
//
// These types are shared by the loader, the matcher, and the output layer.
// None of them are written back to storage.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::matching::normalize::normalize_tag;

/// One illness and the symptoms associated with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    category: String,
    /// Normalized symptoms, in the order they appeared in the source
    tags: Vec<String>,
}

impl Record {
    /// Build a record, normalizing every tag. Tags that are blank after
    /// normalization are dropped.
    pub fn new<I, S>(category: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            category: category.into(),
            tags: tags
                .into_iter()
                .map(|t| normalize_tag(t.as_ref()))
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The record's tags as a set, so duplicates count once.
    pub fn tag_set(&self) -> HashSet<&str> {
        self.tags.iter().map(String::as_str).collect()
    }
}

/// Illness name -> symptom list, iterated in first-insertion order.
///
/// Built once (usually by `db::loader::load`) and then only read. Matching
/// takes it by shared reference, so one instance can serve any number of
/// lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. If the category already exists, its tags are replaced
    /// in place (last write wins) and `true` is returned.
    pub fn insert(&mut self, record: Record) -> bool {
        match self.index.get(&record.category) {
            Some(&pos) => {
                self.records[pos] = record;
                true
            }
            None => {
                self.index.insert(record.category.clone(), self.records.len());
                self.records.push(record);
                false
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.index
            .get(category)
            .map(|&pos| self.records[pos].tags.as_slice())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.category.as_str())
    }
}

impl FromIterator<Record> for Database {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut db = Database::new();
        for record in iter {
            db.insert(record);
        }
        db
    }
}

impl<'a> IntoIterator for &'a Database {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An illness that shared enough symptoms with a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub category: String,
    /// Number of distinct query symptoms found in the illness's symptom list
    pub count: usize,
}

impl MatchResult {
    pub fn new(category: impl Into<String>, count: usize) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}
