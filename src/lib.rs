// Triage: match reported symptoms against an illness database.
//
// This is the library root. The binary in main.rs is a thin layer over it:
// load the database once, read a symptom list, match, print.

pub mod config;
pub mod db;
pub mod error;
pub mod matching;
pub mod output;
pub mod query;

pub use db::models::{Database, MatchResult, Record};
pub use error::{LoadError, QueryError};
