// Illness database — CSV loading and the in-memory model.
//
// The database is read once from a flat file (TRIAGE_DB_PATH, defaulting to
// ./data/illness_database.csv) and never written back.

pub mod loader;
pub mod models;

pub use loader::{load, load_from_reader};
pub use models::{Database, MatchResult, Record};
