// Symptom matching — normalization and overlap ranking.

pub mod matcher;
pub mod normalize;

pub use matcher::{find_matches, find_matches_default, DEFAULT_MIN_MATCHES};
