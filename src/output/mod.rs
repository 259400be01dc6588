// Output formatting — terminal display and JSON rendering.

pub mod terminal;

use anyhow::Result;

use crate::db::models::MatchResult;

/// Render match results as a pretty-printed JSON array.
pub fn matches_to_json(matches: &[MatchResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(matches)?)
}

/// "1 symptom" / "3 symptoms".
pub fn pluralize_symptoms(count: usize) -> String {
    if count == 1 {
        "1 symptom".to_string()
    } else {
        format!("{count} symptoms")
    }
}
