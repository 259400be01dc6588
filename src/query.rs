// Parsing and validating the symptom list a user types in.

use crate::error::QueryError;

/// Fewest symptoms the interactive prompt will accept.
pub const DEFAULT_MIN_SYMPTOMS: usize = 3;

/// Split a comma-separated line into symptoms, dropping blank entries.
///
/// Case is left alone — the matcher normalizes.
pub fn parse_symptom_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reject symptom lists that are too short to match meaningfully.
pub fn validate_symptoms(symptoms: &[String], min_required: usize) -> Result<(), QueryError> {
    if symptoms.len() < min_required {
        return Err(QueryError::TooFewSymptoms {
            given: symptoms.len(),
            required: min_required,
        });
    }
    Ok(())
}

/// Parse and validate in one step.
pub fn read_symptoms(input: &str, min_required: usize) -> Result<Vec<String>, QueryError> {
    let symptoms = parse_symptom_list(input);
    validate_symptoms(&symptoms, min_required)?;
    Ok(symptoms)
}
