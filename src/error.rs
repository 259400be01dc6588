// Error types surfaced by the library.
//
// Loading failures are fatal to the caller; query validation failures are
// meant to be shown to the user as guidance.

use std::path::PathBuf;

/// Failure to build a `Database` from a source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("illness database not found or unreadable: {path}", path = path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed illness database at line {line}: {reason}")]
    Format { line: u64, reason: String },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, LoadError::Format { .. })
    }
}

/// Rejection of a user-supplied symptom list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("please enter at least {required} symptoms (got {given})")]
    TooFewSymptoms { given: usize, required: usize },
}
