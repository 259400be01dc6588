use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::matching::DEFAULT_MIN_MATCHES;
use crate::query::DEFAULT_MIN_SYMPTOMS;

/// Where the illness database lives when TRIAGE_DB_PATH is unset.
pub const DEFAULT_DB_PATH: &str = "./data/illness_database.csv";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags take precedence over anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to the illness CSV (TRIAGE_DB_PATH)
    pub db_path: PathBuf,
    /// Shared symptoms required for an illness to be reported (TRIAGE_MIN_MATCHES)
    pub min_matches: usize,
    /// Symptoms the user must enter before matching runs (TRIAGE_MIN_SYMPTOMS)
    pub min_symptoms: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            min_matches: DEFAULT_MIN_MATCHES,
            min_symptoms: DEFAULT_MIN_SYMPTOMS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            db_path: lookup("TRIAGE_DB_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            min_matches: parse_count(&lookup, "TRIAGE_MIN_MATCHES")?
                .unwrap_or(defaults.min_matches),
            min_symptoms: parse_count(&lookup, "TRIAGE_MIN_SYMPTOMS")?
                .unwrap_or(defaults.min_symptoms),
        })
    }

    /// Check that the database file exists before trying to load it.
    pub fn require_database(&self) -> Result<()> {
        if !Path::new(&self.db_path).is_file() {
            anyhow::bail!(
                "Illness database not found at {}\n\
                 Set TRIAGE_DB_PATH in your .env file or pass --db <PATH>.\n\
                 See .env.example for the available variables.",
                self.db_path.display()
            );
        }
        Ok(())
    }
}

fn parse_count<F>(lookup: &F, key: &str) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .with_context(|| format!("{key} must be a non-negative integer, got {raw:?}")),
        _ => Ok(None),
    }
}
