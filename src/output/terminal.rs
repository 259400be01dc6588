// Colored terminal output for match results and the database listing.

use std::io::{self, Write};

use colored::Colorize;

use crate::db::models::{Database, MatchResult};
use crate::error::QueryError;

/// Display ranked matches, or a notice when nothing qualified.
pub fn display_matches(matches: &[MatchResult]) {
    if matches.is_empty() {
        println!("{}", "No strong matches found.".yellow());
        return;
    }

    println!("\n{}", "=== Possible matches ===".bold());
    println!();

    for (i, m) in matches.iter().enumerate() {
        println!(
            "  {:>3}. {:<32} {}",
            i + 1,
            m.category.bold(),
            format!("(matched {})", super::pluralize_symptoms(m.count)).dimmed(),
        );
    }
    println!();
}

/// Display every illness in the database with its symptoms.
pub fn display_database(db: &Database) {
    println!(
        "\n{}",
        format!("=== Illness database ({} illnesses) ===", db.len()).bold()
    );
    println!();

    for record in db {
        println!("  {}", record.category().bold());
        println!("      Symptoms: {}", record.tags().join(", ").dimmed());
    }
    println!();
}

/// Tell the user why their symptom list was rejected.
///
/// Goes to stderr so stdout carries only results (and stays valid JSON
/// under `--json`).
pub fn display_query_error(err: &QueryError) {
    // Nothing useful to do if stderr itself is gone
    let _ = write_query_error(&mut io::stderr().lock(), err);
}

/// Write the rejection message for `err` to `out`.
pub fn write_query_error<W: Write>(out: &mut W, err: &QueryError) -> io::Result<()> {
    match err {
        QueryError::TooFewSymptoms { required, .. } => writeln!(
            out,
            "{} Please enter at least {} symptoms.",
            "Error:".red().bold(),
            required
        ),
    }
}
