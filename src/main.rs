use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use triage::config::Config;
use triage::db::Database;

/// Triage: match your symptoms against an illness database.
///
/// Illnesses that share enough symptoms with what you report are listed,
/// most matches first. This is a lookup aid, not a diagnosis.
#[derive(Parser)]
#[command(name = "triage", version, about)]
struct Cli {
    /// Illness database CSV (overrides TRIAGE_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match symptoms against the database
    Match {
        /// Comma-separated symptoms (prompted for when omitted)
        symptoms: Option<String>,

        /// Minimum shared symptoms for an illness to be listed
        #[arg(long)]
        min_matches: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List every illness in the database with its symptoms
    List,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they never interleave with results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("triage=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    match cli.command {
        Commands::Match {
            symptoms,
            min_matches,
            json,
        } => {
            let db = open_database(&config)?;
            let min_matches = min_matches.unwrap_or(config.min_matches);

            let input = match symptoms {
                Some(line) => line,
                None => prompt_symptoms(config.min_symptoms)?,
            };

            let symptoms = match triage::query::read_symptoms(&input, config.min_symptoms) {
                Ok(symptoms) => symptoms,
                Err(e) => {
                    debug!(error = %e, "Rejected symptom list");
                    triage::output::terminal::display_query_error(&e);
                    return Ok(());
                }
            };

            info!(symptoms = symptoms.len(), min_matches, "Matching symptoms");
            let results = triage::matching::find_matches(&symptoms, &db, min_matches);

            if json {
                println!("{}", triage::output::matches_to_json(&results)?);
            } else {
                triage::output::terminal::display_matches(&results);
            }
        }

        Commands::List => {
            let db = open_database(&config)?;
            triage::output::terminal::display_database(&db);
        }
    }

    Ok(())
}

/// Load the database named by the config, once per run.
fn open_database(config: &Config) -> Result<Database> {
    config.require_database()?;
    triage::db::load(&config.db_path).with_context(|| {
        format!(
            "Failed to load illness database from {}",
            config.db_path.display()
        )
    })
}

/// Ask for a comma-separated symptom list on stdin.
fn prompt_symptoms(min_symptoms: usize) -> Result<String> {
    print!("Enter at least {min_symptoms} symptoms (comma-separated): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read symptoms from stdin")?;
    Ok(line)
}
