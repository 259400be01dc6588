// CSV loader for the illness database.
//
// Expected layout: a header row with two columns (conventionally
// `illness,symptoms`), then one row per illness whose second field holds a
// `;`-separated symptom list. The whole file is parsed before anything is
// returned, so a malformed row never yields a partially filled database.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info, warn};

use super::models::{Database, Record};
use crate::error::LoadError;
use crate::matching::normalize::{split_tags, TAG_DELIMITER};

/// Number of columns every header and data row must have.
const FIELD_COUNT: usize = 2;

/// Load the illness database from a CSV file on disk.
pub fn load(path: impl AsRef<Path>) -> Result<Database, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let db = read_database(file, path)?;
    info!(path = %path.display(), illnesses = db.len(), "Loaded illness database");
    Ok(db)
}

/// Load the illness database from any reader (an in-memory buffer, stdin, ...).
pub fn load_from_reader<R: Read>(reader: R) -> Result<Database, LoadError> {
    read_database(reader, Path::new("<input>"))
}

fn read_database<R: Read>(reader: R, origin: &Path) -> Result<Database, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        // Field counts are checked per row so errors can name the line
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(|e| classify(e, origin))?;
    check_header(headers)?;
    debug!(columns = ?headers, "Parsed database header");

    let mut db = Database::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| classify(e, origin))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let record = parse_row(&row, line)?;

        let category = record.category().to_string();
        if db.insert(record) {
            warn!(illness = %category, line, "Duplicate illness; keeping the later row");
        }
    }

    Ok(db)
}

fn check_header(headers: &StringRecord) -> Result<(), LoadError> {
    if headers.is_empty() {
        return Err(LoadError::Format {
            line: 1,
            reason: "missing header row".to_string(),
        });
    }
    if headers.len() != FIELD_COUNT {
        return Err(LoadError::Format {
            line: 1,
            reason: format!(
                "header must name {FIELD_COUNT} columns, found {}",
                headers.len()
            ),
        });
    }
    if headers.iter().any(|h| h.trim().is_empty()) {
        return Err(LoadError::Format {
            line: 1,
            reason: "header has an empty column name".to_string(),
        });
    }
    Ok(())
}

fn parse_row(row: &StringRecord, line: u64) -> Result<Record, LoadError> {
    if row.len() != FIELD_COUNT {
        return Err(LoadError::Format {
            line,
            reason: format!("expected {FIELD_COUNT} fields, found {}", row.len()),
        });
    }

    let category = row[0].trim();
    if category.is_empty() {
        return Err(LoadError::Format {
            line,
            reason: "missing illness name".to_string(),
        });
    }

    let record = Record::new(category, split_tags(&row[1], TAG_DELIMITER));
    if record.tags().is_empty() {
        return Err(LoadError::Format {
            line,
            reason: format!("missing symptom list for {category}"),
        });
    }

    Ok(record)
}

/// Sort a csv error into the two load failure kinds. I/O trouble means the
/// source could not be read; anything else is a problem with its contents.
fn classify(err: csv::Error, origin: &Path) -> LoadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::NotFound {
            path: origin.to_path_buf(),
            source,
        },
        _ => LoadError::Format { line, reason },
    }
}
