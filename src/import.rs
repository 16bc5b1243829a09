//! Bulk loading of newline-delimited JSON records.
//!
//! Every non-blank line goes through the same normalizer as a single HTTP
//! write. A bad line is recorded and skipped; only I/O failures abort the
//! import. Files ending in `.gz` are decompressed on the fly.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{CatalogError, Result};
use crate::Catalog;

/// A line that was not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the file.
    pub line: usize,
    pub message: String,
}

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub accepted: usize,
    pub rejected: Vec<RejectedLine>,
}

/// Import sets from an NDJSON (or `.ndjson.gz`) file.
pub fn import_sets<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<ImportReport> {
    import_lines(path.as_ref(), |raw| catalog.create_set(raw).map(drop))
}

/// Import cards from an NDJSON (or `.ndjson.gz`) file.
pub fn import_cards<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<ImportReport> {
    import_lines(path.as_ref(), |raw| catalog.create_card(raw).map(drop))
}

fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let is_gz = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);
    let reader: Box<dyn Read> = if is_gz {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(Box::new(BufReader::new(reader)))
}

fn import_lines<F>(path: &Path, mut store: F) -> Result<ImportReport>
where
    F: FnMut(&Value) -> Result<()>,
{
    let reader = open_reader(path)?;
    let mut report = ImportReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let outcome = serde_json::from_str::<Value>(&line)
            .map_err(CatalogError::from)
            .and_then(|raw| store(&raw));

        match outcome {
            Ok(()) => report.accepted += 1,
            Err(err @ (CatalogError::Validation(_) | CatalogError::Json(_))) => {
                warn!(line = line_no, error = %err, "rejected import line");
                report.rejected.push(RejectedLine {
                    line: line_no,
                    message: err.to_string(),
                });
            }
            Err(other) => return Err(other),
        }
    }

    info!(
        path = %path.display(),
        accepted = report.accepted,
        rejected = report.rejected.len(),
        "import finished"
    );
    Ok(report)
}
