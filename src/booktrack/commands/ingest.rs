use crate::errlog::{ErrorLog, LogCategory, LogEntry};
use crate::error::{CatalogError, Result};
use crate::metrics::SessionMetrics;
use crate::store::backend::CatalogBackend;
use crate::store::{decode_lines, CatalogStore, RejectedLine};
use crate::validate::validate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct IngestSummary {
    pub source: PathBuf,
    /// Lines validated and added to the store.
    pub accepted: usize,
    pub rejected: Vec<RejectedLine>,
    /// Valid lines the store refused (write failure or duplicate policy).
    pub failed_adds: usize,
}

/// Read `path` and add every valid line to the store, one add per record.
///
/// Per-line problems are counted and logged but do not stop the file; only
/// failing to read the file at all is returned as an error.
pub fn run<B: CatalogBackend>(
    store: &CatalogStore<B>,
    metrics: &SessionMetrics,
    log: &ErrorLog,
    path: &Path,
) -> Result<IngestSummary> {
    let bytes = fs::read(path).map_err(CatalogError::Io)?;
    let mut summary = IngestSummary {
        source: path.to_path_buf(),
        ..IngestSummary::default()
    };

    for (idx, line) in decode_lines(path, &bytes).iter().enumerate() {
        match validate(line) {
            Ok(book) => match store.add(book) {
                Ok(_) => {
                    metrics.record_valid(1);
                    summary.accepted += 1;
                }
                Err(e) => {
                    metrics.record_error();
                    write_entry(log, &LogEntry::new(LogCategory::InvalidLine, line, &e));
                    summary.failed_adds += 1;
                }
            },
            Err(error) => {
                debug!(file = %path.display(), line = idx + 1, error = %error, "rejected line");
                metrics.record_error();
                write_entry(log, &LogEntry::invalid_line(line, &error));
                summary.rejected.push(RejectedLine {
                    line_number: idx + 1,
                    raw: line.clone(),
                    error,
                });
            }
        }
    }

    Ok(summary)
}

/// Best effort: a log that cannot be written must not fail the caller.
pub(crate) fn write_entry(log: &ErrorLog, entry: &LogEntry) {
    if let Err(e) = log.append(entry) {
        warn!(path = %log.path().display(), error = %e, "could not append to error log");
    }
}
