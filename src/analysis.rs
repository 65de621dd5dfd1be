use std::fmt;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::query::VersionQuery;
use crate::types::UaRecord;

/// Aggregate counts from matching CSV records against a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub valid_rows: usize,
    pub skipped_rows: usize,
    pub matching_rows: usize,
}

impl Summary {
    pub fn total_rows(&self) -> usize {
        self.valid_rows + self.skipped_rows
    }

    /// Share of rows that were valid, in percent; `None` when there were no rows.
    pub fn valid_percent(&self) -> Option<f64> {
        percent(self.valid_rows, self.total_rows())
    }

    /// Share of valid rows matching the query, in percent; `None` when no row was valid.
    pub fn match_percent(&self) -> Option<f64> {
        percent(self.matching_rows, self.valid_rows)
    }
}

fn percent(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}

/// Report lines. A line whose percentage is undefined is left out.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(valid) = self.valid_percent() {
            writeln!(
                f,
                "{} rows, {} valid ({:.1}%), {} skipped",
                self.total_rows(),
                self.valid_rows,
                valid,
                self.skipped_rows
            )?;
        }
        if let Some(matching) = self.match_percent() {
            writeln!(f, "{:.2}% of rows match query", matching)?;
        }
        Ok(())
    }
}

/// Match every record of a CSV file against `query`.
pub fn analyze_file(path: impl AsRef<Path>, query: &VersionQuery) -> Result<Summary> {
    let file = std::fs::File::open(path)?;
    analyze(file, query)
}

/// Match every record read from `input` against `query`.
///
/// Records without an engine, with a non-numeric engine version or with the
/// wrong number of columns are counted as skipped.
pub fn analyze<R: Read>(input: R, query: &VersionQuery) -> Result<Summary> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut summary = Summary::default();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        match engine_of(&record) {
            Some((engine, version)) => {
                summary.valid_rows += 1;
                if query.matches(engine, version) {
                    summary.matching_rows += 1;
                }
            }
            None => {
                debug!(row = idx + 1, "skipping row");
                summary.skipped_rows += 1;
            }
        }
    }

    Ok(summary)
}

fn engine_of(record: &csv::StringRecord) -> Option<(&str, u32)> {
    if record.len() != UaRecord::COLUMNS {
        return None;
    }
    let engine = record.get(2).filter(|e| !e.is_empty())?;
    let version = record.get(3).filter(|v| !v.is_empty())?.parse().ok()?;
    Some((engine, version))
}
