//! Scenario records and the sinks they are written to.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

/// Column headers of the tabular report, in order.
pub const REPORT_HEADERS: [&str; 6] = [
    "description",
    "input",
    "expected behavior",
    "actual behavior",
    "status",
    "failure/error detail",
];

/// Classification of one scenario or check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum::Display, strum::AsRefStr)]
pub enum ScenarioStatus {
    /// Calculated and reasonable.
    Pass,
    /// Calculated, but the result violates the reasonableness predicate.
    Fail,
    /// Construction or coercion raised an error before calculation.
    Error,
}

/// One report row.
///
/// `actual` is empty and `detail` carries the error message when the status
/// is [`ScenarioStatus::Error`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioRecord {
    pub description: String,
    pub input: String,
    #[serde(rename = "expected behavior")]
    pub expected: String,
    #[serde(rename = "actual behavior")]
    pub actual: String,
    pub status: ScenarioStatus,
    #[serde(rename = "failure/error detail")]
    pub detail: String,
}

/// Errors raised while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("report CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Destination for scenario records.
pub trait ReportSink {
    /// Write every record, in order.
    fn write_records(&mut self, records: &[ScenarioRecord]) -> Result<(), ReportError>;
}

/// In-memory sink.
impl ReportSink for Vec<ScenarioRecord> {
    fn write_records(&mut self, records: &[ScenarioRecord]) -> Result<(), ReportError> {
        self.extend_from_slice(records);
        Ok(())
    }
}

/// CSV report: one header row, then one row per record.
pub struct CsvReportSink<W: io::Write> {
    writer: csv::Writer<W>,
}

impl CsvReportSink<File> {
    /// Create (or truncate) a report file.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path)?;
        Ok(Self::from_writer(file))
    }
}

impl<W: io::Write> CsvReportSink<W> {
    pub fn from_writer(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        Self { writer }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, ReportError> {
        self.writer
            .into_inner()
            .map_err(|e| ReportError::Io(e.into_error()))
    }
}

impl<W: io::Write> ReportSink for CsvReportSink<W> {
    fn write_records(&mut self, records: &[ScenarioRecord]) -> Result<(), ReportError> {
        // Written explicitly so an empty run still gets a header row
        self.writer.write_record(REPORT_HEADERS)?;
        for record in records {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
