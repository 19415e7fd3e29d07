//! Scenario harness for the attribute model.
//!
//! Runs a fixed battery of boundary and exception scenarios plus two
//! consistency checks against `attr-core`, classifies each outcome as
//! pass/fail/error, and writes the records to a [`ReportSink`]. Progress is
//! emitted as `tracing` events; the caller decides where they go.

pub mod config;
pub mod report;
pub mod scenario;
pub mod validator;

pub use config::{DEFAULT_TOLERANCE, ValidatorConfig};
pub use report::{
    CsvReportSink, REPORT_HEADERS, ReportError, ReportSink, ScenarioRecord, ScenarioStatus,
};
pub use scenario::Scenario;
pub use validator::{
    ConsistencyOutcome, EXPECT_ERROR, EXPECT_REASONABLE, RunSummary, ValidationRun, Validator,
    unreasonable,
};
