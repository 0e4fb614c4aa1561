use crate::domain::model::{LogRecord, ReportRow};
use crate::utils::error::Result;

pub trait Storage {
    fn read_to_string(&self, path: &str) -> Result<String>;
}

pub trait ConfigProvider {
    fn log_files(&self) -> &[String];
}

/// The three stages of a report run: gather records from the configured
/// sources, reduce them to report rows, and render the rows for display.
pub trait Pipeline {
    fn collect(&self) -> Result<Vec<LogRecord>>;
    fn aggregate(&self, records: Vec<LogRecord>) -> Result<Vec<ReportRow>>;
    fn render(&self, rows: &[ReportRow]) -> Result<String>;
}
