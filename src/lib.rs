pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::pipeline::AverageReportPipeline;
pub use crate::core::report::{ReportEngine, ReportOutcome};
pub use crate::domain::model::{LogRecord, ReportKind, ReportRow};
pub use crate::utils::error::{ReportError, Result};
