pub mod cli;

use crate::domain::model::ReportKind;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "log-report")]
#[command(about = "Process log files and generate per-endpoint reports")]
pub struct CliConfig {
    /// Paths to log files (newline-delimited JSON)
    #[arg(long = "file", required = true, num_args = 1.., value_name = "PATH")]
    pub files: Vec<String>,

    /// Type of report to generate (only "average" supported)
    #[arg(long, value_enum)]
    pub report: ReportKind,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn log_files(&self) -> &[String] {
        &self.files
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("file", &self.files)?;
        for file in &self.files {
            validate_path("file", file)?;
        }
        Ok(())
    }
}
