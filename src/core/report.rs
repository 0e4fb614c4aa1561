use crate::core::Pipeline;
use crate::utils::error::Result;

/// How a run ended. `NoData` and `NoEndpoints` are normal end states, not
/// errors: runs with nothing to report still exit zero.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// No records could be read from any of the requested files.
    NoData,
    /// Records were read, but none carried both a url and a response time.
    NoEndpoints,
    /// The rendered table.
    Rendered(String),
}

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ReportOutcome> {
        tracing::info!("Collecting log records");
        let records = self.pipeline.collect()?;
        tracing::info!(count = records.len(), "Log records collected");

        if records.is_empty() {
            return Ok(ReportOutcome::NoData);
        }

        tracing::info!("Aggregating per-endpoint statistics");
        let rows = self.pipeline.aggregate(records)?;
        tracing::info!(endpoints = rows.len(), "Aggregation complete");

        if rows.is_empty() {
            return Ok(ReportOutcome::NoEndpoints);
        }

        let table = self.pipeline.render(&rows)?;
        Ok(ReportOutcome::Rendered(table))
    }
}
