use crate::core::{ConfigProvider, LogRecord, Pipeline, ReportRow, Storage};
use crate::utils::error::Result;
use crate::utils::table::{render_grid, Align};
use std::collections::{BTreeMap, HashMap};

pub const REPORT_HEADERS: [&str; 3] = ["Endpoint", "Request Count", "Avg Response Time (ms)"];

pub struct AverageReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AverageReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Decodes one file's worth of newline-delimited JSON. Blank lines are
    /// skipped; the first undecodable line invalidates the whole file, so a
    /// partially-bad file contributes nothing.
    fn decode_file(&self, path: &str, contents: &str) -> Option<Vec<LogRecord>> {
        let mut records = Vec::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<HashMap<String, serde_json::Value>>(line) {
                Ok(data) => records.push(LogRecord { data }),
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Invalid JSON line, dropping file");
                    println!("⚠️ Invalid JSON in file: {}", path);
                    return None;
                }
            }
        }
        Some(records)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for AverageReportPipeline<S, C> {
    fn collect(&self) -> Result<Vec<LogRecord>> {
        let mut records = Vec::new();

        for path in self.config.log_files() {
            let contents = match self.storage.read_to_string(path) {
                Ok(contents) => contents,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Could not open log file");
                    println!("⚠️ File not found: {}", path);
                    continue;
                }
            };

            if let Some(file_records) = self.decode_file(path, &contents) {
                tracing::debug!(path = %path, count = file_records.len(), "File decoded");
                records.extend(file_records);
            }
        }

        Ok(records)
    }

    fn aggregate(&self, records: Vec<LogRecord>) -> Result<Vec<ReportRow>> {
        // (count, total_time) per endpoint; the BTreeMap keeps endpoints in
        // ascending lexicographic order.
        let mut stats: BTreeMap<String, (u64, f64)> = BTreeMap::new();

        for record in &records {
            let endpoint = match record.endpoint() {
                Some(endpoint) => endpoint,
                None => continue,
            };
            let response_time = match record.response_time() {
                Some(time) => time,
                None => continue,
            };

            let entry = stats.entry(endpoint.to_string()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += response_time;
        }

        let rows = stats
            .into_iter()
            .map(|(endpoint, (count, total_time))| ReportRow {
                endpoint,
                request_count: count,
                // Every accumulated entry has at least one contributor.
                average_response_time: round3(total_time / count as f64),
            })
            .collect();

        Ok(rows)
    }

    fn render(&self, rows: &[ReportRow]) -> Result<String> {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.endpoint.clone(),
                    row.request_count.to_string(),
                    format_float(row.average_response_time),
                ]
            })
            .collect();

        Ok(render_grid(
            &REPORT_HEADERS,
            &cells,
            &[Align::Left, Align::Center, Align::Center],
        ))
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Minimal float rendering: `0.2`, not `0.200`.
fn format_float(value: f64) -> String {
    format!("{}", value)
}
