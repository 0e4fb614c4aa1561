use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One decoded log line. Records are untyped mappings; field access is an
/// optional lookup, never a schema check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub data: HashMap<String, serde_json::Value>,
}

impl LogRecord {
    /// The `url` field, when present as a non-empty string.
    pub fn endpoint(&self) -> Option<&str> {
        self.data
            .get("url")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }

    /// The `response_time` field, when present as a number. Absent keys and
    /// explicit `null` both come back as `None`.
    pub fn response_time(&self) -> Option<f64> {
        self.data.get("response_time").and_then(|v| v.as_f64())
    }
}

/// One line of the final report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub endpoint: String,
    pub request_count: u64,
    /// Mean of the contributing response times, rounded to 3 decimal places.
    pub average_response_time: f64,
}

/// Supported report types. `average` is the only one for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Average,
}
