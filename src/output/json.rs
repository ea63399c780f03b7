// JSON summary export.
//
// Writes the per-source E′ / ρ′ summaries so results can be compared across
// runs without re-reading the charts.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::aggregate::SourceSummary;
use crate::sources::MODEL_COLUMNS;

/// Everything written to the summary file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// RFC 3339 timestamp of the run
    pub generated_at: String,
    /// Model columns the dispersion was computed over
    pub models: Vec<String>,
    pub sources: Vec<SourceSummary>,
}

impl SummaryReport {
    pub fn new(sources: Vec<SourceSummary>) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            models: MODEL_COLUMNS.iter().map(|m| m.to_string()).collect(),
            sources,
        }
    }
}

/// Serialize the report as pretty JSON to `path`.
pub fn write_summary(path: &Path, report: &SummaryReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary: {}", path.display()))?;
    Ok(())
}
