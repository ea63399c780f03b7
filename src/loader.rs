// CSV loader — pulls the four embedding-model columns out of a source file.
//
// Columns are located by header name, so extra columns and column order don't
// matter. Cells that don't parse as numbers are treated as missing values
// rather than errors; only a missing column (or an unreadable file) fails.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::sources::{MODEL_COLUMNS, MODEL_COUNT};

/// One line of text: a value per model column, `None` where the cell was missing.
pub type ModelRow = [Option<f64>; MODEL_COUNT];

/// The numeric model columns of one source, stored row by row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelTable {
    pub rows: Vec<ModelRow>,
}

impl ModelTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of cells that could not be read as numbers.
    pub fn missing_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|v| v.is_none()).count())
            .sum()
    }
}

/// Coerce a raw CSV cell to a number.
///
/// Empty, unparsable and NaN cells become `None`. Infinities are kept.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Load the model columns from a CSV file on disk.
pub fn load_model_columns(path: &Path) -> Result<ModelTable> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let table = read_model_columns(reader)
        .with_context(|| format!("Failed to load model columns from {}", path.display()))?;

    debug!(
        path = %path.display(),
        rows = table.len(),
        missing = table.missing_cells(),
        "Loaded model columns"
    );
    Ok(table)
}

/// Load the model columns from any CSV reader (header row required).
pub fn read_model_columns<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<ModelTable> {
    let headers = reader.headers().context("Failed to read CSV header")?.clone();

    let mut indices = [0usize; MODEL_COUNT];
    for (slot, column) in indices.iter_mut().zip(MODEL_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| anyhow::anyhow!("Missing required column: {column}"))?;
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", idx + 1))?;
        let mut row: ModelRow = [None; MODEL_COUNT];
        for (value, &col) in row.iter_mut().zip(indices.iter()) {
            *value = record.get(col).and_then(coerce_numeric);
        }
        rows.push(row);
    }

    Ok(ModelTable { rows })
}
