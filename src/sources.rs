// Text sources and the embedding-model column schema.
//
// Every source CSV carries one row per line of text and one divergence
// column per embedding model. The column names are fixed; anything else in
// the file is ignored by the loader.

use std::path::{Path, PathBuf};

use plotters::style::RGBColor;

/// The four embedding-model columns, in the order they are read.
pub const MODEL_COLUMNS: [&str; 4] = [
    "OpenAI:text-embedding-3-small",
    "Ruri:cl-nagoya/ruri-v3-30m",
    "SBERT-en:all-MiniLM-L6-v2",
    "SBERT-multi:paraphrase-multilingual-MiniLM-L12-v2",
];

/// Number of model columns per row.
pub const MODEL_COUNT: usize = MODEL_COLUMNS.len();

/// One text source: where its data lives and how it is drawn.
#[derive(Debug, Clone)]
pub struct Source {
    /// Short name used in summaries and on the bar / phase charts
    pub name: String,
    /// CSV file name, resolved against the data directory
    pub file: String,
    /// Legend label on the trajectory chart
    pub label: String,
    pub color: RGBColor,
}

impl Source {
    pub fn new(name: &str, file: &str, label: &str, color: RGBColor) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
            label: label.to_string(),
            color,
        }
    }

    /// Full path of this source's CSV inside `data_dir`.
    pub fn path_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.file)
    }
}

/// The four poems, in plotting order.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new(
            "MugenEn",
            "MugenEn_4wavesData.csv",
            "MugenEn (Infinite Contact)",
            RGBColor(0x1f, 0x77, 0xb4),
        ),
        Source::new(
            "poem2",
            "poem2_4wavesData.csv",
            "poem2 (Alien/You/Experience)",
            RGBColor(0xff, 0x7f, 0x0e),
        ),
        Source::new(
            "poem3",
            "poem3_4wavesData.csv",
            "poem3",
            RGBColor(0x2c, 0xa0, 0x2c),
        ),
        Source::new(
            "poem4",
            "poem4_4wavesData.csv",
            "poem4 (Proof of Infinity)",
            RGBColor(0x94, 0x67, 0xbd),
        ),
    ]
}
