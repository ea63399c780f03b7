use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::plot::ImageFormat;
use crate::sources::{default_sources, Source};

/// Central configuration loaded from environment variables.
///
/// Every value has a default that reproduces the fixed layout: inputs read
/// from and images written to the working directory, as PNG. The .env file
/// is loaded automatically at startup via dotenvy; CLI flags override.
pub struct Config {
    /// Directory holding the source CSV files (DISPERSION_DATA_DIR)
    pub data_dir: PathBuf,
    /// Directory the plots are written to (DISPERSION_OUTPUT_DIR)
    pub output_dir: PathBuf,
    /// Image format for the plots (DISPERSION_FORMAT)
    pub format: ImageFormat,
    pub sources: Vec<Source>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let format = match env::var("DISPERSION_FORMAT") {
            Ok(raw) => raw.parse()?,
            Err(_) => ImageFormat::Png,
        };

        Ok(Self {
            data_dir: env::var("DISPERSION_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            output_dir: env::var("DISPERSION_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            format,
            sources: default_sources(),
        })
    }

    /// Configuration rooted at explicit directories, ignoring the environment.
    pub fn with_dirs(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
            format: ImageFormat::Png,
            sources: default_sources(),
        }
    }

    /// Check that every source CSV exists before doing any work.
    pub fn require_sources(&self) -> Result<()> {
        let missing: Vec<String> = self
            .sources
            .iter()
            .map(|s| s.path_in(&self.data_dir))
            .filter(|p| !p.exists())
            .map(|p| p.display().to_string())
            .collect();

        if !missing.is_empty() {
            anyhow::bail!(
                "Source CSV files not found:\n  {}\n\
                 Set DISPERSION_DATA_DIR or pass --data-dir to point at them.",
                missing.join("\n  ")
            );
        }
        Ok(())
    }
}
