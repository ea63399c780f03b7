// Plot rendering — trajectory, margin energy bar chart, phase diagram.
//
// Each chart is drawn once per run into its own file. Drawing code is generic
// over the plotters backend so the same chart can be written as PNG or SVG.

pub mod energy;
pub mod phase;
pub mod trajectory;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use plotters::style::{FontDesc, FontFamily, FontStyle};

/// Output file stem of the dispersion trajectory chart.
pub const TRAJECTORY_STEM: &str = "dispersion_trajectory_TRUE_4poems";
/// Output file stem of the margin energy bar chart.
pub const ENERGY_STEM: &str = "poetic_margin_energy_TRUE_4poems";
/// Output file stem of the centered phase diagram.
pub const PHASE_STEM: &str = "poetic_phase_diagram_centered_TRUE_4poems";

/// Caption font used by every chart.
pub(crate) const CAPTION_FONT: (&str, u32) = ("sans-serif", 20);

/// Image encoding for the rendered charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            other => anyhow::bail!("Unknown image format '{other}' (expected png or svg)"),
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Where the three charts of one run are written.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPaths {
    pub trajectory: PathBuf,
    pub energy: PathBuf,
    pub phase: PathBuf,
}

impl PlotPaths {
    pub fn in_dir(out_dir: &Path, format: ImageFormat) -> Self {
        let file = |stem: &str| out_dir.join(format!("{stem}.{}", format.extension()));
        Self {
            trajectory: file(TRAJECTORY_STEM),
            energy: file(ENERGY_STEM),
            phase: file(PHASE_STEM),
        }
    }

    /// All three paths, in the order the charts are rendered.
    pub fn all(&self) -> [&Path; 3] {
        [&self.trajectory, &self.energy, &self.phase]
    }
}

/// Whether plotters can load a sans-serif font for text layout.
///
/// Chart captions and labels need one; rendering fails without it.
pub fn fonts_available() -> bool {
    FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal)
        .box_size("E")
        .is_ok()
}

/// Padded axis range covering `values` and the origin.
pub(crate) fn range_with_origin(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.1 } else { 1.0 };
    (lo - pad, hi + pad)
}
