// Dispersion trajectory: σ_model(t) against line number, one line per source.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{ImageFormat, CAPTION_FONT};

const SIZE: (u32, u32) = (1000, 500);
const TITLE: &str = "Dispersion Trajectory — True Instantaneous σ_model(t)";
const X_DESC: &str = "Line Number (Poetic Progression)";
const Y_DESC: &str = "σ_model(t) — Instantaneous Semantic Dispersion";

/// One source's σ series as drawn on the trajectory chart.
pub struct TrajectorySeries<'a> {
    pub label: &'a str,
    pub color: RGBColor,
    pub sigma: &'a [Option<f64>],
}

/// Split a σ series into drawable runs of (line number, σ) points.
///
/// Line numbers start at 1. Missing or non-finite values end the current run,
/// so gaps in the data show up as breaks in the line.
pub fn trajectory_segments(sigma: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (i, value) in sigma.iter().enumerate() {
        match value {
            Some(v) if v.is_finite() => current.push(((i + 1) as f64, *v)),
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Render the trajectory chart to `path`.
pub fn render(path: &Path, format: ImageFormat, series: &[TrajectorySeries]) -> Result<()> {
    let result = match format {
        ImageFormat::Png => draw(BitMapBackend::new(path, SIZE).into_drawing_area(), series),
        ImageFormat::Svg => draw(SVGBackend::new(path, SIZE).into_drawing_area(), series),
    };
    result.with_context(|| format!("Failed to render trajectory chart: {}", path.display()))
}

fn draw<DB>(root: DrawingArea<DB, Shift>, series: &[TrajectorySeries]) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let max_line = series.iter().map(|s| s.sigma.len()).max().unwrap_or(0).max(2);
    let y_max = series
        .iter()
        .flat_map(|s| s.sigma.iter().flatten().copied())
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(1.0f64..max_line as f64, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    for s in series {
        let color = s.color.mix(0.9);
        let mut segments = trajectory_segments(s.sigma);
        if segments.is_empty() {
            // keep the legend entry for an all-missing source
            segments.push(Vec::new());
        }
        for (i, segment) in segments.into_iter().enumerate() {
            let drawn = chart.draw_series(LineSeries::new(segment, color.stroke_width(2)))?;
            if i == 0 {
                drawn
                    .label(s.label)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            }
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_number_lines_from_one() {
        let segs = trajectory_segments(&[Some(0.1), Some(0.2)]);
        assert_eq!(segs, vec![vec![(1.0, 0.1), (2.0, 0.2)]]);
    }

    #[test]
    fn missing_values_break_the_line() {
        let segs = trajectory_segments(&[Some(0.1), None, Some(0.3), Some(0.4), None]);
        assert_eq!(segs, vec![vec![(1.0, 0.1)], vec![(3.0, 0.3), (4.0, 0.4)]]);
    }

    #[test]
    fn all_missing_has_no_segments() {
        assert!(trajectory_segments(&[None, None]).is_empty());
    }
}
