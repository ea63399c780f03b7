// Centered poetic phase diagram: each source placed at (E′, ρ′).
//
// The axes always include the origin, with black reference lines through
// x = 0 and y = 0, so every source is read against the same center.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{range_with_origin, ImageFormat};

const SIZE: (u32, u32) = (700, 600);
const TITLE: &str = "Centered Poetic Phase Diagram — Poetic Polarity Space (4 Poems)";
const X_DESC: &str = "E′ (Normalized Poetic Margin Energy)";
const Y_DESC: &str = "ρ′ = 1 / E′ (Normalized Poetic Condensation Density)";
const MARKER_RADIUS: i32 = 8;

/// One point of the phase diagram.
pub struct PhasePoint<'a> {
    pub name: &'a str,
    pub color: RGBColor,
    pub e_prime: f64,
    pub rho_prime: f64,
}

impl PhasePoint<'_> {
    /// Where the name label is anchored, just right of and below the marker.
    pub fn label_anchor(&self) -> (f64, f64) {
        (self.e_prime * 1.01, self.rho_prime * 0.99)
    }
}

/// Render the phase diagram to `path`.
pub fn render(path: &Path, format: ImageFormat, points: &[PhasePoint]) -> Result<()> {
    let result = match format {
        ImageFormat::Png => draw(BitMapBackend::new(path, SIZE).into_drawing_area(), points),
        ImageFormat::Svg => draw(SVGBackend::new(path, SIZE).into_drawing_area(), points),
    };
    result.with_context(|| format!("Failed to render phase diagram: {}", path.display()))
}

fn draw<DB>(root: DrawingArea<DB, Shift>, points: &[PhasePoint]) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (x_min, x_max) = range_with_origin(points.iter().map(|p| p.e_prime));
    let (y_min, y_max) = range_with_origin(points.iter().map(|p| p.rho_prime));

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 16))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    let axis_style = BLACK.mix(0.7);
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x_min, 0.0), (x_max, 0.0)],
        axis_style,
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, y_min), (0.0, y_max)],
        axis_style,
    )))?;

    for p in points {
        chart.draw_series(std::iter::once(Circle::new(
            (p.e_prime, p.rho_prime),
            MARKER_RADIUS,
            p.color.mix(0.85).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            p.name.to_string(),
            p.label_anchor(),
            ("sans-serif", 14).into_font(),
        )))?;
    }

    root.present()?;
    Ok(())
}
