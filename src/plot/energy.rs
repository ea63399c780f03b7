// Normalized poetic margin energy: one bar of E′ per source, value on top.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{ImageFormat, CAPTION_FONT};

const SIZE: (u32, u32) = (700, 400);
const TITLE: &str = "Normalized Poetic Margin Energy — Four Poems";
const Y_DESC: &str = "E′ — Mean Semantic Dispersion per Line";
/// Gap between a bar's top and its value label, in data units.
const VALUE_OFFSET: f64 = 0.002;

/// One bar of the energy chart.
pub struct EnergyBar<'a> {
    pub name: &'a str,
    pub color: RGBColor,
    pub e_prime: f64,
}

/// The text printed above a bar.
pub fn value_label(e_prime: f64) -> String {
    format!("{e_prime:.3}")
}

/// Render the bar chart to `path`.
pub fn render(path: &Path, format: ImageFormat, bars: &[EnergyBar]) -> Result<()> {
    if bars.is_empty() {
        anyhow::bail!("No sources to draw in the energy chart");
    }
    let result = match format {
        ImageFormat::Png => draw(BitMapBackend::new(path, SIZE).into_drawing_area(), bars),
        ImageFormat::Svg => draw(SVGBackend::new(path, SIZE).into_drawing_area(), bars),
    };
    result.with_context(|| format!("Failed to render energy chart: {}", path.display()))
}

fn draw<DB>(root: DrawingArea<DB, Shift>, bars: &[EnergyBar]) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let names: Vec<String> = bars.iter().map(|b| b.name.to_string()).collect();
    let colors: Vec<RGBColor> = bars.iter().map(|b| b.color).collect();
    let tallest = bars
        .iter()
        .map(|b| b.e_prime)
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);
    let y_top = if tallest > 0.0 {
        tallest * 1.15 + VALUE_OFFSET
    } else {
        1.0
    };

    // Integer coordinates are inclusive, so the last index is len - 1.
    let last = bars.len() - 1;
    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(70)
        .build_cartesian_2d((0usize..last).into_segmented(), 0.0f64..y_top)?;

    let name_of = |v: &SegmentValue<usize>| match v {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
            names.get(*i).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&name_of)
        .y_desc(Y_DESC)
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .margin(15)
            .style_func(move |x, _| match x {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => colors
                    .get(*i)
                    .map(|c| c.mix(0.8).filled())
                    .unwrap_or_else(|| TRANSPARENT.filled()),
                SegmentValue::Last => TRANSPARENT.filled(),
            })
            .data(bars.iter().enumerate().map(|(i, b)| (i, b.e_prime))),
    )?;

    let label_style = ("sans-serif", 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(bars.iter().enumerate().map(|(i, b)| {
        Text::new(
            value_label(b.e_prime),
            (SegmentValue::CenterOf(i), b.e_prime + VALUE_OFFSET),
            label_style.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_label_has_three_decimals() {
        assert_eq!(value_label(0.12345), "0.123");
        assert_eq!(value_label(1.0), "1.000");
    }
}
