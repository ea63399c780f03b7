// Analysis pipeline — load every source, compute σ and E′/ρ′, render charts.
//
// Sources are processed one after another in configuration order; that order
// is also the plotting and reporting order.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::aggregate::{summarize, SourceSummary};
use crate::config::Config;
use crate::dispersion::row_dispersion;
use crate::loader::load_model_columns;
use crate::plot::energy::EnergyBar;
use crate::plot::phase::PhasePoint;
use crate::plot::trajectory::TrajectorySeries;
use crate::plot::{energy, phase, trajectory, ImageFormat, PlotPaths};
use crate::sources::Source;

/// σ series and summary for one source.
#[derive(Debug, Clone)]
pub struct SourceDispersion {
    pub source: Source,
    pub sigma: Vec<Option<f64>>,
    pub summary: SourceSummary,
}

/// Results for every configured source, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub sources: Vec<SourceDispersion>,
}

impl Analysis {
    pub fn summaries(&self) -> Vec<SourceSummary> {
        self.sources.iter().map(|s| s.summary.clone()).collect()
    }

    /// Look up a source's summary by name.
    pub fn summary(&self, name: &str) -> Option<&SourceSummary> {
        self.sources
            .iter()
            .map(|s| &s.summary)
            .find(|s| s.name == name)
    }
}

/// Load one source and compute its σ series and E′/ρ′.
pub fn analyze_source(source: &Source, data_dir: &Path) -> Result<SourceDispersion> {
    let path = source.path_in(data_dir);
    let table = load_model_columns(&path)?;
    let sigma = row_dispersion(&table);
    let summary = summarize(&source.name, &sigma)
        .with_context(|| format!("Cannot summarise source '{}' ({})", source.name, path.display()))?;

    if summary.missing_lines > 0 {
        warn!(
            source = %source.name,
            missing = summary.missing_lines,
            lines = summary.lines,
            "Some lines have missing model scores; their σ counts as zero toward E′"
        );
    }
    info!(
        source = %source.name,
        lines = summary.lines,
        e_prime = summary.e_prime,
        rho_prime = summary.rho_prime,
        "Computed dispersion"
    );

    Ok(SourceDispersion {
        source: source.clone(),
        sigma,
        summary,
    })
}

/// Analyze every configured source.
pub fn analyze(config: &Config) -> Result<Analysis> {
    let sources = config
        .sources
        .iter()
        .map(|source| analyze_source(source, &config.data_dir))
        .collect::<Result<Vec<_>>>()?;
    Ok(Analysis { sources })
}

/// Render the three charts into `out_dir`, returning where they were written.
pub fn render_plots(analysis: &Analysis, out_dir: &Path, format: ImageFormat) -> Result<PlotPaths> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;
    let paths = PlotPaths::in_dir(out_dir, format);

    let series: Vec<TrajectorySeries> = analysis
        .sources
        .iter()
        .map(|s| TrajectorySeries {
            label: &s.source.label,
            color: s.source.color,
            sigma: &s.sigma,
        })
        .collect();
    trajectory::render(&paths.trajectory, format, &series)?;

    let bars: Vec<EnergyBar> = analysis
        .sources
        .iter()
        .map(|s| EnergyBar {
            name: &s.source.name,
            color: s.source.color,
            e_prime: s.summary.e_prime,
        })
        .collect();
    energy::render(&paths.energy, format, &bars)?;

    let points: Vec<PhasePoint> = analysis
        .sources
        .iter()
        .map(|s| PhasePoint {
            name: &s.source.name,
            color: s.source.color,
            e_prime: s.summary.e_prime,
            rho_prime: s.summary.rho_prime,
        })
        .collect();
    phase::render(&paths.phase, format, &points)?;

    info!(out_dir = %out_dir.display(), %format, "Rendered charts");
    Ok(paths)
}

/// Full run: analyze every source, then render the charts.
pub fn run(config: &Config) -> Result<(Analysis, PlotPaths)> {
    let analysis = analyze(config)?;
    let paths = render_plots(&analysis, &config.output_dir, config.format)?;
    Ok((analysis, paths))
}
