// Dispersion: per-line semantic dispersion across embedding models.
//
// This is the library root. The pipeline runs loader -> dispersion ->
// aggregate for each source, then hands the results to the plot renderers.

pub mod aggregate;
pub mod config;
pub mod dispersion;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod plot;
pub mod sources;
pub mod status;
