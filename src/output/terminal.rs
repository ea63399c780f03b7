// Colored terminal output for E′ / ρ′ summaries and written files.

use std::path::Path;

use colored::Colorize;

use crate::aggregate::SourceSummary;

/// One `name  value` line per source, in the given order.
pub fn format_value_lines(
    summaries: &[SourceSummary],
    value: fn(&SourceSummary) -> f64,
) -> Vec<String> {
    let width = summaries.iter().map(|s| s.name.len()).max().unwrap_or(0);
    summaries
        .iter()
        .map(|s| format!("  {:<width$}  {:.6}", s.name, value(s)))
        .collect()
}

/// Display the E′ and ρ′ values of every source.
pub fn display_summaries(summaries: &[SourceSummary]) {
    println!("\n{}", "E′ values:".bold());
    for line in format_value_lines(summaries, |s| s.e_prime) {
        println!("{line}");
    }

    println!("\n{}", "ρ′ values:".bold());
    for line in format_value_lines(summaries, |s| s.rho_prime) {
        println!("{line}");
    }

    let gaps: Vec<&SourceSummary> = summaries.iter().filter(|s| s.missing_lines > 0).collect();
    if !gaps.is_empty() {
        println!();
        for s in gaps {
            println!(
                "  {} {}: {} of {} lines had missing model scores",
                "~".yellow(),
                s.name,
                s.missing_lines,
                s.lines
            );
        }
    }
}

/// List the files a run wrote.
pub fn display_output_files(paths: &[&Path]) {
    println!("\n{}", "Output Files:".bold());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!(" - {name}");
    }
}
