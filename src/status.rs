// Run status display — which inputs are present, where outputs would go.

use colored::Colorize;

use crate::config::Config;
use crate::plot::PlotPaths;

/// Display input and output status to the terminal.
///
/// Returns the number of source files that are missing.
pub fn show(config: &Config) -> usize {
    println!("Data directory: {}", config.data_dir.display());
    let mut missing = 0;
    for source in &config.sources {
        let path = source.path_in(&config.data_dir);
        match std::fs::metadata(&path) {
            Ok(meta) => println!(
                "  {} {:<10} {} ({})",
                "ok".green(),
                source.name,
                source.file,
                format_bytes(meta.len())
            ),
            Err(_) => {
                missing += 1;
                println!("  {} {:<10} {}", "missing".red(), source.name, source.file);
            }
        }
    }

    println!("\nOutput directory: {}", config.output_dir.display());
    let paths = PlotPaths::in_dir(&config.output_dir, config.format);
    for path in paths.all() {
        let marker = if path.exists() {
            "(exists, will be overwritten)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {} {}", path.display(), marker);
    }

    if missing > 0 {
        println!(
            "\n{} source file(s) missing. Set DISPERSION_DATA_DIR or pass --data-dir.",
            missing
        );
    }
    missing
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_humanized() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
