// Per-source scalar summaries of the dispersion series.
//
//   E′ = mean σ_model(t) over all lines   (normalized poetic margin energy)
//   ρ′ = 1 / E′                          (normalized poetic condensation density)
//
// Lines whose σ is missing or not finite add nothing to the sum but still
// count as lines, so a source with gaps reports a proportionally lower E′.

use serde::{Deserialize, Serialize};

/// Why a source could not be summarised.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateError {
    /// The source has no lines at all.
    Empty,
    /// E′ came out as zero, so ρ′ is undefined.
    ZeroEnergy,
}

impl std::fmt::Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateError::Empty => write!(f, "source has no lines; E′ is undefined"),
            AggregateError::ZeroEnergy => write!(f, "E′ is zero; ρ′ = 1 / E′ is undefined"),
        }
    }
}

impl std::error::Error for AggregateError {}

/// E′ / ρ′ summary for a single source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub name: String,
    /// Number of lines (rows) in the source
    pub lines: usize,
    /// Lines whose σ is missing or not finite
    pub missing_lines: usize,
    pub e_prime: f64,
    pub rho_prime: f64,
}

/// Whether a line's σ takes part in E′.
fn is_usable(sigma: &Option<f64>) -> bool {
    sigma.is_some_and(f64::is_finite)
}

/// E′: sum of the available σ divided by the total number of lines.
///
/// Missing and non-finite σ add nothing to the sum.
pub fn margin_energy(sigma: &[Option<f64>]) -> Result<f64, AggregateError> {
    if sigma.is_empty() {
        return Err(AggregateError::Empty);
    }
    let total: f64 = sigma.iter().filter(|s| is_usable(s)).flatten().sum();
    Ok(total / sigma.len() as f64)
}

/// ρ′ = 1 / E′.
pub fn condensation_density(e_prime: f64) -> Result<f64, AggregateError> {
    if e_prime == 0.0 {
        return Err(AggregateError::ZeroEnergy);
    }
    Ok(1.0 / e_prime)
}

/// Summarise one source's σ series.
pub fn summarize(name: &str, sigma: &[Option<f64>]) -> Result<SourceSummary, AggregateError> {
    let e_prime = margin_energy(sigma)?;
    let rho_prime = condensation_density(e_prime)?;
    Ok(SourceSummary {
        name: name.to_string(),
        lines: sigma.len(),
        missing_lines: sigma.iter().filter(|s| !is_usable(s)).count(),
        e_prime,
        rho_prime,
    })
}
