// Row-wise dispersion — σ_model(t).
//
// For each line of text, the sample standard deviation of the four model
// scores measures how much the embedding models disagree about that line.
// Read top to bottom, the sequence is treated as a pseudo-time series.

use crate::loader::ModelTable;

/// Sample standard deviation (n - 1 denominator) of the given values.
///
/// Returns `None` if any value is missing, there are fewer than two values,
/// or the result is not finite (an infinite input makes the spread undefined).
pub fn sample_std(values: &[Option<f64>]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let present: Vec<f64> = values.iter().copied().collect::<Option<Vec<f64>>>()?;

    let n = present.len() as f64;
    let mean = present.iter().sum::<f64>() / n;
    let sum_sq: f64 = present.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (n - 1.0)).sqrt()).filter(|s| s.is_finite())
}

/// σ for every row of the table, in row order.
pub fn row_dispersion(table: &ModelTable) -> Vec<Option<f64>> {
    table.rows.iter().map(|row| sample_std(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_values_have_zero_spread() {
        let s = sample_std(&[Some(0.4), Some(0.4), Some(0.4), Some(0.4)]).unwrap();
        assert!(s.abs() < 1e-12);
    }

    #[test]
    fn infinite_input_is_missing() {
        let row = [Some(f64::INFINITY), Some(1.0), Some(1.0), Some(4.0)];
        assert_eq!(sample_std(&row), None);
        assert_eq!(sample_std(&[Some(f64::NEG_INFINITY), Some(1.0)]), None);
    }

    #[test]
    fn single_value_is_missing() {
        assert_eq!(sample_std(&[Some(1.0)]), None);
        assert_eq!(sample_std(&[]), None);
    }
}
