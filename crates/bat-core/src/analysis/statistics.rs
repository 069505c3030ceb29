use ndarray::{Array2, ArrayView1};
use serde::Serialize;

/// Equilibrium summary of one scalar time series.
///
/// Uncertainties follow the standard-error estimates used for equilibrium
/// bond/angle/torsion properties: the mean is uncertain by `std/√n` and the
/// standard deviation itself by `std²/√(n/2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquilibriumStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub mean_uncertainty: f64,
    pub std_uncertainty: f64,
}

/// Summarizes one time series, ignoring non-finite samples.
pub fn series_statistics(samples: ArrayView1<'_, f64>) -> EquilibriumStatistics {
    let finite: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    statistics_of(&finite)
}

/// Summarizes every feature column of a `(frames, features)` time series.
pub fn column_statistics(series: &Array2<f64>) -> Vec<EquilibriumStatistics> {
    (0..series.ncols())
        .map(|i| series_statistics(series.column(i)))
        .collect()
}

pub(crate) fn statistics_of(finite: &[f64]) -> EquilibriumStatistics {
    let n = finite.len() as f64;
    if finite.is_empty() {
        return EquilibriumStatistics {
            mean: f64::NAN,
            std_dev: f64::NAN,
            mean_uncertainty: f64::NAN,
            std_uncertainty: f64::NAN,
        };
    }

    let mean = finite.iter().sum::<f64>() / n;
    let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    EquilibriumStatistics {
        mean,
        std_dev,
        mean_uncertainty: std_dev / n.sqrt(),
        std_uncertainty: std_dev.powi(2) / (n / 2.0).sqrt(),
    }
}
