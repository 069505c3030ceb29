use crate::analysis::error::AnalysisError;
use ndarray::{Array1, ArrayView1};

/// Bin count used by the scan workflow when none is configured. Chosen fine
/// enough to resolve the three wells of an sp3 torsion over (−π, π].
pub const DEFAULT_BINS: usize = 500;

/// A fixed-width histogram over the sampled range of a time series.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin midpoints, ascending.
    pub centers: Array1<f64>,
    /// Samples per bin, as f64 for direct use as fit ordinates.
    pub counts: Array1<f64>,
}

impl Histogram {
    /// Total number of binned samples.
    pub fn sample_count(&self) -> usize {
        self.counts.sum() as usize
    }
}

/// Bins `samples` into `bins` equal-width bins spanning the sampled range.
///
/// Non-finite samples are filtered out before binning; degenerate geometry
/// upstream (NaN angles) therefore shrinks the sample count instead of
/// poisoning the distribution. A constant series has zero range, which is
/// widened symmetrically by a small epsilon so the counts stay well-defined.
pub fn histogram(samples: ArrayView1<'_, f64>, bins: usize) -> Result<Histogram, AnalysisError> {
    if bins == 0 {
        return Err(AnalysisError::ZeroBins);
    }

    let finite: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Err(AnalysisError::EmptyHistogram);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in &finite {
        min = min.min(v);
        max = max.max(v);
    }
    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bins as f64;
    let mut counts = Array1::zeros(bins);
    for &v in &finite {
        // The maximum lands exactly on the upper edge; fold it into the last bin.
        let bin = (((v - min) / width) as usize).min(bins - 1);
        counts[bin] += 1.0;
    }
    let centers = Array1::from_iter((0..bins).map(|b| min + (b as f64 + 0.5) * width));

    Ok(Histogram { centers, counts })
}
