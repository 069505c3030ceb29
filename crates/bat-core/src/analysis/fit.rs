use crate::analysis::error::AnalysisError;
use crate::math::{self, SolveError};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Number of free coefficients: three squared-sine terms with amplitude,
/// period, and phase each.
pub const COEFFICIENT_COUNT: usize = 9;

/// Seed used when the caller supplies none: amplitude 10, period 3, phase 10
/// for every term. Deliberately coarse; the generous iteration budget exists
/// to absorb it.
pub const DEFAULT_INITIAL_GUESS: [f64; COEFFICIENT_COUNT] =
    [10.0, 3.0, 10.0, 10.0, 3.0, 10.0, 10.0, 3.0, 10.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Iteration budget for the least-squares solver.
    pub max_iterations: usize,
    /// Convergence tolerance on gradient, step, and relative cost drop.
    pub tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            tolerance: 1e-10,
        }
    }
}

/// A fitted periodic model for one torsion-angle distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FourierFit {
    /// `[a0, T0, φ0, a1, T1, φ1, a2, T2, φ2]`.
    pub coefficients: [f64; COEFFICIENT_COUNT],
    pub iterations: usize,
    pub residual_norm: f64,
}

impl FourierFit {
    /// Evaluates the fitted curve, e.g. to overlay it on the histogram.
    pub fn evaluate(&self, x: f64) -> f64 {
        fourier_series(x, &self.coefficients)
    }
}

/// The model: `Σ_t a[3t] · sin(2πx / a[3t+1] + a[3t+2])²`.
pub fn fourier_series(x: f64, coefficients: &[f64; COEFFICIENT_COUNT]) -> f64 {
    coefficients
        .chunks_exact(3)
        .map(|term| {
            let u = TAU * x / term[1] + term[2];
            term[0] * u.sin().powi(2)
        })
        .sum()
}

/// Fits the squared-sine Fourier model to a sampled distribution.
///
/// `x` are histogram bin centers (radians), `y` the matching bin counts.
/// The seed is taken as given; no validation of its plausibility is performed.
/// Non-convergence within the iteration budget is an explicit
/// [`AnalysisError::Convergence`]; the last iterate is never returned
/// unmarked. Each call is independent and stateless.
pub fn fit_periodic(
    x: &[f64],
    y: &[f64],
    initial_guess: [f64; COEFFICIENT_COUNT],
    options: &FitOptions,
) -> Result<FourierFit, AnalysisError> {
    if x.len() != y.len() {
        return Err(AnalysisError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < COEFFICIENT_COUNT {
        return Err(AnalysisError::Underdetermined {
            samples: x.len(),
            parameters: COEFFICIENT_COUNT,
        });
    }

    let residuals = |p: &DVector<f64>| {
        DVector::from_iterator(
            x.len(),
            x.iter().zip(y).map(|(&x, &y)| evaluate_model(p, x) - y),
        )
    };
    let jacobian = |p: &DVector<f64>| {
        DMatrix::from_fn(x.len(), COEFFICIENT_COUNT, |row, col| {
            let x = x[row];
            let term = col / 3;
            let (amplitude, period, phase) = (p[3 * term], p[3 * term + 1], p[3 * term + 2]);
            let u = TAU * x / period + phase;
            match col % 3 {
                0 => u.sin().powi(2),
                1 => amplitude * (2.0 * u).sin() * (-TAU * x / period.powi(2)),
                _ => amplitude * (2.0 * u).sin(),
            }
        })
    };

    let solution = math::levenberg_marquardt(
        DVector::from_row_slice(&initial_guess),
        residuals,
        jacobian,
        options.max_iterations,
        options.tolerance,
    )
    .map_err(|SolveError::IterationBudget { iterations }| AnalysisError::Convergence {
        iterations,
    })?;

    let mut coefficients = [0.0; COEFFICIENT_COUNT];
    coefficients.copy_from_slice(solution.parameters.as_slice());
    Ok(FourierFit {
        coefficients,
        iterations: solution.iterations,
        residual_norm: solution.residual_norm,
    })
}

fn evaluate_model(p: &DVector<f64>, x: f64) -> f64 {
    (0..3)
        .map(|t| {
            let u = TAU * x / p[3 * t + 1] + p[3 * t + 2];
            p[3 * t] * u.sin().powi(2)
        })
        .sum()
}
