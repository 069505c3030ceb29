use crate::error::{CliError, Result};
use batscan::analysis::fit::{COEFFICIENT_COUNT, DEFAULT_INITIAL_GUESS, FitOptions};
use batscan::analysis::histogram::DEFAULT_BINS;
use batscan::core::forcefield::params::ParameterSet;
use batscan::workflows::scan::ScanConfig;
use serde::Deserialize;
use std::path::Path;

/// Analysis settings accepted from a TOML file. Every field has a default, so
/// an empty file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Histogram resolution for torsion distributions.
    pub bins: usize,
    /// Seed coefficients for the periodic fit, `[a, T, φ]` per term.
    pub initial_guess: [f64; COEFFICIENT_COUNT],
    /// Iteration budget for the least-squares solver.
    pub max_iterations: usize,
    /// Convergence tolerance for the least-squares solver.
    pub tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let fit = FitOptions::default();
        Self {
            bins: DEFAULT_BINS,
            initial_guess: DEFAULT_INITIAL_GUESS,
            max_iterations: fit.max_iterations,
            tolerance: fit.tolerance,
        }
    }
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("invalid analysis config '{}': {}", path.display(), e))
        })
    }

    pub fn fit_options(&self) -> FitOptions {
        FitOptions {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }

    pub fn to_scan_config(&self, parameters: Option<ParameterSet>) -> ScanConfig {
        ScanConfig {
            bins: self.bins,
            fit: self.fit_options(),
            initial_guess: self.initial_guess,
            parameters,
        }
    }
}
