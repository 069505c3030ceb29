use crate::analysis::error::AnalysisError;
use crate::analysis::fit::{
    COEFFICIENT_COUNT, DEFAULT_INITIAL_GUESS, FitOptions, FourierFit, fit_periodic,
};
use crate::analysis::geometry::{InternalCoordinateSeries, compute_internal_coordinates};
use crate::analysis::histogram::{DEFAULT_BINS, histogram};
use crate::analysis::statistics::{EquilibriumStatistics, column_statistics, series_statistics};
use crate::core::forcefield::labels::LabeledTopology;
use crate::core::forcefield::params::{ParameterSet, PeriodicTorsionParam};
use crate::core::models::trajectory::Trajectory;
use crate::workflows::progress::{Progress, ProgressReporter};
use ndarray::Array1;
use serde::Serialize;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Histogram resolution for torsion distributions.
    pub bins: usize,
    pub fit: FitOptions,
    pub initial_guess: [f64; COEFFICIENT_COUNT],
    /// Optional parameter set to cross-reference fitted labels against.
    pub parameters: Option<ParameterSet>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            fit: FitOptions::default(),
            initial_guess: DEFAULT_INITIAL_GUESS,
            parameters: None,
        }
    }
}

/// Histogram, fit, and summary for all torsion columns sharing one parameter
/// label.
#[derive(Debug, Clone, Serialize)]
pub struct TorsionReport {
    pub label: String,
    /// Torsion-series column indices pooled into this report.
    pub columns: Vec<usize>,
    /// Finite samples that entered the histogram.
    pub samples: usize,
    pub statistics: EquilibriumStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<FourierFit>,
    /// Present when the fit failed; the report entry survives so one
    /// pathological distribution cannot sink the rest of the scan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_error: Option<String>,
    /// Reference force-field parameters for this label, when a parameter set
    /// was supplied and contains it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<PeriodicTorsionParam>,
}

#[derive(Debug)]
pub struct ScanResult {
    pub series: InternalCoordinateSeries,
    pub bond_statistics: Vec<EquilibriumStatistics>,
    pub angle_statistics: Vec<EquilibriumStatistics>,
    pub torsion_reports: Vec<TorsionReport>,
}

/// Runs the full internal-coordinate scan over one trajectory.
///
/// Phases: topology validation and geometry extraction, equilibrium statistics
/// for bonds and angles, then one histogram-and-fit pass per torsion parameter
/// label. Fit failures are recorded in the affected report entry; structural
/// errors (bad indices, unusable histograms) abort the scan.
#[instrument(skip_all, name = "scan_workflow")]
pub fn run(
    trajectory: &Trajectory,
    topology: &LabeledTopology,
    config: &ScanConfig,
    reporter: &ProgressReporter,
) -> Result<ScanResult, AnalysisError> {
    // === Phase 1: Geometry extraction ===
    reporter.report(Progress::PhaseStart { name: "Geometry" });
    info!(
        frames = trajectory.frame_count(),
        atoms = trajectory.atom_count(),
        bonds = topology.bonds.len(),
        angles = topology.angles.len(),
        torsions = topology.torsions.len(),
        "Computing internal-coordinate time series."
    );
    let series = compute_internal_coordinates(trajectory, &topology.topology())?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Equilibrium statistics ===
    reporter.report(Progress::PhaseStart { name: "Statistics" });
    let bond_statistics = column_statistics(&series.bond_lengths);
    let angle_statistics = column_statistics(&series.bond_angles);
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Per-label torsion fits ===
    reporter.report(Progress::PhaseStart { name: "Torsion fits" });
    let mut torsion_reports = Vec::new();
    for (label, columns) in topology.torsions_by_label() {
        reporter.report(Progress::FitStart {
            label: label.to_string(),
        });
        let report = fit_label(&series, label, columns, config)?;
        reporter.report(Progress::FitFinish);
        torsion_reports.push(report);
    }
    reporter.report(Progress::PhaseFinish);

    info!(
        reports = torsion_reports.len(),
        "Scan complete. Returning per-label torsion reports."
    );
    Ok(ScanResult {
        series,
        bond_statistics,
        angle_statistics,
        torsion_reports,
    })
}

fn fit_label(
    series: &InternalCoordinateSeries,
    label: &str,
    columns: Vec<usize>,
    config: &ScanConfig,
) -> Result<TorsionReport, AnalysisError> {
    // Torsions sharing a label sample the same potential; pool their series.
    let pooled: Array1<f64> = Array1::from_iter(
        columns
            .iter()
            .flat_map(|&c| series.torsion_angles.column(c).to_vec()),
    );
    let statistics = series_statistics(pooled.view());
    let distribution = histogram(pooled.view(), config.bins)?;

    let centers = distribution.centers.to_vec();
    let counts = distribution.counts.to_vec();
    let fit_result = fit_periodic(&centers, &counts, config.initial_guess, &config.fit);
    let (fit, fit_error) = match fit_result {
        Ok(fit) => (Some(fit), None),
        Err(error) => {
            warn!(label, %error, "Torsion fit failed; keeping the report entry.");
            (None, Some(error.to_string()))
        }
    };

    let reference = config
        .parameters
        .as_ref()
        .and_then(|params| params.torsions.get(label).cloned());

    Ok(TorsionReport {
        label: label.to_string(),
        columns,
        samples: distribution.sample_count(),
        statistics,
        fit,
        fit_error,
        reference,
    })
}
