use crate::cli::ScanArgs;
use crate::config::AnalysisConfig;
use crate::error::{CliError, Result};
use batscan::core::forcefield::labels::LabeledTopology;
use batscan::core::forcefield::params::ParameterSet;
use batscan::core::io::{tables, topology, xyz};
use batscan::workflows::progress::{Progress, ProgressReporter};
use batscan::workflows::scan::{self, ScanResult, TorsionReport};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

pub fn run(args: ScanArgs) -> Result<()> {
    let trajectory = xyz::load_trajectory(&args.trajectory)?;
    let labeled = topology::load_labeled_topology(&args.topology)?;
    info!(
        frames = trajectory.frame_count(),
        atoms = trajectory.atom_count(),
        "Loaded trajectory '{}'.",
        args.trajectory.display()
    );

    let mut config = match &args.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(bins) = args.bins {
        config.bins = bins;
    }
    let parameters = args
        .parameters
        .as_deref()
        .map(ParameterSet::load)
        .transpose()?;

    let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
        Progress::PhaseStart { name } => info!("Phase '{}' started.", name),
        Progress::PhaseFinish => debug!("Phase finished."),
        Progress::FitStart { label } => info!("Fitting torsion label '{}'.", label),
        Progress::FitFinish => debug!("Fit finished."),
        Progress::Message(message) => info!("{}", message),
    }));

    let result = scan::run(
        &trajectory,
        &labeled,
        &config.to_scan_config(parameters),
        &reporter,
    )?;

    write_outputs(&args.output, &labeled, &result)?;
    info!("Scan outputs written to '{}'.", args.output.display());
    Ok(())
}

#[derive(Serialize)]
struct StatisticsRow {
    kind: &'static str,
    label: String,
    atoms: String,
    mean: f64,
    std_dev: f64,
    mean_uncertainty: f64,
    std_uncertainty: f64,
}

#[derive(Serialize)]
struct FitReportDocument<'a> {
    torsion: &'a [TorsionReport],
}

fn write_outputs(output: &Path, labeled: &LabeledTopology, result: &ScanResult) -> Result<()> {
    std::fs::create_dir_all(output)?;

    let bond_headers: Vec<String> = labeled
        .bonds
        .iter()
        .map(|b| format!("{} {}", join_atoms(&b.atoms.atoms()), b.label))
        .collect();
    let angle_headers: Vec<String> = labeled
        .angles
        .iter()
        .map(|a| format!("{} {}", join_atoms(&a.atoms.atoms()), a.label))
        .collect();
    let torsion_headers: Vec<String> = labeled
        .torsions
        .iter()
        .map(|t| format!("{} {}", join_atoms(&t.atoms.atoms()), t.label))
        .collect();

    tables::write_series_csv(
        File::create(output.join("bond_lengths.csv"))?,
        &bond_headers,
        &result.series.bond_lengths,
    )?;
    tables::write_series_csv(
        File::create(output.join("bond_angles.csv"))?,
        &angle_headers,
        &result.series.bond_angles,
    )?;
    tables::write_series_csv(
        File::create(output.join("torsion_angles.csv"))?,
        &torsion_headers,
        &result.series.torsion_angles,
    )?;

    let mut rows = Vec::new();
    for (bond, stats) in labeled.bonds.iter().zip(&result.bond_statistics) {
        rows.push(StatisticsRow {
            kind: "bond",
            label: bond.label.clone(),
            atoms: join_atoms(&bond.atoms.atoms()),
            mean: stats.mean,
            std_dev: stats.std_dev,
            mean_uncertainty: stats.mean_uncertainty,
            std_uncertainty: stats.std_uncertainty,
        });
    }
    for (angle, stats) in labeled.angles.iter().zip(&result.angle_statistics) {
        rows.push(StatisticsRow {
            kind: "angle",
            label: angle.label.clone(),
            atoms: join_atoms(&angle.atoms.atoms()),
            mean: stats.mean,
            std_dev: stats.std_dev,
            mean_uncertainty: stats.mean_uncertainty,
            std_uncertainty: stats.std_uncertainty,
        });
    }
    tables::write_records_csv(File::create(output.join("statistics.csv"))?, &rows)?;

    let document = FitReportDocument {
        torsion: &result.torsion_reports,
    };
    let rendered = toml::to_string_pretty(&document)
        .map_err(|e| CliError::Other(anyhow::anyhow!("failed to render fit report: {}", e)))?;
    std::fs::write(output.join("torsion_fits.toml"), rendered)?;

    Ok(())
}

fn join_atoms(atoms: &[usize]) -> String {
    atoms
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join("-")
}
