use crate::cli::FitArgs;
use crate::config::AnalysisConfig;
use crate::error::{CliError, Result};
use batscan::analysis::fit::{FourierFit, fit_periodic};
use serde::Serialize;
use std::path::Path;
use tracing::info;

pub fn run(args: FitArgs) -> Result<()> {
    let (x, y) = read_distribution(&args.input)?;
    info!(points = x.len(), "Loaded distribution '{}'.", args.input.display());

    let config = match &args.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };

    let fit = fit_periodic(&x, &y, config.initial_guess, &config.fit_options())?;
    print_fit(&fit);

    if let Some(output) = &args.output {
        let document = FitDocument { fit: &fit };
        let rendered = toml::to_string_pretty(&document)
            .map_err(|e| CliError::Other(anyhow::anyhow!("failed to render fit report: {}", e)))?;
        std::fs::write(output, rendered)?;
        info!("Fit report written to '{}'.", output.display());
    }
    Ok(())
}

#[derive(Serialize)]
struct FitDocument<'a> {
    fit: &'a FourierFit,
}

fn read_distribution(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut x = Vec::new();
    let mut y = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let parse = |index: usize| -> Result<f64> {
            record
                .get(index)
                .ok_or_else(|| missing_column(path, row, index))?
                .trim()
                .parse()
                .map_err(|_| missing_column(path, row, index))
        };
        x.push(parse(0)?);
        y.push(parse(1)?);
    }
    Ok((x, y))
}

fn missing_column(path: &Path, row: usize, column: usize) -> CliError {
    CliError::FileParsing {
        path: path.to_path_buf(),
        source: anyhow::anyhow!(
            "data row {} has no numeric value in column {}",
            row + 1,
            column + 1
        ),
    }
}

fn print_fit(fit: &FourierFit) {
    println!(
        "Converged after {} iterations (residual norm {:.6e}).",
        fit.iterations, fit.residual_norm
    );
    println!("{:>6} {:>14} {:>14} {:>14}", "term", "amplitude", "period", "phase");
    for (term, coefficients) in fit.coefficients.chunks_exact(3).enumerate() {
        println!(
            "{:>6} {:>14.6} {:>14.6} {:>14.6}",
            term, coefficients[0], coefficients[1], coefficients[2]
        );
    }
}
