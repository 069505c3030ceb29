use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonicBondParam {
    /// Equilibrium length in angstrom.
    pub length: f64,
    /// Force constant in kcal/mol/A^2.
    pub k: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonicAngleParam {
    /// Equilibrium angle in radians.
    pub angle: f64,
    /// Force constant in kcal/mol/rad^2.
    pub k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicTorsionParam {
    /// One entry per Fourier term.
    pub periodicity: Vec<u32>,
    /// Phase offsets in radians, parallel to `periodicity`.
    pub phase: Vec<f64>,
    /// Barrier heights in kcal/mol, parallel to `periodicity`.
    pub k: Vec<f64>,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Force-field parameters keyed by the SMIRKS label that assigned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(default)]
    pub bonds: HashMap<String, HarmonicBondParam>,
    #[serde(default)]
    pub angles: HashMap<String, HarmonicAngleParam>,
    #[serde(default)]
    pub torsions: HashMap<String, PeriodicTorsionParam>,
}

impl ParameterSet {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// A minimal in-memory parameter set covering the alkane/ether patterns of
    /// the AlkEthOH test molecules. Intended as a preconfigured fixture for
    /// exercising label resolution without any file I/O.
    pub fn minimal_alkethoh() -> Self {
        let mut bonds = HashMap::new();
        bonds.insert(
            "[#6X4:1]-[#6X4:2]".to_string(),
            HarmonicBondParam {
                length: 1.526,
                k: 620.0,
            },
        );
        bonds.insert(
            "[#6X4:1]-[#1:2]".to_string(),
            HarmonicBondParam {
                length: 1.090,
                k: 680.0,
            },
        );

        let mut angles = HashMap::new();
        angles.insert(
            "[a,A:1]-[#6X4:2]-[a,A:3]".to_string(),
            HarmonicAngleParam {
                angle: 109.5f64.to_radians(),
                k: 100.0,
            },
        );

        let mut torsions = HashMap::new();
        torsions.insert(
            "[#6X4:1]-[#6X4:2]-[#6X4:3]-[#6X4:4]".to_string(),
            PeriodicTorsionParam {
                periodicity: vec![1, 2, 3],
                phase: vec![0.0, std::f64::consts::PI, 0.0],
                k: vec![0.18, 0.25, 0.20],
            },
        );
        torsions.insert(
            "[#1:1]-[#6X4:2]-[#6X4:3]-[#1:4]".to_string(),
            PeriodicTorsionParam {
                periodicity: vec![3],
                phase: vec![0.0],
                k: vec![0.15],
            },
        );

        Self {
            bonds,
            angles,
            torsions,
        }
    }
}
