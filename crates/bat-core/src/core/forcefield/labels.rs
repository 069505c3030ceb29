use crate::core::models::topology::{AngleTerm, BondTerm, InternalTopology, TorsionTerm};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A bond index pair together with its force-field parameter label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledBond {
    pub atoms: BondTerm,
    pub label: String,
}

/// An angle index triple together with its force-field parameter label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledAngle {
    pub atoms: AngleTerm,
    pub label: String,
}

/// A torsion index quadruple together with its force-field parameter label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledTorsion {
    pub atoms: TorsionTerm,
    pub label: String,
}

/// An [`InternalTopology`] whose terms carry the parameter labels assigned by a
/// substructure-matching collaborator.
///
/// Labels are kept as structured fields next to the atom tuples they annotate;
/// the tuples are never reconstructed from formatted strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabeledTopology {
    #[serde(default)]
    pub bonds: Vec<LabeledBond>,
    #[serde(default)]
    pub angles: Vec<LabeledAngle>,
    #[serde(default)]
    pub torsions: Vec<LabeledTorsion>,
}

impl LabeledTopology {
    /// Strips the labels, leaving the bare index tuples for the geometry pass.
    /// Term order is preserved, so column `i` of a computed time series
    /// corresponds to entry `i` here.
    pub fn topology(&self) -> InternalTopology {
        InternalTopology {
            bonds: self.bonds.iter().map(|b| b.atoms).collect(),
            angles: self.angles.iter().map(|a| a.atoms).collect(),
            torsions: self.torsions.iter().map(|t| t.atoms).collect(),
        }
    }

    /// Groups torsion column indices by parameter label, in label order.
    ///
    /// Torsions matched by the same SMIRKS pattern sample the same torsional
    /// potential, so their time series are pooled before histogramming.
    pub fn torsions_by_label(&self) -> BTreeMap<&str, Vec<usize>> {
        let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (column, torsion) in self.torsions.iter().enumerate() {
            groups.entry(torsion.label.as_str()).or_default().push(column);
        }
        groups
    }
}
