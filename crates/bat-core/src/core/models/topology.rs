use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A pair of atom indices measured as a bond length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BondTerm(pub usize, pub usize);

/// An atom-index triple measured as the angle at its middle vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AngleTerm(pub usize, pub usize, pub usize);

/// An atom-index quadruple measured as the signed dihedral about its central bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TorsionTerm(pub usize, pub usize, pub usize, pub usize);

impl BondTerm {
    pub fn atoms(&self) -> [usize; 2] {
        [self.0, self.1]
    }
}

impl AngleTerm {
    pub fn atoms(&self) -> [usize; 3] {
        [self.0, self.1, self.2]
    }
}

impl TorsionTerm {
    pub fn atoms(&self) -> [usize; 4] {
        [self.0, self.1, self.2, self.3]
    }

    /// The same torsion traversed in the opposite direction. Its dihedral angle
    /// is the negation of this term's angle.
    pub fn reversed(&self) -> TorsionTerm {
        TorsionTerm(self.3, self.2, self.1, self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Bond,
    Angle,
    Torsion,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bond => "Bond",
                Self::Angle => "Angle",
                Self::Torsion => "Torsion",
            }
        )
    }
}

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("{kind} term {term} references atom {index}, but only {atom_count} atoms exist")]
    IndexOutOfRange {
        kind: TermKind,
        term: usize,
        index: usize,
        atom_count: usize,
    },
}

/// The bond, angle, and torsion index tuples to measure against a trajectory.
///
/// Indices point into a single frame's position array. Tuples are not required
/// to have internally distinct indices; a repeated index yields a zero-length
/// difference vector downstream and therefore a NaN angle, following the
/// degenerate-geometry contract of the analysis layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalTopology {
    #[serde(default)]
    pub bonds: Vec<BondTerm>,
    #[serde(default)]
    pub angles: Vec<AngleTerm>,
    #[serde(default)]
    pub torsions: Vec<TorsionTerm>,
}

impl InternalTopology {
    /// Checks every index tuple against an atom count, failing fast on the first
    /// out-of-range reference.
    pub fn validate(&self, atom_count: usize) -> Result<(), TopologyError> {
        for (term, bond) in self.bonds.iter().enumerate() {
            Self::check(TermKind::Bond, term, &bond.atoms(), atom_count)?;
        }
        for (term, angle) in self.angles.iter().enumerate() {
            Self::check(TermKind::Angle, term, &angle.atoms(), atom_count)?;
        }
        for (term, torsion) in self.torsions.iter().enumerate() {
            Self::check(TermKind::Torsion, term, &torsion.atoms(), atom_count)?;
        }
        Ok(())
    }

    fn check(
        kind: TermKind,
        term: usize,
        atoms: &[usize],
        atom_count: usize,
    ) -> Result<(), TopologyError> {
        for &index in atoms {
            if index >= atom_count {
                return Err(TopologyError::IndexOutOfRange {
                    kind,
                    term,
                    index,
                    atom_count,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_in_range_indices() {
        let topology = InternalTopology {
            bonds: vec![BondTerm(0, 1)],
            angles: vec![AngleTerm(0, 1, 2)],
            torsions: vec![TorsionTerm(0, 1, 2, 3)],
        };
        assert!(topology.validate(4).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_bond() {
        let topology = InternalTopology {
            bonds: vec![BondTerm(0, 5)],
            ..Default::default()
        };
        let err = topology.validate(4).unwrap_err();
        assert!(matches!(
            err,
            TopologyError::IndexOutOfRange {
                kind: TermKind::Bond,
                term: 0,
                index: 5,
                atom_count: 4,
            }
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_torsion() {
        let topology = InternalTopology {
            torsions: vec![TorsionTerm(0, 1, 2, 3), TorsionTerm(1, 2, 3, 4)],
            ..Default::default()
        };
        let err = topology.validate(4).unwrap_err();
        assert!(matches!(
            err,
            TopologyError::IndexOutOfRange {
                kind: TermKind::Torsion,
                term: 1,
                index: 4,
                ..
            }
        ));
    }

    #[test]
    fn validate_accepts_empty_topology() {
        assert!(InternalTopology::default().validate(0).is_ok());
    }

    #[test]
    fn validate_accepts_repeated_indices_within_a_tuple() {
        let topology = InternalTopology {
            angles: vec![AngleTerm(1, 1, 2)],
            ..Default::default()
        };
        assert!(topology.validate(3).is_ok());
    }

    #[test]
    fn reversed_torsion_swaps_endpoints() {
        assert_eq!(TorsionTerm(0, 1, 2, 3).reversed(), TorsionTerm(3, 2, 1, 0));
    }
}
