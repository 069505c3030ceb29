use crate::analysis::error::AnalysisError;
use crate::core::models::topology::InternalTopology;
use crate::core::models::trajectory::Trajectory;
use nalgebra::Point3;
use ndarray::Array2;

/// Euclidean distance between two positions, in the input length unit.
#[inline]
pub fn bond_length(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Angle at vertex `b` between the arms `b -> a` and `b -> c`, in radians,
/// range [0, π]. Three collinear points give π.
///
/// Degenerate when either arm has zero length (for example a repeated atom
/// index): the division produces NaN, which is propagated rather than clamped.
/// Callers sampling noisy geometry must expect and filter NaN.
#[inline]
pub fn bond_angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let v1 = a - b;
    let v2 = c - b;
    (v1.dot(&v2) / (v1.norm() * v2.norm())).acos()
}

/// Signed dihedral angle over the chain `a-b-c-d`, in radians, range (−π, π].
///
/// The three bond vectors are normalized before the cross products; the
/// intermediate magnitudes otherwise span several orders for mixed bond
/// lengths, which degrades the `atan2` operands. The sign follows the standard
/// convention: positive is counter-clockwise looking down the central bond
/// `b -> c`. Zero-length bond vectors (repeated indices) propagate NaN.
pub fn dihedral_angle(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> f64 {
    let b1 = (a - b).normalize();
    let b2 = (b - c).normalize();
    let b3 = (c - d).normalize();

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);
    let m = n1.cross(&b2);

    m.dot(&n2).atan2(n1.dot(&n2))
}

/// The three internal-coordinate time series of one trajectory, each shaped
/// `(frame_count, feature_count)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalCoordinateSeries {
    /// Lengths in the trajectory's length unit.
    pub bond_lengths: Array2<f64>,
    /// Angles in radians, [0, π].
    pub bond_angles: Array2<f64>,
    /// Signed dihedrals in radians, (−π, π].
    pub torsion_angles: Array2<f64>,
}

/// Computes bond-length, bond-angle, and torsion-angle time series for every
/// term of `topology` over every frame of `trajectory`.
///
/// The topology is validated against the trajectory's atom count before any
/// geometry is computed; an out-of-range index fails the whole call rather
/// than truncating. Empty term lists produce zero-width output matrices with
/// the full frame count. Pure function: no state survives the call.
pub fn compute_internal_coordinates(
    trajectory: &Trajectory,
    topology: &InternalTopology,
) -> Result<InternalCoordinateSeries, AnalysisError> {
    topology.validate(trajectory.atom_count())?;

    let frames = trajectory.frame_count();
    let mut bond_lengths = Array2::zeros((frames, topology.bonds.len()));
    let mut bond_angles = Array2::zeros((frames, topology.angles.len()));
    let mut torsion_angles = Array2::zeros((frames, topology.torsions.len()));

    for (n, positions) in trajectory.frames().enumerate() {
        for (i, bond) in topology.bonds.iter().enumerate() {
            bond_lengths[[n, i]] = bond_length(&positions[bond.0], &positions[bond.1]);
        }
        for (i, angle) in topology.angles.iter().enumerate() {
            bond_angles[[n, i]] =
                bond_angle(&positions[angle.0], &positions[angle.1], &positions[angle.2]);
        }
        for (i, torsion) in topology.torsions.iter().enumerate() {
            torsion_angles[[n, i]] = dihedral_angle(
                &positions[torsion.0],
                &positions[torsion.1],
                &positions[torsion.2],
                &positions[torsion.3],
            );
        }
    }

    Ok(InternalCoordinateSeries {
        bond_lengths,
        bond_angles,
        torsion_angles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::topology::{AngleTerm, BondTerm, TopologyError, TorsionTerm};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_3, PI};

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn bond_length_matches_euclidean_distance() {
        assert_relative_eq!(bond_length(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0)), 1.0);
        assert_relative_eq!(bond_length(&p(1.0, 2.0, 2.0), &p(0.0, 0.0, 0.0)), 3.0);
    }

    #[test]
    fn bond_angle_of_collinear_points_is_pi() {
        let angle = bond_angle(&p(-1.0, 0.0, 0.0), &p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0));
        assert_relative_eq!(angle, PI, epsilon = 1e-12);
    }

    #[test]
    fn bond_angle_of_right_angle_is_half_pi() {
        let angle = bond_angle(&p(1.0, 0.0, 0.0), &p(0.0, 0.0, 0.0), &p(0.0, 1.0, 0.0));
        assert_relative_eq!(angle, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn bond_angle_with_zero_length_arm_is_nan() {
        let origin = p(0.0, 0.0, 0.0);
        assert!(bond_angle(&origin, &origin, &p(1.0, 0.0, 0.0)).is_nan());
    }

    #[test]
    fn dihedral_of_cis_arrangement_is_zero() {
        let angle = dihedral_angle(
            &p(0.0, 1.0, 0.0),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 0.0, 0.0),
            &p(1.0, 1.0, 0.0),
        );
        assert_relative_eq!(angle, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn dihedral_of_trans_arrangement_is_pi() {
        let angle = dihedral_angle(
            &p(0.0, 1.0, 0.0),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 0.0, 0.0),
            &p(1.0, -1.0, 0.0),
        );
        assert_relative_eq!(angle.abs(), PI, epsilon = 1e-12);
    }

    #[test]
    fn dihedral_sign_follows_rotation_of_terminal_atom() {
        // Rotating d around the central bond by φ from the cis position must
        // read back as a dihedral of exactly φ.
        let phi = FRAC_PI_3;
        let angle = dihedral_angle(
            &p(0.0, 1.0, 0.0),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 0.0, 0.0),
            &p(1.0, phi.cos(), phi.sin()),
        );
        assert_relative_eq!(angle, phi, epsilon = 1e-12);
    }

    #[test]
    fn dihedral_is_antisymmetric_under_tuple_reversal() {
        let (a, b, c, d) = (
            p(0.2, 1.1, -0.3),
            p(0.0, 0.0, 0.0),
            p(1.4, 0.1, 0.2),
            p(1.9, 1.0, 1.1),
        );
        let forward = dihedral_angle(&a, &b, &c, &d);
        let backward = dihedral_angle(&d, &c, &b, &a);
        assert_relative_eq!(forward, -backward, epsilon = 1e-12);
    }

    #[test]
    fn dihedral_is_invariant_under_uniform_scaling() {
        // Normalizing the bond vectors makes the angle independent of bond
        // lengths; scale the whole chain and the angle must not move.
        let (a, b, c, d) = (
            p(0.2, 1.1, -0.3),
            p(0.0, 0.0, 0.0),
            p(1.4, 0.1, 0.2),
            p(1.9, 1.0, 1.1),
        );
        let scale = 1.0e-4;
        let scaled = dihedral_angle(
            &p(a.x * scale, a.y * scale, a.z * scale),
            &p(b.x * scale, b.y * scale, b.z * scale),
            &p(c.x * scale, c.y * scale, c.z * scale),
            &p(d.x * scale, d.y * scale, d.z * scale),
        );
        assert_relative_eq!(dihedral_angle(&a, &b, &c, &d), scaled, epsilon = 1e-9);
    }

    fn butane_like_trajectory() -> Trajectory {
        let frame0 = vec![
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
        ];
        let frame1 = vec![
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, -1.0, 0.0),
        ];
        Trajectory::new(vec![frame0, frame1]).unwrap()
    }

    #[test]
    fn compute_shapes_follow_frame_and_term_counts() {
        let trajectory = butane_like_trajectory();
        let topology = InternalTopology {
            bonds: vec![BondTerm(0, 1), BondTerm(1, 2), BondTerm(2, 3)],
            angles: vec![AngleTerm(0, 1, 2), AngleTerm(1, 2, 3)],
            torsions: vec![TorsionTerm(0, 1, 2, 3)],
        };
        let series = compute_internal_coordinates(&trajectory, &topology).unwrap();
        assert_eq!(series.bond_lengths.dim(), (2, 3));
        assert_eq!(series.bond_angles.dim(), (2, 2));
        assert_eq!(series.torsion_angles.dim(), (2, 1));
    }

    #[test]
    fn compute_fills_per_frame_values() {
        let trajectory = butane_like_trajectory();
        let topology = InternalTopology {
            bonds: vec![BondTerm(1, 2)],
            angles: vec![AngleTerm(0, 1, 2)],
            torsions: vec![TorsionTerm(0, 1, 2, 3)],
        };
        let series = compute_internal_coordinates(&trajectory, &topology).unwrap();
        assert_relative_eq!(series.bond_lengths[[0, 0]], 1.0);
        assert_relative_eq!(series.bond_angles[[1, 0]], PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(series.torsion_angles[[0, 0]], 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            series.torsion_angles[[1, 0]].abs(),
            PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn compute_with_empty_topology_yields_zero_width_series() {
        let trajectory = butane_like_trajectory();
        let series =
            compute_internal_coordinates(&trajectory, &InternalTopology::default()).unwrap();
        assert_eq!(series.bond_lengths.dim(), (2, 0));
        assert_eq!(series.bond_angles.dim(), (2, 0));
        assert_eq!(series.torsion_angles.dim(), (2, 0));
    }

    #[test]
    fn compute_rejects_out_of_range_index() {
        let trajectory = butane_like_trajectory();
        let topology = InternalTopology {
            bonds: vec![BondTerm(0, 4)],
            ..Default::default()
        };
        let err = compute_internal_coordinates(&trajectory, &topology).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Topology(TopologyError::IndexOutOfRange { index: 4, .. })
        ));
    }

    #[test]
    fn compute_propagates_nan_for_repeated_indices() {
        let trajectory = butane_like_trajectory();
        let topology = InternalTopology {
            angles: vec![AngleTerm(1, 1, 2)],
            torsions: vec![TorsionTerm(0, 1, 1, 3)],
            ..Default::default()
        };
        let series = compute_internal_coordinates(&trajectory, &topology).unwrap();
        assert!(series.bond_angles[[0, 0]].is_nan());
        assert!(series.torsion_angles[[0, 0]].is_nan());
    }
}
