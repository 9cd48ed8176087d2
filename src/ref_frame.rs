//! # Orbital-plane → reference-frame rotation
//!
//! Builds the rotation taking perifocal coordinates (periapsis along the
//! local x-axis, orbit in the local xy-plane) into the scene's reference
//! frame, composed from the three classical Euler rotations: argument of
//! periapsis about the orbital normal, inclination about the line of nodes,
//! ascending-node longitude about the reference-plane normal.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Degree, RADEG};

/// Rotation matrix of angle `alpha` (radians) around one of the coordinate
/// axes (`k = 0, 1, 2` for x, y, z).
pub(crate) fn rotmt(alpha: f64, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Composed perifocal → reference-frame rotation for a 3-1-3 Euler sequence.
///
/// Arguments
/// ---------
/// * `ascending_node_longitude`: Ω in degrees.
/// * `inclination`: i in degrees.
/// * `periapsis_argument`: ω in degrees.
///
/// Output
/// ------
/// * The matrix `R = Rz(Ω)·Rx(i)·Rz(ω)` such that `x_ref = R · x_perifocal`.
///   With all three angles zero, `R` is the identity and reference-frame
///   coordinates match the orbital-plane coordinates.
pub fn perifocal_to_reference(
    ascending_node_longitude: Degree,
    inclination: Degree,
    periapsis_argument: Degree,
) -> Matrix3<f64> {
    rotmt(ascending_node_longitude * RADEG, 2)
        * rotmt(inclination * RADEG, 0)
        * rotmt(periapsis_argument * RADEG, 2)
}

#[cfg(test)]
mod ref_frame_test {

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotmt_z_quarter_turn() {
        let rot = rotmt(std::f64::consts::FRAC_PI_2, 2);
        let rotated = rot * Vector3::new(1., 0., 0.);
        assert_relative_eq!(rotated.x, 0., epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 1., epsilon = 1e-12);
        assert_relative_eq!(rotated.z, 0., epsilon = 1e-12);
    }

    #[test]
    fn test_identity_when_all_angles_zero() {
        let rot = perifocal_to_reference(0., 0., 0.);
        assert_relative_eq!(rot, Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_matches_explicit_matrix_entries() {
        // Cross-check the composed rotation against the textbook entry-wise
        // formulation, built from cos/sin of Ω, ω, i.
        let (node, incl, argp) = (120.0_f64, 45.0_f64, 60.0_f64);
        let (cos_o, sin_o) = ((node * RADEG).cos(), (node * RADEG).sin());
        let (cos_i, sin_i) = ((incl * RADEG).cos(), (incl * RADEG).sin());
        let (cos_w, sin_w) = ((argp * RADEG).cos(), (argp * RADEG).sin());

        let expected = Matrix3::new(
            cos_o * cos_w - sin_o * sin_w * cos_i,
            -cos_o * sin_w - sin_o * cos_w * cos_i,
            sin_o * sin_i,
            sin_o * cos_w + cos_o * sin_w * cos_i,
            -sin_o * sin_w + cos_o * cos_w * cos_i,
            -cos_o * sin_i,
            sin_w * sin_i,
            cos_w * sin_i,
            cos_i,
        );

        let rot = perifocal_to_reference(node, incl, argp);
        assert_relative_eq!(rot, expected, epsilon = 1e-14);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let rot = perifocal_to_reference(312., 97., 18.);
        let rotated = rot * Vector3::new(1.6, -0.4, 0.);
        assert_relative_eq!(rotated.norm(), (1.6f64 * 1.6 + 0.16).sqrt(), epsilon = 1e-12);
    }
}
