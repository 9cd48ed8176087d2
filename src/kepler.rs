//! # Kepler equation solver
//!
//! Newton–Raphson resolution of Kepler's equation `E − e·sin(E) = M` for
//! elliptical orbits, together with the anomaly conversions built on top of
//! it. All anomalies (mean, eccentric, true) are expressed in radians.

use crate::constants::{Radian, DPI};

/// Return the principal value of an angle in radians, inside `[0, 2π)`.
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Solve Kepler's equation `E − e·sin(E) − M = 0` for the eccentric anomaly.
///
/// The iteration runs a fixed number of Newton–Raphson steps from the guess
/// `E₀ = M + e/2` when `M < π`, `E₀ = M − e/2` otherwise, which bisects the
/// expected correction direction and converges for every eccentricity in the
/// supported range.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly in radians, pre-normalized by the caller
///   into `[0, 2π)` (see [`principal_angle`]). Inputs outside that range
///   still converge, but the initial-guess heuristic is only tuned for the
///   normalized range.
/// * `eccentricity`: orbital eccentricity in `[0, 1)`. The circular case
///   `e = 0` is exact after the first step and never divides by zero
///   (`f′(E) = 1` everywhere).
/// * `iterations`: number of Newton steps, usually
///   [`crate::constants::DEFAULT_NEWTON_ITERATIONS`].
///
/// Return
/// ------
/// * The eccentric anomaly `E` in radians.
///
/// Remarks
/// -------
/// * Non-convergence is not an error within the supported input range. A
///   residual check after the loop emits a `warn` log when `|f(E)|` stays
///   large, to aid debugging of out-of-range inputs; it does not change the
///   returned value.
pub fn solve_eccentric_anomaly(
    mean_anomaly: Radian,
    eccentricity: f64,
    iterations: usize,
) -> Radian {
    use std::f64::consts::PI;

    let mut ecc_anomaly = if mean_anomaly < PI {
        mean_anomaly + eccentricity / 2.
    } else {
        mean_anomaly - eccentricity / 2.
    };

    for _ in 0..iterations {
        let f = ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly;
        let fp = 1. - eccentricity * ecc_anomaly.cos();
        ecc_anomaly -= f / fp;
    }

    let residual = ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly;
    if residual.abs() > 1e-9 {
        log::warn!(
            "Kepler solver residual {residual:e} after {iterations} iterations \
             (M = {mean_anomaly}, e = {eccentricity})"
        );
    }

    ecc_anomaly
}

/// Convert an eccentric anomaly to the true anomaly `ν`.
///
/// Uses `ν = atan2(√(1−e²)·sin E, cos E − e)`, valid over the whole
/// elliptical range and free of quadrant ambiguity.
pub fn true_anomaly(ecc_anomaly: Radian, eccentricity: f64) -> Radian {
    let sqrt_one_minus_e2 = (1. - eccentricity * eccentricity).sqrt();
    (sqrt_one_minus_e2 * ecc_anomaly.sin()).atan2(ecc_anomaly.cos() - eccentricity)
}
