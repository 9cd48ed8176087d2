//! # Keplerian orbital elements
//!
//! The immutable value type describing an unperturbed two-body elliptical
//! orbit, and the position pipeline built on it: mean anomaly at a given
//! time, Kepler-equation resolution, perifocal coordinates, rotation into the
//! reference frame.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Radian, SceneUnit, Second, DEFAULT_NEWTON_ITERATIONS, DPI};
use crate::kepler::{principal_angle, solve_eccentric_anomaly, true_anomaly};
use crate::orrery_errors::OrreryError;
use crate::ref_frame::perifocal_to_reference;

/// Keplerian orbital elements of a scene entity.
///
/// Units:
/// * `semi_major_axis`: caller-defined scene length unit
/// * `eccentricity`: unitless, in `[0, 1)`
/// * `inclination`: degrees
/// * `ascending_node_longitude`: degrees
/// * `periapsis_argument`: degrees
/// * `mean_anomaly_at_epoch`: radians
/// * `epoch`, `period`: simulation-clock seconds
///
/// Angular *element* fields are degrees, matching the configuration data the
/// scene is driven by; every *anomaly* value (mean, eccentric, true) is in
/// radians. The struct has no internal mutable state: it is created once,
/// from configuration or fetched trajectory data, and read for the lifetime
/// of a scene entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis: SceneUnit,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub ascending_node_longitude: Degree,
    pub periapsis_argument: Degree,
    pub mean_anomaly_at_epoch: Radian,
    pub epoch: Second,
    pub period: Second,
}

impl OrbitalElements {
    /// Build a validated set of orbital elements.
    ///
    /// Arguments
    /// ---------
    /// * `semi_major_axis`: must be strictly positive.
    /// * `eccentricity`: must lie in `[0, 1)`; parabolic and hyperbolic
    ///   orbits are rejected.
    /// * `inclination`, `ascending_node_longitude`, `periapsis_argument`:
    ///   degrees, unconstrained modulo 360°.
    /// * `mean_anomaly_at_epoch`: radians, the mean anomaly valid at `epoch`.
    /// * `epoch`: time at which `mean_anomaly_at_epoch` holds.
    /// * `period`: orbital period, must be strictly positive.
    ///
    /// Return
    /// ------
    /// * `Ok(OrbitalElements)` or the first failed precondition as an
    ///   [`OrreryError`]. Rejecting bad elements here keeps NaN/Infinity out
    ///   of every downstream position sample.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        semi_major_axis: SceneUnit,
        eccentricity: f64,
        inclination: Degree,
        ascending_node_longitude: Degree,
        periapsis_argument: Degree,
        mean_anomaly_at_epoch: Radian,
        epoch: Second,
        period: Second,
    ) -> Result<Self, OrreryError> {
        if !(semi_major_axis > 0.) {
            return Err(OrreryError::InvalidSemiMajorAxis(semi_major_axis));
        }
        if !(0. ..1.).contains(&eccentricity) {
            return Err(OrreryError::InvalidEccentricity(eccentricity));
        }
        if !(period > 0.) {
            return Err(OrreryError::InvalidPeriod(period));
        }

        Ok(OrbitalElements {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            mean_anomaly_at_epoch,
            epoch,
            period,
        })
    }

    /// Mean motion `n = 2π / period`, in radians per second.
    pub fn mean_motion(&self) -> f64 {
        DPI / self.period
    }

    /// Mean anomaly at time `t`, normalized into `[0, 2π)`.
    pub fn mean_anomaly_at(&self, t: Second) -> Radian {
        principal_angle(self.mean_anomaly_at_epoch + self.mean_motion() * (t - self.epoch))
    }

    /// Periapsis distance `a·(1 − e)`.
    pub fn periapsis_distance(&self) -> SceneUnit {
        self.semi_major_axis * (1. - self.eccentricity)
    }

    /// Apoapsis distance `a·(1 + e)`.
    pub fn apoapsis_distance(&self) -> SceneUnit {
        self.semi_major_axis * (1. + self.eccentricity)
    }

    /// Position of the body at time `t`, in the reference frame.
    ///
    /// Pure and deterministic: the same `(elements, t)` pair always produces
    /// the same vector, the result is periodic in `t` with period `period`,
    /// and `t = epoch` lands on the mean anomaly at epoch. The result uses
    /// the same length unit as `semi_major_axis`; display scaling is the
    /// caller's business.
    pub fn position_at(&self, t: Second) -> Vector3<f64> {
        self.position_at_with_iterations(t, DEFAULT_NEWTON_ITERATIONS)
    }

    /// Same as [`Self::position_at`] with an explicit Newton iteration
    /// count, for callers pushing eccentricity close to 1.
    pub fn position_at_with_iterations(&self, t: Second, iterations: usize) -> Vector3<f64> {
        let mean_anomaly = self.mean_anomaly_at(t);
        let ecc_anomaly = solve_eccentric_anomaly(mean_anomaly, self.eccentricity, iterations);
        let nu = true_anomaly(ecc_anomaly, self.eccentricity);
        let radius = self.semi_major_axis * (1. - self.eccentricity * ecc_anomaly.cos());

        let perifocal = Vector3::new(radius * nu.cos(), radius * nu.sin(), 0.);

        perifocal_to_reference(
            self.ascending_node_longitude,
            self.inclination,
            self.periapsis_argument,
        ) * perifocal
    }
}
