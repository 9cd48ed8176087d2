//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **numeric constants**, **conversion factors**, and **common type
//! definitions** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians)
//! - Display-scale factors used to map physical distances into scene units
//! - Core type aliases used across the crate
//! - Default tuning values for the Kepler solver and the orbit sampler
//!
//! These definitions are used by the orbital-mechanics core as well as the
//! scene-state shell built on top of it.

// -------------------------------------------------------------------------------------------------
// Numeric constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

// -------------------------------------------------------------------------------------------------
// Display scaling
// -------------------------------------------------------------------------------------------------

/// Meters → base scene units
pub const METERS_TO_UNITS: f64 = 1. / 1e11;

/// Visual multiplier applied on top of [`METERS_TO_UNITS`] for spacing
pub const SCENE_SCALE: f64 = 200.0;

/// Combined meters → displayed scene units factor
pub const DISTANCE_SCALE: f64 = SCENE_SCALE * METERS_TO_UNITS;

// -------------------------------------------------------------------------------------------------
// Solver and sampler defaults
// -------------------------------------------------------------------------------------------------

/// Newton–Raphson iteration count for the Kepler equation solver.
///
/// Sufficient for full float precision over the supported eccentricity
/// range `[0, 1)`; near-parabolic callers may request more through
/// [`crate::keplerian_element::OrbitalElements::position_at_with_iterations`].
pub const DEFAULT_NEWTON_ITERATIONS: usize = 20;

/// Number of points sampled along an orbit path when the caller does not
/// specify one (matches the default asteroid configuration).
pub const DEFAULT_ORBIT_SAMPLES: usize = 256;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Caller-defined length unit of the scene (the same unit as the semi-major axis)
pub type SceneUnit = f64;
/// Time in simulation-clock seconds
pub type Second = f64;
