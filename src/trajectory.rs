//! # Orbit path sampling
//!
//! Turns a set of orbital elements into a closed polyline: `samples` points
//! evenly spaced in *time* over one revolution, plus an explicit copy of the
//! first point so consumers drawing the path as a line strip do not have to
//! wrap it themselves.

use nalgebra::Vector3;

use crate::constants::Second;
use crate::keplerian_element::OrbitalElements;
use crate::orrery_errors::OrreryError;

/// One full revolution of an orbit, sampled for display.
///
/// Read-only once produced; regenerate it when the elements or the sample
/// count change. The sequence holds `samples + 1` points and the last point
/// is an exact copy of the first.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    points: Vec<Vector3<f64>>,
}

impl OrbitPath {
    /// Sample one revolution of `elements` at `samples` evenly time-spaced
    /// points, then close the loop.
    ///
    /// For `i` in `[0, samples)` the sample time is `(i / samples)·period`.
    /// Deterministic: regenerating with the same inputs yields an identical
    /// path.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::InvalidSampleCount`] when `samples < 2`.
    pub fn generate(elements: &OrbitalElements, samples: usize) -> Result<Self, OrreryError> {
        if samples < 2 {
            return Err(OrreryError::InvalidSampleCount(samples));
        }

        let mut points = Vec::with_capacity(samples + 1);
        for i in 0..samples {
            let t: Second = (i as f64 / samples as f64) * elements.period;
            points.push(elements.position_at(t));
        }
        // Close the loop with a copy, not a re-derived sample, so the first
        // and last points compare equal bit for bit.
        let first = points[0];
        points.push(first);

        Ok(OrbitPath { points })
    }

    /// The sampled points, first point repeated at the end.
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    /// Number of stored points (`samples + 1`).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A copy of the path with every point multiplied by a display scale
    /// factor.
    pub fn scaled(&self, scale: f64) -> OrbitPath {
        OrbitPath {
            points: self.points.iter().map(|p| p * scale).collect(),
        }
    }

    /// Flatten the path into an `x0 y0 z0 x1 y1 z1 …` single-precision
    /// buffer, the layout line-strip renderers consume directly.
    pub fn line_strip_buffer(&self) -> Vec<f32> {
        let mut buffer = Vec::with_capacity(self.points.len() * 3);
        for p in &self.points {
            buffer.push(p.x as f32);
            buffer.push(p.y as f32);
            buffer.push(p.z as f32);
        }
        buffer
    }
}
