//! # Scene-entity state
//!
//! Mutable per-entity records owned by the rendering layer: an orbiting body
//! following a Keplerian orbit and a launched projectile. The records are a
//! thin stateful shell over the pure orbital-mechanics core; the host drives
//! them once per displayed frame with its simulation clock and consumes the
//! updated positions.

use nalgebra::Vector3;

use crate::constants::{Second, DEFAULT_ORBIT_SAMPLES};
use crate::keplerian_element::OrbitalElements;
use crate::orrery_errors::OrreryError;
use crate::trajectory::OrbitPath;

/// Despawn boundary for projectiles, in scene units on any axis.
pub const OUTER_BOUND: f64 = 5000.0;

/// Extra collision margin added to the asteroid radius when testing
/// projectile hits.
pub const PROJECTILE_HIT_MARGIN: f64 = 0.22;

/// Shortest allowed projectile lifetime, in seconds.
pub const MIN_PROJECTILE_LIFETIME: Second = 0.1;

/// A scene entity on a Keplerian orbit, with its precomputed display path.
///
/// The elements are immutable; `position` is the mutable visual state the
/// renderer reads after each [`OrbitingBody::update`]. The orbit path is
/// regenerated only when the elements or sample count change, never per
/// frame.
#[derive(Debug, Clone)]
pub struct OrbitingBody {
    pub elements: OrbitalElements,
    path: OrbitPath,
    /// Display scale applied to core positions.
    pub scale: f64,
    /// Clock multiplier; 1.0 runs the orbit in real simulation time.
    pub speed: f64,
    /// Last computed position, in display units.
    pub position: Vector3<f64>,
}

impl OrbitingBody {
    pub fn new(
        elements: OrbitalElements,
        samples: usize,
        scale: f64,
        speed: f64,
    ) -> Result<Self, OrreryError> {
        let path = OrbitPath::generate(&elements, samples)?.scaled(scale);
        let position = elements.position_at(elements.epoch) * scale;
        Ok(OrbitingBody {
            elements,
            path,
            scale,
            speed,
            position,
        })
    }

    /// The default asteroid of the scene: `a=2`, `e=0.2`, `i=45°`, `Ω=120°`,
    /// `ω=60°`, `M0=0`, `epoch=0`, `period=30`, sampled at 256 points.
    pub fn default_asteroid() -> Self {
        let elements = OrbitalElements {
            semi_major_axis: 2.,
            eccentricity: 0.2,
            inclination: 45.,
            ascending_node_longitude: 120.,
            periapsis_argument: 60.,
            mean_anomaly_at_epoch: 0.,
            epoch: 0.,
            period: 30.,
        };
        // Static, pre-validated configuration.
        OrbitingBody::new(elements, DEFAULT_ORBIT_SAMPLES, 1., 0.5)
            .expect("default asteroid elements are valid")
    }

    /// The precomputed display path, already scaled.
    pub fn path(&self) -> &OrbitPath {
        &self.path
    }

    /// Advance the body to the given clock reading, orbiting around
    /// `center`, and return the new display position.
    ///
    /// Evaluates the core position exactly at `clock·speed`; cheap enough to
    /// run once per rendered frame per entity.
    pub fn update(&mut self, clock: Second, center: Vector3<f64>) -> Vector3<f64> {
        self.position = center + self.elements.position_at(clock * self.speed) * self.scale;
        self.position
    }

    /// Advance the body using the precomputed path instead of an exact
    /// evaluation: the clock is wrapped into one period and mapped to the
    /// nearest lower sample index.
    ///
    /// Coarser than [`OrbitingBody::update`] but touches no trigonometry,
    /// which is how the original scene animated dense asteroid fields.
    pub fn update_from_path(&mut self, clock: Second, center: Vector3<f64>) -> Vector3<f64> {
        let period = self.elements.period;
        let t = (clock * self.speed).rem_euclid(period);
        let idx = ((t / period) * (self.path.len() - 1) as f64) as usize;
        self.position = center + self.path.points()[idx];
        self.position
    }
}

/// Outcome of one projectile integration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileEvent {
    InFlight,
    /// Left the scene bounds or exceeded its lifetime.
    Despawned,
    HitAsteroid,
}

/// A launched projectile moving on a straight line.
///
/// Position integrates as `p += dir·speed·dt`, frame-rate independent. The
/// projectile despawns past [`OUTER_BOUND`] on any axis or once `lifetime`
/// seconds have elapsed, and registers a hit when it enters the target
/// sphere inflated by [`PROJECTILE_HIT_MARGIN`].
#[derive(Debug, Clone)]
pub struct ProjectileState {
    pub position: Vector3<f64>,
    direction: Vector3<f64>,
    pub speed: f64,
    lifetime: Second,
    age: Second,
    alive: bool,
}

impl ProjectileState {
    /// Spawn a projectile at `start` moving along `direction` (normalized
    /// internally) at `speed` scene units per second. `lifetime` is clamped
    /// to at least [`MIN_PROJECTILE_LIFETIME`].
    pub fn launch(
        start: Vector3<f64>,
        direction: Vector3<f64>,
        speed: f64,
        lifetime: Second,
    ) -> Self {
        ProjectileState {
            position: start,
            direction: direction.normalize(),
            speed,
            lifetime: lifetime.max(MIN_PROJECTILE_LIFETIME),
            age: 0.,
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Integrate one frame of `dt` seconds and test despawn conditions and,
    /// when a target is supplied, the hit sphere.
    ///
    /// Once the projectile has despawned or hit, further calls keep
    /// returning the terminal event without moving it.
    pub fn advance(
        &mut self,
        dt: Second,
        target: Option<(Vector3<f64>, f64)>,
    ) -> ProjectileEvent {
        if !self.alive {
            return ProjectileEvent::Despawned;
        }

        self.position += self.direction * self.speed * dt;
        self.age += dt;

        if self.age >= self.lifetime
            || self.position.x.abs() > OUTER_BOUND
            || self.position.y.abs() > OUTER_BOUND
            || self.position.z.abs() > OUTER_BOUND
        {
            self.alive = false;
            return ProjectileEvent::Despawned;
        }

        if let Some((target_position, target_radius)) = target {
            if target_radius > 0. {
                let distance = (self.position - target_position).norm();
                if distance <= target_radius + PROJECTILE_HIT_MARGIN {
                    self.alive = false;
                    return ProjectileEvent::HitAsteroid;
                }
            }
        }

        ProjectileEvent::InFlight
    }
}
