use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrreryError {
    #[error("Invalid semi-major axis: {0} (must be strictly positive)")]
    InvalidSemiMajorAxis(f64),

    #[error("Invalid eccentricity: {0} (supported range is [0, 1); parabolic and hyperbolic orbits are out of scope)")]
    InvalidEccentricity(f64),

    #[error("Invalid orbital period: {0} (must be strictly positive)")]
    InvalidPeriod(f64),

    #[error("Invalid sample count: {0} (an orbit path needs at least 2 samples)")]
    InvalidSampleCount(usize),
}
