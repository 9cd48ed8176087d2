//! # Impact scenarios
//!
//! Impact-site descriptions shown on the 2D map overlay, plus the camera
//! zoom arithmetic of the scene controls. Map rendering and animation easing
//! live in the host; this module only holds the data and the clamping rules.

use serde::{Deserialize, Serialize};

/// Closest allowed camera zoom.
pub const MIN_ZOOM: f64 = 0.5;

/// Farthest allowed camera zoom.
pub const MAX_ZOOM: f64 = 200.0;

/// Zoom change applied per button press.
pub const ZOOM_STEP: f64 = 3.0;

/// Camera zoom the scene returns to after closing the map.
pub const DEFAULT_SCENE_ZOOM: f64 = 25.0;

/// An asteroid impact site displayed on the map overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactSite {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
    /// Radius of the affected zone in kilometers.
    pub radius_km: f64,
    /// Map zoom level used when framing this site.
    pub map_zoom: u8,
}

impl ImpactSite {
    /// The ground-impact scenario (Lithuania, 50 km zone).
    pub fn ground() -> Self {
        ImpactSite {
            lat: 55.1694,
            lng: 23.8813,
            radius_km: 50.,
            map_zoom: 7,
        }
    }

    /// The sea-impact scenario (mid-Atlantic, 200 km zone).
    pub fn sea() -> Self {
        ImpactSite {
            lat: 30.0,
            lng: -40.0,
            radius_km: 200.,
            map_zoom: 5,
        }
    }

    /// Map center for framing, as `(lat, lng)`.
    pub fn map_center(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// One zoom-in step, clamped to [`MIN_ZOOM`].
pub fn zoom_in(zoom: f64) -> f64 {
    (zoom - ZOOM_STEP).max(MIN_ZOOM)
}

/// One zoom-out step, clamped to [`MAX_ZOOM`].
pub fn zoom_out(zoom: f64) -> f64 {
    (zoom + ZOOM_STEP).min(MAX_ZOOM)
}
