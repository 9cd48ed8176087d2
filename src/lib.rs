//! # Orrery
//!
//! Keplerian orbital mechanics core for an interactive star-planet-asteroid
//! scene. The crate computes where an orbiting body is at a given simulation
//! time — Newton–Raphson on Kepler's equation, anomaly conversions, and the
//! 3-1-3 Euler rotation from the orbital plane into the reference frame —
//! and samples closed orbit paths for display. On top of that pure core sit
//! the scene-state records the rendering layer mutates each frame, and the
//! pure logic of the "defend Earth" minigame (projectiles, quiz questions,
//! impact scenarios). Rendering, input, networking, and scheduling belong to
//! the host.

pub mod constants;
pub mod impact;
pub mod kepler;
pub mod keplerian_element;
pub mod orrery_errors;
pub mod quiz;
pub mod ref_frame;
pub mod scene_state;
pub mod trajectory;
