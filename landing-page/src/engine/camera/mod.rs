//! Orbit camera for the hero model viewport.
//!
//! Spherical orbit around the model with bounded polar angle, optional
//! bounded zoom, damping and optional auto-rotation, driven by mouse input
//! inside the model viewport only.

/// Orbit camera component, wheel capture resource and controller system.
pub mod orbit_camera;
