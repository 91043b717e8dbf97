//! Compile-time settings shared by the landing page crates.
//!
//! Content strings, colours, lighting, camera and per-revision scene presets
//! live here so the page and scene code never hard-code them.

pub mod content;
pub mod palette;
pub mod path;
pub mod render_settings;
pub mod reveal;
pub mod scene_presets;
