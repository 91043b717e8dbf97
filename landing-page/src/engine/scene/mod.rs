//! Hero product scene: lights, model camera, product model and its effects.
//!
//! The model is either built from primitives or loaded from glTF depending on
//! the active revision. Spin, float, hover tint and camera orbit all run per
//! frame once the page is running.

/// Idle bobbing of the product rig.
pub mod float_motion;

/// Pointer hover state and the shell material it drives.
pub mod hover;

/// Key, fill and ambient lights.
pub mod lighting;

/// Product spawning for procedural and glTF revisions.
pub mod product;

/// Frame-rate independent spin with drag and hover pauses.
pub mod spin;

/// Model camera viewport that follows the hero slot.
pub mod viewport;

use bevy::prelude::*;

use crate::engine::camera::orbit_camera::{ScrollCapture, orbit_camera_controller};
use crate::engine::core::app_state::AppState;
use crate::engine::loading::model_loader::poll_model_load;
use float_motion::float_rig;
use hover::{apply_hover_appearance, on_hover_enter, on_hover_leave};
use product::{attach_loaded_model, setup_product_scene};
use spin::spin_model;
use viewport::fit_viewport_to_slot;

/// Registers the product scene and its per-frame systems.
pub struct ProductScenePlugin;

impl Plugin for ProductScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScrollCapture>()
            .add_observer(on_hover_enter)
            .add_observer(on_hover_leave)
            .add_systems(OnEnter(AppState::Running), setup_product_scene)
            .add_systems(
                Update,
                (
                    fit_viewport_to_slot,
                    orbit_camera_controller,
                    poll_model_load,
                    attach_loaded_model,
                    float_rig,
                    spin_model,
                    apply_hover_appearance,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}
