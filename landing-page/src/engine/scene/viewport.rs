use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::PrimaryWindow;

/// UI node the model camera draws into.
#[derive(Component)]
pub struct ModelSlot;

#[derive(Component)]
pub struct ModelCamera;

/// Physical-pixel rectangle of a slot clipped to the window, as
/// `(position, size)`. `None` once the slot is scrolled fully out of view.
pub fn clip_slot_to_window(center: Vec2, size: Vec2, window_size: UVec2) -> Option<(UVec2, UVec2)> {
    if !center.is_finite() || !size.is_finite() {
        return None;
    }

    let window = window_size.as_vec2();
    let min = (center - size * 0.5).max(Vec2::ZERO).floor();
    let max = (center + size * 0.5).min(window).ceil();
    if max.x - min.x < 1.0 || max.y - min.y < 1.0 {
        return None;
    }

    Some((min.as_uvec2(), (max - min).as_uvec2()))
}

/// Keeps the model camera's viewport on top of the hero slot as the page
/// lays out, resizes and scrolls.
pub fn fit_viewport_to_slot(
    slots: Query<(&ComputedNode, &GlobalTransform), With<ModelSlot>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<&mut Camera, With<ModelCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    let clipped = slots.single().ok().and_then(|(node, transform)| {
        clip_slot_to_window(
            transform.translation().truncate(),
            node.size(),
            window.physical_size(),
        )
    });

    match clipped {
        Some((physical_position, physical_size)) => {
            let unchanged = camera.is_active
                && camera.viewport.as_ref().is_some_and(|viewport| {
                    viewport.physical_position == physical_position
                        && viewport.physical_size == physical_size
                });
            if !unchanged {
                camera.viewport = Some(Viewport {
                    physical_position,
                    physical_size,
                    ..default()
                });
                camera.is_active = true;
            }
        }
        None => {
            if camera.is_active {
                camera.is_active = false;
            }
        }
    }
}
