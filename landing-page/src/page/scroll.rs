use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::render_settings::SCROLL_LINE_HEIGHT;

use crate::engine::camera::orbit_camera::ScrollCapture;

/// Scrollable root holding every page section.
#[derive(Component)]
pub struct PageRoot;

/// Vertical scroll distance of one wheel event, positive towards the footer.
pub fn scroll_distance(unit: MouseScrollUnit, y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => -y * SCROLL_LINE_HEIGHT,
        MouseScrollUnit::Pixel => -y,
    }
}

/// Scrolls the page with the wheel unless the model viewport consumed it as
/// zoom this frame. Layout clamps the far end to the content height.
pub fn scroll_page(
    mut wheel: EventReader<MouseWheel>,
    scroll_capture: Res<ScrollCapture>,
    mut pages: Query<&mut ScrollPosition, With<PageRoot>>,
) {
    let distance: f32 = wheel.read().map(|ev| scroll_distance(ev.unit, ev.y)).sum();
    if scroll_capture.wheel_over_model || distance == 0.0 {
        return;
    }

    for mut position in &mut pages {
        position.offset_y = (position.offset_y + distance).max(0.0);
    }
}
