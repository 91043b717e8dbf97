use bevy::prelude::*;

use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::scene::hover::HoverState;

/// Continuous spin of the product about Y, in radians. Never wrapped.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ModelSpin {
    pub angle: f32,
    pub speed: f32,
    pub pause_on_hover: bool,
}

impl ModelSpin {
    /// Negative speeds are treated as stopped.
    pub fn new(speed: f32, pause_on_hover: bool) -> Self {
        Self {
            angle: 0.0,
            speed: speed.max(0.0),
            pause_on_hover,
        }
    }

    pub fn is_paused(&self, dragging: bool, hovered: bool) -> bool {
        dragging || (self.pause_on_hover && hovered)
    }

    /// Advances by `speed × delta` unless a drag or hover pause is engaged.
    pub fn advance(&mut self, delta_secs: f32, dragging: bool, hovered: bool) {
        if self.is_paused(dragging, hovered) || !delta_secs.is_finite() {
            return;
        }
        self.angle += self.speed * delta_secs.max(0.0);
    }
}

pub fn spin_model(
    time: Res<Time>,
    cameras: Query<&OrbitCamera>,
    mut models: Query<(&mut ModelSpin, &mut Transform, &HoverState)>,
) {
    let dragging = cameras.iter().any(|camera| camera.dragging);

    for (mut spin, mut transform, hover) in &mut models {
        spin.advance(time.delta_secs(), dragging, hover.hovered);
        transform.rotation = Quat::from_rotation_y(spin.angle);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use constants::render_settings::CAMERA_POSITION;
    use constants::scene_presets::CLASSIC_PRESET;

    #[test]
    fn angle_never_decreases_for_non_negative_deltas() {
        let mut spin = ModelSpin::new(0.2, false);
        let mut previous = spin.angle;
        for delta in [0.0, 0.016, 0.5, 0.0, 3.0, 1e-6, f32::MAX / 1e30] {
            spin.advance(delta, false, false);
            assert!(spin.angle >= previous);
            previous = spin.angle;
        }
    }

    #[test]
    fn advance_is_frame_rate_independent() {
        let mut coarse = ModelSpin::new(0.2, false);
        let mut fine = ModelSpin::new(0.2, false);
        coarse.advance(1.0, false, false);
        for _ in 0..100 {
            fine.advance(0.01, false, false);
        }
        assert!((coarse.angle - fine.angle).abs() < 1e-4);
        assert!((coarse.angle - 0.2).abs() < 1e-6);
    }

    #[test]
    fn negative_or_invalid_deltas_do_not_rewind() {
        let mut spin = ModelSpin::new(0.5, false);
        spin.advance(1.0, false, false);
        let angle = spin.angle;
        spin.advance(-4.0, false, false);
        spin.advance(f32::NAN, false, false);
        assert_eq!(spin.angle, angle);
    }

    #[test]
    fn drag_pauses_and_hover_pauses_only_when_configured() {
        let mut spin = ModelSpin::new(1.0, false);
        spin.advance(1.0, true, false);
        assert_eq!(spin.angle, 0.0);
        spin.advance(1.0, false, true);
        assert_eq!(spin.angle, 1.0);

        let mut paused_on_hover = ModelSpin::new(1.0, true);
        paused_on_hover.advance(1.0, false, true);
        assert_eq!(paused_on_hover.angle, 0.0);
        paused_on_hover.advance(1.0, false, false);
        assert_eq!(paused_on_hover.angle, 1.0);
    }

    #[test]
    fn spin_system_holds_still_during_a_camera_drag() {
        let mut app = App::new();
        app.init_resource::<Time>().add_systems(Update, spin_model);

        let model = app
            .world_mut()
            .spawn((ModelSpin::new(0.5, false), Transform::default(), HoverState::default()))
            .id();
        let camera = app
            .world_mut()
            .spawn(OrbitCamera::new(CAMERA_POSITION, Vec3::ZERO, CLASSIC_PRESET.orbit))
            .id();

        app.world_mut().resource_mut::<Time>().advance_by(Duration::from_secs(1));
        app.update();
        let angle = app.world().get::<ModelSpin>(model).unwrap().angle;
        assert!((angle - 0.5).abs() < 1e-6);

        app.world_mut().get_mut::<OrbitCamera>(camera).unwrap().dragging = true;
        app.world_mut().resource_mut::<Time>().advance_by(Duration::from_secs(1));
        app.update();
        assert_eq!(app.world().get::<ModelSpin>(model).unwrap().angle, angle);

        let rotation = app.world().get::<Transform>(model).unwrap().rotation;
        assert!(rotation.angle_between(Quat::from_rotation_y(angle)) < 1e-5);
    }
}
