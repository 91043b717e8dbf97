use std::f32::consts::PI;

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::scene_presets::OrbitLimits;

/// Keeps the camera off the poles even when a preset allows 0 or π.
const POLE_EPSILON: f32 = 1e-6;
/// Radius scale per wheel notch.
const ZOOM_STEP: f32 = 0.95;
/// Pixel-unit wheel deltas per notch.
const PIXELS_PER_NOTCH: f32 = 100.0;

/// Set when the wheel was spent on zoom this frame so the page does not scroll too.
#[derive(Resource, Default)]
pub struct ScrollCapture {
    pub wheel_over_model: bool,
}

/// Spherical camera state around `target`. `polar` is measured from +Y,
/// `azimuth` around Y starting at +Z.
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub azimuth: f32,
    pub polar: f32,
    pub radius: f32,
    /// Primary button went down inside the viewport and is still held.
    pub dragging: bool,
    pub limits: OrbitLimits,
    pending_azimuth: f32,
    pending_polar: f32,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, limits: OrbitLimits) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);

        let mut camera = Self {
            target,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            radius,
            dragging: false,
            limits,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
        };
        camera.clamp();
        camera
    }

    /// Queues a drag of `pixel_delta`. A drag across the full viewport height
    /// turns the camera once around.
    pub fn rotate(&mut self, pixel_delta: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 || !pixel_delta.is_finite() {
            return;
        }
        let radians_per_pixel = 2.0 * PI * self.limits.rotate_speed / viewport_height;
        self.pending_azimuth -= pixel_delta.x * radians_per_pixel;
        self.pending_polar -= pixel_delta.y * radians_per_pixel;
    }

    /// Positive notches move closer. Returns false when the preset disables zoom.
    pub fn zoom(&mut self, notches: f32) -> bool {
        let Some(range) = self.limits.zoom else {
            return false;
        };
        if notches.is_finite() {
            self.radius = (self.radius * ZOOM_STEP.powf(notches))
                .clamp(range.min_distance, range.max_distance);
        }
        true
    }

    /// Applies auto-rotation and one damped step of the queued drag, then
    /// clamps the result into the preset's limits.
    pub fn update(&mut self, delta_secs: f32) {
        if !self.dragging {
            if let Some(speed) = self.limits.auto_rotate_speed {
                self.azimuth -= 2.0 * PI / 60.0 * speed * delta_secs.max(0.0);
            }
        }

        let damping = self.limits.damping_factor.clamp(0.0, 1.0);
        if damping > 0.0 {
            self.azimuth += self.pending_azimuth * damping;
            self.polar += self.pending_polar * damping;
            self.pending_azimuth *= 1.0 - damping;
            self.pending_polar *= 1.0 - damping;
        } else {
            self.azimuth += self.pending_azimuth;
            self.polar += self.pending_polar;
            self.pending_azimuth = 0.0;
            self.pending_polar = 0.0;
        }

        self.clamp();
    }

    pub fn polar_range(&self) -> (f32, f32) {
        let min = self.limits.min_polar.max(POLE_EPSILON);
        let max = self.limits.max_polar.min(PI - POLE_EPSILON).max(min);
        (min, max)
    }

    fn clamp(&mut self) {
        let (min, max) = self.polar_range();
        self.polar = self.polar.clamp(min, max);
        if let Some(range) = self.limits.zoom {
            self.radius = self.radius.clamp(range.min_distance, range.max_distance);
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        self.target
            + self.radius * Vec3::new(sin_polar * sin_azimuth, cos_polar, sin_polar * cos_azimuth)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

/// Orbit and zoom for the model camera. Input only counts when it starts
/// inside the camera's viewport.
pub fn orbit_camera_controller(
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera, &Camera)>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scroll_capture: ResMut<ScrollCapture>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let notches: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / PIXELS_PER_NOTCH,
        })
        .sum();
    scroll_capture.wheel_over_model = false;

    let Ok((mut camera_transform, mut orbit, camera)) = camera_query.single_mut() else {
        return;
    };

    let viewport = camera.physical_viewport_rect();
    let cursor = windows
        .single()
        .ok()
        .and_then(|window| window.physical_cursor_position());
    let cursor_in_viewport = match (cursor, viewport) {
        (Some(cursor), Some(rect)) => camera.is_active && rect.as_rect().contains(cursor),
        _ => false,
    };

    if mouse_button.just_pressed(MouseButton::Left) && cursor_in_viewport {
        orbit.dragging = true;
    }
    if !mouse_button.pressed(MouseButton::Left) {
        orbit.dragging = false;
    }

    if orbit.dragging && mouse_delta != Vec2::ZERO {
        let height = viewport.map_or(0.0, |rect| rect.height() as f32);
        orbit.rotate(mouse_delta, height);
    }

    if cursor_in_viewport && notches.abs() > f32::EPSILON && orbit.zoom(notches) {
        scroll_capture.wheel_over_model = true;
    }

    orbit.update(time.delta_secs());
    *camera_transform = orbit.transform();
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::render_settings::CAMERA_POSITION;
    use constants::scene_presets::{ASSET_PRESET, CLASSIC_PRESET, STUDIO_PRESET};

    fn camera_for(limits: OrbitLimits) -> OrbitCamera {
        OrbitCamera::new(CAMERA_POSITION, Vec3::ZERO, limits)
    }

    #[test]
    fn starts_level_in_front_of_the_model() {
        let camera = camera_for(CLASSIC_PRESET.orbit);
        assert!((camera.polar - PI / 2.0).abs() < 1e-5);
        assert!(camera.azimuth.abs() < 1e-5);
        assert!((camera.radius - 6.0).abs() < 1e-5);
        assert!(camera.eye().distance(CAMERA_POSITION) < 1e-4);
    }

    #[test]
    fn polar_angle_stays_in_bounds_under_arbitrary_drags() {
        for limits in [CLASSIC_PRESET.orbit, STUDIO_PRESET.orbit, ASSET_PRESET.orbit] {
            let mut camera = camera_for(limits);
            let (min, max) = camera.polar_range();
            camera.dragging = true;

            // Deterministic pseudo-random drags, including very large ones.
            let mut seed: u32 = 0x9e37_79b9;
            for step in 0..2_000 {
                seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                let dx = ((seed >> 8) % 4_001) as f32 - 2_000.0;
                let dy = ((seed >> 3) % 40_001) as f32 - 20_000.0;
                camera.rotate(Vec2::new(dx, dy), 500.0);
                camera.update(if step % 7 == 0 { 0.0 } else { 1.0 / 60.0 });

                assert!(
                    camera.polar >= min && camera.polar <= max,
                    "polar {} escaped [{min}, {max}] at step {step}",
                    camera.polar
                );
            }
        }
    }

    #[test]
    fn damping_eventually_applies_the_whole_drag() {
        let mut camera = camera_for(CLASSIC_PRESET.orbit);
        camera.rotate(Vec2::new(-50.0, 0.0), 500.0);
        for _ in 0..500 {
            camera.update(1.0 / 60.0);
        }
        let expected = 2.0 * PI * 50.0 / 500.0;
        assert!((camera.azimuth - expected).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_ignored_when_the_preset_disables_it() {
        let mut camera = camera_for(CLASSIC_PRESET.orbit);
        assert!(!camera.zoom(5.0));
        assert_eq!(camera.radius, 6.0);
    }

    #[test]
    fn zoom_stays_within_distance_bounds() {
        let mut camera = camera_for(STUDIO_PRESET.orbit);
        assert!(camera.zoom(1.0));
        assert!((camera.radius - 6.0 * 0.95).abs() < 1e-5);

        camera.zoom(1_000.0);
        assert_eq!(camera.radius, 4.0);
        camera.zoom(-1_000.0);
        assert_eq!(camera.radius, 10.0);
    }

    #[test]
    fn out_of_range_start_is_pulled_into_bounds() {
        let camera = OrbitCamera::new(Vec3::new(0.0, 20.0, 0.1), Vec3::ZERO, ASSET_PRESET.orbit);
        let (min, _) = camera.polar_range();
        assert!((camera.polar - min).abs() < 1e-6);
        assert_eq!(camera.radius, 8.0);
    }

    #[test]
    fn auto_rotate_pauses_while_dragging() {
        let mut camera = camera_for(ASSET_PRESET.orbit);
        camera.update(1.0);
        let after_idle = camera.azimuth;
        assert!(after_idle < 0.0);

        camera.dragging = true;
        camera.update(1.0);
        assert_eq!(camera.azimuth, after_idle);
    }

    #[test]
    fn presets_without_auto_rotate_hold_still() {
        let mut camera = camera_for(STUDIO_PRESET.orbit);
        for _ in 0..120 {
            camera.update(1.0 / 60.0);
        }
        assert_eq!(camera.azimuth, 0.0);
    }
}
