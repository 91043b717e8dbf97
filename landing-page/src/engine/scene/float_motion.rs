use bevy::prelude::*;
use constants::render_settings::FloatSettings;

/// Gentle bobbing of the product rig, independent of the spin.
#[derive(Component, Debug, Clone)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Phase offset in seconds.
    pub offset: f32,
}

impl FloatMotion {
    pub fn from_settings(settings: &FloatSettings) -> Self {
        Self {
            speed: settings.speed,
            rotation_intensity: settings.rotation_intensity,
            float_intensity: settings.float_intensity,
            offset: 0.0,
        }
    }

    /// Rig transform at `elapsed_secs`. Height stays within ±0.1 × float intensity.
    pub fn pose(&self, elapsed_secs: f32) -> Transform {
        let phase = (self.offset + elapsed_secs) / 4.0 * self.speed;
        let (sin, cos) = phase.sin_cos();

        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            cos / 8.0 * self.rotation_intensity,
            sin / 8.0 * self.rotation_intensity,
            sin / 20.0 * self.rotation_intensity,
        );
        let height = sin / 10.0 * self.float_intensity;

        Transform::from_xyz(0.0, height, 0.0).with_rotation(rotation)
    }
}

pub fn float_rig(time: Res<Time>, mut rigs: Query<(&FloatMotion, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (motion, mut transform) in &mut rigs {
        *transform = motion.pose(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::render_settings::FLOAT_SETTINGS;

    #[test]
    fn starts_level_with_a_slight_tilt() {
        let motion = FloatMotion::from_settings(&FLOAT_SETTINGS);
        let pose = motion.pose(0.0);
        assert!(pose.translation.y.abs() < 1e-6);

        let (x, y, z) = pose.rotation.to_euler(EulerRot::XYZ);
        assert!((x - 0.3 / 8.0).abs() < 1e-5);
        assert!(y.abs() < 1e-5 && z.abs() < 1e-5);
    }

    #[test]
    fn height_stays_inside_the_float_range() {
        let motion = FloatMotion::from_settings(&FLOAT_SETTINGS);
        let limit = 0.1 * FLOAT_SETTINGS.float_intensity + 1e-6;
        for step in 0..1_000 {
            let pose = motion.pose(step as f32 * 0.05);
            assert!(pose.translation.y.abs() <= limit);
        }
    }
}
