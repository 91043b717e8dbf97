use bevy::math::Vec3;

/// Initial eye position; the orbit target is the origin.
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 6.0);
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

/// Render order of the model camera. The UI camera draws first at order 0.
pub const MODEL_CAMERA_ORDER: isize = 1;

/// Height of the hero model slot in logical pixels.
pub const MODEL_SLOT_HEIGHT: f32 = 500.0;

// Light intensities are the page's relative values scaled into photometric units.
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const AMBIENT_BRIGHTNESS_SCALE: f32 = 500.0;

pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 5.0);
pub const KEY_LIGHT_INTENSITY: f32 = 1.2;
pub const KEY_LIGHT_ILLUMINANCE_SCALE: f32 = 8_000.0;

pub const BLUE_FILL_POSITION: Vec3 = Vec3::new(-10.0, -10.0, -10.0);
pub const BLUE_FILL_INTENSITY: f32 = 0.4;
pub const VIOLET_FILL_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const VIOLET_FILL_INTENSITY: f32 = 0.3;
pub const FILL_LUMEN_SCALE: f32 = 4_000_000.0;
pub const FILL_LIGHT_RANGE: f32 = 40.0;

/// Idle bobbing applied to the whole product rig.
pub struct FloatSettings {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

pub const FLOAT_SETTINGS: FloatSettings = FloatSettings {
    speed: 1.5,
    rotation_intensity: 0.3,
    float_intensity: 0.2,
};

// Procedural earbud geometry, per bud in its local frame.
pub const EARBUD_OFFSET_X: f32 = 0.8;
pub const SHELL_RADIUS: f32 = 0.5;
pub const SHELL_SEGMENTS: u32 = 16;
pub const STEM_TOP_RADIUS: f32 = 0.12;
pub const STEM_BOTTOM_RADIUS: f32 = 0.15;
pub const STEM_HEIGHT: f32 = 1.2;
pub const STEM_OFFSET: Vec3 = Vec3::new(0.0, -0.8, 0.0);
pub const GRILLE_RADIUS: f32 = 0.18;
pub const GRILLE_DEPTH: f32 = 0.03;
pub const GRILLE_OFFSET: Vec3 = Vec3::new(0.4, 0.1, 0.0);
pub const MICROPHONE_RADIUS: f32 = 0.02;
pub const MICROPHONE_DEPTH: f32 = 0.05;
pub const MICROPHONE_SEGMENTS: u32 = 8;
pub const MICROPHONE_OFFSETS: [Vec3; 2] = [Vec3::new(0.08, -0.5, 0.08), Vec3::new(-0.08, -0.5, 0.08)];

/// Pixels scrolled per wheel line.
pub const SCROLL_LINE_HEIGHT: f32 = 40.0;
