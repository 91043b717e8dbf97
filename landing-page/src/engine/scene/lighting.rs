use bevy::prelude::*;
use constants::palette::{FILL_LIGHT_BLUE, FILL_LIGHT_VIOLET};
use constants::render_settings::{
    AMBIENT_BRIGHTNESS_SCALE, AMBIENT_INTENSITY, BLUE_FILL_INTENSITY, BLUE_FILL_POSITION,
    FILL_LIGHT_RANGE, FILL_LUMEN_SCALE, KEY_LIGHT_ILLUMINANCE_SCALE, KEY_LIGHT_INTENSITY,
    KEY_LIGHT_POSITION, VIOLET_FILL_INTENSITY, VIOLET_FILL_POSITION,
};

/// Soft ambient, one key light and two coloured fills.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_SCALE,
        ..default()
    });

    commands.spawn((
        Name::new("KeyLight"),
        DirectionalLight {
            illuminance: KEY_LIGHT_INTENSITY * KEY_LIGHT_ILLUMINANCE_SCALE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    for (name, colour, position, intensity) in [
        ("BlueFill", FILL_LIGHT_BLUE, BLUE_FILL_POSITION, BLUE_FILL_INTENSITY),
        ("VioletFill", FILL_LIGHT_VIOLET, VIOLET_FILL_POSITION, VIOLET_FILL_INTENSITY),
    ] {
        commands.spawn((
            Name::new(name),
            PointLight {
                color: colour,
                intensity: intensity * FILL_LUMEN_SCALE,
                range: FILL_LIGHT_RANGE,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(position),
        ));
    }
}
