use bevy::prelude::*;

/// Startup: dim ambient fill plus one directional key light.
pub fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb_u8(0x40, 0x40, 0x40),
        brightness: 300.0,
    });

    // Directional light shining from (1, 1, 1) through the origin
    commands.spawn((
        DirectionalLight {
            illuminance: 5_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
