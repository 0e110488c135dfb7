use bevy::prelude::*;

/// Side length of the square ground plane, world units.
pub const GROUND_SIZE: f32 = 50.0;

/// Marker for the ground plane so queries can tell it apart from buildings.
/// The ground carries no link and the pick resolver never ray-tests it.
#[derive(Component)]
pub struct GroundPlane;

/// Startup: spawn the ground plane, centered on the origin in the XZ plane.
pub fn spawn_ground_plane(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        GroundPlane,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        // Unlit flat gray, rendered from both sides so it reads the same
        // when the camera dips below the horizon.
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x80, 0x80, 0x80),
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        Transform::default(),
        Visibility::default(),
    ));
}
