use bevy::prelude::*;
use bevy::window::WindowResized;

/// Vertical field of view, degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
/// Near clip distance, world units.
pub const CAMERA_NEAR: f32 = 0.1;
/// Far clip distance, world units.
pub const CAMERA_FAR: f32 = 1000.0;
/// Fixed viewpoint: above and behind the skyline, aimed at the origin.
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 15.0, 25.0);

/// Startup: spawn the fixed perspective camera.
pub fn setup_camera(mut commands: Commands, windows: Query<&Window>) {
    let aspect_ratio = windows
        .get_single()
        .map(|window| window.width() / window.height())
        .unwrap_or(1.0);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            aspect_ratio,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Keep the projection's aspect ratio in sync with the window.
///
/// The render surface itself tracks the window, but a stale aspect ratio
/// would stretch the picture and skew picking. Repeated events for the same
/// size settle on the same projection.
pub fn update_camera_aspect(
    mut resize_events: EventReader<WindowResized>,
    mut cameras: Query<&mut Projection, With<Camera3d>>,
) {
    for resized in resize_events.read() {
        if resized.width <= 0.0 || resized.height <= 0.0 {
            continue;
        }
        for mut projection in &mut cameras {
            if let Projection::Perspective(perspective) = &mut *projection {
                perspective.aspect_ratio = resized.width / resized.height;
            }
        }
        debug!("viewport resized to {}x{}", resized.width, resized.height);
    }
}
