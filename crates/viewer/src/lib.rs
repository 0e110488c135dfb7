use bevy::prelude::*;

pub mod camera;
pub mod picking;


/// The interactive side of the scene: the fixed camera, click picking, and
/// window-resize handling.
pub struct ViewerPlugin;

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, camera::setup_camera).add_systems(
            Update,
            (picking::handle_click, camera::update_camera_aspect),
        );
    }
}
