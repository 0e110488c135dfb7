use bevy::prelude::*;

pub mod buildings;
pub mod catalog;
pub mod events;
pub mod ground;
pub mod lighting;

use events::OpenLink;

/// Populates the world at startup: ground plane, the building catalog, and
/// lighting. Also registers the [`OpenLink`] event the pick resolver emits.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<OpenLink>().add_systems(
            Startup,
            (
                ground::spawn_ground_plane,
                buildings::spawn_buildings,
                lighting::setup_lighting,
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::buildings::Building;
    use super::ground::GroundPlane;
    use super::*;

    fn scene_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(Assets::<Mesh>::default());
        app.insert_resource(Assets::<StandardMaterial>::default());
        app.add_plugins(ScenePlugin);
        app.update();
        app
    }

    #[test]
    fn startup_populates_ground_buildings_and_lights() {
        let mut app = scene_app();

        let mut ground = app.world_mut().query::<&GroundPlane>();
        assert_eq!(ground.iter(app.world()).count(), 1);

        let mut buildings = app.world_mut().query::<&Building>();
        assert_eq!(buildings.iter(app.world()).count(), 3);

        let mut suns = app.world_mut().query::<&DirectionalLight>();
        assert_eq!(suns.iter(app.world()).count(), 1);

        assert!(app.world().get_resource::<AmbientLight>().is_some());
    }

    #[test]
    fn ground_and_lights_are_not_buildings() {
        let mut app = scene_app();

        let mut ground = app
            .world_mut()
            .query_filtered::<(), (With<GroundPlane>, Without<Building>)>();
        assert_eq!(ground.iter(app.world()).count(), 1);

        let mut suns = app
            .world_mut()
            .query_filtered::<(), (With<DirectionalLight>, Without<Building>)>();
        assert_eq!(suns.iter(app.world()).count(), 1);
    }
}
