use bevy::prelude::*;

use crate::catalog::{building_catalog, BuildingSpec};

/// A clickable box building. Carries what the pick resolver needs: the box
/// half-extents (the mesh is an axis-aligned cuboid) and the link opened
/// when the building is clicked, if any.
#[derive(Component, Debug, Clone)]
pub struct Building {
    pub half_extents: Vec3,
    pub link: Option<String>,
}

/// Spawn a single building.
///
/// Cuboid meshes are centered on their transform, so the translation is
/// lifted by half the height to rest the base at `spec.position`.
pub fn spawn_building(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    spec: &BuildingSpec,
) -> Entity {
    let translation = spec.position + Vec3::Y * (spec.size.y / 2.0);
    commands
        .spawn((
            Building {
                half_extents: spec.size / 2.0,
                link: spec.link.map(str::to_owned),
            },
            Mesh3d(meshes.add(Cuboid::new(spec.size.x, spec.size.y, spec.size.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: spec.color,
                ..default()
            })),
            Transform::from_translation(translation),
            Visibility::default(),
        ))
        .id()
}

/// Startup: spawn every building in the compiled-in catalog.
pub fn spawn_buildings(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for spec in building_catalog() {
        spawn_building(&mut commands, &mut meshes, &mut materials, &spec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(Assets::<Mesh>::default());
        app.insert_resource(Assets::<StandardMaterial>::default());
        app.add_plugins(crate::ScenePlugin);
        app.update();
        app
    }

    #[test]
    fn buildings_rest_on_their_base_position() {
        let mut app = scene_app();
        let catalog = building_catalog();
        let mut buildings = app.world_mut().query::<(&Building, &Transform)>();
        let mut seen = 0;
        for (building, transform) in buildings.iter(app.world()) {
            let spec = catalog
                .iter()
                .find(|spec| spec.link == building.link.as_deref())
                .expect("spawned building missing from the catalog");
            let expected = spec.position + Vec3::Y * (spec.size.y / 2.0);
            assert_eq!(transform.translation, expected);
            assert_eq!(building.half_extents, spec.size / 2.0);
            seen += 1;
        }
        assert_eq!(seen, 3);
    }

    #[test]
    fn buildings_carry_meshes_and_materials() {
        let mut app = scene_app();
        let mut buildings = app
            .world_mut()
            .query_filtered::<(&Mesh3d, &MeshMaterial3d<StandardMaterial>), With<Building>>();
        assert_eq!(buildings.iter(app.world()).count(), 3);
    }
}
