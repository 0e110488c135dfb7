use bevy::prelude::*;
use bevy::render::camera::CameraProjection;

use scene::buildings::Building;
use scene::events::OpenLink;

/// Convert a cursor position in logical window pixels to normalized device
/// coordinates: [-1, 1] on both axes, +Y up.
pub fn screen_to_ndc(screen: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        screen.x / viewport.x * 2.0 - 1.0,
        1.0 - screen.y / viewport.y * 2.0,
    )
}

/// Build a world-space ray from the camera through a cursor position.
///
/// Returns `None` for degenerate input: a zero-sized viewport, or a
/// projection that collapses the ray direction.
pub fn viewport_ray(
    screen: Vec2,
    viewport: Vec2,
    camera: &Transform,
    projection: &PerspectiveProjection,
) -> Option<Ray3d> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    let ndc = screen_to_ndc(screen, viewport);

    // The projection is reverse-z: the near plane sits at NDC z = 1 and the
    // far plane at z = 0, where unprojection degenerates. Unproject two
    // depths short of that to recover the direction.
    let world_from_ndc = camera.compute_matrix() * projection.get_clip_from_view().inverse();
    let near = world_from_ndc.project_point3(ndc.extend(1.0));
    let distant = world_from_ndc.project_point3(ndc.extend(f32::EPSILON));

    Dir3::new(distant - near).ok().map(|direction| Ray3d {
        origin: near,
        direction,
    })
}

/// Project a world-space point to logical window pixels.
///
/// Inverse of [`viewport_ray`]. Points on or behind the camera plane return
/// `None`.
pub fn world_to_screen(
    world: Vec3,
    viewport: Vec2,
    camera: &Transform,
    projection: &PerspectiveProjection,
) -> Option<Vec2> {
    let clip_from_world = projection.get_clip_from_view() * camera.compute_matrix().inverse();
    let clip = clip_from_world * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) / 2.0 * viewport.x,
        (1.0 - ndc.y) / 2.0 * viewport.y,
    ))
}

/// Slab-method ray/AABB intersection.
///
/// Returns the distance along the ray to the nearest crossing in front of
/// the origin (the exit crossing when the origin is inside the box), or
/// `None` when the ray misses or the box lies entirely behind it.
pub fn ray_aabb_distance(ray: &Ray3d, min: Vec3, max: Vec3) -> Option<f32> {
    let dir = *ray.direction;
    let inv = Vec3::new(
        if dir.x.abs() > 1e-6 { 1.0 / dir.x } else { f32::MAX },
        if dir.y.abs() > 1e-6 { 1.0 / dir.y } else { f32::MAX },
        if dir.z.abs() > 1e-6 { 1.0 / dir.z } else { f32::MAX },
    );

    let t1 = (min.x - ray.origin.x) * inv.x;
    let t2 = (max.x - ray.origin.x) * inv.x;
    let t3 = (min.y - ray.origin.y) * inv.y;
    let t4 = (max.y - ray.origin.y) * inv.y;
    let t5 = (min.z - ray.origin.z) * inv.z;
    let t6 = (max.z - ray.origin.z) * inv.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }
    Some(if tmin >= 0.0 { tmin } else { tmax })
}

/// World-space bounds of a building's box mesh.
pub fn building_aabb(building: &Building, transform: &Transform) -> (Vec3, Vec3) {
    let center = transform.translation;
    (
        center - building.half_extents,
        center + building.half_extents,
    )
}

/// On left click, cast a ray from the camera through the cursor and request
/// the nearest hit building's link, if it carries one.
///
/// Only buildings are ray-tested; the ground and lights are not candidates.
/// A click that hits nothing is a silent no-op.
pub fn handle_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Transform, &Projection), With<Camera3d>>,
    buildings: Query<(&Building, &Transform)>,
    mut open_requests: EventWriter<OpenLink>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera_transform, projection)) = cameras.get_single() else {
        return;
    };
    let Projection::Perspective(perspective) = projection else {
        return;
    };

    let viewport = Vec2::new(window.width(), window.height());
    let Some(ray) = viewport_ray(cursor, viewport, camera_transform, perspective) else {
        return;
    };

    let mut nearest: Option<(&Building, f32)> = None;
    for (building, transform) in &buildings {
        let (min, max) = building_aabb(building, transform);
        if let Some(distance) = ray_aabb_distance(&ray, min, max) {
            if nearest.is_none() || distance < nearest.unwrap().1 {
                nearest = Some((building, distance));
            }
        }
    }

    if let Some((building, distance)) = nearest {
        if let Some(url) = &building.link {
            debug!("picked building {:.2} units out", distance);
            open_requests.send(OpenLink { url: url.clone() });
        }
    }
}
