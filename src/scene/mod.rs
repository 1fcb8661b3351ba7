mod prefabs;

use glam::Vec3;
use hecs::{Entity, World};

use crate::components::{Balloon, WindBindings};
use prefabs::{spawn_balloon, spawn_wall};

/// Interior half-width of the room along X.
pub const ROOM_HALF_WIDTH: f32 = 8.0;
/// Interior height of the room along Y; the floor sits at y = 0.
pub const ROOM_HEIGHT: f32 = 10.0;

const BALLOON_RADIUS: f32 = 0.75;

/// Build a closed room with one balloon hanging in the middle of it.
/// Returns the balloon entity.
///
/// Normals point into the room; `offset` is the plane's signed distance from
/// the origin along its normal. No front/back walls — no force ever has a z
/// component, so the balloon stays in the z = 0 plane.
pub fn load_room_scene(world: &mut World, balloon: Balloon, bindings: WindBindings) -> Entity {
    let wall_tint = Vec3::new(0.42, 0.40, 0.45);

    spawn_wall(world, Vec3::Y, 0.0, wall_tint); // floor
    spawn_wall(world, -Vec3::Y, -ROOM_HEIGHT, wall_tint); // ceiling
    spawn_wall(world, Vec3::X, -ROOM_HALF_WIDTH, wall_tint); // left wall
    spawn_wall(world, -Vec3::X, -ROOM_HALF_WIDTH, wall_tint); // right wall

    spawn_balloon(
        world,
        balloon,
        bindings,
        Vec3::new(0.0, ROOM_HEIGHT * 0.5, 0.0),
        BALLOON_RADIUS,
        Vec3::new(0.85, 0.2, 0.2),
    )
}
