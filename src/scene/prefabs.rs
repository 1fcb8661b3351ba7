use std::collections::HashSet;

use glam::Vec3;
use hecs::{Entity, World};

use crate::components::{
    Acceleration, Balloon, Collider, Color, Contacts, Position, PreviousPosition, Static,
    Velocity, WindBindings,
};

/// Spawn a static wall plane. `normal` points into the room.
pub fn spawn_wall(world: &mut World, normal: Vec3, offset: f32, color: Vec3) -> Entity {
    world.spawn((Collider::Plane { normal, offset }, Static, Color(color)))
}

/// Spawn a balloon at rest. Force vectors and key bindings are fixed at
/// construction; velocity and the force accumulator start zeroed.
pub fn spawn_balloon(
    world: &mut World,
    balloon: Balloon,
    bindings: WindBindings,
    pos: Vec3,
    radius: f32,
    color: Vec3,
) -> Entity {
    world.spawn((
        Position(pos),
        PreviousPosition(pos),
        Velocity(Vec3::ZERO),
        Acceleration(Vec3::ZERO),
        balloon,
        bindings,
        Collider::Sphere { radius },
        Contacts(HashSet::new()),
        Color(color),
    ))
}
