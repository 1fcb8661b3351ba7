use std::collections::HashSet;

use glam::Vec3;
use hecs::{Entity, World};

use crate::components::{
    Collider, CollisionEvent, Contacts, Position, Static, Velocity,
};
use crate::systems::balloon::{collision_enter_response, collision_stay_response};

struct PlaneEntry {
    entity: Entity,
    normal: Vec3,
    offset: f32,
}

/// Detect sphere-vs-plane overlaps and push each sphere flush with the
/// surface. Returns one event per contact; the event normal is the plane
/// normal (unit length, pointing off the surface toward the sphere).
///
/// Velocity is never touched here — that is the contact system's job.
pub fn collision_system(world: &mut World) -> Vec<CollisionEvent> {
    let planes: Vec<PlaneEntry> = world
        .query::<&Collider>()
        .with::<&Static>()
        .iter()
        .filter_map(|(entity, collider)| match collider {
            Collider::Plane { normal, offset } => Some(PlaneEntry {
                entity,
                normal: *normal,
                offset: *offset,
            }),
            Collider::Sphere { .. } => None,
        })
        .collect();

    let mut events = Vec::new();
    for (entity, (pos, collider)) in world.query_mut::<(&mut Position, &Collider)>() {
        let Collider::Sphere { radius } = collider else {
            continue;
        };
        for plane in &planes {
            let dist = pos.0.dot(plane.normal) - plane.offset;
            let penetration = *radius - dist;
            if penetration > 0.0 {
                pos.0 += plane.normal * penetration;
                events.push(CollisionEvent {
                    entity,
                    surface: plane.entity,
                    normal: plane.normal,
                    penetration,
                });
            }
        }
    }

    events
}

/// Classify this tick's contacts against the previous tick's and apply the
/// matching velocity response: a surface not seen last tick is a fresh
/// impact, a surface still present is sustained contact. Surfaces that
/// dropped out of the set fire a fresh impact again on recontact.
pub fn contact_response_system(world: &mut World, events: &[CollisionEvent]) {
    // Entities with a contact set, whether or not they collided this tick.
    let tracked: Vec<Entity> = world
        .query_mut::<&Contacts>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();

    for entity in tracked {
        let mut touching: HashSet<Entity> = HashSet::new();
        for event in events.iter().filter(|e| e.entity == entity) {
            let was_touching = world
                .get::<&Contacts>(entity)
                .map(|c| c.0.contains(&event.surface))
                .unwrap_or(false);

            if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
                if was_touching {
                    collision_stay_response(&mut vel, event.normal);
                } else {
                    collision_enter_response(&mut vel, event.normal);
                    #[cfg(debug_assertions)]
                    println!(
                        "[contact] impact, normal {:?}, depth {:.3}",
                        event.normal, event.penetration
                    );
                }
            }
            touching.insert(event.surface);
        }

        if let Ok(mut contacts) = world.get::<&mut Contacts>(entity) {
            contacts.0 = touching;
        }
    }
}
