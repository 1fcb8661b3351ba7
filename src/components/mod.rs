use std::collections::HashSet;

use glam::Vec3;
use hecs::Entity;
use sdl2::keyboard::Scancode;

/// World-space location. Written only by the integration step (and by the
/// collision push-out, which keeps the balloon outside static surfaces).
pub struct Position(pub Vec3);

/// Position snapshot from the previous simulation tick, stored for render
/// interpolation between fixed steps.
pub struct PreviousPosition(pub Vec3);

/// Linear velocity in world space. Persists across ticks.
pub struct Velocity(pub Vec3);

/// Transient per-tick force accumulator. Zero at the start of every tick,
/// zeroed again immediately after integration; never carries meaning across
/// ticks. Mass is implicitly 1, so forces add to it directly.
pub struct Acceleration(pub Vec3);

/// Force configuration for a balloon. The three vectors are derived once at
/// construction and never change.
pub struct Balloon {
    /// Horizontal wind impulse, applied along ±X while a wind key is held.
    pub wind_force: Vec3,
    /// Constant downward pull.
    pub gravity_force: Vec3,
    /// Constant upward lift from the helium fill.
    pub helium_force: Vec3,
}

impl Balloon {
    pub fn new(wind_amount: f32, gravity_amount: f32, helium_amount: f32) -> Self {
        Self {
            wind_force: Vec3::new(wind_amount, 0.0, 0.0),
            gravity_force: Vec3::new(0.0, -gravity_amount, 0.0),
            helium_force: Vec3::new(0.0, helium_amount, 0.0),
        }
    }
}

/// The two keys acting as wind triggers. Held state is sampled once per
/// rendered frame, not per simulation tick.
pub struct WindBindings {
    /// Applies the wind force along -X while held.
    pub from_left: Scancode,
    /// Applies the wind force along +X while held.
    pub from_right: Scancode,
}

/// Collision shape attached to an entity.
pub enum Collider {
    Sphere { radius: f32 },
    Plane { normal: Vec3, offset: f32 },
}

/// Marker: entity is an immovable surface.
pub struct Static;

/// Surfaces this entity was touching on the previous tick. Lets the contact
/// system tell a fresh impact apart from sustained contact.
pub struct Contacts(pub HashSet<Entity>);

/// Contact produced by the detection phase. `normal` is the surface normal:
/// unit length, pointing away from the surface toward the sphere.
pub struct CollisionEvent {
    pub entity: Entity,
    pub surface: Entity,
    pub normal: Vec3,
    pub penetration: f32,
}

/// RGB color applied to an entity for rendering.
pub struct Color(pub Vec3);
