use glam::Vec3;
use hecs::World;

use crate::components::{
    Acceleration, Balloon, Position, PreviousPosition, Velocity, WindBindings,
};
use crate::engine::input::InputState;

/// Speed retained after an impact. Models inelastic energy loss.
const IMPACT_DAMPING: f32 = 0.4;

/// Per-axis damping applied each tick while resting against a surface.
const STAY_DAMPING_Y: f32 = 0.2;
const STAY_DAMPING_X: f32 = 0.95;

/// Add `force` to the per-tick accumulator. Pure accumulation — velocity and
/// position are untouched until the next integration.
pub fn apply_force(accel: &mut Acceleration, force: Vec3) {
    accel.0 += force;
}

/// Sample the wind keys and accumulate wind force on every balloon.
///
/// Runs once per rendered frame, independent of the fixed tick. If the frame
/// rate exceeds the tick rate the wind force lands several times before one
/// integration; if it lags, a tick may see no wind at all. Both wind keys
/// held at once cancel exactly.
pub fn sample_wind_input(world: &mut World, input: &InputState) {
    for (_entity, (balloon, bindings, accel)) in
        world.query_mut::<(&Balloon, &WindBindings, &mut Acceleration)>()
    {
        if input.is_key_held(bindings.from_left) {
            apply_force(accel, -balloon.wind_force);
        }
        if input.is_key_held(bindings.from_right) {
            apply_force(accel, balloon.wind_force);
        }
    }
}

/// One fixed simulation tick for every balloon, order-sensitive:
/// gravity, then helium, then integration.
///
/// Integration is semi-implicit Euler — velocity absorbs the whole
/// accumulator first, position then moves with the updated velocity. The
/// accumulator feeds velocity unscaled, so force amounts are per-tick
/// impulses. No clamping; unbounded growth is the caller's concern.
pub fn balloon_step(world: &mut World, dt: f32) {
    for (_entity, (pos, vel, accel, balloon)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Acceleration, &Balloon)>()
    {
        apply_force(accel, balloon.gravity_force);
        apply_force(accel, balloon.helium_force);

        vel.0 += accel.0;
        pos.0 += vel.0 * dt;
        accel.0 = Vec3::ZERO;
    }
}

/// Impact response: reflect the velocity about the contact normal, then
/// bleed off energy. `normal` must be unit length — no normalization is
/// performed, a skewed normal gives a skewed reflection.
pub fn collision_enter_response(vel: &mut Velocity, normal: Vec3) {
    vel.0 = vel.0.reflect(normal);
    vel.0 *= IMPACT_DAMPING;
}

/// Sustained-contact response: axis-aligned damping while resting or sliding
/// against a surface. The contact normal is received but takes no part in
/// the computation; z is untouched.
pub fn collision_stay_response(vel: &mut Velocity, _normal: Vec3) {
    vel.0.y *= STAY_DAMPING_Y;
    vel.0.x *= STAY_DAMPING_X;
}

/// Snapshot current positions into [`PreviousPosition`] at the start of a
/// tick so the renderer can interpolate between fixed steps.
pub fn snapshot_previous_positions(world: &mut World) {
    for (_entity, (pos, prev)) in world.query_mut::<(&Position, &mut PreviousPosition)>() {
        prev.0 = pos.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::Entity;
    use sdl2::keyboard::Scancode;

    fn spawn_balloon(world: &mut World, wind: f32, gravity: f32, helium: f32) -> Entity {
        world.spawn((
            Position(Vec3::ZERO),
            PreviousPosition(Vec3::ZERO),
            Velocity(Vec3::ZERO),
            Acceleration(Vec3::ZERO),
            Balloon::new(wind, gravity, helium),
            WindBindings {
                from_left: Scancode::Left,
                from_right: Scancode::Right,
            },
        ))
    }

    fn held(keys: &[Scancode]) -> InputState {
        let mut input = InputState::new();
        for &key in keys {
            input.keys.insert(key);
        }
        input
    }

    fn assert_vec3_eq(got: Vec3, want: Vec3) {
        assert!(
            (got - want).length() < 1e-5,
            "expected {want:?}, got {got:?}"
        );
    }

    #[test]
    fn forces_accumulate_then_integrate() {
        let mut world = World::new();
        let e = spawn_balloon(&mut world, 0.0, 0.0, 0.0);

        {
            let mut accel = world.get::<&mut Acceleration>(e).unwrap();
            apply_force(&mut accel, Vec3::new(1.0, 2.0, 0.0));
            apply_force(&mut accel, Vec3::new(-0.5, 0.0, 3.0));
        }
        balloon_step(&mut world, 0.5);

        let vel = world.get::<&Velocity>(e).unwrap().0;
        let pos = world.get::<&Position>(e).unwrap().0;
        let accel = world.get::<&Acceleration>(e).unwrap().0;
        assert_vec3_eq(vel, Vec3::new(0.5, 2.0, 3.0));
        assert_vec3_eq(pos, vel * 0.5);
        assert_eq!(accel, Vec3::ZERO);
    }

    #[test]
    fn zero_force_tick_is_idempotent() {
        let mut world = World::new();
        let e = spawn_balloon(&mut world, 0.0, 0.0, 0.0);

        for _ in 0..10 {
            balloon_step(&mut world, 1.0 / 60.0);
        }

        assert_eq!(world.get::<&Velocity>(e).unwrap().0, Vec3::ZERO);
        assert_eq!(world.get::<&Position>(e).unwrap().0, Vec3::ZERO);
    }

    #[test]
    fn helium_matching_gravity_holds_equilibrium() {
        let mut world = World::new();
        let e = spawn_balloon(&mut world, 0.0, 0.25, 0.25);

        for _ in 0..100 {
            balloon_step(&mut world, 1.0 / 60.0);
        }

        assert_eq!(world.get::<&Velocity>(e).unwrap().0, Vec3::ZERO);
        assert_eq!(world.get::<&Position>(e).unwrap().0, Vec3::ZERO);
    }

    #[test]
    fn wind_keys_cancel_when_both_held() {
        let mut world = World::new();
        let e = spawn_balloon(&mut world, 2.0, 0.0, 0.0);

        let input = held(&[Scancode::Left, Scancode::Right]);
        sample_wind_input(&mut world, &input);

        assert_eq!(world.get::<&Acceleration>(e).unwrap().0, Vec3::ZERO);
    }

    #[test]
    fn left_wind_plus_gravity_scenario() {
        // wind 2, gravity 1, helium 0, left key held, one tick at dt = 1:
        // accumulated force (-2, -1, 0) becomes both velocity and position.
        let mut world = World::new();
        let e = spawn_balloon(&mut world, 2.0, 1.0, 0.0);

        let input = held(&[Scancode::Left]);
        sample_wind_input(&mut world, &input);
        balloon_step(&mut world, 1.0);

        assert_vec3_eq(world.get::<&Velocity>(e).unwrap().0, Vec3::new(-2.0, -1.0, 0.0));
        assert_vec3_eq(world.get::<&Position>(e).unwrap().0, Vec3::new(-2.0, -1.0, 0.0));
    }

    #[test]
    fn wind_accumulates_across_frames_within_one_tick() {
        // Two input samples before a single tick: the wind force lands twice.
        let mut world = World::new();
        let e = spawn_balloon(&mut world, 1.0, 0.0, 0.0);

        let input = held(&[Scancode::Right]);
        sample_wind_input(&mut world, &input);
        sample_wind_input(&mut world, &input);
        balloon_step(&mut world, 1.0);

        assert_vec3_eq(world.get::<&Velocity>(e).unwrap().0, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn impact_reflects_and_damps() {
        let mut vel = Velocity(Vec3::new(0.0, -5.0, 0.0));
        collision_enter_response(&mut vel, Vec3::Y);
        assert_vec3_eq(vel.0, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn sustained_contact_damps_x_and_y_only() {
        let mut vel = Velocity(Vec3::new(10.0, 10.0, 10.0));
        collision_stay_response(&mut vel, Vec3::Y);
        assert_vec3_eq(vel.0, Vec3::new(9.5, 2.0, 10.0));
    }

    #[test]
    fn snapshot_copies_position() {
        let mut world = World::new();
        let e = spawn_balloon(&mut world, 0.0, 1.0, 0.0);

        balloon_step(&mut world, 1.0);
        snapshot_previous_positions(&mut world);

        let pos = world.get::<&Position>(e).unwrap().0;
        assert_eq!(world.get::<&PreviousPosition>(e).unwrap().0, pos);
    }
}
