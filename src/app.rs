use hecs::World;
use sdl2::Sdl;

use crate::engine::input::InputState;
use crate::engine::time::{FrameTimer, TickClock};
use crate::engine::window::GameWindow;
use crate::renderer::Renderer;
use crate::systems::{
    balloon_step, collision_system, contact_response_system, sample_wind_input,
    snapshot_previous_positions,
};

const PIXELS_PER_UNIT: f32 = 64.0;

pub struct App {
    world: World,
    renderer: Renderer,
    clock: TickClock,
}

impl App {
    pub fn new(world: World, tick_rate: f32) -> Self {
        Self {
            world,
            renderer: Renderer::new(PIXELS_PER_UNIT),
            clock: TickClock::new(tick_rate),
        }
    }

    pub fn run(&mut self, sdl: &Sdl, window: &mut GameWindow) {
        let mut event_pump = sdl.event_pump().expect("Failed to get event pump");
        let mut input = InputState::new();
        let mut timer = FrameTimer::new();

        loop {
            timer.tick();
            input.update(&mut event_pump);
            if input.quit {
                break;
            }

            // Wind rides the render frame, not the simulation tick: a fast
            // display accumulates it more often than it is integrated, a slow
            // one less. The tick rate is configuration, so the coupling is in
            // plain sight.
            sample_wind_input(&mut self.world, &input);

            self.clock.advance(timer.dt);
            while self.clock.tick() {
                snapshot_previous_positions(&mut self.world);
                balloon_step(&mut self.world, self.clock.dt);
                let events = collision_system(&mut self.world);
                contact_response_system(&mut self.world, &events);
            }

            self.renderer
                .draw_scene(window.canvas_mut(), &self.world, self.clock.alpha());
            window.present();
        }
    }
}
