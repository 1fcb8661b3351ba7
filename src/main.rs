mod app;
mod components;
mod engine;
mod renderer;
mod scene;
mod systems;

use app::App;
use clap::Parser;
use components::{Balloon, WindBindings};
use engine::window::GameWindow;
use hecs::World;
use scene::load_room_scene;
use sdl2::keyboard::Scancode;

#[derive(Parser)]
#[command(name = "balloon", about = "Balloon sandbox")]
struct Args {
    /// Horizontal wind impulse applied per frame while a wind key is held
    #[arg(long, default_value_t = 0.05)]
    wind: f32,

    /// Constant downward force per tick
    #[arg(long, default_value_t = 0.02)]
    gravity: f32,

    /// Constant upward force per tick
    #[arg(long, default_value_t = 0.03)]
    helium: f32,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 60.0)]
    tick_rate: f32,

    /// Key that pushes the balloon toward the left wall (SDL scancode name)
    #[arg(long, default_value = "Left")]
    wind_left_key: String,

    /// Key that pushes the balloon toward the right wall (SDL scancode name)
    #[arg(long, default_value = "Right")]
    wind_right_key: String,
}

fn resolve_key(name: &str) -> Scancode {
    Scancode::from_name(name).unwrap_or_else(|| panic!("Unknown scancode name: {name}"))
}

fn main() {
    let args = Args::parse();

    let bindings = WindBindings {
        from_left: resolve_key(&args.wind_left_key),
        from_right: resolve_key(&args.wind_right_key),
    };

    let mut world = World::new();
    load_room_scene(
        &mut world,
        Balloon::new(args.wind, args.gravity, args.helium),
        bindings,
    );

    let sdl = sdl2::init().expect("Failed to init SDL2");
    let mut window = GameWindow::new(&sdl, "Balloon", 1280, 720);

    let mut app = App::new(world, args.tick_rate);
    app.run(&sdl, &mut window);
}
