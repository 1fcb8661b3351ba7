use glam::Vec3;
use hecs::World;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::{Point, Rect};
use sdl2::render::WindowCanvas;

use crate::components::{Collider, Color, Position, PreviousPosition, Static};

const SKY: SdlColor = SdlColor::RGB(126, 178, 221);
const STRING_COLOR: SdlColor = SdlColor::RGB(60, 60, 60);
const WALL_THICKNESS: i32 = 6;
/// Screen-space gap between the window bottom and the floor line.
const BOTTOM_MARGIN: f32 = 40.0;
/// World-space length of the balloon string.
const STRING_LENGTH: f32 = 1.1;

/// Side-view 2D renderer on the SDL canvas: the room's planes become edge
/// slabs, the balloon a filled circle. The z axis is ignored — nothing in
/// the simulation ever leaves the z = 0 plane.
pub struct Renderer {
    pixels_per_unit: f32,
}

impl Renderer {
    pub fn new(pixels_per_unit: f32) -> Self {
        Self { pixels_per_unit }
    }

    fn to_screen(&self, world_pos: Vec3, w: u32, h: u32) -> (i32, i32) {
        let x = w as f32 / 2.0 + world_pos.x * self.pixels_per_unit;
        let y = h as f32 - BOTTOM_MARGIN - world_pos.y * self.pixels_per_unit;
        (x as i32, y as i32)
    }

    pub fn draw_scene(&self, canvas: &mut WindowCanvas, world: &World, alpha: f32) {
        let (w, h) = canvas.window().size();

        canvas.set_draw_color(SKY);
        canvas.clear();

        // Room surfaces, drawn as slabs hugging the plane from outside.
        for (_entity, (collider, color)) in world
            .query::<(&Collider, Option<&Color>)>()
            .with::<&Static>()
            .iter()
        {
            let Collider::Plane { normal, offset } = collider else {
                continue;
            };
            canvas.set_draw_color(tint(color));
            let rect = if normal.y > 0.5 {
                // Floor surface at y = offset.
                let (_, y) = self.to_screen(Vec3::new(0.0, *offset, 0.0), w, h);
                Rect::new(0, y, w, WALL_THICKNESS as u32)
            } else if normal.y < -0.5 {
                // Ceiling surface at y = -offset.
                let (_, y) = self.to_screen(Vec3::new(0.0, -*offset, 0.0), w, h);
                Rect::new(0, y - WALL_THICKNESS, w, WALL_THICKNESS as u32)
            } else if normal.x > 0.5 {
                // Left wall surface at x = offset.
                let (x, _) = self.to_screen(Vec3::new(*offset, 0.0, 0.0), w, h);
                Rect::new(x - WALL_THICKNESS, 0, WALL_THICKNESS as u32, h)
            } else {
                // Right wall surface at x = -offset.
                let (x, _) = self.to_screen(Vec3::new(-*offset, 0.0, 0.0), w, h);
                Rect::new(x, 0, WALL_THICKNESS as u32, h)
            };
            let _ = canvas.fill_rect(rect);
        }

        // Balloon, interpolated between the previous and current tick.
        for (_entity, (pos, prev, collider, color)) in world
            .query::<(&Position, Option<&PreviousPosition>, &Collider, Option<&Color>)>()
            .iter()
        {
            let Collider::Sphere { radius } = collider else {
                continue;
            };
            let drawn = match prev {
                Some(prev) => prev.0.lerp(pos.0, alpha),
                None => pos.0,
            };
            let (cx, cy) = self.to_screen(drawn, w, h);
            let r = (*radius * self.pixels_per_unit) as i32;

            canvas.set_draw_color(STRING_COLOR);
            let string_px = (STRING_LENGTH * self.pixels_per_unit) as i32;
            let _ = canvas.draw_line(Point::new(cx, cy + r), Point::new(cx, cy + r + string_px));

            canvas.set_draw_color(tint(color));
            fill_circle(canvas, cx, cy, r);
        }
    }
}

fn tint(color: Option<&Color>) -> SdlColor {
    let v = color.map(|c| c.0).unwrap_or(Vec3::splat(0.5));
    SdlColor::RGB(
        (v.x * 255.0) as u8,
        (v.y * 255.0) as u8,
        (v.z * 255.0) as u8,
    )
}

/// Horizontal-span circle fill; good enough at balloon sizes.
fn fill_circle(canvas: &mut WindowCanvas, cx: i32, cy: i32, radius: i32) {
    for dy in -radius..=radius {
        let half = (((radius * radius - dy * dy) as f32).sqrt()) as i32;
        let _ = canvas.fill_rect(Rect::new(cx - half, cy + dy, (half * 2).max(1) as u32, 1));
    }
}
