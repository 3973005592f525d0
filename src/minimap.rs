use glam::Vec2;

use crate::player::Player;
use crate::ray::RayRecord;
use crate::MINIMAP_SCALE_FACTOR;

/// Draw every this many rays on the minimap.
pub const MINIMAP_RAY_STRIDE: usize = 50;

/// Packed `0xAARRGGBB` color of minimap rays.
pub const MINIMAP_RAY_COLOR: u32 = 0xFF0000FF;

/// Something rays can be drawn onto.
pub trait LineCanvas {
    /// Draws a line between two points in canvas coordinates, `color` packed
    /// as `0xAARRGGBB`.
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: u32) -> anyhow::Result<()>;
}

/// Draws a sparse fan of the field's rays from the player, scaled down to
/// minimap size. Rays that hit nothing are skipped.
pub fn render_rays(
    canvas: &mut impl LineCanvas,
    player: &Player,
    rays: &[RayRecord],
) -> anyhow::Result<()> {
    let from = player.pos * MINIMAP_SCALE_FACTOR;
    for ray in rays.iter().step_by(MINIMAP_RAY_STRIDE) {
        if !ray.is_hit() {
            continue;
        }

        canvas.draw_line(from, ray.wall_hit * MINIMAP_SCALE_FACTOR, MINIMAP_RAY_COLOR)?;
    }

    Ok(())
}

#[cfg(feature = "sdl")]
mod sdl {
    use super::LineCanvas;
    use crate::StringToAnyhow;
    use glam::Vec2;
    use sdl2::pixels::Color;
    use sdl2::rect::Point;
    use sdl2::render::{Canvas, RenderTarget};

    impl<T: RenderTarget> LineCanvas for Canvas<T> {
        fn draw_line(&mut self, from: Vec2, to: Vec2, color: u32) -> anyhow::Result<()> {
            let [a, r, g, b] = color.to_be_bytes();
            let prev_color = self.draw_color();
            self.set_draw_color(Color::RGBA(r, g, b, a));
            let drawn = Canvas::draw_line(
                self,
                Point::new(from.x as i32, from.y as i32),
                Point::new(to.x as i32, to.y as i32),
            );
            self.set_draw_color(prev_color);

            drawn.ah()
        }
    }
}
