use crate::constants::*;
use crate::particles::ParticleStore;
use crate::surface::Surface2d;
use crate::viewport::Viewport;
use rand::Rng;

/// One starfield frame: hard clear, draw every star as a filled white
/// circle, then advance it downward. A star that falls past the bottom
/// edge wraps to `y = 0` with a re-randomized `x`, so `0 <= y <= height`
/// holds at the start of every frame.
pub fn render_starfield(
    store: &mut ParticleStore,
    viewport: Viewport,
    rng: &mut impl Rng,
    surface: &mut impl Surface2d,
) {
    surface.clear(viewport);
    surface.set_fill_color(STAR_COLOR);
    for star in &mut store.stars {
        surface.fill_circle(star.pos, star.radius);
        star.pos.y += star.speed;
        if star.pos.y > viewport.height {
            star.pos.y = 0.0;
            star.pos.x = rng.gen::<f32>() * viewport.width;
        }
    }
}
