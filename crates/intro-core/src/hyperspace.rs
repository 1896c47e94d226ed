use crate::constants::*;
use crate::particles::ParticleStore;
use crate::surface::Surface2d;
use crate::viewport::Viewport;

/// One hyperspace frame. Instead of clearing, the surface is washed with
/// a 20%-opacity black fill so the previous frames' streaks persist and
/// darken gradually. Each streak draws the segment from its pre-advance
/// to post-advance position, then recenters once out of bounds on any
/// side; its direction and length are left untouched by the recenter.
pub fn render_hyperspace(
    store: &mut ParticleStore,
    viewport: Viewport,
    surface: &mut impl Surface2d,
) {
    surface.set_fill_color(TRAIL_FILL);
    surface.fill(viewport);
    surface.set_stroke_color(STREAK_COLOR);
    for streak in &mut store.streaks {
        let from = streak.pos;
        streak.pos += streak.dir * STREAK_STEP;
        surface.stroke_segment(from, streak.pos);
        if !viewport.contains(streak.pos) {
            streak.pos = viewport.center();
        }
    }
}
