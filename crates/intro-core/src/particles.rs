use crate::constants::*;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

/// One backdrop star: drifts straight down, wraps back to the top edge.
#[derive(Clone, Debug)]
pub struct StarParticle {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl StarParticle {
    fn random(rng: &mut impl Rng, viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            ),
            radius: rng.gen::<f32>() * STAR_RADIUS_MAX,
            speed: STAR_SPEED_MIN + rng.gen::<f32>() * STAR_SPEED_SPAN,
        }
    }
}

/// One hyperspace streak: shoots outward from the viewport center and is
/// recentered once it leaves the bounds. Direction and `length` are fixed
/// at creation; the drawn segment comes from the fixed per-frame step, so
/// `length` is carried but never consulted (see DESIGN.md).
#[derive(Clone, Debug)]
pub struct StreakParticle {
    pub pos: Vec2,
    pub dir: Vec2,
    pub length: f32,
}

impl StreakParticle {
    fn random(rng: &mut impl Rng, viewport: Viewport) -> Self {
        Self {
            pos: viewport.center(),
            dir: Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
            length: STREAK_LENGTH_MIN + rng.gen::<f32>() * STREAK_LENGTH_SPAN,
        }
    }
}

/// Fixed-size pools for both effects, filled once before the first frame
/// and mutated in place by the render steps for the page lifetime.
pub struct ParticleStore {
    pub stars: Vec<StarParticle>,
    pub streaks: Vec<StreakParticle>,
}

impl ParticleStore {
    pub fn new(rng: &mut impl Rng, viewport: Viewport) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| StarParticle::random(rng, viewport))
            .collect();
        let streaks = (0..STREAK_COUNT)
            .map(|_| StreakParticle::random(rng, viewport))
            .collect();
        Self { stars, streaks }
    }
}
