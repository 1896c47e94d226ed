// Fixed tuning constants for the intro page. There is no runtime
// configuration; these express the intended look and timing directly.

// Particle pool sizes (fixed for the page lifetime)
pub const STAR_COUNT: usize = 200;
pub const STREAK_COUNT: usize = 100;

// Starfield star initialization ranges
pub const STAR_RADIUS_MAX: f32 = 1.5;
pub const STAR_SPEED_MIN: f32 = 0.2;
pub const STAR_SPEED_SPAN: f32 = 0.5;

// Hyperspace streak initialization and motion
pub const STREAK_LENGTH_MIN: f32 = 10.0;
pub const STREAK_LENGTH_SPAN: f32 = 20.0;
pub const STREAK_STEP: f32 = 10.0; // per-frame advance multiplier on the direction

// Colors (CSS color strings, passed through to the drawing surface)
pub const STAR_COLOR: &str = "#fff";
pub const STREAK_COLOR: &str = "#00f6ff";
pub const TRAIL_FILL: &str = "rgba(0, 0, 0, 0.2)"; // low-opacity wash that leaves motion trails

// Choreography deadlines, all relative to the start gesture (ms)
pub const HYPERSPACE_DELAY_MS: u64 = 10_000;
pub const FLYBY_PERIOD_MS: u64 = 15_000;
pub const FLYBY_REST_AFTER_MS: u64 = 7_000; // 6 s traversal + 1 s buffer
pub const REVEAL_FADE_MS: u64 = 2_000;

// Style values applied by the web layer
pub const FLYBY_TRANSITION: &str = "transform 6s linear";
pub const FLYBY_EXIT_TRANSFORM: &str = "translateX(120vw)";
pub const FLYBY_REST_TRANSFORM: &str = "translateX(0)";
pub const REVEAL_TRANSITION: &str = "opacity 2s ease-in-out";
