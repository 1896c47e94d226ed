use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IntroError {
    #[error("invalid viewport dimensions {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

/// Current drawing surface dimensions. Both canvases are kept at exactly
/// this size; resizing constructs a new value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Dimensions must be finite and positive so particle placement and
    /// bounds checks stay meaningful.
    pub fn new(width: f32, height: f32) -> Result<Self, IntroError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(IntroError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Inclusive bounds check; a point exactly on an edge is still inside.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(Viewport::new(0.0, 600.0).is_err());
        assert!(Viewport::new(800.0, -1.0).is_err());
        assert!(Viewport::new(f32::NAN, 600.0).is_err());
        assert!(Viewport::new(800.0, 600.0).is_ok());
    }

    #[test]
    fn center_and_edges() {
        let vp = Viewport::new(800.0, 600.0).unwrap();
        assert_eq!(vp.center(), Vec2::new(400.0, 300.0));
        assert!(vp.contains(Vec2::new(0.0, 0.0)));
        assert!(vp.contains(Vec2::new(800.0, 600.0)));
        assert!(!vp.contains(Vec2::new(800.1, 300.0)));
        assert!(!vp.contains(Vec2::new(400.0, -0.1)));
    }
}
