use crate::viewport::Viewport;
use glam::Vec2;

/// Immediate-mode 2D drawing seam between the render steps and whatever
/// actually paints (the canvas context on the web, a recording fake in
/// tests). Colors are CSS color strings, passed through untouched.
pub trait Surface2d {
    /// Erase the full surface (hard clear, no trailing).
    fn clear(&mut self, viewport: Viewport);
    /// Paint the full surface with the current fill color.
    fn fill(&mut self, viewport: Viewport);
    fn set_fill_color(&mut self, color: &str);
    fn set_stroke_color(&mut self, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_segment(&mut self, from: Vec2, to: Vec2);
}
