use glam::Vec2;

use super::color::Rgba;

/// Drawing port over the host's 2D surface. The simulation renders through
/// this trait so frames stay observable without a real canvas.
pub trait Surface {
    /// Clear the full surface rectangle.
    fn clear(&mut self, width: f32, height: f32);
    /// Fill a circle centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Stroke a straight segment from `from` to `to`.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, color: Rgba);
}
