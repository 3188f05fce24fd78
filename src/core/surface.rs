use glam::Vec2;

/// Immediate-mode 2D drawing target the backdrops paint through.
///
/// Alpha and styles are sticky until changed, mirroring a canvas 2D context.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn set_alpha(&mut self, alpha: f32);
    fn set_stroke(&mut self, color: &str, width: f32);
    fn set_fill(&mut self, color: &str);
    fn line(&mut self, from: Vec2, to: Vec2);
    fn circle(&mut self, center: Vec2, radius: f32);
    /// Filled with the fill style, outlined with the stroke style.
    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2);
}
