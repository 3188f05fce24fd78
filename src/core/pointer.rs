use glam::Vec2;

/// Last known pointer location in canvas pixels.
///
/// Input handlers are the only writers; frame steps copy it out and read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

impl PointerState {
    #[inline]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            active: true,
        }
    }

    /// Same position, no longer influencing the scene.
    #[inline]
    pub fn released(self) -> Self {
        Self {
            active: false,
            ..self
        }
    }

    #[inline]
    pub fn active_position(&self) -> Option<Vec2> {
        (self.active && self.position.is_finite()).then_some(self.position)
    }
}

/// Linear falloff `1 - d/r` inside `radius`, zero outside.
#[inline]
pub fn proximity(distance: f32, radius: f32) -> f32 {
    if radius > 0.0 && distance < radius {
        (radius - distance) / radius
    } else {
        0.0
    }
}
