use super::device::DeviceClass;
use super::pointer::PointerState;
use super::surface::Surface;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// The scene has nothing more to show; the frame loop should stop.
    Finished,
}

/// A frame-driven decorative animation: `update` then `draw` once per
/// display refresh, `resize` whenever the viewport changes.
pub trait Scene {
    fn resize(&mut self, width: f32, height: f32, class: DeviceClass);
    fn update(&mut self, dt: Duration, pointer: &PointerState) -> Step;
    fn draw(&self, surface: &mut dyn Surface, pointer: &PointerState);

    /// Whether pointer and touch listeners should be wired for this scene.
    fn tracks_pointer(&self) -> bool {
        true
    }

    /// Whether leaving the page should deactivate the pointer.
    fn releases_on_leave(&self) -> bool {
        false
    }
}

/// Non-finite or negative extents collapse to zero.
#[inline]
pub fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
