use super::config::LoaderConfig;
use super::constants::{LOADER_ACCENT, LOADER_FILL};
use super::device::DeviceClass;
use super::mesh::{pulse, Mesh, ViewFit};
use super::pointer::PointerState;
use super::scene::{sanitize_extent, Scene, Step};
use super::surface::Surface;
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

const MAX_PROGRESS: u32 = 100;

/// Splash-screen clock: stepped progress, delayed mesh reveal and a single
/// completion edge.
#[derive(Clone, Debug)]
pub struct LoaderTimeline {
    elapsed: Duration,
    tick: Duration,
    step: u32,
    mesh_delay: Duration,
    complete_delay: Duration,
    completed: bool,
}

impl LoaderTimeline {
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            elapsed: Duration::ZERO,
            tick: Duration::from_millis(config.tick_ms.max(1)),
            step: config.progress_step.max(1),
            mesh_delay: Duration::from_millis(config.mesh_delay_ms),
            complete_delay: Duration::from_millis(config.complete_delay_ms),
            completed: false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Percentage in steps of `progress_step`, capped at 100.
    pub fn progress(&self) -> u32 {
        let ticks = self.elapsed.as_millis() / self.tick.as_millis();
        let raw = ticks.saturating_mul(self.step as u128);
        raw.min(MAX_PROGRESS as u128) as u32
    }

    /// Time at which progress first reads 100.
    pub fn full_at(&self) -> Duration {
        let ticks = MAX_PROGRESS.div_ceil(self.step);
        self.tick * ticks
    }

    pub fn complete_at(&self) -> Duration {
        self.full_at() + self.complete_delay
    }

    pub fn mesh_visible(&self) -> bool {
        self.elapsed >= self.mesh_delay
    }

    /// How long the mesh has been on screen.
    pub fn mesh_elapsed(&self) -> Option<Duration> {
        self.elapsed.checked_sub(self.mesh_delay)
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Returns `true` exactly once, on the advance that crosses completion.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        if !self.completed && self.elapsed >= self.complete_at() {
            self.completed = true;
            return true;
        }
        false
    }
}

/// Loading-screen backdrop: a pulsing triangle mesh behind a progress bar.
pub struct LoaderScene {
    config: LoaderConfig,
    timeline: LoaderTimeline,
    mesh: Mesh,
    size: Vec2,
}

impl LoaderScene {
    pub fn new<R: Rng + ?Sized>(config: LoaderConfig, rng: &mut R) -> Self {
        let mesh = Mesh::generate(&config, rng);
        log::debug!(
            "[loader] mesh with {} points, {} triangles",
            mesh.points.len(),
            mesh.triangles.len()
        );
        let timeline = LoaderTimeline::new(&config);
        Self {
            config,
            timeline,
            mesh,
            size: Vec2::ZERO,
        }
    }

    pub fn timeline(&self) -> &LoaderTimeline {
        &self.timeline
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn progress(&self) -> u32 {
        self.timeline.progress()
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.clear(self.size.x, self.size.y);
        let Some(shown) = self.timeline.mesh_elapsed() else {
            return;
        };
        let t = shown.as_secs_f32();
        let fit = ViewFit::new(
            Vec2::new(self.config.view_width, self.config.view_height),
            self.size,
        );
        let layer = self.config.layer_opacity * pulse(t, 4.0, 0.0, 0.15, 0.25);

        surface.set_fill(LOADER_FILL);
        surface.set_stroke(LOADER_ACCENT, 0.5 * fit.scale);
        for (i, tri) in self.mesh.triangles.iter().enumerate() {
            let [a, b, c] = self.mesh.vertices(tri);
            surface.set_alpha(layer * pulse(t, 3.0, i as f32 * 0.1, 0.3, 0.7));
            surface.triangle(fit.map(a), fit.map(b), fit.map(c));
        }

        for (i, tri) in self.mesh.triangles.iter().enumerate() {
            let [a, b, c] = self.mesh.vertices(tri);
            let base_delay = i as f32 * 0.05;
            for (offset, (from, to)) in [(0.0, (a, b)), (0.5, (b, c)), (1.0, (c, a))] {
                let delay = base_delay + offset;
                let width = pulse(t, 2.0, delay, 1.0, 1.5) * fit.scale;
                surface.set_stroke(LOADER_ACCENT, width);
                surface.set_alpha(layer * pulse(t, 2.0, delay, 0.2, 0.6));
                surface.line(fit.map(from), fit.map(to));
            }
        }

        surface.set_fill(LOADER_ACCENT);
        for (i, point) in self.mesh.points.iter().enumerate() {
            let delay = i as f32 * 0.1;
            surface.set_alpha(layer * pulse(t, 2.0, delay, 0.6, 1.0));
            surface.circle(fit.map(point.pos), pulse(t, 2.0, delay, 2.0, 3.0) * fit.scale);
        }
        surface.set_alpha(1.0);
    }
}

impl Scene for LoaderScene {
    fn resize(&mut self, width: f32, height: f32, _class: DeviceClass) {
        self.size = Vec2::new(sanitize_extent(width), sanitize_extent(height));
    }

    fn update(&mut self, dt: Duration, _pointer: &PointerState) -> Step {
        if self.timeline.advance(dt) {
            log::info!("[loader] complete after {:?}", self.timeline.elapsed());
            return Step::Finished;
        }
        Step::Continue
    }

    fn draw(&self, surface: &mut dyn Surface, _pointer: &PointerState) {
        self.paint(surface);
    }

    fn tracks_pointer(&self) -> bool {
        false
    }
}
