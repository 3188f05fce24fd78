use super::config::ParticleConfig;
use super::device::DeviceClass;
use super::pointer::{proximity, PointerState};
use super::scene::{sanitize_extent, Scene, Step};
use super::surface::Surface;
use super::timing::FrameLimiter;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Free-floating dots linked by faint lines, wrapping at the edges, with a
/// "grab" effect that draws lines to the hovering pointer.
pub struct ParticleField {
    config: ParticleConfig,
    size: Vec2,
    particles: Vec<Particle>,
    limiter: FrameLimiter,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, rng: StdRng) -> Self {
        let limiter = FrameLimiter::new(config.fps_limit);
        Self {
            config,
            size: Vec2::ZERO,
            particles: Vec::new(),
            limiter,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn reseed(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(sanitize_extent(width), sanitize_extent(height));
        self.limiter.reset();
        let count = self.config.count_for(self.size.x, self.size.y);
        let half_speed = self.config.speed * 0.5;
        let (lo, hi) = (self.config.size_min, self.config.size_max);

        self.particles.clear();
        for _ in 0..count {
            let pos = Vec2::new(
                self.rng.gen::<f32>() * self.size.x,
                self.rng.gen::<f32>() * self.size.y,
            );
            let vel = Vec2::new(
                self.rng.gen::<f32>() - 0.5,
                self.rng.gen::<f32>() - 0.5,
            ) * half_speed;
            let radius = if hi > lo { self.rng.gen_range(lo..=hi) } else { lo };
            self.particles.push(Particle { pos, vel, radius });
        }
        log::debug!(
            "[particles] seeded {} particles on {}x{}",
            self.particles.len(),
            self.size.x,
            self.size.y
        );
    }

    /// Move every particle once; leaving an edge re-enters from the opposite one.
    pub fn step(&mut self) {
        let bounds = self.size;
        for p in &mut self.particles {
            p.pos += p.vel;
            p.pos.x = wrap_axis(p.pos.x, p.radius, bounds.x);
            p.pos.y = wrap_axis(p.pos.y, p.radius, bounds.y);
        }
    }

    pub fn link_alpha(&self, a: Vec2, b: Vec2) -> Option<f32> {
        let d = a.distance(b);
        (d < self.config.link_distance)
            .then(|| self.config.link_opacity * proximity(d, self.config.link_distance))
    }

    pub fn grab_alpha(&self, pos: Vec2, pointer: Vec2) -> Option<f32> {
        let d = pos.distance(pointer);
        (d < self.config.grab_distance)
            .then(|| self.config.grab_opacity * proximity(d, self.config.grab_distance))
    }

    pub fn paint(&self, surface: &mut dyn Surface, pointer: &PointerState) {
        surface.clear(self.size.x, self.size.y);

        surface.set_stroke(&self.config.link_color, self.config.link_width);
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                if let Some(alpha) = self.link_alpha(a.pos, b.pos) {
                    surface.set_alpha(alpha);
                    surface.line(a.pos, b.pos);
                }
            }
        }

        if let Some(hover) = pointer.active_position() {
            for p in &self.particles {
                if let Some(alpha) = self.grab_alpha(p.pos, hover) {
                    surface.set_alpha(alpha);
                    surface.line(p.pos, hover);
                }
            }
        }

        surface.set_fill(&self.config.color);
        surface.set_alpha(self.config.opacity);
        for p in &self.particles {
            surface.circle(p.pos, p.radius);
        }
        surface.set_alpha(1.0);
    }
}

#[inline]
fn wrap_axis(v: f32, radius: f32, extent: f32) -> f32 {
    if v - radius > extent {
        -radius
    } else if v + radius < 0.0 {
        extent + radius
    } else {
        v
    }
}

impl Scene for ParticleField {
    fn resize(&mut self, width: f32, height: f32, _class: DeviceClass) {
        self.reseed(width, height);
    }

    fn update(&mut self, dt: Duration, _pointer: &PointerState) -> Step {
        if self.limiter.tick(dt) {
            self.step();
        }
        Step::Continue
    }

    fn draw(&self, surface: &mut dyn Surface, pointer: &PointerState) {
        self.paint(surface, pointer);
    }

    fn releases_on_leave(&self) -> bool {
        true
    }
}
