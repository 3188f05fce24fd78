use super::config::{PlexusConfig, PlexusProfile};
use super::device::DeviceClass;
use super::pointer::{proximity, PointerState};
use super::scene::{sanitize_extent, Scene, Step};
use super::surface::Surface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seed position; a weak spring pulls the node back towards it.
    pub origin: Vec2,
}

/// Softly drifting point graph with distance-faded edges.
pub struct PlexusField {
    config: PlexusConfig,
    class: DeviceClass,
    profile: PlexusProfile,
    size: Vec2,
    nodes: Vec<Node>,
    rng: StdRng,
}

impl PlexusField {
    pub fn new(config: PlexusConfig, rng: StdRng) -> Self {
        let class = DeviceClass::Desktop;
        let profile = config.profile(class);
        Self {
            config,
            class,
            profile,
            size: Vec2::ZERO,
            nodes: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &PlexusConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn class(&self) -> DeviceClass {
        self.class
    }

    pub fn max_distance(&self) -> f32 {
        self.profile.max_distance
    }

    /// Discard every node and seed a fresh set for the given surface.
    ///
    /// Count and edge threshold come from the device class and only change
    /// here, together.
    pub fn reseed(&mut self, width: f32, height: f32, class: DeviceClass) {
        self.size = Vec2::new(sanitize_extent(width), sanitize_extent(height));
        self.class = class;
        self.profile = self.config.profile(class);
        self.nodes.clear();
        if self.size.x <= 0.0 || self.size.y <= 0.0 {
            log::debug!("[plexus] empty surface, no nodes seeded");
            return;
        }
        let speed = self.config.node_speed;
        for id in 0..self.profile.node_count {
            let pos = Vec2::new(
                self.rng.gen::<f32>() * self.size.x,
                self.rng.gen::<f32>() * self.size.y,
            );
            let vel = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * speed,
                (self.rng.gen::<f32>() - 0.5) * speed,
            );
            self.nodes.push(Node {
                id,
                pos,
                vel,
                origin: pos,
            });
        }
        log::debug!(
            "[plexus] seeded {} nodes on {}x{} ({:?})",
            self.nodes.len(),
            self.size.x,
            self.size.y,
            class
        );
    }

    /// Pointer position when it may influence the field (desktop only).
    #[inline]
    fn attractor(&self, pointer: &PointerState) -> Option<Vec2> {
        if self.class.is_mobile() {
            None
        } else {
            pointer.active_position()
        }
    }

    /// Advance every node by one frame.
    pub fn step(&mut self, pointer: &PointerState) {
        let attractor = self.attractor(pointer);
        let bounds = self.size;
        let radius = self.config.interaction_radius;
        let attraction = self.config.attraction;
        let damping = self.config.damping;
        let return_force = self.config.return_force;

        for node in &mut self.nodes {
            node.pos += node.vel;

            if node.pos.x <= 0.0 || node.pos.x >= bounds.x {
                node.vel.x = -node.vel.x;
                node.pos.x = node.pos.x.clamp(0.0, bounds.x);
            }
            if node.pos.y <= 0.0 || node.pos.y >= bounds.y {
                node.vel.y = -node.vel.y;
                node.pos.y = node.pos.y.clamp(0.0, bounds.y);
            }

            if let Some(target) = attractor {
                let d = target - node.pos;
                let force = proximity(d.length(), radius);
                if force > 0.0 {
                    node.vel += d * force * attraction;
                }
            }

            node.vel *= damping;
            node.vel += (node.origin - node.pos) * return_force;
        }
    }

    /// Opacity of an edge between `a` and `b`, or `None` when too long to draw.
    pub fn edge_alpha(&self, a: Vec2, b: Vec2, pointer: &PointerState) -> Option<f32> {
        let max_distance = self.profile.max_distance;
        let distance = a.distance(b);
        if distance >= max_distance {
            return None;
        }
        let mut alpha = edge_opacity(distance, max_distance, self.config.base_opacity);
        if let Some(p) = self.attractor(pointer) {
            let boost = proximity(p.distance((a + b) * 0.5), self.config.interaction_radius);
            if boost > 0.0 {
                alpha = (alpha + boost * self.config.edge_boost).min(self.config.interaction_opacity);
            }
        }
        Some(alpha)
    }

    pub fn node_alpha(&self, pos: Vec2, pointer: &PointerState) -> f32 {
        let mut alpha = self.config.base_opacity * self.config.node_opacity_scale;
        if let Some(p) = self.attractor(pointer) {
            let boost = proximity(p.distance(pos), self.config.interaction_radius);
            if boost > 0.0 {
                alpha = (alpha + boost * self.config.node_boost).min(self.config.interaction_opacity);
            }
        }
        alpha
    }

    /// Edges first, then nodes on top.
    pub fn paint(&self, surface: &mut dyn Surface, pointer: &PointerState) {
        surface.clear(self.size.x, self.size.y);

        surface.set_stroke(&self.config.color, self.config.line_width);
        for (i, a) in self.nodes.iter().enumerate() {
            for b in &self.nodes[i + 1..] {
                if let Some(alpha) = self.edge_alpha(a.pos, b.pos, pointer) {
                    surface.set_alpha(alpha);
                    surface.line(a.pos, b.pos);
                }
            }
        }

        surface.set_fill(&self.config.color);
        for node in &self.nodes {
            surface.set_alpha(self.node_alpha(node.pos, pointer));
            surface.circle(node.pos, self.config.node_size);
        }

        surface.set_alpha(1.0);
    }
}

/// `base * (1 - d/threshold)` below the threshold, zero at or beyond it.
#[inline]
pub fn edge_opacity(distance: f32, threshold: f32, base: f32) -> f32 {
    if threshold > 0.0 && distance < threshold {
        base * (1.0 - distance / threshold)
    } else {
        0.0
    }
}

impl Scene for PlexusField {
    fn resize(&mut self, width: f32, height: f32, class: DeviceClass) {
        self.reseed(width, height, class);
    }

    fn update(&mut self, _dt: Duration, pointer: &PointerState) -> Step {
        self.step(pointer);
        Step::Continue
    }

    fn draw(&self, surface: &mut dyn Surface, pointer: &PointerState) {
        self.paint(surface, pointer);
    }
}
