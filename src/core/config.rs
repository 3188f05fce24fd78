use super::constants::*;
use super::device::DeviceClass;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must lie in [0, 1] (got {value})")]
    OpacityOutOfRange { field: &'static str, value: f32 },
    #[error("damping must lie in (0, 1) to keep speeds bounded (got {0})")]
    Damping(f32),
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn opacity(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OpacityOutOfRange { field, value })
    }
}

/// Node count and edge threshold chosen for one canvas sizing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlexusProfile {
    pub node_count: usize,
    pub max_distance: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlexusConfig {
    pub node_count: usize,
    pub mobile_node_count: usize,
    pub max_distance: f32,
    pub mobile_max_distance: f32,
    pub interaction_radius: f32,
    pub node_speed: f32,
    pub node_size: f32,
    pub line_width: f32,
    pub base_opacity: f32,
    pub interaction_opacity: f32,
    pub color: String,
    pub attraction: f32,
    pub damping: f32,
    pub return_force: f32,
    pub edge_boost: f32,
    pub node_boost: f32,
    pub node_opacity_scale: f32,
}

impl Default for PlexusConfig {
    fn default() -> Self {
        Self {
            node_count: PLEXUS_NODE_COUNT,
            mobile_node_count: PLEXUS_MOBILE_NODE_COUNT,
            max_distance: PLEXUS_MAX_DISTANCE,
            mobile_max_distance: PLEXUS_MOBILE_MAX_DISTANCE,
            interaction_radius: PLEXUS_INTERACTION_RADIUS,
            node_speed: PLEXUS_NODE_SPEED,
            node_size: PLEXUS_NODE_SIZE,
            line_width: PLEXUS_LINE_WIDTH,
            base_opacity: PLEXUS_BASE_OPACITY,
            interaction_opacity: PLEXUS_INTERACTION_OPACITY,
            color: PLEXUS_COLOR.to_string(),
            attraction: PLEXUS_ATTRACTION,
            damping: PLEXUS_DAMPING,
            return_force: PLEXUS_RETURN_FORCE,
            edge_boost: PLEXUS_EDGE_BOOST,
            node_boost: PLEXUS_NODE_BOOST,
            node_opacity_scale: PLEXUS_NODE_OPACITY_SCALE,
        }
    }
}

impl PlexusConfig {
    pub fn profile(&self, class: DeviceClass) -> PlexusProfile {
        match class {
            DeviceClass::Desktop => PlexusProfile {
                node_count: self.node_count,
                max_distance: self.max_distance,
            },
            DeviceClass::Mobile => PlexusProfile {
                node_count: self.mobile_node_count,
                max_distance: self.mobile_max_distance,
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("node_count", self.node_count as f32)?;
        positive("mobile_node_count", self.mobile_node_count as f32)?;
        positive("max_distance", self.max_distance)?;
        positive("mobile_max_distance", self.mobile_max_distance)?;
        positive("interaction_radius", self.interaction_radius)?;
        positive("node_size", self.node_size)?;
        positive("line_width", self.line_width)?;
        opacity("base_opacity", self.base_opacity)?;
        opacity("interaction_opacity", self.interaction_opacity)?;
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::Damping(self.damping));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    /// `None` disables density scaling and always spawns `count`.
    pub density_area: Option<f32>,
    pub speed: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub color: String,
    pub opacity: f32,
    pub link_distance: f32,
    pub link_color: String,
    pub link_opacity: f32,
    pub link_width: f32,
    pub grab_distance: f32,
    pub grab_opacity: f32,
    pub fps_limit: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            density_area: Some(PARTICLE_DENSITY_AREA),
            speed: PARTICLE_SPEED,
            size_min: PARTICLE_SIZE_MIN,
            size_max: PARTICLE_SIZE_MAX,
            color: PARTICLE_COLOR.to_string(),
            opacity: PARTICLE_OPACITY,
            link_distance: PARTICLE_LINK_DISTANCE,
            link_color: PARTICLE_LINK_COLOR.to_string(),
            link_opacity: PARTICLE_LINK_OPACITY,
            link_width: PARTICLE_LINK_WIDTH,
            grab_distance: PARTICLE_GRAB_DISTANCE,
            grab_opacity: PARTICLE_GRAB_OPACITY,
            fps_limit: PARTICLE_FPS_LIMIT,
        }
    }
}

impl ParticleConfig {
    /// Particle count for a surface, following the classic density rule
    /// `value * (area / 1000) / value_area`.
    pub fn count_for(&self, width: f32, height: f32) -> usize {
        if width <= 0.0 || height <= 0.0 {
            return 0;
        }
        match self.density_area {
            Some(area) if area > 0.0 => {
                let scaled = self.count as f32 * (width * height / 1000.0) / area;
                (scaled.round() as usize).max(1)
            }
            _ => self.count,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("count", self.count as f32)?;
        positive("speed", self.speed)?;
        positive("size_min", self.size_min)?;
        if self.size_max < self.size_min {
            return Err(ConfigError::NotPositive {
                field: "size_max - size_min",
                value: self.size_max - self.size_min,
            });
        }
        positive("link_distance", self.link_distance)?;
        positive("grab_distance", self.grab_distance)?;
        positive("fps_limit", self.fps_limit)?;
        opacity("opacity", self.opacity)?;
        opacity("link_opacity", self.link_opacity)?;
        opacity("grab_opacity", self.grab_opacity)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoaderConfig {
    pub view_width: f32,
    pub view_height: f32,
    pub point_count: usize,
    pub max_edge: f32,
    pub max_triangles: usize,
    pub progress_step: u32,
    pub tick_ms: u64,
    pub mesh_delay_ms: u64,
    pub complete_delay_ms: u64,
    pub layer_opacity: f32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            view_width: LOADER_VIEW_WIDTH,
            view_height: LOADER_VIEW_HEIGHT,
            point_count: LOADER_POINT_COUNT,
            max_edge: LOADER_MAX_EDGE,
            max_triangles: LOADER_MAX_TRIANGLES,
            progress_step: LOADER_PROGRESS_STEP,
            tick_ms: LOADER_TICK_MS,
            mesh_delay_ms: LOADER_MESH_DELAY_MS,
            complete_delay_ms: LOADER_COMPLETE_DELAY_MS,
            layer_opacity: LOADER_LAYER_OPACITY,
        }
    }
}

impl LoaderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("view_width", self.view_width)?;
        positive("view_height", self.view_height)?;
        positive("max_edge", self.max_edge)?;
        positive("progress_step", self.progress_step as f32)?;
        positive("tick_ms", self.tick_ms as f32)?;
        opacity("layer_opacity", self.layer_opacity)?;
        Ok(())
    }
}
