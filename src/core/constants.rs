// Tuning constants for the decorative backdrops.
//
// Each block feeds the `Default` of the matching config struct in
// `config.rs`; nothing outside the crate can override them.

// ---------------- Plexus ----------------
pub const PLEXUS_NODE_COUNT: usize = 100;
pub const PLEXUS_MOBILE_NODE_COUNT: usize = 60;
pub const PLEXUS_MAX_DISTANCE: f32 = 120.0; // px, edge cut-off on desktop
pub const PLEXUS_MOBILE_MAX_DISTANCE: f32 = 100.0;
pub const PLEXUS_INTERACTION_RADIUS: f32 = 180.0;
pub const PLEXUS_NODE_SPEED: f32 = 0.3; // px per frame, full random span
pub const PLEXUS_NODE_SIZE: f32 = 3.5; // circle radius
pub const PLEXUS_LINE_WIDTH: f32 = 2.0;
pub const PLEXUS_BASE_OPACITY: f32 = 0.5;
pub const PLEXUS_INTERACTION_OPACITY: f32 = 0.85; // cap for pointer boosts
pub const PLEXUS_COLOR: &str = "#FFFFFF";

// Per-frame forces
pub const PLEXUS_ATTRACTION: f32 = 0.02 * 0.1;
pub const PLEXUS_DAMPING: f32 = 0.99;
pub const PLEXUS_RETURN_FORCE: f32 = 0.001;

// Pointer proximity boosts
pub const PLEXUS_EDGE_BOOST: f32 = 0.15;
pub const PLEXUS_NODE_BOOST: f32 = 0.2;
pub const PLEXUS_NODE_OPACITY_SCALE: f32 = 1.5;

// Touch deactivation delay
pub const TOUCH_RELEASE_MS: i32 = 500;

// ---------------- Device classification ----------------
pub const MOBILE_MAX_WIDTH: f32 = 768.0;
pub const MOBILE_USER_AGENTS: &[&str] = &[
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

// ---------------- Particles ----------------
pub const PARTICLE_COUNT: usize = 80;
pub const PARTICLE_DENSITY_AREA: f32 = 800.0;
pub const PARTICLE_SPEED: f32 = 1.5;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 3.0;
pub const PARTICLE_COLOR: &str = "#a0a0a0";
pub const PARTICLE_OPACITY: f32 = 0.5;
pub const PARTICLE_LINK_DISTANCE: f32 = 150.0;
pub const PARTICLE_LINK_COLOR: &str = "#ffffff";
pub const PARTICLE_LINK_OPACITY: f32 = 0.4;
pub const PARTICLE_LINK_WIDTH: f32 = 1.0;
pub const PARTICLE_GRAB_DISTANCE: f32 = 140.0;
pub const PARTICLE_GRAB_OPACITY: f32 = 1.0;
pub const PARTICLE_FPS_LIMIT: f32 = 60.0;

// ---------------- Loading screen ----------------
pub const LOADER_VIEW_WIDTH: f32 = 800.0;
pub const LOADER_VIEW_HEIGHT: f32 = 600.0;
pub const LOADER_POINT_COUNT: usize = 25;
pub const LOADER_MAX_EDGE: f32 = 150.0;
pub const LOADER_MAX_TRIANGLES: usize = 40;
pub const LOADER_PROGRESS_STEP: u32 = 2;
pub const LOADER_TICK_MS: u64 = 60;
pub const LOADER_MESH_DELAY_MS: u64 = 800;
pub const LOADER_COMPLETE_DELAY_MS: u64 = 500;
pub const LOADER_LAYER_OPACITY: f32 = 0.2;
pub const LOADER_ACCENT: &str = "#10b981";
pub const LOADER_FILL: &str = "rgba(5, 150, 105, 0.15)";
