pub mod config;
pub mod constants;
pub mod device;
pub mod lifecycle;
pub mod loader;
pub mod mesh;
pub mod particles;
pub mod plexus;
pub mod pointer;
pub mod scene;
pub mod surface;
pub mod timing;

pub use config::*;
pub use device::*;
pub use lifecycle::*;
pub use loader::*;
pub use particles::*;
pub use plexus::*;
pub use pointer::*;
pub use scene::*;
pub use surface::*;
