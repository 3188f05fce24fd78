#![cfg(target_arch = "wasm32")]
use crate::core::{
    LoaderConfig, LoaderScene, MobilePolicy, ParticleConfig, ParticleField, PlexusConfig,
    PlexusField,
};
use anyhow::anyhow;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod backdrop;
mod canvas;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod splash;

pub use backdrop::BackdropHandle;

// Canvases picked up automatically when present on the page
const PLEXUS_CANVAS_ID: &str = "plexus-canvas";
const PARTICLES_CANVAS_ID: &str = "particles-canvas";
const LOADING_CANVAS_ID: &str = "loading-canvas";

thread_local! {
    static AUTO_MOUNTED: RefCell<Vec<BackdropHandle>> = const { RefCell::new(Vec::new()) };
}

#[inline]
fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

fn canvas(canvas_id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    dom::canvas_by_id(&document, canvas_id)
}

fn plexus(canvas_id: &str) -> anyhow::Result<BackdropHandle> {
    let config = PlexusConfig::default();
    config.validate()?;
    let scene = PlexusField::new(config, StdRng::from_entropy());
    backdrop::mount("plexus", canvas(canvas_id)?, scene, MobilePolicy::default())
}

fn particles(canvas_id: &str) -> anyhow::Result<BackdropHandle> {
    let config = ParticleConfig::default();
    config.validate()?;
    let scene = ParticleField::new(config, StdRng::from_entropy());
    backdrop::mount("particles", canvas(canvas_id)?, scene, MobilePolicy::default())
}

fn loader(canvas_id: &str, on_complete: Option<js_sys::Function>) -> anyhow::Result<BackdropHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let config = LoaderConfig::default();
    config.validate()?;
    let scene = LoaderScene::new(config, &mut StdRng::from_entropy());
    let splash = splash::Splash::new(scene, document, on_complete);
    backdrop::mount("loader", canvas(canvas_id)?, splash, MobilePolicy::default())
}

/// Mount the plexus backdrop on the canvas with the given id.
#[wasm_bindgen(js_name = mountPlexus)]
pub fn mount_plexus(canvas_id: &str) -> Result<BackdropHandle, JsValue> {
    plexus(canvas_id).map_err(to_js)
}

/// Mount the particle backdrop on the canvas with the given id.
#[wasm_bindgen(js_name = mountParticles)]
pub fn mount_particles(canvas_id: &str) -> Result<BackdropHandle, JsValue> {
    particles(canvas_id).map_err(to_js)
}

/// Mount the loading screen; `on_complete` runs once when loading finishes.
#[wasm_bindgen(js_name = mountLoader)]
pub fn mount_loader(
    canvas_id: &str,
    on_complete: Option<js_sys::Function>,
) -> Result<BackdropHandle, JsValue> {
    loader(canvas_id, on_complete).map_err(to_js)
}

/// Unmount everything mounted automatically at start-up.
#[wasm_bindgen(js_name = unmountAll)]
pub fn unmount_all() {
    AUTO_MOUNTED.with(|handles| {
        for handle in handles.borrow_mut().drain(..) {
            handle.unmount();
        }
    });
}

fn auto_mount() {
    let Some(document) = dom::window_document() else {
        log::warn!("no document; nothing mounted");
        return;
    };
    let present = |id: &str| document.get_element_by_id(id).is_some();

    let mut mounted = Vec::new();
    if present(PLEXUS_CANVAS_ID) {
        match plexus(PLEXUS_CANVAS_ID) {
            Ok(h) => mounted.push(h),
            Err(e) => log::error!("plexus mount error: {:?}", e),
        }
    }
    if present(PARTICLES_CANVAS_ID) {
        match particles(PARTICLES_CANVAS_ID) {
            Ok(h) => mounted.push(h),
            Err(e) => log::error!("particles mount error: {:?}", e),
        }
    }
    if present(LOADING_CANVAS_ID) {
        match loader(LOADING_CANVAS_ID, None) {
            Ok(h) => mounted.push(h),
            Err(e) => log::error!("loader mount error: {:?}", e),
        }
    }
    log::info!("auto-mounted {} backdrops", mounted.len());
    AUTO_MOUNTED.with(|handles| handles.borrow_mut().extend(mounted));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wholegreen-backdrop starting");
    auto_mount();
    Ok(())
}
