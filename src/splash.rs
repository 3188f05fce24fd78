use crate::core::{DeviceClass, LoaderScene, PointerState, Scene, Step, Surface};
use crate::overlay;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Loading screen: the mesh scene plus the progress bar and completion hook
/// living in the surrounding DOM.
pub struct Splash {
    scene: LoaderScene,
    document: web::Document,
    on_complete: Option<js_sys::Function>,
    shown_progress: Option<u32>,
}

impl Splash {
    pub fn new(
        scene: LoaderScene,
        document: web::Document,
        on_complete: Option<js_sys::Function>,
    ) -> Self {
        Self {
            scene,
            document,
            on_complete,
            shown_progress: None,
        }
    }

    fn finish(&self) {
        overlay::hide(&self.document);
        if let Some(cb) = &self.on_complete {
            if let Err(e) = cb.call0(&JsValue::NULL) {
                log::warn!("[loader] completion callback failed: {:?}", e);
            }
        }
    }
}

impl Scene for Splash {
    fn resize(&mut self, width: f32, height: f32, class: DeviceClass) {
        self.scene.resize(width, height, class);
    }

    fn update(&mut self, dt: Duration, pointer: &PointerState) -> Step {
        let step = self.scene.update(dt, pointer);
        let progress = self.scene.progress();
        if self.shown_progress != Some(progress) {
            overlay::set_progress(&self.document, progress);
            self.shown_progress = Some(progress);
        }
        if step == Step::Finished {
            self.finish();
        }
        step
    }

    fn draw(&self, surface: &mut dyn Surface, pointer: &PointerState) {
        self.scene.draw(surface, pointer);
    }

    fn tracks_pointer(&self) -> bool {
        false
    }
}
