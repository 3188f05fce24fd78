use crate::canvas::CanvasSurface;
use crate::core::{DeviceClass, Lifecycle, MobilePolicy, PointerState, Scene, Step};
use crate::dom::{self, EventBinding};
use crate::events::{self, PointerWiring, TouchRelease};
use crate::frame::FrameLoop;
use anyhow::anyhow;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// One scene bound to one canvas, plus everything it registered on the page.
struct Mount<S: Scene> {
    label: &'static str,
    canvas: web::HtmlCanvasElement,
    context: Option<web::CanvasRenderingContext2d>,
    policy: MobilePolicy,
    scene: RefCell<S>,
    class: Rc<Cell<DeviceClass>>,
    pointer: Rc<Cell<PointerState>>,
    touch: Rc<TouchRelease>,
    lifecycle: RefCell<Lifecycle<EventBinding>>,
    frames: RefCell<Option<FrameLoop>>,
    last_instant: Cell<Instant>,
}

/// Object-safe view of a [`Mount`] for the exported handle.
trait Backdrop {
    fn start(self: Rc<Self>) -> anyhow::Result<()>;
    fn stop(&self);
    fn is_running(&self) -> bool;
    fn frames(&self) -> u64;
}

impl<S: Scene + 'static> Mount<S> {
    fn new(
        label: &'static str,
        canvas: web::HtmlCanvasElement,
        scene: S,
        policy: MobilePolicy,
    ) -> Self {
        let context = dom::context_2d(&canvas);
        if context.is_none() {
            log::warn!("[{}] no 2d context; drawing will be skipped", label);
        }
        let pointer = Rc::new(Cell::new(PointerState::default()));
        let touch = Rc::new(TouchRelease::new(pointer.clone()));
        Self {
            label,
            canvas,
            context,
            policy,
            scene: RefCell::new(scene),
            class: Rc::new(Cell::new(DeviceClass::Desktop)),
            pointer,
            touch,
            lifecycle: RefCell::new(Lifecycle::default()),
            frames: RefCell::new(None),
            last_instant: Cell::new(Instant::now()),
        }
    }

    fn resize(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let (w, h) = dom::fit_canvas_to_viewport(&window, &self.canvas);
        let class = self.policy.classify(w, &dom::user_agent(&window));
        self.class.set(class);
        self.scene.borrow_mut().resize(w, h, class);
        log::debug!("[{}] resized to {}x{} ({:?})", self.label, w, h, class);
    }

    fn attach(&self, event: &'static str, binding: EventBinding) {
        if let Err(binding) = self.lifecycle.borrow_mut().attach(event, binding) {
            binding.detach(event);
        }
    }

    fn wire(self: &Rc<Self>, window: &web::Window) -> anyhow::Result<()> {
        let weak = Rc::downgrade(self);
        let resize = events::wire_resize(window, move || {
            if let Some(m) = weak.upgrade() {
                m.resize();
            }
        })?;
        self.attach("resize", resize);

        let (tracks_pointer, release_on_leave) = {
            let scene = self.scene.borrow();
            (scene.tracks_pointer(), scene.releases_on_leave())
        };
        if tracks_pointer {
            let wiring = PointerWiring {
                canvas: self.canvas.clone(),
                pointer: self.pointer.clone(),
                class: self.class.clone(),
                touch: self.touch.clone(),
                release_on_leave,
            };
            for (event, binding) in events::wire_pointer_handlers(window, &wiring)? {
                self.attach(event, binding);
            }
        }
        Ok(())
    }

    fn frame(self: &Rc<Self>) -> bool {
        if !self.lifecycle.borrow_mut().begin_frame() {
            return false;
        }
        let now = Instant::now();
        let dt = now - self.last_instant.replace(now);
        let pointer = self.pointer.get();

        let step = self.scene.borrow_mut().update(dt, &pointer);
        match &self.context {
            Some(ctx) => {
                let mut surface = CanvasSurface::new(ctx);
                self.scene.borrow().draw(&mut surface, &pointer);
            }
            None => log::debug!("[{}] frame skipped: no 2d context", self.label),
        }

        if step == Step::Finished {
            // Tearing down from inside the frame callback would drop the
            // running closure; defer it to a microtask.
            let weak: Weak<Self> = Rc::downgrade(self);
            spawn_local(async move {
                if let Some(m) = weak.upgrade() {
                    m.stop();
                }
            });
            return false;
        }
        true
    }
}

impl<S: Scene + 'static> Backdrop for Mount<S> {
    fn start(self: Rc<Self>) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        if !self.lifecycle.borrow_mut().mount() {
            log::debug!("[{}] already running", self.label);
            return Ok(());
        }
        self.resize();
        if let Err(e) = self.wire(&window) {
            self.stop();
            return Err(e);
        }

        self.last_instant.set(Instant::now());
        let weak = Rc::downgrade(&self);
        let frames = FrameLoop::start(move || match weak.upgrade() {
            Some(m) => m.frame(),
            None => false,
        });
        *self.frames.borrow_mut() = Some(frames);
        log::info!(
            "[{}] mounted with {} listeners",
            self.label,
            self.lifecycle.borrow().listeners().len()
        );
        Ok(())
    }

    fn stop(&self) {
        if !self.lifecycle.borrow().is_running() {
            return;
        }
        if let Some(frames) = self.frames.borrow_mut().take() {
            frames.cancel();
        }
        self.touch.cancel();
        let listeners = self.lifecycle.borrow_mut().unmount();
        for listener in listeners {
            listener.handle.detach(listener.event);
        }
        self.pointer.set(PointerState::default());
        log::info!(
            "[{}] unmounted after {} frames",
            self.label,
            self.lifecycle.borrow().frames()
        );
    }

    fn is_running(&self) -> bool {
        self.lifecycle.borrow().is_running()
    }

    fn frames(&self) -> u64 {
        self.lifecycle.borrow().frames()
    }
}

impl<S: Scene> Drop for Mount<S> {
    fn drop(&mut self) {
        if let Some(frames) = self.frames.get_mut().take() {
            frames.cancel();
        }
        self.touch.cancel();
        for listener in self.lifecycle.get_mut().unmount() {
            listener.handle.detach(listener.event);
        }
    }
}

/// Handle to a mounted backdrop. Dropping it unmounts the backdrop.
#[wasm_bindgen]
pub struct BackdropHandle {
    inner: Rc<dyn Backdrop>,
}

#[wasm_bindgen]
impl BackdropHandle {
    /// Re-mount after `unmount`; a no-op while running.
    pub fn mount(&self) -> Result<(), JsValue> {
        self.inner
            .clone()
            .start()
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Cancel the pending frame and remove every listener.
    pub fn unmount(&self) {
        self.inner.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    /// Frames run so far; stops advancing once unmounted.
    pub fn frames(&self) -> f64 {
        self.inner.frames() as f64
    }
}

pub fn mount<S: Scene + 'static>(
    label: &'static str,
    canvas: web::HtmlCanvasElement,
    scene: S,
    policy: MobilePolicy,
) -> anyhow::Result<BackdropHandle> {
    let inner = Rc::new(Mount::new(label, canvas, scene, policy));
    inner.clone().start()?;
    Ok(BackdropHandle { inner })
}
