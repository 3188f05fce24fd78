use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that re-arms itself after every frame.
///
/// Must not be cancelled from inside its own frame callback.
pub struct FrameLoop {
    tick: Tick,
    request_id: Rc<Cell<Option<i32>>>,
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let window = web::window()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| log::warn!("requestAnimationFrame failed: {:?}", e))
        .ok()
}

impl FrameLoop {
    /// Runs `frame` once per display refresh until it returns `false` or
    /// the loop is cancelled.
    pub fn start(mut frame: impl FnMut() -> bool + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));

        let tick_weak = Rc::downgrade(&tick);
        let id_for_tick = request_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            id_for_tick.set(None);
            if !frame() {
                return;
            }
            if let Some(tick) = tick_weak.upgrade() {
                if let Some(cb) = tick.borrow().as_ref() {
                    id_for_tick.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            request_id.set(request_frame(cb));
        }
        Self { tick, request_id }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.request_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
