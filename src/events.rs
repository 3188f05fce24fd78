use crate::core::constants::TOUCH_RELEASE_MS;
use crate::core::{DeviceClass, PointerState};
use crate::dom::{self, EventBinding};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Deactivates the pointer a short while after the last touch.
pub struct TouchRelease {
    timeout_id: Cell<Option<i32>>,
    callback: Closure<dyn FnMut()>,
}

impl TouchRelease {
    pub fn new(pointer: Rc<Cell<PointerState>>) -> Self {
        let callback = Closure::wrap(Box::new(move || {
            pointer.set(pointer.get().released());
        }) as Box<dyn FnMut()>);
        Self {
            timeout_id: Cell::new(None),
            callback,
        }
    }

    /// (Re)start the countdown; an earlier pending release is dropped.
    pub fn arm(&self) {
        self.cancel();
        if let Some(w) = web::window() {
            let id = w
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    self.callback.as_ref().unchecked_ref(),
                    TOUCH_RELEASE_MS,
                )
                .ok();
            self.timeout_id.set(id);
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.timeout_id.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(id);
            }
        }
    }
}

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<Cell<PointerState>>,
    pub class: Rc<Cell<DeviceClass>>,
    pub touch: Rc<TouchRelease>,
    pub release_on_leave: bool,
}

/// Mouse listeners act on desktop only, touch listeners on mobile only; the
/// class is read per event so a resize that reclassifies the device takes
/// effect without rewiring.
pub fn wire_pointer_handlers(
    target: &web::EventTarget,
    w: &PointerWiring,
) -> anyhow::Result<Vec<(&'static str, EventBinding)>> {
    let mut bindings = vec![
        ("mousemove", wire_mousemove(target, w)?),
        ("touchstart", wire_touch(target, "touchstart", w)?),
        ("touchmove", wire_touch(target, "touchmove", w)?),
    ];
    if w.release_on_leave {
        bindings.push(("mouseout", wire_mouseout(target, w)?));
    }
    Ok(bindings)
}

fn wire_mousemove(target: &web::EventTarget, w: &PointerWiring) -> anyhow::Result<EventBinding> {
    let w = w.clone();
    EventBinding::listen(target, "mousemove", move |ev| {
        if w.class.get().is_mobile() {
            return;
        }
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = dom::client_to_canvas(&w.canvas, ev.client_x(), ev.client_y());
        w.pointer.set(PointerState::at(pos.x, pos.y));
    })
}

fn wire_mouseout(target: &web::EventTarget, w: &PointerWiring) -> anyhow::Result<EventBinding> {
    let w = w.clone();
    EventBinding::listen(target, "mouseout", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        // Only when leaving the page, not when crossing between elements.
        if ev.related_target().is_none() {
            w.pointer.set(w.pointer.get().released());
        }
    })
}

fn wire_touch(
    target: &web::EventTarget,
    event: &'static str,
    w: &PointerWiring,
) -> anyhow::Result<EventBinding> {
    let w = w.clone();
    EventBinding::listen(target, event, move |ev| {
        if !w.class.get().is_mobile() {
            return;
        }
        let Some(touch) = ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|t| t.touches().get(0))
        else {
            return;
        };
        let pos = dom::client_to_canvas(&w.canvas, touch.client_x(), touch.client_y());
        w.pointer.set(PointerState::at(pos.x, pos.y));
        w.touch.arm();
    })
}

pub fn wire_resize(
    window: &web::Window,
    on_resize: impl FnMut() + 'static,
) -> anyhow::Result<EventBinding> {
    let mut on_resize = on_resize;
    EventBinding::listen(window, "resize", move |_| on_resize())
}
