use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// 2D context, or `None` when the canvas cannot provide one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

#[inline]
fn dimension(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f32 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0) as f32
}

pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

#[inline]
pub fn user_agent(window: &web::Window) -> String {
    window.navigator().user_agent().unwrap_or_default()
}

/// Size the canvas backing store to the viewport and return that size.
pub fn fit_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let (w, h) = viewport_size(window);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w, h)
}

/// Map client coordinates to canvas pixels.
#[inline]
pub fn client_to_canvas(canvas: &web::HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x as f32 - rect.left() as f32;
    let y_css = client_y as f32 - rect.top() as f32;
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            x_css / w * canvas.width() as f32,
            y_css / h * canvas.height() as f32,
        )
    } else {
        Vec2::new(client_x as f32, client_y as f32)
    }
}

/// An event listener that stays registered until [`EventBinding::detach`].
pub struct EventBinding {
    target: web::EventTarget,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventBinding {
    pub fn listen(
        target: &web::EventTarget,
        event: &str,
        mut handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure =
            Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("addEventListener({}) failed: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            closure,
        })
    }

    pub fn detach(self, event: &str) {
        _ = self
            .target
            .remove_event_listener_with_callback(event, self.closure.as_ref().unchecked_ref());
    }
}
