use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn canvas_by_id(
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{element_id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{element_id} is not a canvas: {e:?}"))
}

/// Missing elements are skipped silently; a lost sound cue or reveal is
/// never worth failing the sequence over.
#[inline]
pub fn element_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    let found = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if found.is_none() {
        log::debug!("#{element_id} not found, skipping");
    }
    found
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_mouseenter_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn set_display(document: &web::Document, element_id: &str, value: &str) {
    if let Some(el) = element_by_id(document, element_id) {
        set_style(&el, "display", value);
    }
}

/// Reading `offsetWidth` forces a synchronous layout pass, so a just-
/// cleared transition is committed before it is re-armed.
#[inline]
pub fn force_reflow(el: &web::HtmlElement) {
    let _ = el.offset_width();
}

/// Size the canvas backing buffer to the window's inner dimensions.
/// Reapplying with unchanged dimensions is a no-op in effect.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let w = window.inner_width().ok().and_then(|v| v.as_f64());
        let h = window.inner_height().ok().and_then(|v| v.as_f64());
        if let (Some(w), Some(h)) = (w, h) {
            canvas.set_width(w.max(1.0) as u32);
            canvas.set_height(h.max(1.0) as u32);
        }
    }
}
