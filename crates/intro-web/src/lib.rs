#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod canvas;
mod dom;
mod events;
mod frame;

// Stable element ids the page exposes (see index.html).
const STARFIELD_CANVAS_ID: &str = "starfield";
const HYPERSPACE_CANVAS_ID: &str = "hyperspace";
const AMBIENT_AUDIO_ID: &str = "starWarsAudio";
const SABER_AUDIO_ID: &str = "saberSound";
const FLYBY_AUDIO_ID: &str = "flybySound";
const FLYBY_SPRITE_ID: &str = "tieFighter";
const START_BUTTON_ID: &str = "startButton";
const MAIN_CONTENT_ID: &str = "mainContent";

fn wire_viewport_sync(star: &web::HtmlCanvasElement, hyper: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_window(star);
    dom::sync_canvas_to_window(hyper);
    let star_resize = star.clone();
    let hyper_resize = hyper.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_to_window(&star_resize);
        dom::sync_canvas_to_window(&hyper_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("intro-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let star_canvas = dom::canvas_by_id(&document, STARFIELD_CANVAS_ID)?;
    let hyper_canvas = dom::canvas_by_id(&document, HYPERSPACE_CANVAS_ID)?;

    // Both canvases track the window size from load onward.
    wire_viewport_sync(&star_canvas, &hyper_canvas);

    // The main content stays hidden until the start gesture.
    dom::set_display(&document, MAIN_CONTENT_ID, "none");

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        &document,
        star_canvas,
        hyper_canvas,
    )?));

    events::wire_start_control(&document, &ctx);

    // The starfield runs from page load; choreography waits for the click.
    frame::start_loop(document, ctx);
    Ok(())
}
