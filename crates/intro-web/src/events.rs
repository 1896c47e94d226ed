use crate::frame::FrameContext;
use crate::{audio, dom};
use crate::{MAIN_CONTENT_ID, START_BUTTON_ID};
use instant::Instant;
use intro_core::{Choreographer, REVEAL_TARGETS};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wire the start control. The first click begins the show; later clicks
/// are no-ops (the button is hidden by then anyway).
pub fn wire_start_control(document: &web::Document, ctx: &Rc<RefCell<FrameContext>>) {
    let ctx_click = ctx.clone();
    let document_click = document.clone();
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        begin_show(&document_click, &ctx_click);
    });
}

fn begin_show(document: &web::Document, ctx: &Rc<RefCell<FrameContext>>) {
    {
        let mut ctx = ctx.borrow_mut();
        if ctx.started_at.is_some() {
            return;
        }
        ctx.started_at = Some(Instant::now());
        ctx.choreographer = Some(Choreographer::new());

        // Swap page chrome: start control out, main content in.
        dom::set_display(document, START_BUTTON_ID, "none");
        dom::set_display(document, MAIN_CONTENT_ID, "flex");

        // Ambient theme; the click satisfies the gesture requirement, but
        // a rejection still only warns.
        if let Some(ambient) = ctx.ambient.as_ref() {
            audio::play_logging_failure(ambient, "ambient");
        }
    }

    wire_hover_sounds(document, ctx);
}

/// Every character restarts the saber sound on each pointer-enter, even
/// before it has faded in.
fn wire_hover_sounds(document: &web::Document, ctx: &Rc<RefCell<FrameContext>>) {
    for target in REVEAL_TARGETS.iter() {
        let Some(saber) = ctx.borrow().saber.clone() else {
            return;
        };
        dom::add_mouseenter_listener(document, target.element_id, move || {
            audio::replay_from_start(&saber, "saber");
        });
    }
}
