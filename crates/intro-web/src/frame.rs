use crate::{audio, canvas::CanvasSurface, dom};
use crate::{AMBIENT_AUDIO_ID, FLYBY_AUDIO_ID, FLYBY_SPRITE_ID, SABER_AUDIO_ID};
use instant::Instant;
use intro_core::{
    flyby, render_hyperspace, render_starfield, Choreographer, Cue, CueBatch, ParticleStore,
    StyleStep, Viewport, REVEAL_TARGETS,
};
use intro_core::constants::REVEAL_TRANSITION;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the frame loop touches, built once at startup. The two
/// render surfaces and the particle pools live here; the choreographer
/// appears on the start gesture and runs for the rest of the page life.
pub struct FrameContext {
    pub viewport: Viewport,
    pub store: ParticleStore,
    pub rng: StdRng,

    pub star_canvas: web::HtmlCanvasElement,
    pub hyper_canvas: web::HtmlCanvasElement,
    pub star_surface: CanvasSurface,
    pub hyper_surface: CanvasSurface,

    pub ambient: Option<web::HtmlAudioElement>,
    pub saber: Option<web::HtmlAudioElement>,
    pub flyby_sound: Option<web::HtmlAudioElement>,
    pub sprite: Option<web::HtmlElement>,

    pub choreographer: Option<Choreographer>,
    pub started_at: Option<Instant>,
    pub hyperspace_active: bool,
}

impl FrameContext {
    pub fn new(
        document: &web::Document,
        star_canvas: web::HtmlCanvasElement,
        hyper_canvas: web::HtmlCanvasElement,
    ) -> anyhow::Result<Self> {
        let star_surface = CanvasSurface::new(&star_canvas)?;
        let hyper_surface = CanvasSurface::new(&hyper_canvas)?;
        let viewport = Viewport::new(star_canvas.width() as f32, star_canvas.height() as f32)?;
        let mut rng = StdRng::from_entropy();
        let store = ParticleStore::new(&mut rng, viewport);
        Ok(Self {
            viewport,
            store,
            rng,
            star_canvas,
            hyper_canvas,
            star_surface,
            hyper_surface,
            ambient: audio::audio_by_id(document, AMBIENT_AUDIO_ID),
            saber: audio::audio_by_id(document, SABER_AUDIO_ID),
            flyby_sound: audio::audio_by_id(document, FLYBY_AUDIO_ID),
            sprite: dom::element_by_id(document, FLYBY_SPRITE_ID),
            choreographer: None,
            started_at: None,
            hyperspace_active: false,
        })
    }

    /// The resize listener updates the canvas backing buffers; pick the
    /// new dimensions up here so particle bounds follow the window.
    fn refresh_viewport(&mut self) {
        if let Ok(vp) = Viewport::new(
            self.star_canvas.width() as f32,
            self.star_canvas.height() as f32,
        ) {
            self.viewport = vp;
        }
    }

    pub fn frame(&mut self, document: &web::Document) {
        self.refresh_viewport();
        render_starfield(
            &mut self.store,
            self.viewport,
            &mut self.rng,
            &mut self.star_surface,
        );

        let mut cues = CueBatch::new();
        if let (Some(started_at), Some(ch)) = (self.started_at, self.choreographer.as_mut()) {
            let elapsed_ms = started_at.elapsed().as_millis() as u64;
            ch.poll(elapsed_ms, &mut cues);
        }
        for cue in cues {
            self.execute_cue(document, cue);
        }

        if self.hyperspace_active {
            render_hyperspace(&mut self.store, self.viewport, &mut self.hyper_surface);
        }
    }

    fn execute_cue(&mut self, document: &web::Document, cue: Cue) {
        match cue {
            Cue::Reveal(index) => {
                let target = &REVEAL_TARGETS[index];
                if let Some(el) = dom::element_by_id(document, target.element_id) {
                    dom::set_style(&el, "transition", REVEAL_TRANSITION);
                    dom::set_style(&el, "opacity", "1");
                }
            }
            Cue::HyperspaceStart => self.hyperspace_active = true,
            Cue::FlybyLaunch => self.apply_flyby_program(flyby::LAUNCH_PROGRAM),
            Cue::FlybyRest => self.apply_flyby_program(flyby::REST_PROGRAM),
        }
    }

    fn apply_flyby_program(&mut self, steps: &[StyleStep]) {
        let Some(sprite) = self.sprite.as_ref() else {
            return;
        };
        for step in steps {
            match *step {
                StyleStep::SetTransform(value) => dom::set_style(sprite, "transform", value),
                StyleStep::SetTransition(value) => dom::set_style(sprite, "transition", value),
                StyleStep::ClearTransition => dom::set_style(sprite, "transition", "none"),
                StyleStep::ForceReflow => dom::force_reflow(sprite),
                StyleStep::RestartSound => {
                    if let Some(sound) = self.flyby_sound.as_ref() {
                        audio::replay_from_start(sound, "flyby");
                    }
                }
            }
        }
    }
}

/// Self-rescheduling requestAnimationFrame loop; never cancelled, only a
/// page teardown stops it.
pub fn start_loop(document: web::Document, ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx_tick.borrow_mut().frame(&document);
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
