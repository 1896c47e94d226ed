use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn audio_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlAudioElement> {
    let found = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
    if found.is_none() {
        log::debug!("audio #{element_id} not found, cue disabled");
    }
    found
}

/// Start playback. A rejected play promise (typically autoplay policy) is
/// logged as a warning and otherwise ignored; it never blocks the rest of
/// the choreography.
pub fn play_logging_failure(audio: &web::HtmlAudioElement, label: &'static str) {
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("{label} playback failed: {e:?}");
            }
        }),
        Err(e) => log::warn!("{label} playback failed: {e:?}"),
    }
}

/// Rewind and play. Rapid re-triggers (hover spam, overlapping cues) just
/// restart from zero, last writer wins.
pub fn replay_from_start(audio: &web::HtmlAudioElement, label: &'static str) {
    audio.set_current_time(0.0);
    play_logging_failure(audio, label);
}
