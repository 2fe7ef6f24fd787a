use crate::constants::BGM_ID;
use crate::core::BGM_VOLUME;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start the looping background track. Autoplay rejections are ignored.
pub fn play_background(track: &web::HtmlAudioElement) {
    track.set_volume(BGM_VOLUME);
    match track.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[bgm] play rejected: {:?}", e);
            }
        }),
        Err(e) => log::debug!("[bgm] play error: {:?}", e),
    }
}

/// Start the background track on the first click or touch anywhere.
pub fn wire_background_music(document: &web::Document) {
    let Some(track) = document
        .get_element_by_id(BGM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
    else {
        log::info!("[bgm] no #{} element", BGM_ID);
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let started = Rc::new(Cell::new(false));
    for event in ["click", "touchstart"] {
        let track = track.clone();
        let started = started.clone();
        dom::add_once_listener(&window, event, move || {
            if !started.replace(true) {
                play_background(&track);
            }
        });
    }
}
