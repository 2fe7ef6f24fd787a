#![cfg(target_arch = "wasm32")]
use crate::core::{generate_wish_labels, CandleConfig, DistanceBand, NARROW_VIEWPORT_PX};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod candle;
mod confetti;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod mic;
mod timer;
mod view;

use crate::constants::{CONFETTI_CANVAS_ID, DATA_HOLD_MS, DATA_LOUDNESS_THRESHOLD};

/// Read optional `data-*` tuning overrides from the candle element.
fn config_from_dataset(candle: &web::Element) -> CandleConfig {
    let mut config = CandleConfig::default();
    let Some(el) = candle.dyn_ref::<web::HtmlElement>() else {
        return config;
    };
    let dataset = el.dataset();
    if let Some(raw) = dataset.get(DATA_HOLD_MS) {
        if !config.override_hold_ms(&raw) {
            log::warn!("[config] ignoring data-hold-ms={:?}", raw);
        }
    }
    if let Some(raw) = dataset.get(DATA_LOUDNESS_THRESHOLD) {
        if !config.override_loudness_threshold(&raw) {
            log::warn!("[config] ignoring data-loudness-threshold={:?}", raw);
        }
    }
    config
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wish-candle starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Independent of the candle; must work even if the section is missing.
    audio::wire_background_music(&document);

    let view = view::View::new(&document)?;
    let confetti = confetti::ConfettiCanvas::new(&document, CONFETTI_CANVAS_ID)?;
    let config = config_from_dataset(view.candle());

    let band = DistanceBand::for_viewport(dom::is_narrow_viewport(NARROW_VIEWPORT_PX));
    let labels = generate_wish_labels(band, &mut StdRng::from_entropy());
    log::info!(
        "[candle] ready: hold {:?}, threshold {:.1}, {} wishes",
        config.hold_dwell,
        config.loudness_threshold,
        labels.len()
    );

    let candle = candle::Candle::new(config, view, confetti, labels);
    events::wire_candle_handlers(&candle);
    Ok(())
}
