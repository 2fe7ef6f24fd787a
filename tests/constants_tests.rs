// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(HOLD_DWELL_MS > 0);
    assert!(EXTINGUISH_MS > 0);
    assert!(CONFETTI_INTERVAL_MS > 0);

    // the loop must fire more than once before its window closes
    assert!(CONFETTI_WINDOW_MS > CONFETTI_INTERVAL_MS);
    assert_eq!(CONFETTI_WINDOW_MS % CONFETTI_INTERVAL_MS, 0);

    // all labels must have started before the confetti ends
    assert!((WISH_MAX_DELAY_SEC * 1000.0) < CONFETTI_WINDOW_MS as f32);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn audio_settings_are_valid() {
    // byte magnitudes live in 0..=255
    assert!(LOUDNESS_THRESHOLD > 0.0 && LOUDNESS_THRESHOLD < 255.0);
    // ScriptProcessor accepts powers of two from 256 to 16384
    assert!(MIC_BUFFER_SIZE.is_power_of_two());
    assert!((256..=16384).contains(&MIC_BUFFER_SIZE));
    assert_eq!(MIC_CHANNELS, 1);
    assert!(BGM_VOLUME > 0.0 && BGM_VOLUME <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wish_layout_fits_the_box() {
    assert_eq!(WISH_LABEL_COUNT, 45);
    assert!(WISH_SCALE_MIN > 0.0);
    assert!(WISH_ROTATION_MAX_DEG > 0.0);
    // outermost horizontal offset stays on screen
    let far = (WIDE_BASE_DISTANCE + WIDE_DISTANCE_RANGE) * WISH_HORIZONTAL_STRETCH;
    assert!(far < 50.0);
    assert!(NARROW_BASE_DISTANCE < WIDE_BASE_DISTANCE);
}

#[test]
fn palettes_are_hex_colors() {
    for color in CONFETTI_COLORS.iter().chain(WISH_COLORS.iter()) {
        assert_eq!(color.len(), 7, "{}", color);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANDLE_ID,
        FLAME_ID,
        CAPTION_ID,
        HINT_ID,
        WISH_FIELD_ID,
        CONFETTI_CANVAS_ID,
        BGM_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
