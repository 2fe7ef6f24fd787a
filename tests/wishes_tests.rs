// Host-side tests for the wish-field generator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod wishes {
        include!("../src/core/wishes.rs");
    }
}

use crate::core::constants::*;
use crate::core::wishes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::{FRAC_PI_2, PI};

fn labels(seed: u64, narrow: bool) -> Vec<WishLabel> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_wish_labels(DistanceBand::for_viewport(narrow), &mut rng)
}

#[test]
fn generates_forty_five_labels_from_the_vocabulary() {
    let field = labels(7, false);
    assert_eq!(field.len(), 45);
    for (i, label) in field.iter().enumerate() {
        assert_eq!(label.id, i);
        assert!(WISH_WORDS.contains(&label.text));
        assert_eq!(label.text, WISH_WORDS[i % WISH_WORDS.len()]);
    }
    assert_eq!(WISH_WORDS.len(), 30);
}

#[test]
fn every_label_sits_inside_its_distance_band() {
    for narrow in [false, true] {
        let band = DistanceBand::for_viewport(narrow);
        for seed in 0..200 {
            for label in labels(seed, narrow) {
                assert!(band.contains(label.distance), "{} not in {:?}", label.distance, band);
                let offset = label.position - glam::Vec2::splat(50.0);
                // undo the horizontal stretch to recover the radius
                let radius = (offset / glam::Vec2::new(WISH_HORIZONTAL_STRETCH, 1.0)).length();
                assert!((radius - label.distance).abs() < 1e-3);
            }
        }
    }
}

#[test]
fn narrow_band_is_tighter_than_wide_band() {
    let narrow = DistanceBand::for_viewport(true);
    let wide = DistanceBand::for_viewport(false);
    assert_eq!((narrow.base, narrow.range), (15.0, 20.0));
    assert_eq!((wide.base, wide.range), (18.0, 22.0));
    assert!(narrow.base + narrow.range < wide.base + wide.range);
}

#[test]
fn layout_position_is_deterministic() {
    let p = layout_position(0.0, 20.0);
    assert!((p.x - 74.0).abs() < 1e-4);
    assert!((p.y - 50.0).abs() < 1e-4);

    let q = layout_position(FRAC_PI_2, 20.0);
    assert!((q.x - 50.0).abs() < 1e-4);
    assert!((q.y - 70.0).abs() < 1e-4);

    let r = layout_position(PI, 10.0);
    assert!((r.x - 38.0).abs() < 1e-4);
    assert_eq!(layout_position(1.234, 17.5), layout_position(1.234, 17.5));
}

#[test]
fn label_attributes_stay_in_range() {
    for seed in 0..100 {
        for label in labels(seed, false) {
            assert!(label.angle >= 0.0 && label.angle <= 2.0 * PI);
            assert!(label.scale >= 0.7 && label.scale < 1.5);
            assert!(label.rotation_deg >= -20.0 && label.rotation_deg < 20.0);
            assert!(label.font_rem >= 0.9 && label.font_rem < 1.4);
            assert!(label.delay_sec >= 0.0 && label.delay_sec < WISH_MAX_DELAY_SEC);
            assert!(WISH_COLORS.contains(&label.color));
        }
    }
}

#[test]
fn max_reveal_delay_bounds_the_stagger() {
    let field = labels(42, true);
    let max = max_reveal_delay(&field);
    assert!(field.iter().all(|l| l.delay_sec <= max));
    assert!(max < WISH_MAX_DELAY_SEC);
    assert_eq!(max_reveal_delay(&[]), 0.0);
}

#[test]
fn same_seed_gives_same_field() {
    let a = labels(99, false);
    let b = labels(99, false);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.color, y.color);
        assert_eq!(x.delay_sec, y.delay_sec);
    }
}
