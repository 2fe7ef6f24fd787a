// Host-side tests for the confetti burst model and its deadline loop.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod confetti {
        include!("../src/core/confetti.rs");
    }
}

use crate::core::confetti::*;
use crate::core::constants::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Tick the loop the way `setInterval` would and return burst timestamps.
fn run_loop(interval_ms: u64, window_ms: u64) -> (Vec<u64>, u64) {
    let mut lp = ConfettiLoop::new(
        Duration::from_millis(interval_ms),
        Duration::from_millis(window_ms),
    );
    let mut bursts = Vec::new();
    let mut t = 0;
    loop {
        t += interval_ms;
        match lp.tick(Duration::from_millis(t)) {
            LoopTick::Burst => bursts.push(t),
            LoopTick::Finished => return (bursts, t),
        }
    }
}

#[test]
fn default_loop_bursts_every_250ms_for_three_seconds() {
    let (bursts, stopped_at) = run_loop(250, 3000);
    assert_eq!(bursts.len(), 11);
    assert_eq!(bursts.first(), Some(&250));
    assert_eq!(bursts.last(), Some(&2750));
    assert_eq!(stopped_at, 3000);
}

#[test]
fn loop_deadline_holds_for_any_interval() {
    for interval in [1u64, 7, 33, 250, 999, 1000, 2999, 3000, 4500] {
        let (bursts, stopped_at) = run_loop(interval, 3000);
        assert!(bursts.iter().all(|&t| t < 3000), "interval {}", interval);
        assert!(stopped_at >= 3000, "interval {}", interval);
        assert!(stopped_at < 3000 + interval, "interval {}", interval);
        assert_eq!(bursts.len() as u64, 2999 / interval, "interval {}", interval);
    }
}

#[test]
fn finished_loop_stays_finished() {
    let mut lp = ConfettiLoop::new(Duration::from_millis(250), Duration::from_millis(3000));
    assert_eq!(lp.tick(Duration::from_millis(3100)), LoopTick::Finished);
    // a late, out-of-order tick must not restart it
    assert_eq!(lp.tick(Duration::from_millis(500)), LoopTick::Finished);
    assert!(lp.is_finished());
    assert_eq!(lp.bursts(), 0);
}

#[test]
fn default_burst_matches_celebration_settings() {
    let cfg = BurstConfig::default();
    assert_eq!(cfg.particle_count, 40);
    assert_eq!(cfg.spread_deg, 360.0);
    assert_eq!(cfg.start_velocity, 30.0);
    assert_eq!(cfg.ticks, 60);
    assert_eq!(cfg.z_index, 50);
    assert_eq!(cfg.colors, &["#C5A059", "#AA381E", "#F9F7F2"]);
    assert_eq!(cfg.origin, Vec2::new(0.5, 0.5));
}

#[test]
fn burst_spawns_from_viewport_center_with_palette_colors() {
    let mut rng = StdRng::seed_from_u64(11);
    let viewport = Vec2::new(1280.0, 720.0);
    let particles = spawn_burst(&BurstConfig::default(), viewport, &mut rng);
    assert_eq!(particles.len(), CONFETTI_PARTICLES);
    for p in &particles {
        assert_eq!(p.pos, Vec2::new(640.0, 360.0));
        assert!(CONFETTI_COLORS.contains(&p.color));
        assert!(p.is_alive());
        assert_eq!(p.alpha(), 1.0);
    }
}

#[test]
fn full_spread_scatters_in_every_direction() {
    let mut rng = StdRng::seed_from_u64(5);
    let center = Vec2::new(500.0, 500.0);
    let mut cfg = BurstConfig::default();
    cfg.particle_count = 400;
    cfg.gravity = 0.0;
    let mut particles = spawn_burst(&cfg, center * 2.0, &mut rng);
    for p in particles.iter_mut() {
        p.step(&mut rng);
    }
    let quadrants = particles.iter().fold([0usize; 4], |mut acc, p| {
        let d = p.pos - center;
        let q = match (d.x >= 0.0, d.y >= 0.0) {
            (true, true) => 0,
            (false, true) => 1,
            (false, false) => 2,
            (true, false) => 3,
        };
        acc[q] += 1;
        acc
    });
    assert!(quadrants.iter().all(|&n| n > 40), "{:?}", quadrants);
}

#[test]
fn gravity_pulls_particles_down_over_their_lifetime() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut cfg = BurstConfig::default();
    cfg.spread_deg = 0.0; // straight up
    let mut particles = spawn_burst(&cfg, Vec2::new(200.0, 200.0), &mut rng);
    let start_y = particles[0].pos.y;
    let mut min_y = start_y;
    while particles[0].step(&mut rng) {
        min_y = min_y.min(particles[0].pos.y);
    }
    assert!(min_y < start_y, "should rise first");
    assert!(particles[0].pos.y > min_y, "should fall back");
    assert!(!particles[0].is_alive());
    particles.retain(|p| p.is_alive());
    assert_eq!(particles.len(), CONFETTI_PARTICLES - 1);
}

#[test]
fn fade_is_linear_in_ticks() {
    let mut rng = StdRng::seed_from_u64(1);
    let cfg = BurstConfig::default();
    let mut p = Particle::spawn(&cfg, Vec2::ZERO, "#AA381E", &mut rng);
    for _ in 0..30 {
        p.step(&mut rng);
    }
    assert!((p.alpha() - 0.5).abs() < 1e-6);
}
