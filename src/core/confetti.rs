use super::constants::{
    CONFETTI_COLORS, CONFETTI_DECAY, CONFETTI_GRAVITY, CONFETTI_PARTICLES, CONFETTI_SPREAD_DEG,
    CONFETTI_START_VELOCITY, CONFETTI_TICKS, CONFETTI_Z_INDEX,
};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::PI;
use std::time::Duration;

/// Parameters of a single burst. Origin is in normalized viewport units.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstConfig {
    pub particle_count: usize,
    pub angle_deg: f32,
    pub spread_deg: f32,
    pub start_velocity: f32,
    pub decay: f32,
    pub gravity: f32,
    pub drift: f32,
    pub ticks: u32,
    pub scalar: f32,
    pub z_index: i32,
    pub colors: &'static [&'static str],
    pub origin: Vec2,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: CONFETTI_PARTICLES,
            angle_deg: 90.0,
            spread_deg: CONFETTI_SPREAD_DEG,
            start_velocity: CONFETTI_START_VELOCITY,
            decay: CONFETTI_DECAY,
            gravity: CONFETTI_GRAVITY,
            drift: 0.0,
            ticks: CONFETTI_TICKS,
            scalar: 1.0,
            z_index: CONFETTI_Z_INDEX,
            colors: &CONFETTI_COLORS,
            origin: Vec2::new(0.5, 0.5),
        }
    }
}

/// One confetti piece in canvas pixel space.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub wobble_pos: Vec2,
    pub color: &'static str,
    velocity: f32,
    heading: f32,
    decay: f32,
    gravity: f32,
    drift: f32,
    scalar: f32,
    wobble: f32,
    wobble_speed: f32,
    tilt_angle: f32,
    tilt: Vec2,
    jitter: f32,
    tick: u32,
    total_ticks: u32,
}

impl Particle {
    pub fn spawn<R: Rng>(cfg: &BurstConfig, origin_px: Vec2, color: &'static str, rng: &mut R) -> Self {
        let angle = cfg.angle_deg.to_radians();
        let spread = cfg.spread_deg.to_radians();
        Self {
            pos: origin_px,
            wobble_pos: origin_px,
            color,
            velocity: cfg.start_velocity * 0.5 + rng.gen::<f32>() * cfg.start_velocity,
            heading: -angle + (0.5 * spread - rng.gen::<f32>() * spread),
            decay: cfg.decay,
            gravity: cfg.gravity * 3.0,
            drift: cfg.drift,
            scalar: cfg.scalar,
            wobble: rng.gen::<f32>() * 10.0,
            wobble_speed: (rng.gen::<f32>() * 0.1 + 0.05).min(0.11),
            tilt_angle: (rng.gen::<f32>() * 0.5 + 0.25) * PI,
            tilt: Vec2::ZERO,
            jitter: rng.gen::<f32>() + 2.0,
            tick: 0,
            total_ticks: cfg.ticks.max(1),
        }
    }

    /// Advance one animation frame. Returns false once the particle expired.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> bool {
        self.pos.x += self.heading.cos() * self.velocity + self.drift;
        self.pos.y += self.heading.sin() * self.velocity + self.gravity;
        self.velocity *= self.decay;

        self.wobble += self.wobble_speed;
        self.wobble_pos = self.pos + Vec2::new(self.wobble.cos(), self.wobble.sin()) * 10.0 * self.scalar;

        self.tilt_angle += 0.1;
        self.tilt = Vec2::new(self.tilt_angle.cos(), self.tilt_angle.sin());
        self.jitter = rng.gen::<f32>() + 2.0;

        self.tick += 1;
        self.tick < self.total_ticks
    }

    pub fn alpha(&self) -> f32 {
        1.0 - self.tick as f32 / self.total_ticks as f32
    }

    pub fn is_alive(&self) -> bool {
        self.tick < self.total_ticks
    }

    /// Corners of the tilted quad drawn for this particle.
    pub fn quad(&self) -> [Vec2; 4] {
        let off = self.tilt * self.jitter;
        [
            self.pos.floor(),
            Vec2::new(self.wobble_pos.x, self.pos.y + off.y).floor(),
            (self.wobble_pos + off).floor(),
            Vec2::new(self.pos.x + off.x, self.wobble_pos.y).floor(),
        ]
    }
}

/// Spawn every particle of a burst for a viewport of `viewport_px`.
pub fn spawn_burst<R: Rng>(cfg: &BurstConfig, viewport_px: Vec2, rng: &mut R) -> Vec<Particle> {
    let origin = cfg.origin * viewport_px;
    (0..cfg.particle_count)
        .map(|i| {
            let color = if cfg.colors.is_empty() {
                "#ffffff"
            } else {
                cfg.colors[i % cfg.colors.len()]
            };
            Particle::spawn(cfg, origin, color, rng)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopTick {
    Burst,
    Finished,
}

/// Deadline-bounded burst loop driven by an interval timer.
///
/// Each tick compares the elapsed time since the loop started against the
/// window. There is no burst counter involved in stopping.
#[derive(Clone, Debug)]
pub struct ConfettiLoop {
    interval: Duration,
    window: Duration,
    bursts: u32,
    finished: bool,
}

impl ConfettiLoop {
    pub fn new(interval: Duration, window: Duration) -> Self {
        Self {
            interval,
            window,
            bursts: 0,
            finished: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn bursts(&self) -> u32 {
        self.bursts
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self, elapsed: Duration) -> LoopTick {
        if self.finished || elapsed >= self.window {
            self.finished = true;
            return LoopTick::Finished;
        }
        self.bursts += 1;
        LoopTick::Burst
    }
}
