use super::constants::{
    CONFETTI_INTERVAL_MS, CONFETTI_WINDOW_MS, EXTINGUISH_MS, HOLD_DWELL_MS, LOUDNESS_THRESHOLD,
};
use std::time::Duration;

/// Runtime tuning for one candle. `Default` matches the shipped page.
#[derive(Clone, Debug, PartialEq)]
pub struct CandleConfig {
    pub hold_dwell: Duration,
    pub loudness_threshold: f32,
    pub extinguish: Duration,
    pub confetti_interval: Duration,
    pub confetti_window: Duration,
}

impl Default for CandleConfig {
    fn default() -> Self {
        Self {
            hold_dwell: Duration::from_millis(HOLD_DWELL_MS as u64),
            loudness_threshold: LOUDNESS_THRESHOLD,
            extinguish: Duration::from_millis(EXTINGUISH_MS as u64),
            confetti_interval: Duration::from_millis(CONFETTI_INTERVAL_MS as u64),
            confetti_window: Duration::from_millis(CONFETTI_WINDOW_MS as u64),
        }
    }
}

impl CandleConfig {
    /// Apply a `data-hold-ms` style override. Returns false (and leaves the
    /// config untouched) when the value does not parse to a positive number.
    pub fn override_hold_ms(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => {
                self.hold_dwell = Duration::from_millis(ms);
                true
            }
            _ => false,
        }
    }

    /// Apply a `data-loudness-threshold` override on the 0..255 byte scale.
    pub fn override_loudness_threshold(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<f32>() {
            Ok(t) if t.is_finite() && (0.0..255.0).contains(&t) => {
                self.loudness_threshold = t;
                true
            }
            _ => false,
        }
    }

    /// Worst-case time from the trigger until every wish label has finished
    /// its entrance delay.
    pub fn labels_settled_after(&self, max_label_delay: Duration) -> Duration {
        self.extinguish + max_label_delay
    }

    /// Time from the trigger after which no confetti burst is scheduled.
    pub fn confetti_done_after(&self) -> Duration {
        self.extinguish + self.confetti_window
    }
}
