/// Arithmetic mean of a byte frequency-magnitude frame. Empty frames read as
/// silence.
#[inline]
pub fn mean_magnitude(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameVerdict {
    Quiet(f32),
    Loud(f32),
    /// The gate already tripped; the frame is ignored.
    Closed,
}

/// One-shot loudness detector fed with analyser frames.
///
/// Reports `Loud` for the first frame whose mean magnitude is strictly above
/// the threshold, then stays closed for the rest of its life.
#[derive(Clone, Debug)]
pub struct LoudnessGate {
    threshold: f32,
    tripped: bool,
    frames_seen: u64,
}

impl LoudnessGate {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            tripped: false,
            frames_seen: 0,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped
    }

    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    pub fn observe(&mut self, bins: &[u8]) -> FrameVerdict {
        if self.tripped {
            return FrameVerdict::Closed;
        }
        self.frames_seen += 1;
        let mean = mean_magnitude(bins);
        if mean > self.threshold {
            self.tripped = true;
            FrameVerdict::Loud(mean)
        } else {
            FrameVerdict::Quiet(mean)
        }
    }

    /// Close the gate without a loud frame (the candle went out another way).
    pub fn close(&mut self) {
        self.tripped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        let mut gate = LoudnessGate::new(30.0);
        assert_eq!(gate.observe(&[30; 8]), FrameVerdict::Quiet(30.0));
        assert_eq!(gate.observe(&[31; 8]), FrameVerdict::Loud(31.0));
    }

    #[test]
    fn closed_gate_ignores_frames() {
        let mut gate = LoudnessGate::new(30.0);
        gate.close();
        assert_eq!(gate.observe(&[255; 4]), FrameVerdict::Closed);
        assert_eq!(gate.frames_seen(), 0);
    }
}
