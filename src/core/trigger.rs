use super::config::CandleConfig;
use super::sampler::{FrameVerdict, LoudnessGate};
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    /// Candle lit, nothing pending.
    Idle,
    /// Candle lit, a press-and-hold dwell is counting down.
    Armed,
    /// Flame is fading out.
    Extinguishing,
    /// Celebration shown. Terminal.
    Done,
}

impl TriggerState {
    #[inline]
    pub fn is_lit(self) -> bool {
        matches!(self, TriggerState::Idle | TriggerState::Armed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerSource {
    Tap,
    Hold,
    Microphone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MicPhase {
    Off,
    /// Permission prompt or graph construction in flight.
    Opening,
    Live,
    /// Torn down for good.
    Closed,
}

/// Side effects the browser shell must carry out, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    OpenMicrophone,
    CloseMicrophone,
    ShowListeningHint,
    SchedulePress(Duration),
    CancelPress,
    BeginExtinguish,
    ScheduleFlameOut(Duration),
    RemoveFlame,
    RevealWishes,
    StartConfetti,
}

pub type Commands = SmallVec<[Command; 4]>;

/// The candle's state machine.
///
/// Every input (gesture, timer expiry, audio frame) is a method call that
/// returns the commands to execute. The controller never touches the host
/// itself, so callers must not hold a borrow of it while executing them.
#[derive(Debug)]
pub struct WishController {
    config: CandleConfig,
    state: TriggerState,
    mic: MicPhase,
    gate: LoudnessGate,
    press_pending: bool,
    fired_by: Option<TriggerSource>,
}

impl WishController {
    pub fn new(config: CandleConfig) -> Self {
        let gate = LoudnessGate::new(config.loudness_threshold);
        Self {
            config,
            state: TriggerState::Idle,
            mic: MicPhase::Off,
            gate,
            press_pending: false,
            fired_by: None,
        }
    }

    pub fn config(&self) -> &CandleConfig {
        &self.config
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn mic_phase(&self) -> MicPhase {
        self.mic
    }

    pub fn press_pending(&self) -> bool {
        self.press_pending
    }

    /// Which source won the race, once the candle is out.
    pub fn fired_by(&self) -> Option<TriggerSource> {
        self.fired_by
    }

    /// Click or tap on the candle: arms listening, then blows immediately.
    pub fn tap(&mut self) -> Commands {
        let mut out = Commands::new();
        self.arm_microphone(&mut out);
        self.blow_into(TriggerSource::Tap, &mut out);
        out
    }

    pub fn press_start(&mut self) -> Commands {
        let mut out = Commands::new();
        if !self.state.is_lit() {
            return out;
        }
        self.arm_microphone(&mut out);
        if !self.press_pending {
            self.press_pending = true;
            self.state = TriggerState::Armed;
            out.push(Command::SchedulePress(self.config.hold_dwell));
        }
        out
    }

    pub fn press_end(&mut self) -> Commands {
        let mut out = Commands::new();
        if self.press_pending {
            self.press_pending = false;
            if self.state == TriggerState::Armed {
                self.state = TriggerState::Idle;
            }
            out.push(Command::CancelPress);
        }
        out
    }

    /// The press dwell timer fired.
    pub fn press_elapsed(&mut self) -> Commands {
        let mut out = Commands::new();
        if !self.press_pending {
            return out;
        }
        self.press_pending = false;
        self.blow_into(TriggerSource::Hold, &mut out);
        out
    }

    /// Entry point shared by every source. A no-op unless the candle is lit.
    pub fn blow_attempt(&mut self, source: TriggerSource) -> Commands {
        let mut out = Commands::new();
        self.blow_into(source, &mut out);
        out
    }

    /// The microphone session finished opening.
    pub fn microphone_opened(&mut self) -> Commands {
        let mut out = Commands::new();
        if self.mic == MicPhase::Opening && self.state.is_lit() {
            self.mic = MicPhase::Live;
            log::info!("[mic] listening");
            out.push(Command::ShowListeningHint);
        } else {
            // Candle already out while permission was pending.
            self.mic = MicPhase::Closed;
            out.push(Command::CloseMicrophone);
        }
        out
    }

    /// Opening failed (denied, unsupported, graph error). Click and hold keep
    /// working; a later gesture may retry.
    pub fn microphone_failed(&mut self) {
        if self.mic == MicPhase::Opening {
            self.mic = MicPhase::Off;
        }
    }

    /// One analyser frame from a live session.
    pub fn audio_frame(&mut self, bins: &[u8]) -> Commands {
        let mut out = Commands::new();
        if self.mic != MicPhase::Live {
            return out;
        }
        if let FrameVerdict::Loud(mean) = self.gate.observe(bins) {
            log::info!("[mic] loud frame, mean magnitude {:.1}", mean);
            self.blow_into(TriggerSource::Microphone, &mut out);
        }
        out
    }

    /// The extinguish animation finished.
    pub fn flame_out(&mut self) -> Commands {
        let mut out = Commands::new();
        if self.state == TriggerState::Extinguishing {
            self.state = TriggerState::Done;
            log::info!("[candle] done");
            out.push(Command::RemoveFlame);
            out.push(Command::RevealWishes);
            out.push(Command::StartConfetti);
        }
        out
    }

    fn arm_microphone(&mut self, out: &mut Commands) {
        if self.mic == MicPhase::Off && self.state.is_lit() {
            self.mic = MicPhase::Opening;
            out.push(Command::OpenMicrophone);
        }
    }

    fn blow_into(&mut self, source: TriggerSource, out: &mut Commands) -> bool {
        if !self.state.is_lit() {
            log::debug!("[candle] {:?} ignored in {:?}", source, self.state);
            return false;
        }
        if self.press_pending {
            self.press_pending = false;
            out.push(Command::CancelPress);
        }
        self.state = TriggerState::Extinguishing;
        self.fired_by = Some(source);
        self.gate.close();
        log::info!("[candle] blown out by {:?}", source);
        out.push(Command::BeginExtinguish);
        out.push(Command::ScheduleFlameOut(self.config.extinguish));
        if self.mic == MicPhase::Live {
            self.mic = MicPhase::Closed;
            out.push(Command::CloseMicrophone);
        }
        true
    }
}
