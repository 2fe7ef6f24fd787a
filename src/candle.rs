use crate::confetti::ConfettiCanvas;
use crate::core::{
    BurstConfig, CandleConfig, Command, Commands, ConfettiLoop, LoopTick, WishController,
    WishLabel,
};
use crate::mic::MicSession;
use crate::timer::{Interval, Timeout};
use crate::view::View;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;

/// Owns the controller and every host resource its commands manage.
pub struct Candle {
    controller: RefCell<WishController>,
    view: View,
    confetti: ConfettiCanvas,
    labels: Vec<WishLabel>,
    press_timer: RefCell<Option<Timeout>>,
    flame_timer: RefCell<Option<Timeout>>,
    mic: RefCell<Option<MicSession>>,
    confetti_loop: RefCell<Option<Interval>>,
}

impl Candle {
    pub fn new(
        config: CandleConfig,
        view: View,
        confetti: ConfettiCanvas,
        labels: Vec<WishLabel>,
    ) -> Rc<Self> {
        Rc::new(Self {
            controller: RefCell::new(WishController::new(config)),
            view,
            confetti,
            labels,
            press_timer: RefCell::new(None),
            flame_timer: RefCell::new(None),
            mic: RefCell::new(None),
            confetti_loop: RefCell::new(None),
        })
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Run one controller input and execute what it asks for. The controller
    /// borrow ends before any command runs.
    pub fn handle(self: &Rc<Self>, input: impl FnOnce(&mut WishController) -> Commands) {
        let commands = {
            let mut controller = self.controller.borrow_mut();
            input(&mut controller)
        };
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(self: &Rc<Self>, command: Command) {
        match command {
            Command::OpenMicrophone => self.open_microphone(),
            Command::CloseMicrophone => self.close_microphone(),
            Command::ShowListeningHint => self.view.show_listening(),
            Command::SchedulePress(delay) => {
                let weak = Rc::downgrade(self);
                let timer = Timeout::new(delay, move || {
                    if let Some(candle) = weak.upgrade() {
                        candle.handle(|c| c.press_elapsed());
                    }
                });
                *self.press_timer.borrow_mut() = timer;
            }
            Command::CancelPress => {
                let timer = self.press_timer.borrow_mut().take();
                drop(timer);
            }
            Command::BeginExtinguish => self.view.begin_extinguish(),
            Command::ScheduleFlameOut(delay) => {
                let weak = Rc::downgrade(self);
                let timer = Timeout::new(delay, move || {
                    if let Some(candle) = weak.upgrade() {
                        candle.handle(|c| c.flame_out());
                    }
                });
                *self.flame_timer.borrow_mut() = timer;
            }
            Command::RemoveFlame => self.view.remove_candle(),
            Command::RevealWishes => self.view.reveal_wishes(&self.labels),
            Command::StartConfetti => self.start_confetti(),
        }
    }

    fn open_microphone(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        spawn_local(async move {
            let frames = weak.clone();
            let opened = MicSession::open(move |bins: &[u8]| {
                if let Some(candle) = frames.upgrade() {
                    candle.handle(|c| c.audio_frame(bins));
                }
            })
            .await;
            let Some(candle) = weak.upgrade() else {
                return;
            };
            match opened {
                Ok(session) => {
                    *candle.mic.borrow_mut() = Some(session);
                    candle.handle(|c| c.microphone_opened());
                }
                Err(e) => {
                    log::info!("[mic] unavailable, click/hold only: {}", e);
                    candle.controller.borrow_mut().microphone_failed();
                }
            }
        });
    }

    fn close_microphone(&self) {
        let session = self.mic.borrow_mut().take();
        if let Some(mut session) = session {
            session.close();
            // May be running inside the session's own frame callback.
            spawn_local(async move {
                drop(session);
            });
        }
    }

    fn start_confetti(self: &Rc<Self>) {
        let config = self.controller.borrow().config().clone();
        let mut bursts = ConfettiLoop::new(config.confetti_interval, config.confetti_window);
        let burst = BurstConfig::default();
        let started = Instant::now();
        let weak: Weak<Self> = Rc::downgrade(self);
        let interval = Interval::new(bursts.interval(), move || {
            let Some(candle) = weak.upgrade() else {
                return;
            };
            match bursts.tick(started.elapsed()) {
                LoopTick::Burst => candle.confetti.burst(&burst),
                LoopTick::Finished => {
                    if let Some(interval) = candle.confetti_loop.borrow().as_ref() {
                        interval.stop();
                    }
                    log::info!("[confetti] {} bursts", bursts.bursts());
                }
            }
        });
        *self.confetti_loop.borrow_mut() = interval;
    }
}
