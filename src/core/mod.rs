//! Host-independent candle logic: the trigger state machine, the loudness
//! gate, the confetti model and the wish-field layout. Nothing in here talks
//! to the browser; the wasm shell turns returned commands into side effects.

pub mod config;
pub mod confetti;
pub mod constants;
pub mod sampler;
pub mod trigger;
pub mod wishes;

pub use config::*;
pub use confetti::*;
pub use constants::*;
pub use sampler::*;
pub use trigger::*;
pub use wishes::*;
