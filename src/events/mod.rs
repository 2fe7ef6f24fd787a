pub mod pointer;

pub use pointer::wire_candle_handlers;
