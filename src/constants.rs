// DOM contract between the page markup and the wasm shell.

// Element ids
pub const CANDLE_ID: &str = "candle";
pub const FLAME_ID: &str = "flame";
pub const CAPTION_ID: &str = "candle-caption";
pub const HINT_ID: &str = "candle-hint";
pub const WISH_FIELD_ID: &str = "wish-field";
pub const CONFETTI_CANVAS_ID: &str = "confetti-canvas";
pub const BGM_ID: &str = "bgm";

// State classes toggled on the candle / wish field
pub const EXTINGUISHING_CLASS: &str = "extinguishing";
pub const LISTENING_CLASS: &str = "listening";
pub const REVEALED_CLASS: &str = "revealed";
pub const HIDDEN_CLASS: &str = "hidden";
pub const WISH_LABEL_CLASS: &str = "wish-label";

// `data-*` overrides read from the candle element (dataset keys)
pub const DATA_HOLD_MS: &str = "holdMs";
pub const DATA_LOUDNESS_THRESHOLD: &str = "loudnessThreshold";
