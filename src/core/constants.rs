// Timing, threshold and layout tuning for the candle interaction.
// Durations are in milliseconds unless the name says otherwise.

// Input
pub const HOLD_DWELL_MS: u32 = 800; // press-and-hold needed to blow the candle

// Microphone
pub const LOUDNESS_THRESHOLD: f32 = 30.0; // mean byte magnitude, 0..255
pub const MIC_BUFFER_SIZE: u32 = 2048; // ScriptProcessor block size
pub const MIC_CHANNELS: u32 = 1;

// Celebration timeline
pub const EXTINGUISH_MS: u32 = 1200; // flame fade before the celebration
pub const CONFETTI_INTERVAL_MS: u32 = 250;
pub const CONFETTI_WINDOW_MS: u32 = 3000;

// Confetti burst
pub const CONFETTI_PARTICLES: usize = 40;
pub const CONFETTI_SPREAD_DEG: f32 = 360.0;
pub const CONFETTI_START_VELOCITY: f32 = 30.0;
pub const CONFETTI_TICKS: u32 = 60;
pub const CONFETTI_Z_INDEX: i32 = 50;
pub const CONFETTI_DECAY: f32 = 0.9;
pub const CONFETTI_GRAVITY: f32 = 1.0;
pub const CONFETTI_COLORS: [&str; 3] = ["#C5A059", "#AA381E", "#F9F7F2"];

// Wish field
pub const WISH_LABEL_COUNT: usize = 45;
pub const WISH_MAX_DELAY_SEC: f32 = 1.5;
pub const WISH_SCALE_MIN: f32 = 0.7;
pub const WISH_SCALE_SPAN: f32 = 0.8;
pub const WISH_ROTATION_MAX_DEG: f32 = 20.0;
pub const WISH_FONT_MIN_REM: f32 = 0.9;
pub const WISH_FONT_SPAN_REM: f32 = 1.4;
pub const WISH_HORIZONTAL_STRETCH: f32 = 1.2; // labels spread wider than tall
pub const WISH_COLORS: [&str; 4] = ["#2C2C2C", "#5A5A5A", "#C5A059", "#AA381E"];

// Distance bands (percent of the layout box, from its center)
pub const NARROW_VIEWPORT_PX: f64 = 768.0;
pub const WIDE_BASE_DISTANCE: f32 = 18.0;
pub const WIDE_DISTANCE_RANGE: f32 = 22.0;
pub const NARROW_BASE_DISTANCE: f32 = 15.0;
pub const NARROW_DISTANCE_RANGE: f32 = 20.0;

// Background music
pub const BGM_VOLUME: f64 = 0.4;

// Copy
pub const CAPTION_LIT: &str = "许个愿吧";
pub const CAPTION_FULFILLED: &str = "愿望成真";
pub const HINT_IDLE: &str = "点击 / 长按 / 吹气 熄灭烛火";
pub const HINT_LISTENING: &str = "对着麦克风吹气";
