use super::constants::{
    NARROW_BASE_DISTANCE, NARROW_DISTANCE_RANGE, WIDE_BASE_DISTANCE, WIDE_DISTANCE_RANGE,
    WISH_COLORS, WISH_FONT_MIN_REM, WISH_FONT_SPAN_REM, WISH_HORIZONTAL_STRETCH,
    WISH_LABEL_COUNT, WISH_MAX_DELAY_SEC, WISH_ROTATION_MAX_DEG, WISH_SCALE_MIN, WISH_SCALE_SPAN,
};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

pub const WISH_WORDS: &[&str] = &[
    "岁岁平安", "颜值爆表", "财源广进", "发量王者", "吃不胖", "皮肤超好",
    "万事胜意", "拒绝内耗", "情绪稳定", "内心强大", "温柔且坚定", "爱自己",
    "学业有成", "逢考必过", "前程似锦", "C位出道", "步步高升", "被爱包围",
    "得偿所愿", "稳住能赢", "绝绝子", "人生赢家", "自由自在", "永远热灿",
    "平安喜乐", "百事无忌", "光芒万丈", "未来可期", "暴富", "好运连连",
];

/// Ring the labels are scattered in, in percent of the layout box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceBand {
    pub base: f32,
    pub range: f32,
}

impl DistanceBand {
    pub fn for_viewport(narrow: bool) -> Self {
        if narrow {
            Self {
                base: NARROW_BASE_DISTANCE,
                range: NARROW_DISTANCE_RANGE,
            }
        } else {
            Self {
                base: WIDE_BASE_DISTANCE,
                range: WIDE_DISTANCE_RANGE,
            }
        }
    }

    #[inline]
    pub fn contains(&self, distance: f32) -> bool {
        distance >= self.base && distance < self.base + self.range
    }
}

#[derive(Clone, Debug)]
pub struct WishLabel {
    pub id: usize,
    pub text: &'static str,
    pub angle: f32,
    pub distance: f32,
    /// Percent offsets (left, top) inside the layout box.
    pub position: Vec2,
    pub scale: f32,
    pub rotation_deg: f32,
    pub font_rem: f32,
    pub color: &'static str,
    pub delay_sec: f32,
}

/// Map a polar (angle, distance) pair around the box center to percent
/// offsets. Horizontal distance is stretched so the ring reads as an oval.
#[inline]
pub fn layout_position(angle: f32, distance: f32) -> Vec2 {
    Vec2::new(
        50.0 + distance * angle.cos() * WISH_HORIZONTAL_STRETCH,
        50.0 + distance * angle.sin(),
    )
}

/// Build the full wish field. Texts cycle through `WISH_WORDS` in order.
pub fn generate_wish_labels<R: Rng>(band: DistanceBand, rng: &mut R) -> Vec<WishLabel> {
    (0..WISH_LABEL_COUNT)
        .map(|id| {
            let angle = rng.gen::<f32>() * TAU;
            let distance = band.base + rng.gen::<f32>() * band.range;
            WishLabel {
                id,
                text: WISH_WORDS[id % WISH_WORDS.len()],
                angle,
                distance,
                position: layout_position(angle, distance),
                scale: WISH_SCALE_MIN + rng.gen::<f32>() * WISH_SCALE_SPAN,
                rotation_deg: rng.gen::<f32>() * 2.0 * WISH_ROTATION_MAX_DEG - WISH_ROTATION_MAX_DEG,
                font_rem: WISH_FONT_MIN_REM.max(rng.gen::<f32>() * WISH_FONT_SPAN_REM),
                color: WISH_COLORS[rng.gen_range(0..WISH_COLORS.len())],
                delay_sec: rng.gen::<f32>() * WISH_MAX_DELAY_SEC,
            }
        })
        .collect()
}

/// Latest entrance delay in the field, in seconds.
pub fn max_reveal_delay(labels: &[WishLabel]) -> f32 {
    labels.iter().map(|l| l.delay_sec).fold(0.0, f32::max)
}
