//! Startup configuration and timing constants.

use embassy_time::Duration;

use crate::filter::GlitterConfig;
use crate::reading::DatasetId;

/// Base fade delay of the idle animation
pub const BASE_FADE_DELAY: Duration = Duration::from_millis(500);

/// Target frame rate (100 FPS)
pub const FRAMES_PER_SECOND: u64 = 100;

/// Duration of one frame
pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / FRAMES_PER_SECOND);

/// Hue shown while nobody stands in front of the sculpture ("idle blue")
pub const IDLE_HUE: u8 = 140;

/// Configuration of the strip animation
#[derive(Debug, Clone, Copy)]
pub struct AnimationTimings {
    /// Fade delay of the idle animation
    ///
    /// Playback holds each reading for twice this long and runs its fades
    /// with a quarter of it.
    pub fade_delay: Duration,
    /// Value change per frame while moving toward a reading
    pub interpolation_step: u8,
    /// Amount every pixel is dimmed per frame while fading to black
    pub fade_amount: u8,
}

impl AnimationTimings {
    pub const DEFAULT: Self = Self {
        fade_delay: BASE_FADE_DELAY,
        interpolation_step: 10,
        fade_amount: 8,
    };

    /// How long each reading is shown during playback
    pub fn dwell(&self) -> Duration {
        self.fade_delay * 2
    }

    /// Fade delay used while playback is active
    pub fn playback_fade_delay(&self) -> Duration {
        self.fade_delay / 4
    }
}

/// Configuration of the button and distance sensor sampling
#[derive(Debug, Clone, Copy)]
pub struct InputConfig {
    /// Time a button level must be stable before it is accepted
    pub debounce: Duration,
    /// Minimum time between two ranging measurements
    pub poll_interval: Duration,
    /// Distance up to which a visitor counts as present
    pub presence_distance_mm: u16,
}

impl InputConfig {
    pub const DEFAULT: Self = Self {
        debounce: Duration::from_millis(15),
        poll_interval: Duration::from_millis(100),
        presence_distance_mm: 1000,
    };
}

/// Mapping from visitor distance to hue
#[derive(Debug, Clone, Copy)]
pub struct HueConfig {
    pub near_mm: i32,
    pub far_mm: i32,
    pub near_hue: i32,
    pub far_hue: i32,
    /// Hue used when nobody is present
    pub idle_hue: u8,
}

impl HueConfig {
    pub const DEFAULT: Self = Self {
        near_mm: 0,
        far_mm: 500,
        near_hue: 76,
        far_hue: 204,
        idle_hue: IDLE_HUE,
    };
}

/// Configuration for the sculpture
#[derive(Debug, Clone, Copy)]
pub struct SculptureConfig {
    pub dataset: DatasetId,
    pub timings: AnimationTimings,
    pub input: InputConfig,
    pub hue: HueConfig,
    /// Peak brightness of the idle animation
    pub idle_max_brightness: u8,
    pub saturation: u8,
    /// Sparkle overlay, disabled when `None`
    pub glitter: Option<GlitterConfig>,
}

impl SculptureConfig {
    /// Default configuration of a sculpture variant
    pub const fn for_dataset(dataset: DatasetId) -> Self {
        Self {
            dataset,
            timings: AnimationTimings::DEFAULT,
            input: InputConfig::DEFAULT,
            hue: HueConfig::DEFAULT,
            idle_max_brightness: 255,
            saturation: 255,
            glitter: None,
        }
    }
}
