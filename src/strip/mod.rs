//! Strip animation engine
//!
//! One engine drives one logical strip. It breathes while idle and, once
//! activated, fades to black, plays the brightness sequence reading by
//! reading, fades to black again and returns to idle.
//!
//! Fades are considered complete when the first and the last pixel are dark.
//! The whole strip is always painted uniformly, so the endpoints stand for
//! every pixel.

mod breathing;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use breathing::BreathingRamp;

use crate::color::{Hsv, Rgb, average_light, fade_to_black_by, fill_solid};
use crate::config::AnimationTimings;
use crate::math8::approach8;
use crate::reading::BrightnessSequence;
use crate::timer::PhaseTimer;
use crate::topology::MAX_STRIP_LEDS;

/// Logical strip of a sculpture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripId {
    First,
    Second,
}

impl StripId {
    pub const COUNT: usize = 2;
    pub const ALL: [Self; Self::COUNT] = [Self::First, Self::Second];

    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Stage of a triggered playback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Dimming whatever was shown before
    FadeOut,
    /// Moving through the brightness sequence
    Interpolating,
    /// Dimming the last reading before going idle
    FadeToIdle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayMode {
    Idle,
    Playback(PlaybackPhase),
}

#[derive(Debug, Clone)]
struct StripState {
    mode: PlayMode,
    ramp: BreathingRamp,
    /// Value of the strip color
    value: u8,
    previous_target: u8,
    current_target: u8,
    cursor: usize,
    timer: PhaseTimer,
    fade_delay: Duration,
    mode_changed: bool,
}

/// Animation engine of one strip
pub struct StripEngine {
    sequence: BrightnessSequence,
    timings: AnimationTimings,
    idle_max_brightness: u8,
    saturation: u8,
    state: StripState,
    pixels: [Rgb; MAX_STRIP_LEDS],
    len: usize,
}

impl StripEngine {
    /// Create an idle engine for a strip of `len` LEDs
    pub fn new(
        sequence: BrightnessSequence,
        len: usize,
        timings: AnimationTimings,
        idle_max_brightness: u8,
        now: Instant,
    ) -> Self {
        Self {
            sequence,
            timings,
            idle_max_brightness,
            saturation: 255,
            state: StripState {
                mode: PlayMode::Idle,
                ramp: BreathingRamp::new(idle_max_brightness),
                value: 0,
                previous_target: 0,
                current_target: 0,
                cursor: 0,
                timer: PhaseTimer::new(now),
                fade_delay: timings.fade_delay,
                mode_changed: false,
            },
            pixels: [Rgb::default(); MAX_STRIP_LEDS],
            len: len.min(MAX_STRIP_LEDS),
        }
    }

    /// Set the saturation of the strip color
    #[must_use]
    pub fn with_saturation(mut self, saturation: u8) -> Self {
        self.saturation = saturation;
        self
    }

    /// Start playback of the brightness sequence
    ///
    /// Restarts from the fade-out if a playback is already running. The fade
    /// starts from whatever the strip currently shows.
    pub fn activate(&mut self) {
        let state = &mut self.state;
        state.mode = PlayMode::Playback(PlaybackPhase::FadeOut);
        state.mode_changed = true;
        state.ramp.clear_max_flag();
        state.fade_delay = self.timings.playback_fade_delay();
        #[cfg(feature = "esp32-log")]
        println!("[StripEngine] playback");
    }

    /// Advance the animation by one frame
    pub fn step(&mut self, now: Instant, hue: u8) {
        match self.state.mode {
            PlayMode::Idle => self.breathe(hue),
            PlayMode::Playback(PlaybackPhase::FadeOut) => {
                if self.fade() {
                    self.begin_readings(now);
                }
            }
            PlayMode::Playback(PlaybackPhase::Interpolating) => self.interpolate(now, hue),
            PlayMode::Playback(PlaybackPhase::FadeToIdle) => {
                if self.fade() {
                    self.go_idle(now);
                }
            }
        }
    }

    fn breathe(&mut self, hue: u8) {
        self.state.value = self.state.ramp.step();
        self.paint(hue);
    }

    /// Fade one step, returns `true` once the strip is dark
    fn fade(&mut self) -> bool {
        let leds = &mut self.pixels[..self.len];
        fade_to_black_by(leds, self.timings.fade_amount);
        match (leds.first(), leds.last()) {
            (Some(first), Some(last)) => average_light(*first) == 0 && average_light(*last) == 0,
            _ => true,
        }
    }

    fn begin_readings(&mut self, now: Instant) {
        let state = &mut self.state;
        state.mode = PlayMode::Playback(PlaybackPhase::Interpolating);
        state.timer.reset(now);
        state.cursor = 0;
        state.previous_target = 0;
        state.current_target = 0;
        state.value = 0;
    }

    fn interpolate(&mut self, now: Instant, hue: u8) {
        let Some(&target) = self.sequence.get(self.state.cursor) else {
            self.state.mode = PlayMode::Playback(PlaybackPhase::FadeToIdle);
            return;
        };

        if !self.state.timer.has_elapsed(now, self.timings.dwell()) {
            let state = &mut self.state;
            state.current_target = target;
            // Only move in the direction of the change between readings
            let rising = target > state.previous_target;
            if (rising && state.value < target) || (!rising && state.value > target) {
                state.value = approach8(state.value, target, self.timings.interpolation_step);
            }
            self.paint(hue);
            return;
        }

        let state = &mut self.state;
        state.previous_target = state.current_target;
        state.cursor += 1;
        state.timer.reset(now);
        #[cfg(feature = "esp32-log")]
        println!(
            "[StripEngine] reading {} brightness {}",
            state.cursor, state.current_target
        );
        if state.cursor >= self.sequence.len() {
            state.mode = PlayMode::Playback(PlaybackPhase::FadeToIdle);
        }
    }

    fn go_idle(&mut self, now: Instant) {
        let state = &mut self.state;
        state.mode = PlayMode::Idle;
        state.mode_changed = true;
        state.fade_delay = self.timings.fade_delay;
        state.ramp.reset(self.idle_max_brightness);
        state.timer.reset(now);
        #[cfg(feature = "esp32-log")]
        println!("[StripEngine] idle");
    }

    /// Paint every pixel with the current color
    fn paint(&mut self, hue: u8) {
        let color = Hsv {
            hue,
            sat: self.saturation,
            val: self.state.value,
        };
        fill_solid(&mut self.pixels[..self.len], color);
    }

    pub const fn mode(&self) -> PlayMode {
        self.state.mode
    }

    /// Brightness of the idle animation
    pub const fn brightness(&self) -> u8 {
        self.state.ramp.brightness()
    }

    /// Value of the strip color
    pub const fn value(&self) -> u8 {
        self.state.value
    }

    /// Index of the reading being shown
    pub const fn cursor(&self) -> usize {
        self.state.cursor
    }

    pub const fn previous_target(&self) -> u8 {
        self.state.previous_target
    }

    pub const fn current_target(&self) -> u8 {
        self.state.current_target
    }

    pub const fn fade_delay(&self) -> Duration {
        self.state.fade_delay
    }

    /// Peak of the idle animation
    pub const fn max_brightness(&self) -> u8 {
        self.state.ramp.max()
    }

    /// The idle animation reached its peak and is dimming
    pub const fn is_max_brightness(&self) -> bool {
        self.state.ramp.is_at_max()
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    /// Consume the mode-changed flag
    pub fn take_mode_changed(&mut self) -> bool {
        core::mem::take(&mut self.state.mode_changed)
    }
}
