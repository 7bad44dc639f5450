//! Button and distance sensor sampling
//!
//! Turns button presses into one-shot activation requests for the strips and
//! keeps a presence signal refreshed from the ranging sensor.

mod debounce;
mod ranging;

use embassy_time::Instant;
use embedded_hal::digital::InputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use debounce::Debouncer;
pub use ranging::{RangeStatus, RangingMeasurement, RangingSensor};

use crate::config::InputConfig;
use crate::strip::StripId;
use crate::timer::PhaseTimer;

/// Whether a visitor stands in front of the sculpture, and how far away
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Presence {
    pub present: bool,
    /// Last usable distance; kept when a measurement fails
    pub distance_mm: u16,
}

impl Presence {
    /// Classify a measurement
    ///
    /// `None` stands for a failed measurement. Unusable measurements keep the
    /// previous distance but always report nobody present.
    pub fn classify(
        previous: Self,
        measurement: Option<RangingMeasurement>,
        max_distance_mm: u16,
    ) -> Self {
        match measurement {
            Some(m) if m.status.is_usable() => Self {
                present: m.distance_mm <= max_distance_mm,
                distance_mm: m.distance_mm,
            },
            _ => Self {
                present: false,
                distance_mm: previous.distance_mm,
            },
        }
    }
}

/// Samples buttons and the ranging sensor once per frame
pub struct InputSampler<B, S> {
    buttons: [Debouncer<B>; StripId::COUNT],
    sensor: S,
    config: InputConfig,
    poll_timer: PhaseTimer,
    polled: bool,
    presence: Presence,
    activations: [bool; StripId::COUNT],
}

impl<B: InputPin, S: RangingSensor> InputSampler<B, S> {
    /// Create a sampler for an initialized sensor
    pub fn new(buttons: [B; StripId::COUNT], sensor: S, config: InputConfig, now: Instant) -> Self {
        Self {
            buttons: buttons.map(|pin| Debouncer::new(pin, config.debounce, now)),
            sensor,
            config,
            poll_timer: PhaseTimer::new(now),
            polled: false,
            presence: Presence::default(),
            activations: [false; StripId::COUNT],
        }
    }

    /// Update buttons and, when due, the presence signal
    pub fn sample(&mut self, now: Instant) {
        for strip in StripId::ALL {
            let button = &mut self.buttons[strip.index()];
            button.update(now);
            if button.fell() {
                self.activations[strip.index()] = true;
                #[cfg(feature = "esp32-log")]
                println!("[InputSampler] button {} pressed", strip.index());
            }
        }

        if self.polled && !self.poll_timer.has_elapsed(now, self.config.poll_interval) {
            return;
        }
        self.polled = true;
        self.poll_timer.reset(now);

        let measurement = self.sensor.measure().ok();
        self.presence =
            Presence::classify(self.presence, measurement, self.config.presence_distance_mm);
    }

    /// Consume the pending activation of a strip
    pub fn take_activation(&mut self, strip: StripId) -> bool {
        core::mem::take(&mut self.activations[strip.index()])
    }

    pub const fn presence(&self) -> Presence {
        self.presence
    }
}
