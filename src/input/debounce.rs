use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::timer::PhaseTimer;

/// Debounced push button
///
/// The raw pin level must stay unchanged for the whole debounce window before
/// the debounced level follows it. Buttons are wired with pull-ups, so a press
/// shows up as a falling edge.
pub struct Debouncer<P> {
    pin: P,
    window: Duration,
    /// Accepted level, `true` = high
    stable: bool,
    /// Last raw level
    raw: bool,
    timer: PhaseTimer,
    fell: bool,
}

impl<P: InputPin> Debouncer<P> {
    pub fn new(mut pin: P, window: Duration, now: Instant) -> Self {
        let level = pin.is_high().unwrap_or(true);
        Self {
            pin,
            window,
            stable: level,
            raw: level,
            timer: PhaseTimer::new(now),
            fell: false,
        }
    }

    /// Sample the pin
    ///
    /// Returns `true` if the debounced level changed on this update.
    pub fn update(&mut self, now: Instant) -> bool {
        self.fell = false;
        let level = self.pin.is_high().unwrap_or(self.raw);

        if level != self.raw {
            self.raw = level;
            self.timer.reset(now);
            return false;
        }
        if level == self.stable || !self.timer.has_elapsed(now, self.window) {
            return false;
        }

        self.stable = level;
        self.timer.reset(now);
        self.fell = !level;
        true
    }

    /// The button was pressed on the last update
    pub const fn fell(&self) -> bool {
        self.fell
    }

    /// Debounced level, `true` = high (released)
    pub const fn is_high(&self) -> bool {
        self.stable
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}
