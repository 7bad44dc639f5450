/// Ping-pong brightness ramp of the idle animation
///
/// Counts up by one per step until the maximum, then down to zero, then up
/// again. The value never leaves `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingRamp {
    brightness: u8,
    max: u8,
    /// Set once the maximum was reached, the ramp is heading down
    at_max: bool,
}

impl BreathingRamp {
    pub const fn new(max: u8) -> Self {
        Self {
            brightness: 0,
            max,
            at_max: false,
        }
    }

    /// Advance by one step and return the new brightness
    pub fn step(&mut self) -> u8 {
        self.brightness = if self.at_max {
            self.brightness.saturating_sub(1)
        } else {
            self.brightness.saturating_add(1).min(self.max)
        };

        if self.brightness == self.max {
            self.at_max = true;
        } else if self.brightness == 0 {
            self.at_max = false;
        }
        self.brightness
    }

    /// Start over from black with the given peak
    pub fn reset(&mut self, max: u8) {
        *self = Self::new(max);
    }

    pub fn clear_max_flag(&mut self) {
        self.at_max = false;
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn max(&self) -> u8 {
        self.max
    }

    pub const fn is_at_max(&self) -> bool {
        self.at_max
    }
}
