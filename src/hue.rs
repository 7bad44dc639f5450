//! Distance driven hue

use crate::config::HueConfig;
use crate::input::Presence;
use crate::math8::{map_range, wrap8};

/// Maps the visitor distance onto the hue of both strips
#[derive(Debug, Clone, Copy)]
pub struct HueModulator {
    config: HueConfig,
}

impl HueModulator {
    pub const fn new(config: HueConfig) -> Self {
        Self { config }
    }

    /// Hue for the current presence signal
    ///
    /// Distances outside the configured range are extrapolated and wrap
    /// around the hue wheel.
    pub fn hue(&self, presence: Presence) -> u8 {
        if !presence.present {
            return self.config.idle_hue;
        }
        let hue = map_range(
            i32::from(presence.distance_mm),
            self.config.near_mm,
            self.config.far_mm,
            self.config.near_hue,
            self.config.far_hue,
        );
        wrap8(hue)
    }
}

impl Default for HueModulator {
    fn default() -> Self {
        Self::new(HueConfig::DEFAULT)
    }
}
