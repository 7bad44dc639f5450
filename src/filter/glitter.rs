use fastrand::Rng;

use super::Filter;
use crate::color::{Rgb, WHITE};

/// Configuration for the glitter overlay
#[derive(Debug, Clone, Copy)]
pub struct GlitterConfig {
    /// Chance per frame and strip (0-255 = 0-100%) to light one sparkle
    pub chance: u8,
    pub seed: u64,
}

/// Lights a random white pixel now and then
#[derive(Debug, Clone)]
pub struct GlitterFilter {
    chance: u8,
    rng: Rng,
}

impl GlitterFilter {
    pub fn new(config: &GlitterConfig) -> Self {
        Self {
            chance: config.chance,
            rng: Rng::with_seed(config.seed),
        }
    }
}

impl Filter for GlitterFilter {
    fn apply(&mut self, frame: &mut [Rgb]) {
        if frame.is_empty() || self.rng.u8(..) >= self.chance {
            return;
        }
        let index = self.rng.usize(..frame.len());
        frame[index] = WHITE;
    }
}
