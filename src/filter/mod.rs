//! Cosmetic post-processing of the output frame
//!
//! Filters run on the copy of the frame that goes to the LEDs, never on the
//! pixels the strip engines keep as their state.

use crate::color::Rgb;

mod glitter;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&mut self, frame: &mut [Rgb]);
}

pub use glitter::{GlitterConfig, GlitterFilter};
