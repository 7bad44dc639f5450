#![no_std]

pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod frame_scheduler;
pub mod hue;
pub mod input;
pub mod math8;
pub mod reading;
pub mod sculpture;
pub mod strip;
pub mod timer;
pub mod topology;

pub use config::{AnimationTimings, HueConfig, InputConfig, SculptureConfig};
pub use error::SetupError;
pub use filter::GlitterConfig;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use hue::HueModulator;
pub use input::{InputSampler, Presence, RangeStatus, RangingMeasurement, RangingSensor};
pub use reading::{BrightnessSequence, DatasetId, SensorDomain, translate};
pub use sculpture::{Frame, Sculpture};
pub use strip::{PlayMode, PlaybackPhase, StripEngine, StripId};
pub use topology::SculptureTopology;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Each physical LED output of the sculpture is addressed by its index.
pub trait OutputDriver {
    /// Write colors to one physical LED output
    fn write(&mut self, output: usize, colors: &[Rgb]);

    /// Push all written outputs to the hardware
    fn flush(&mut self);
}
