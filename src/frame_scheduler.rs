//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::config::FRAME_DURATION;
use crate::input::RangingSensor;
use crate::{OutputDriver, Sculpture};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Runs the sculpture and pushes every physical output to the driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(sculpture, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, B, S> {
    output: O,
    sculpture: Sculpture<B, S>,
    next_frame: Option<Instant>,
    frame_duration: Duration,
}

impl<O: OutputDriver, B: InputPin, S: RangingSensor> FrameScheduler<O, B, S> {
    /// Create a new frame scheduler.
    ///
    /// Uses `FRAME_DURATION` (100 FPS) for frame timing.
    pub fn new(sculpture: Sculpture<B, S>, driver: O) -> Self {
        Self::with_frame_duration(sculpture, driver, FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(sculpture: Sculpture<B, S>, driver: O, frame_duration: Duration) -> Self {
        Self {
            output: driver,
            sculpture,
            next_frame: None,
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the current frame
    /// 3. Writes every output segment and flushes the driver
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after a stall instead of rendering a burst
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        let mut next_frame = self.next_frame.unwrap_or(now);
        if now.as_millis() > next_frame.as_millis() + max_drift_ms {
            next_frame = now;
        }

        let frame = self.sculpture.render(now);
        for (output, colors) in frame.segments() {
            self.output.write(output, colors);
        }
        self.output.flush();

        next_frame += self.frame_duration;
        self.next_frame = Some(next_frame);

        let sleep_duration = Duration::from_millis(
            next_frame.as_millis().saturating_sub(now.as_millis()),
        );

        FrameResult {
            next_deadline: next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the sculpture.
    pub fn sculpture(&self) -> &Sculpture<B, S> {
        &self.sculpture
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
