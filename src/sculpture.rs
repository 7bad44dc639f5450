use embassy_time::Instant;
use embedded_hal::digital::InputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::config::SculptureConfig;
use crate::error::SetupError;
use crate::filter::{Filter, GlitterFilter};
use crate::hue::HueModulator;
use crate::input::{InputSampler, Presence, RangingSensor};
use crate::strip::{StripEngine, StripId};
use crate::topology::{MAX_STRIP_LEDS, SculptureTopology};

/// One rendered frame, ready for the output driver
pub struct Frame<'a> {
    strips: [&'a [Rgb]; StripId::COUNT],
    topology: SculptureTopology,
    mode_changed: [bool; StripId::COUNT],
    pub hue: u8,
    pub presence: Presence,
}

impl<'a> Frame<'a> {
    /// Pixels of a logical strip
    pub const fn strip(&self, strip: StripId) -> &'a [Rgb] {
        self.strips[strip.index()]
    }

    /// Whether the strip switched between idle and playback on this frame
    pub const fn mode_changed(&self, strip: StripId) -> bool {
        self.mode_changed[strip.index()]
    }

    /// Pixels of every physical output, in output order
    pub fn segments(&self) -> impl Iterator<Item = (usize, &'a [Rgb])> + '_ {
        let strips = self.strips;
        self.topology.outputs().map(move |segment| {
            let pixels = strips[segment.strip.index()];
            let end = segment.range.end.min(pixels.len());
            let start = segment.range.start.min(end);
            (segment.output, &pixels[start..end])
        })
    }
}

/// Sculpture - the main orchestrator
///
/// Owns the inputs, both strip engines and the output frame. Everything runs
/// in [`Sculpture::render`], once per frame.
pub struct Sculpture<B, S> {
    // External dependencies and configuration
    sampler: InputSampler<B, S>,
    topology: SculptureTopology,
    hue: HueModulator,

    // Internal state
    strips: [StripEngine; StripId::COUNT],
    frame_buffer: [[Rgb; MAX_STRIP_LEDS]; StripId::COUNT],
    current_hue: u8,

    // Internal dependencies
    glitter: Option<GlitterFilter>,
}

impl<B: InputPin, S: RangingSensor> Sculpture<B, S> {
    /// Boot the sensor and build the sculpture selected by `config`
    ///
    /// Translates both datasets into brightness sequences.
    pub fn new(
        config: &SculptureConfig,
        buttons: [B; StripId::COUNT],
        mut sensor: S,
        now: Instant,
    ) -> Result<Self, SetupError<S::Error>> {
        sensor.init().map_err(SetupError::SensorInit)?;
        #[cfg(feature = "esp32-log")]
        println!("[Sculpture] sensor ready, dataset {}", config.dataset.as_str());

        let topology = config.dataset.topology();
        let datasets = config.dataset.datasets();
        let strips = StripId::ALL.map(|id| {
            StripEngine::new(
                datasets[id.index()].brightness(),
                topology.strip_len(id),
                config.timings,
                config.idle_max_brightness,
                now,
            )
            .with_saturation(config.saturation)
        });

        Ok(Self {
            sampler: InputSampler::new(buttons, sensor, config.input, now),
            topology,
            hue: HueModulator::new(config.hue),
            strips,
            frame_buffer: [[Rgb::default(); MAX_STRIP_LEDS]; StripId::COUNT],
            current_hue: config.hue.idle_hue,
            glitter: config.glitter.as_ref().map(GlitterFilter::new),
        })
    }

    /// Process one frame
    ///
    /// This is the main loop step: sample inputs, update the hue, step both
    /// strips, then overlay glitter on the output copy.
    pub fn render(&mut self, now: Instant) -> Frame<'_> {
        self.sampler.sample(now);
        let presence = self.sampler.presence();
        self.current_hue = self.hue.hue(presence);

        let mut mode_changed = [false; StripId::COUNT];
        for id in StripId::ALL {
            let strip = &mut self.strips[id.index()];
            if self.sampler.take_activation(id) {
                strip.activate();
            }
            strip.step(now, self.current_hue);
            mode_changed[id.index()] = strip.take_mode_changed();
            #[cfg(feature = "esp32-log")]
            if mode_changed[id.index()] {
                println!("[Sculpture] strip {} mode {:?}", id.index(), strip.mode());
            }
        }

        for (strip, buffer) in self.strips.iter().zip(self.frame_buffer.iter_mut()) {
            let pixels = strip.pixels();
            let output = &mut buffer[..pixels.len()];
            output.copy_from_slice(pixels);
            if let Some(glitter) = &mut self.glitter {
                glitter.apply(output);
            }
        }

        let [first, second] = &self.frame_buffer;
        Frame {
            strips: [
                &first[..self.strips[0].pixels().len()],
                &second[..self.strips[1].pixels().len()],
            ],
            topology: self.topology,
            mode_changed,
            hue: self.current_hue,
            presence,
        }
    }

    /// Get the engine of a strip
    pub fn strip(&self, strip: StripId) -> &StripEngine {
        &self.strips[strip.index()]
    }

    pub const fn topology(&self) -> SculptureTopology {
        self.topology
    }

    pub const fn presence(&self) -> Presence {
        self.sampler.presence()
    }

    /// Hue applied on the last frame
    pub const fn hue(&self) -> u8 {
        self.current_hue
    }
}
