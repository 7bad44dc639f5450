//! Desktop preview app for the air sculptures
//!
//! Renders both strips of a sculpture in a window. The buttons and the
//! distance sensor are simulated with on-screen controls.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;
use std::time::Instant as StdInstant;

use air_sculpture_light::config::FRAME_DURATION;
use air_sculpture_light::{
    DatasetId, GlitterConfig, Instant, PlayMode, PlaybackPhase, RangeStatus, RangingMeasurement,
    RangingSensor, Rgb, Sculpture, SculptureConfig, SetupError, StripId,
};
use eframe::egui::{self};
use embedded_hal::digital::{ErrorType, InputPin};

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Farthest distance the slider can simulate
const MAX_SIMULATED_MM: u16 = 1500;

/// On-screen push button, high while released
#[derive(Clone)]
struct SimulatedPin(Rc<Cell<bool>>);

impl ErrorType for SimulatedPin {
    type Error = Infallible;
}

impl InputPin for SimulatedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

/// Distance sensor driven by the UI
#[derive(Clone)]
struct SimulatedSensor(Rc<RefCell<RangingMeasurement>>);

impl RangingSensor for SimulatedSensor {
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn measure(&mut self) -> Result<RangingMeasurement, Self::Error> {
        Ok(*self.0.borrow())
    }
}

type PreviewSculpture = Sculpture<SimulatedPin, SimulatedSensor>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 420.0])
            .with_title("Air Sculpture Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "air-sculpture-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new(DatasetId::Co2)))),
    )
}

struct PreviewApp {
    sculpture: PreviewSculpture,
    pins: [SimulatedPin; StripId::COUNT],
    measurement: Rc<RefCell<RangingMeasurement>>,

    // UI state
    dataset: DatasetId,
    glitter: bool,
    distance_mm: u16,
    phase_failure: bool,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Time of the next sculpture frame
    next_frame_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Pixels of the last rendered frame, per strip
    frame: [Vec<Rgb>; StripId::COUNT],
}

impl PreviewApp {
    fn new(dataset: DatasetId) -> Self {
        let pins = [
            SimulatedPin(Rc::new(Cell::new(true))),
            SimulatedPin(Rc::new(Cell::new(true))),
        ];
        let measurement = Rc::new(RefCell::new(RangingMeasurement::new(
            RangeStatus::Valid,
            MAX_SIMULATED_MM,
        )));
        let sculpture = build_sculpture(dataset, false, &pins, &measurement);

        Self {
            sculpture,
            pins,
            measurement,
            dataset,
            glitter: false,
            distance_mm: MAX_SIMULATED_MM,
            phase_failure: false,
            t_ms: 0,
            next_frame_ms: 0,
            last_frame: StdInstant::now(),
            frame: [Vec::new(), Vec::new()],
        }
    }

    /// Rebuild the sculpture after a configuration change
    fn rebuild(&mut self) {
        self.sculpture = build_sculpture(self.dataset, self.glitter, &self.pins, &self.measurement);
        self.t_ms = 0;
        self.next_frame_ms = 0;
    }

    /// Run every sculpture frame that is due
    fn advance(&mut self) {
        let now = StdInstant::now();
        #[allow(clippy::cast_possible_truncation)]
        let delta_ms = now.duration_since(self.last_frame).as_millis() as u64;
        self.last_frame = now;
        self.t_ms = self.t_ms.wrapping_add(delta_ms);

        let frame_ms = FRAME_DURATION.as_millis();
        // Skip the backlog after the window was hidden
        if self.t_ms > self.next_frame_ms + 2 * frame_ms {
            self.next_frame_ms = self.t_ms;
        }
        while self.next_frame_ms <= self.t_ms {
            let frame = self.sculpture.render(Instant::from_millis(self.next_frame_ms));
            for strip in StripId::ALL {
                self.frame[strip.index()] = frame.strip(strip).to_vec();
            }
            self.next_frame_ms += frame_ms;
        }
    }

    fn update_sensor(&self) {
        let status = if self.phase_failure {
            RangeStatus::PhaseFail
        } else {
            RangeStatus::Valid
        };
        *self.measurement.borrow_mut() = RangingMeasurement::new(status, self.distance_mm);
    }
}

fn build_sculpture(
    dataset: DatasetId,
    glitter: bool,
    pins: &[SimulatedPin; StripId::COUNT],
    measurement: &Rc<RefCell<RangingMeasurement>>,
) -> PreviewSculpture {
    let mut config = SculptureConfig::for_dataset(dataset);
    if glitter {
        config.glitter = Some(GlitterConfig {
            chance: 80,
            seed: 0x5eed,
        });
    }
    let sensor = SimulatedSensor(Rc::clone(measurement));
    match Sculpture::new(&config, pins.clone(), sensor, Instant::from_millis(0)) {
        Ok(sculpture) => sculpture,
        Err(SetupError::SensorInit(never)) => match never {},
    }
}

fn mode_label(mode: PlayMode) -> &'static str {
    match mode {
        PlayMode::Idle => "idle",
        PlayMode::Playback(PlaybackPhase::FadeOut) => "fade out",
        PlayMode::Playback(PlaybackPhase::Interpolating) => "readings",
        PlayMode::Playback(PlaybackPhase::FadeToIdle) => "fade to idle",
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Dataset:");
                let mut selected = self.dataset;
                egui::ComboBox::from_id_salt("dataset_selector")
                    .selected_text(self.dataset.as_str())
                    .show_ui(ui, |ui| {
                        for id in [DatasetId::Co2, DatasetId::Pm25, DatasetId::Voc] {
                            ui.selectable_value(&mut selected, id, id.as_str());
                        }
                    });
                ui.add_space(8.0);
                let old_glitter = self.glitter;
                ui.checkbox(&mut self.glitter, "Glitter");
                if selected != self.dataset || old_glitter != self.glitter {
                    self.dataset = selected;
                    self.rebuild();
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Distance (mm):");
                let old_distance = self.distance_mm;
                let old_failure = self.phase_failure;
                ui.add(egui::Slider::new(&mut self.distance_mm, 0..=MAX_SIMULATED_MM));
                ui.checkbox(&mut self.phase_failure, "Phase failure");
                if old_distance != self.distance_mm || old_failure != self.phase_failure {
                    self.update_sensor();
                }
                let presence = self.sculpture.presence();
                ui.label(format!(
                    "present: {}  hue: {}",
                    presence.present,
                    self.sculpture.hue()
                ));
            });

            ui.add_space(16.0);

            let led_pitch = LED_SIZE + LED_GAP;
            let available_width = ui.available_width();
            for strip in StripId::ALL {
                let engine = self.sculpture.strip(strip);
                ui.horizontal(|ui| {
                    // The pin stays low while the button is held
                    let response = ui.button(format!("Button {}", strip.index() + 1));
                    self.pins[strip.index()]
                        .0
                        .set(!response.is_pointer_button_down_on());
                    ui.label(format!(
                        "{}  reading {}/{}  value {}",
                        mode_label(engine.mode()),
                        engine.cursor(),
                        engine.sequence().len(),
                        engine.value()
                    ));
                });

                let pixels = &self.frame[strip.index()];
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
                let rows = pixels.len().div_ceil(leds_per_row).max(1);
                #[allow(clippy::cast_precision_loss)]
                let height = rows as f32 * led_pitch;

                let (response, painter) = ui.allocate_painter(
                    egui::vec2(available_width, height),
                    egui::Sense::hover(),
                );
                let origin = response.rect.min;

                #[allow(clippy::cast_precision_loss)]
                for (i, pixel) in pixels.iter().enumerate() {
                    let row = i / leds_per_row;
                    let col = i % leds_per_row;
                    let x = origin.x + col as f32 * led_pitch;
                    let y = origin.y + row as f32 * led_pitch;

                    let rect = egui::Rect::from_min_size(
                        egui::pos2(x, y),
                        egui::vec2(LED_SIZE, LED_SIZE),
                    );
                    let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                    painter.rect_filled(rect, 3.0, color);
                }

                ui.add_space(12.0);
            }
        });
    }
}
