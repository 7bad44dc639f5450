#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use air_sculpture_light::{OutputDriver, RangingMeasurement, RangingSensor, Rgb};
use embedded_hal::digital::{ErrorType, InputPin};

/// Button pin whose level can be changed after it was handed over
#[derive(Clone)]
pub struct MockPin(Rc<Cell<bool>>);

impl MockPin {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn press(&self) {
        self.0.set(false);
    }

    pub fn release(&self) {
        self.0.set(true);
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSensorError;

#[derive(Default)]
pub struct SensorState {
    pub fail_init: bool,
    pub reading: Option<RangingMeasurement>,
    pub polls: usize,
}

/// Ranging sensor returning whatever the test put into its state
#[derive(Clone, Default)]
pub struct MockSensor(pub Rc<RefCell<SensorState>>);

impl MockSensor {
    pub fn set_reading(&self, reading: Option<RangingMeasurement>) {
        self.0.borrow_mut().reading = reading;
    }

    pub fn polls(&self) -> usize {
        self.0.borrow().polls
    }
}

impl RangingSensor for MockSensor {
    type Error = MockSensorError;

    fn init(&mut self) -> Result<(), Self::Error> {
        if self.0.borrow().fail_init {
            return Err(MockSensorError);
        }
        Ok(())
    }

    fn measure(&mut self) -> Result<RangingMeasurement, Self::Error> {
        let mut state = self.0.borrow_mut();
        state.polls += 1;
        state.reading.ok_or(MockSensorError)
    }
}

/// Output driver recording what was pushed
#[derive(Default)]
pub struct MockDriver {
    pub writes: Vec<(usize, Vec<Rgb>)>,
    pub flushes: usize,
}

impl OutputDriver for MockDriver {
    fn write(&mut self, output: usize, colors: &[Rgb]) {
        self.writes.push((output, colors.to_vec()));
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
