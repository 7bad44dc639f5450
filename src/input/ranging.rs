const STATUS_VALID: u8 = 0;
const STATUS_SIGMA_FAIL: u8 = 1;
const STATUS_SIGNAL_FAIL: u8 = 2;
const STATUS_MIN_RANGE_FAIL: u8 = 3;
const STATUS_PHASE_FAIL: u8 = 4;
const STATUS_HARDWARE_FAIL: u8 = 5;

/// Time-of-flight distance sensor
///
/// Implement this trait for the ranging sensor of the target board.
pub trait RangingSensor {
    type Error;

    /// Boot the sensor
    ///
    /// Called once at startup. An error means the sensor was not detected.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Perform a single ranging measurement
    fn measure(&mut self) -> Result<RangingMeasurement, Self::Error>;
}

/// Status reported with a ranging measurement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeStatus {
    Valid,
    SigmaFail,
    SignalFail,
    MinRangeFail,
    /// Phase failure, the distance is garbage
    PhaseFail,
    HardwareFail,
    Other(u8),
}

impl RangeStatus {
    pub const fn from_raw(value: u8) -> Self {
        match value {
            STATUS_VALID => Self::Valid,
            STATUS_SIGMA_FAIL => Self::SigmaFail,
            STATUS_SIGNAL_FAIL => Self::SignalFail,
            STATUS_MIN_RANGE_FAIL => Self::MinRangeFail,
            STATUS_PHASE_FAIL => Self::PhaseFail,
            STATUS_HARDWARE_FAIL => Self::HardwareFail,
            other => Self::Other(other),
        }
    }

    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Valid => STATUS_VALID,
            Self::SigmaFail => STATUS_SIGMA_FAIL,
            Self::SignalFail => STATUS_SIGNAL_FAIL,
            Self::MinRangeFail => STATUS_MIN_RANGE_FAIL,
            Self::PhaseFail => STATUS_PHASE_FAIL,
            Self::HardwareFail => STATUS_HARDWARE_FAIL,
            Self::Other(other) => other,
        }
    }

    /// Whether the reported distance can be used
    ///
    /// Only phase failures carry incorrect data.
    pub const fn is_usable(self) -> bool {
        !matches!(self, Self::PhaseFail)
    }
}

/// A single ranging result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangingMeasurement {
    pub status: RangeStatus,
    pub distance_mm: u16,
}

impl RangingMeasurement {
    pub const fn new(status: RangeStatus, distance_mm: u16) -> Self {
        Self {
            status,
            distance_mm,
        }
    }
}
