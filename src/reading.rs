//! Recorded air measurements and their translation into brightness
//!
//! Each sculpture plays back two datasets, one per strip. The raw readings are
//! compiled in and mapped once at startup onto the 0-255 brightness range.

use heapless::Vec;

use crate::topology::SculptureTopology;

/// Maximum number of readings a brightness sequence can hold
pub const MAX_READINGS: usize = 48;

/// Brightness values played back by a strip, one per reading
pub type BrightnessSequence = Vec<u8, MAX_READINGS>;

const DATASET_NAME_CO2: &str = "co2";
const DATASET_NAME_PM25: &str = "pm25";
const DATASET_NAME_VOC: &str = "voc";

const DATASET_ID_CO2: u8 = 1;
const DATASET_ID_PM25: u8 = 2;
const DATASET_ID_VOC: u8 = 3;

/// CO2 in ppm
const CO2_1: [u16; 17] = [
    1609, 577, 406, 419, 443, 414, 403, 413, 409, 411, 412, 409, 423, 414, 421, 434, 421,
];
const CO2_2: [u16; 40] = [
    1685, 642, 618, 698, 697, 778, 450, 664, 648, 676, 425, 504, 550, 481, 640, 942, 1791, 504,
    733, 688, 592, 608, 850, 779, 1876, 646, 648, 659, 893, 422, 455, 701, 716, 892, 1046, 455,
    483, 503, 448, 550,
];

/// PM2.5 in µg/m³
const PM25_1: [u16; 20] = [
    118, 38, 34, 111, 125, 82, 178, 174, 43, 43, 42, 83, 63, 83, 85, 103, 68, 53, 54, 66,
];
const PM25_2: [u16; 32] = [
    65, 88, 44, 42, 73, 69, 70, 61, 54, 89, 86, 91, 60, 63, 92, 88, 95, 55, 85, 49, 48, 51, 35,
    38, 49, 51, 21, 32, 28, 42, 21, 25,
];

/// Volatile organic compounds index
const VOC_1: [u16; 26] = [
    8, 11, 5, 13, 16, 14, 15, 17, 15, 20, 29, 21, 22, 19, 14, 13, 19, 25, 17, 15, 13, 17, 16, 15,
    20, 17,
];
const VOC_2: [u16; 22] = [
    122, 67, 24, 36, 46, 32, 29, 34, 27, 25, 22, 23, 19, 23, 21, 33, 26, 34, 41, 15, 25, 18,
];

const CO2_DOMAIN: SensorDomain = SensorDomain::new(0, 1800);
const PM25_DOMAIN: SensorDomain = SensorDomain::new(0, 125);
const VOC_DOMAIN: SensorDomain = SensorDomain::new(0, 130);

/// Raw value range of a sensor type that maps onto full brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorDomain {
    pub min: i32,
    pub max: i32,
}

impl SensorDomain {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// A recorded series of raw readings
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    pub readings: &'static [u16],
    pub domain: SensorDomain,
}

impl Dataset {
    /// Translate the readings into a brightness sequence
    pub fn brightness(&self) -> BrightnessSequence {
        translate(self.readings, self.domain)
    }
}

/// Sculpture variant, selected once at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DatasetId {
    Co2 = DATASET_ID_CO2,
    Pm25 = DATASET_ID_PM25,
    Voc = DATASET_ID_VOC,
}

impl DatasetId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            DATASET_ID_CO2 => Self::Co2,
            DATASET_ID_PM25 => Self::Pm25,
            DATASET_ID_VOC => Self::Voc,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Co2 => DATASET_NAME_CO2,
            Self::Pm25 => DATASET_NAME_PM25,
            Self::Voc => DATASET_NAME_VOC,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            DATASET_NAME_CO2 => Some(Self::Co2),
            DATASET_NAME_PM25 => Some(Self::Pm25),
            DATASET_NAME_VOC => Some(Self::Voc),
            _ => None,
        }
    }

    /// Datasets played back by the first and second strip
    pub const fn datasets(self) -> [Dataset; 2] {
        match self {
            Self::Co2 => [
                Dataset {
                    readings: &CO2_1,
                    domain: CO2_DOMAIN,
                },
                Dataset {
                    readings: &CO2_2,
                    domain: CO2_DOMAIN,
                },
            ],
            Self::Pm25 => [
                Dataset {
                    readings: &PM25_1,
                    domain: PM25_DOMAIN,
                },
                Dataset {
                    readings: &PM25_2,
                    domain: PM25_DOMAIN,
                },
            ],
            Self::Voc => [
                Dataset {
                    readings: &VOC_1,
                    domain: VOC_DOMAIN,
                },
                Dataset {
                    readings: &VOC_2,
                    domain: VOC_DOMAIN,
                },
            ],
        }
    }

    /// Physical LED layout of this sculpture
    pub const fn topology(self) -> SculptureTopology {
        match self {
            Self::Co2 => SculptureTopology::CO2,
            Self::Pm25 => SculptureTopology::PM25,
            Self::Voc => SculptureTopology::VOC,
        }
    }
}

/// Map raw readings linearly from `domain` onto brightness 0-255
///
/// Each value is `round((raw - min) * 255 / (max - min))`. Readings above the
/// domain maximum are clamped to full brightness.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn translate(raw: &[u16], domain: SensorDomain) -> BrightnessSequence {
    debug_assert!(raw.len() <= MAX_READINGS, "dataset exceeds MAX_READINGS");

    let span = domain.max - domain.min;
    let mut sequence = BrightnessSequence::new();
    for &value in raw {
        let brightness = if span <= 0 {
            0
        } else {
            let scaled = f64::from(i32::from(value) - domain.min) * 255.0 / f64::from(span);
            libm::round(scaled).clamp(0.0, 255.0) as u8
        };
        if sequence.push(brightness).is_err() {
            break;
        }
    }
    sequence
}
