mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{average_light, fade_to_black_by, fill_solid, hsv2rgb};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Pure white, used by the glitter overlay
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
