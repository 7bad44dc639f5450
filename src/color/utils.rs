pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::scale8,
};

/// Fill every LED with the same color
pub fn fill_solid(leds: &mut [Rgb], color: Hsv) {
    let rgb = hsv2rgb(color);
    for led in leds {
        *led = rgb;
    }
}

/// Dim every LED toward black by `amount` (0-255)
///
/// Each channel is scaled by `255 - amount`, so repeated calls always reach
/// black.
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for led in leds {
        led.r = scale8(led.r, keep);
        led.g = scale8(led.g, keep);
        led.b = scale8(led.b, keep);
    }
}

/// Average perceived light of a pixel (0-255)
///
/// Each channel contributes a third; a pixel is dark when this returns 0.
#[inline]
pub const fn average_light(color: Rgb) -> u8 {
    scale8(color.r, 85) + scale8(color.g, 85) + scale8(color.b, 85)
}
