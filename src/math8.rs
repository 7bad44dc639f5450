/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Re-map a number from one range to another
///
/// Integer linear mapping with truncating division. Inputs outside
/// `in_min..=in_max` are extrapolated, not clamped.
#[inline]
pub const fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Wrap an integer onto the 0-255 hue wheel
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn wrap8(value: i32) -> u8 {
    value.rem_euclid(256) as u8
}

/// Move `value` toward `target` by at most `step`, never past it
#[inline]
pub const fn approach8(value: u8, target: u8, step: u8) -> u8 {
    if value < target {
        let next = value.saturating_add(step);
        if next > target { target } else { next }
    } else {
        let next = value.saturating_sub(step);
        if next < target { target } else { next }
    }
}
