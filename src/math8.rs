/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Same integer formula the PWM driver uses for its global brightness,
/// so `scale8(x, 255) == x` and `scale8(x, 0) == 0`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Move `current` one step of at most `step` toward `target` without passing it
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn step8(current: u8, target: u8, step: u8) -> u8 {
    if current < target {
        let next = current as u16 + step as u16;
        if next > target as u16 { target } else { next as u8 }
    } else if current > target {
        let next = current.saturating_sub(step);
        if next < target { target } else { next }
    } else {
        current
    }
}
