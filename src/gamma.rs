//! Per-channel gamma correction applied by the driver at render time

use crate::color::Color;

/// 256-entry lookup table mapping linear channel values to wire values
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GammaTable([u8; 256]);

impl GammaTable {
    /// Table that leaves every value unchanged
    #[allow(clippy::cast_possible_truncation)]
    pub const fn identity() -> Self {
        let mut table = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            table[i] = i as u8;
            i += 1;
        }
        Self(table)
    }

    /// Build `out = (in / 255) ^ factor * 255`, rounded
    ///
    /// Factors of zero or below (and NaN) give the identity table.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn from_factor(factor: f32) -> Self {
        if factor.is_nan() || factor <= 0.0 {
            return Self::identity();
        }
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let value = libm::powf(i as f32 / 255.0, factor) * 255.0 + 0.5;
            *entry = value.clamp(0.0, 255.0) as u8;
        }
        Self(table)
    }

    #[inline]
    pub const fn apply(&self, value: u8) -> u8 {
        self.0[value as usize]
    }

    /// Correct all four channels of a packed color
    pub const fn correct(&self, color: Color) -> Color {
        Color::rgbw(
            self.apply(color.red()),
            self.apply(color.green()),
            self.apply(color.blue()),
            self.apply(color.white()),
        )
    }

    pub const fn is_identity(&self) -> bool {
        let mut i = 0;
        while i < 256 {
            if self.0[i] as usize != i {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn as_array(&self) -> &[u8; 256] {
        &self.0
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::identity()
    }
}

impl core::fmt::Debug for GammaTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_identity() {
            f.write_str("GammaTable(identity)")
        } else {
            f.debug_tuple("GammaTable").field(&&self.0[..]).finish()
        }
    }
}
