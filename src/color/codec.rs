use core::fmt;

use smart_leds::{RGB8, RGBW, White};

/// Packed pixel color as consumed by the driver
///
/// Layout is `0xWWRRGGBB`. Three-channel strips ignore the white byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self(0);

    /// Create a color from 8-bit red, green and blue channels
    #[allow(clippy::cast_lossless)]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        pack_rgb(r as u32, g as u32, b as u32)
    }

    /// Create a color from 8-bit red, green, blue and white channels
    #[allow(clippy::cast_lossless)]
    pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Self {
        pack_rgbw(r as u32, g as u32, b as u32, w as u32)
    }

    /// Raw packed value
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        channel(self.0, 16)
    }

    pub const fn green(self) -> u8 {
        channel(self.0, 8)
    }

    pub const fn blue(self) -> u8 {
        channel(self.0, 0)
    }

    pub const fn white(self) -> u8 {
        channel(self.0, 24)
    }

    /// Same color with the white byte cleared
    pub const fn without_white(self) -> Self {
        Self(self.0 & 0x00FF_FFFF)
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn channel(value: u32, shift: u32) -> u8 {
    ((value >> shift) & 0xFF) as u8
}

/// Pack red, green and blue into a color, white is zero
///
/// Components are not masked: values above 255 spill into the next channel.
pub const fn pack_rgb(r: u32, g: u32, b: u32) -> Color {
    Color((r << 16) | (g << 8) | b)
}

/// Pack red, green, blue and white into a color
///
/// Components are not masked: values above 255 spill into the next channel
/// and white bits above the top byte are dropped.
pub const fn pack_rgbw(r: u32, g: u32, b: u32, w: u32) -> Color {
    Color((w << 24) | (r << 16) | (g << 8) | b)
}

/// Split a color into `(r, g, b, w)`
pub const fn unpack(color: Color) -> (u8, u8, u8, u8) {
    (color.red(), color.green(), color.blue(), color.white())
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<RGB8> for Color {
    fn from(color: RGB8) -> Self {
        Self::rgb(color.r, color.g, color.b)
    }
}

impl From<RGBW<u8>> for Color {
    fn from(color: RGBW<u8>) -> Self {
        Self::rgbw(color.r, color.g, color.b, color.a.0)
    }
}

impl From<Color> for RGB8 {
    fn from(color: Color) -> Self {
        RGB8::new(color.red(), color.green(), color.blue())
    }
}

impl From<Color> for RGBW<u8> {
    fn from(color: Color) -> Self {
        RGBW {
            r: color.red(),
            g: color.green(),
            b: color.blue(),
            a: White(color.white()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}
