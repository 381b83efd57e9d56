//! Strip type codes understood by the PWM/DMA driver
//!
//! A code tells the driver where to find each wire byte inside a packed
//! [`Color`](crate::Color): bits 16-23 hold the shift for the first byte on
//! the wire, bits 8-15 for the second, bits 0-7 for the third and bits 24-31
//! for the white byte of four-channel chips. The values are part of the
//! driver ABI and are passed through untouched.

use core::fmt;

const STRIP_NAME_WS2811_RGB: &str = "ws2811_rgb";
const STRIP_NAME_WS2811_RBG: &str = "ws2811_rbg";
const STRIP_NAME_WS2811_GRB: &str = "ws2811_grb";
const STRIP_NAME_WS2811_GBR: &str = "ws2811_gbr";
const STRIP_NAME_WS2811_BRG: &str = "ws2811_brg";
const STRIP_NAME_WS2811_BGR: &str = "ws2811_bgr";
const STRIP_NAME_SK6812_RGBW: &str = "sk6812_rgbw";
const STRIP_NAME_SK6812_RBGW: &str = "sk6812_rbgw";
const STRIP_NAME_SK6812_GRBW: &str = "sk6812_grbw";
const STRIP_NAME_SK6812_GBRW: &str = "sk6812_gbrw";
const STRIP_NAME_SK6812_BRGW: &str = "sk6812_brgw";
const STRIP_NAME_SK6812_BGRW: &str = "sk6812_bgrw";

const STRIP_ALIAS_WS2812: &str = "ws2812";
const STRIP_ALIAS_SK6812: &str = "sk6812";
const STRIP_ALIAS_SK6812W: &str = "sk6812w";

/// Mask of the white shift field; non-zero for four-channel chips
pub const SK6812_SHIFT_WMASK: u32 = 0xf000_0000;

/// Opaque chip family and wire order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct StripType(u32);

impl StripType {
    pub const WS2811_RGB: Self = Self(0x0010_0800);
    pub const WS2811_RBG: Self = Self(0x0010_0008);
    pub const WS2811_GRB: Self = Self(0x0008_1000);
    pub const WS2811_GBR: Self = Self(0x0008_0010);
    pub const WS2811_BRG: Self = Self(0x0000_1008);
    pub const WS2811_BGR: Self = Self(0x0000_0810);

    pub const SK6812_RGBW: Self = Self(0x1810_0800);
    pub const SK6812_RBGW: Self = Self(0x1810_0008);
    pub const SK6812_GRBW: Self = Self(0x1808_1000);
    pub const SK6812_GBRW: Self = Self(0x1808_0010);
    pub const SK6812_BRGW: Self = Self(0x1800_1008);
    pub const SK6812_BGRW: Self = Self(0x1800_0810);

    /// Most WS2812B strips ship in GRB order
    pub const WS2812: Self = Self::WS2811_GRB;
    pub const SK6812: Self = Self::WS2811_GRB;
    pub const SK6812W: Self = Self::SK6812_GRBW;

    /// All named codes, canonical names only
    pub const ALL: [Self; 12] = [
        Self::WS2811_RGB,
        Self::WS2811_RBG,
        Self::WS2811_GRB,
        Self::WS2811_GBR,
        Self::WS2811_BRG,
        Self::WS2811_BGR,
        Self::SK6812_RGBW,
        Self::SK6812_RBGW,
        Self::SK6812_GRBW,
        Self::SK6812_GBRW,
        Self::SK6812_BRGW,
        Self::SK6812_BGRW,
    ];

    /// Wrap any driver code, including ones this crate has no name for
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// The code exactly as the driver expects it
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Look up a named code by its raw value
    pub fn known(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|strip_type| strip_type.0 == value)
    }

    /// Check if the code describes a four-channel (RGBW) chip
    pub const fn has_white(self) -> bool {
        self.0 & SK6812_SHIFT_WMASK != 0
    }

    /// Canonical name, `None` for codes outside the table
    pub const fn as_str(self) -> Option<&'static str> {
        Some(match self.0 {
            0x0010_0800 => STRIP_NAME_WS2811_RGB,
            0x0010_0008 => STRIP_NAME_WS2811_RBG,
            0x0008_1000 => STRIP_NAME_WS2811_GRB,
            0x0008_0010 => STRIP_NAME_WS2811_GBR,
            0x0000_1008 => STRIP_NAME_WS2811_BRG,
            0x0000_0810 => STRIP_NAME_WS2811_BGR,
            0x1810_0800 => STRIP_NAME_SK6812_RGBW,
            0x1810_0008 => STRIP_NAME_SK6812_RBGW,
            0x1808_1000 => STRIP_NAME_SK6812_GRBW,
            0x1808_0010 => STRIP_NAME_SK6812_GBRW,
            0x1800_1008 => STRIP_NAME_SK6812_BRGW,
            0x1800_0810 => STRIP_NAME_SK6812_BGRW,
            _ => return None,
        })
    }

    /// Parse a canonical name or one of the chip aliases
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            STRIP_NAME_WS2811_RGB => Some(Self::WS2811_RGB),
            STRIP_NAME_WS2811_RBG => Some(Self::WS2811_RBG),
            STRIP_NAME_WS2811_GRB => Some(Self::WS2811_GRB),
            STRIP_NAME_WS2811_GBR => Some(Self::WS2811_GBR),
            STRIP_NAME_WS2811_BRG => Some(Self::WS2811_BRG),
            STRIP_NAME_WS2811_BGR => Some(Self::WS2811_BGR),
            STRIP_NAME_SK6812_RGBW => Some(Self::SK6812_RGBW),
            STRIP_NAME_SK6812_RBGW => Some(Self::SK6812_RBGW),
            STRIP_NAME_SK6812_GRBW => Some(Self::SK6812_GRBW),
            STRIP_NAME_SK6812_GBRW => Some(Self::SK6812_GBRW),
            STRIP_NAME_SK6812_BRGW => Some(Self::SK6812_BRGW),
            STRIP_NAME_SK6812_BGRW => Some(Self::SK6812_BGRW),
            STRIP_ALIAS_WS2812 => Some(Self::WS2812),
            STRIP_ALIAS_SK6812 => Some(Self::SK6812),
            STRIP_ALIAS_SK6812W => Some(Self::SK6812W),
            _ => None,
        }
    }
}

impl From<StripType> for u32 {
    fn from(strip_type: StripType) -> Self {
        strip_type.0
    }
}

impl fmt::Display for StripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:08x}", self.0),
        }
    }
}
