mod codec;

pub use codec::{Color, pack_rgb, pack_rgbw, unpack};
pub use smart_leds::{RGB8, RGBW, White};

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;
