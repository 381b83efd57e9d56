//! WS2811/WS2812/SK6812 LED strips over a pluggable PWM/DMA driver
//!
//! A [`Strip`] owns one hardware channel's configuration and forwards pixel
//! writes to a [`Driver`]. Colors are packed `0xWWRRGGBB` values
//! ([`Color`]); [`shift_color`] advances a color one bounded step toward a
//! goal for fades.

#![no_std]

pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod gamma;
pub mod math8;
pub mod memory;
pub mod shared;
pub mod strip;
pub mod strip_type;
pub mod transition;

pub use color::{Color, pack_rgb, pack_rgbw, unpack};
pub use config::{ChannelIndex, StripConfig};
pub use driver::{ChannelDescriptor, Driver, DriverStatus};
pub use error::{Error, Result};
pub use gamma::GammaTable;
pub use memory::MemoryDriver;
pub use shared::{SharedDriver, SharedHandle};
pub use strip::Strip;
pub use strip_type::StripType;
pub use transition::{
    ShiftMode, StepTransition, shift_color, shift_color_legacy, shift_color_with,
};

pub use smart_leds::SmartLedsWrite;
pub use embassy_time::Duration;
