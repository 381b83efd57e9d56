//! Boundary to the native PWM/DMA signal generator
//!
//! The driver owns the pixel buffers and the signal timing. Everything this
//! crate needs from it is captured by the [`Driver`] trait, so a board
//! binding and the in-memory [`MemoryDriver`](crate::MemoryDriver) are
//! interchangeable.

use core::fmt;

use embassy_time::Duration;

use crate::color::Color;
use crate::config::{ChannelIndex, StripConfig};
use crate::gamma::GammaTable;
use crate::strip_type::StripType;

/// Numeric status code returned by the driver
///
/// Zero is success, negative values are driver failures. Codes outside the
/// known table are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverStatus(pub i32);

impl DriverStatus {
    pub const SUCCESS: Self = Self(0);
    pub const GENERIC: Self = Self(-1);
    pub const OUT_OF_MEMORY: Self = Self(-2);
    pub const HW_NOT_SUPPORTED: Self = Self(-3);
    pub const MEM_LOCK: Self = Self(-4);
    pub const MMAP: Self = Self(-5);
    pub const MAP_REGISTERS: Self = Self(-6);
    pub const GPIO_INIT: Self = Self(-7);
    pub const PWM_SETUP: Self = Self(-8);
    pub const MAILBOX_DEVICE: Self = Self(-9);
    pub const DMA: Self = Self(-10);
    pub const ILLEGAL_GPIO: Self = Self(-11);
    pub const PCM_SETUP: Self = Self(-12);
    pub const SPI_SETUP: Self = Self(-13);
    pub const SPI_TRANSFER: Self = Self(-14);

    pub const fn code(self) -> i32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Turn a raw status into a `Result`
    pub const fn check(self) -> Result<(), Self> {
        if self.is_success() { Ok(()) } else { Err(self) }
    }

    /// Human readable description, as reported by the native driver
    pub const fn description(self) -> &'static str {
        match self.0 {
            0 => "Success",
            -1 => "Generic failure",
            -2 => "Out of memory",
            -3 => "Hardware revision is not supported",
            -4 => "Memory lock failed",
            -5 => "mmap() failed",
            -6 => "Unable to map registers into userspace",
            -7 => "Unable to initialize GPIO",
            -8 => "Unable to initialize PWM",
            -9 => "Failed to create mailbox device",
            -10 => "DMA error",
            -11 => "Selected GPIO not possible",
            -12 => "Unable to initialize PCM",
            -13 => "Unable to initialize SPI",
            -14 => "SPI transfer error",
            _ => "Unknown driver status",
        }
    }
}

impl From<i32> for DriverStatus {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.description())
    }
}

/// Everything the driver needs to bring up one channel
///
/// Built once from a validated [`StripConfig`] and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelDescriptor {
    pub channel: ChannelIndex,
    pub gpio_pin: u8,
    pub led_count: u16,
    pub brightness: u8,
    pub invert: bool,
    pub strip_type: StripType,
    pub frequency: u32,
    pub dma: u8,
    pub gamma: GammaTable,
}

impl ChannelDescriptor {
    /// Describe `config` on an already validated channel
    pub fn new(channel: ChannelIndex, config: &StripConfig) -> Self {
        Self {
            channel,
            gpio_pin: config.gpio_pin,
            led_count: config.led_count,
            brightness: config.brightness,
            invert: config.invert,
            strip_type: config.strip_type,
            frequency: config.frequency,
            dma: config.dma,
            gamma: GammaTable::from_factor(config.gamma_factor),
        }
    }

    /// Bytes sent per LED: 4 when the type carries a white shift, else 3
    pub const fn bytes_per_led(&self) -> usize {
        if self.strip_type.has_white() { 4 } else { 3 }
    }

    /// Time one full frame occupies the wire, including the latch pause
    ///
    /// Zero frequency yields only the latch pause.
    pub fn transfer_time(&self) -> Duration {
        let bits = u64::from(self.led_count) * self.bytes_per_led() as u64 * 8;
        let data_us = match self.frequency {
            0 => 0,
            hz => bits * 1_000_000 / u64::from(hz),
        };
        Duration::from_micros(data_us + LED_RESET_US)
    }
}

/// Low time the chips need to latch a frame, in microseconds
pub const LED_RESET_US: u64 = 55;

/// Abstract PWM/DMA LED driver
///
/// Implement this trait to support different hardware platforms.
/// [`Strip`](crate::Strip) is generic over it.
pub trait Driver {
    /// Bring up a channel and allocate its pixel buffer
    fn init(&mut self, descriptor: &ChannelDescriptor) -> Result<(), DriverStatus>;

    /// Start sending the channel's buffer to the LEDs
    ///
    /// Implementations wait for a transfer still in flight before starting
    /// a new one.
    fn render(&mut self, channel: ChannelIndex) -> Result<(), DriverStatus>;

    /// Block until the last transfer on the channel has completed
    fn wait(&mut self, channel: ChannelIndex) -> Result<(), DriverStatus>;

    /// Release the channel and its buffer
    fn finalize(&mut self, channel: ChannelIndex);

    /// Write one pixel into the channel's buffer
    fn set_pixel(&mut self, channel: ChannelIndex, index: usize, color: Color);

    /// Read one pixel back from the channel's buffer
    ///
    /// Drivers without readback return `None`.
    fn pixel(&self, _channel: ChannelIndex, _index: usize) -> Option<Color> {
        None
    }
}

impl<D: Driver + ?Sized> Driver for &mut D {
    fn init(&mut self, descriptor: &ChannelDescriptor) -> Result<(), DriverStatus> {
        (**self).init(descriptor)
    }

    fn render(&mut self, channel: ChannelIndex) -> Result<(), DriverStatus> {
        (**self).render(channel)
    }

    fn wait(&mut self, channel: ChannelIndex) -> Result<(), DriverStatus> {
        (**self).wait(channel)
    }

    fn finalize(&mut self, channel: ChannelIndex) {
        (**self).finalize(channel);
    }

    fn set_pixel(&mut self, channel: ChannelIndex, index: usize, color: Color) {
        (**self).set_pixel(channel, index, color);
    }

    fn pixel(&self, channel: ChannelIndex, index: usize) -> Option<Color> {
        (**self).pixel(channel, index)
    }
}
