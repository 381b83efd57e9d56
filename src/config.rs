use crate::strip_type::StripType;

/// Default global brightness (no scaling)
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Default signal frequency in Hz
pub const WS2811_TARGET_FREQ: u32 = 800_000;

/// Default DMA channel number
pub const DEFAULT_DMA: u8 = 10;

/// Number of independent PWM channels the driver can drive
pub const CHANNEL_COUNT: usize = 2;

/// One of the two hardware output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChannelIndex {
    Zero = 0,
    One = 1,
}

impl ChannelIndex {
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            _ => None,
        }
    }

    /// Slot position in per-channel arrays
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Configuration of one physical LED channel
///
/// Fixed once the strip is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripConfig {
    /// Chip family and wire order
    pub strip_type: StripType,
    /// Number of LEDs, must be non-zero
    pub led_count: u16,
    /// GPIO pin carrying the signal
    pub gpio_pin: u8,
    /// Global brightness applied by the driver (0-255)
    pub brightness: u8,
    /// Hardware channel, 0 or 1
    pub channel: u8,
    /// Invert the output signal (for inverting level shifters)
    pub invert: bool,
    /// Signal frequency in Hz
    pub frequency: u32,
    /// DMA channel number
    pub dma: u8,
    /// Gamma factor for the driver's lookup table, 0 for none
    pub gamma_factor: f32,
}

impl StripConfig {
    /// Create a configuration for channel 0 with default brightness and timing
    pub const fn new(strip_type: StripType, led_count: u16, gpio_pin: u8) -> Self {
        Self {
            strip_type,
            led_count,
            gpio_pin,
            brightness: DEFAULT_BRIGHTNESS,
            channel: 0,
            invert: false,
            frequency: WS2811_TARGET_FREQ,
            dma: DEFAULT_DMA,
            gamma_factor: 0.0,
        }
    }
}
