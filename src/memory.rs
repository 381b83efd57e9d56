//! In-memory driver for hosts without LED hardware
//!
//! [`MemoryDriver`] keeps the same process-wide state the native driver
//! keeps: two channel slots, each with its own pixel buffer. Rendering
//! produces the bytes that would go on the wire (brightness, gamma, wire
//! order and inversion applied) and accounts for the time the transfer
//! would take, so tests can observe what the hardware would receive.

use embassy_time::Duration;
use heapless::Vec;

use crate::color::Color;
use crate::config::{CHANNEL_COUNT, ChannelIndex};
use crate::driver::{ChannelDescriptor, Driver, DriverStatus};
use crate::math8::scale8;

/// GPIO pins the native driver accepts on channel 0 (PWM0, PCM and SPI)
pub const CHANNEL_0_PINS: [u8; 8] = [12, 18, 40, 52, 21, 31, 10, 38];

/// GPIO pins the native driver accepts on channel 1 (PWM1)
pub const CHANNEL_1_PINS: [u8; 5] = [13, 19, 41, 45, 53];

/// Bytes of one pixel as sent on the wire
///
/// The fourth byte is only sent for RGBW strips and is zero otherwise.
pub type WirePixel = [u8; 4];

/// Check if `pin` can drive `channel`
pub fn pin_supported(channel: ChannelIndex, pin: u8) -> bool {
    match channel {
        ChannelIndex::Zero => CHANNEL_0_PINS.contains(&pin),
        ChannelIndex::One => CHANNEL_1_PINS.contains(&pin),
    }
}

#[derive(Debug, Clone)]
struct MemoryChannel<const MAX_LEDS: usize> {
    descriptor: ChannelDescriptor,
    leds: Vec<Color, MAX_LEDS>,
    wire: Vec<WirePixel, MAX_LEDS>,
    renders: u32,
    /// Remaining wire time of the transfer started by the last render
    in_flight: Option<Duration>,
}

/// Driver double holding up to `MAX_LEDS` pixels per channel
#[derive(Debug, Clone)]
pub struct MemoryDriver<const MAX_LEDS: usize> {
    channels: [Option<MemoryChannel<MAX_LEDS>>; CHANNEL_COUNT],
    wire_time: Duration,
    fail_init: Option<DriverStatus>,
    fail_render: Option<DriverStatus>,
    fail_wait: Option<DriverStatus>,
}

impl<const MAX_LEDS: usize> MemoryDriver<MAX_LEDS> {
    /// Create a driver with both channels inactive
    pub const fn new() -> Self {
        Self {
            channels: [None, None],
            wire_time: Duration::from_ticks(0),
            fail_init: None,
            fail_render: None,
            fail_wait: None,
        }
    }

    /// Make the next `init` fail with `status`
    pub fn fail_next_init(&mut self, status: DriverStatus) {
        self.fail_init = Some(status);
    }

    /// Make the next `render` fail with `status`
    pub fn fail_next_render(&mut self, status: DriverStatus) {
        self.fail_render = Some(status);
    }

    /// Make the next `wait` fail with `status`
    pub fn fail_next_wait(&mut self, status: DriverStatus) {
        self.fail_wait = Some(status);
    }

    pub fn is_active(&self, channel: ChannelIndex) -> bool {
        self.slot(channel).is_some()
    }

    /// Descriptor the channel was initialized with
    pub fn descriptor(&self, channel: ChannelIndex) -> Option<&ChannelDescriptor> {
        self.slot(channel).map(|slot| &slot.descriptor)
    }

    /// Current pixel buffer of the channel
    pub fn leds(&self, channel: ChannelIndex) -> Option<&[Color]> {
        self.slot(channel).map(|slot| slot.leds.as_slice())
    }

    /// Pixels as they were sent by the last render
    pub fn wire_frame(&self, channel: ChannelIndex) -> Option<&[WirePixel]> {
        self.slot(channel).map(|slot| slot.wire.as_slice())
    }

    /// Number of successful renders since the channel was initialized
    pub fn render_count(&self, channel: ChannelIndex) -> u32 {
        self.slot(channel).map_or(0, |slot| slot.renders)
    }

    /// Check if a transfer is still on the wire
    pub fn is_busy(&self, channel: ChannelIndex) -> bool {
        self.slot(channel).is_some_and(|slot| slot.in_flight.is_some())
    }

    /// Total wire time of all completed transfers
    pub const fn wire_time(&self) -> Duration {
        self.wire_time
    }

    fn slot(&self, channel: ChannelIndex) -> Option<&MemoryChannel<MAX_LEDS>> {
        self.channels[channel.index()].as_ref()
    }

    fn complete_transfer(&mut self, channel: ChannelIndex) {
        if let Some(slot) = self.channels[channel.index()].as_mut() {
            if let Some(remaining) = slot.in_flight.take() {
                self.wire_time += remaining;
            }
        }
    }
}

impl<const MAX_LEDS: usize> Default for MemoryDriver<MAX_LEDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_LEDS: usize> Driver for MemoryDriver<MAX_LEDS> {
    fn init(&mut self, descriptor: &ChannelDescriptor) -> Result<(), DriverStatus> {
        if let Some(status) = self.fail_init.take() {
            return Err(status);
        }
        let channel = descriptor.channel;
        if self.is_active(channel) {
            return Err(DriverStatus::GENERIC);
        }
        if !pin_supported(channel, descriptor.gpio_pin) {
            return Err(DriverStatus::ILLEGAL_GPIO);
        }

        let count = usize::from(descriptor.led_count);
        let mut leds: Vec<Color, MAX_LEDS> = Vec::new();
        leds.resize(count, Color::BLACK)
            .map_err(|()| DriverStatus::OUT_OF_MEMORY)?;

        self.channels[channel.index()] = Some(MemoryChannel {
            descriptor: *descriptor,
            leds,
            wire: Vec::new(),
            renders: 0,
            in_flight: None,
        });
        Ok(())
    }

    fn render(&mut self, channel: ChannelIndex) -> Result<(), DriverStatus> {
        if !self.is_active(channel) {
            return Err(DriverStatus::GENERIC);
        }
        // A new transfer may only start once the previous one is done
        self.complete_transfer(channel);
        if let Some(status) = self.fail_render.take() {
            return Err(status);
        }

        let Some(slot) = self.channels[channel.index()].as_mut() else {
            return Err(DriverStatus::GENERIC);
        };
        let descriptor = slot.descriptor;
        slot.wire.clear();
        for color in &slot.leds {
            slot.wire
                .push(encode_pixel(&descriptor, *color))
                .map_err(|_| DriverStatus::OUT_OF_MEMORY)?;
        }
        slot.renders = slot.renders.saturating_add(1);
        slot.in_flight = Some(descriptor.transfer_time());
        Ok(())
    }

    fn wait(&mut self, channel: ChannelIndex) -> Result<(), DriverStatus> {
        if let Some(status) = self.fail_wait.take() {
            return Err(status);
        }
        if !self.is_active(channel) {
            return Err(DriverStatus::GENERIC);
        }
        self.complete_transfer(channel);
        Ok(())
    }

    fn finalize(&mut self, channel: ChannelIndex) {
        self.complete_transfer(channel);
        self.channels[channel.index()] = None;
    }

    fn set_pixel(&mut self, channel: ChannelIndex, index: usize, color: Color) {
        if let Some(led) = self.channels[channel.index()]
            .as_mut()
            .and_then(|slot| slot.leds.get_mut(index))
        {
            *led = color;
        }
    }

    fn pixel(&self, channel: ChannelIndex, index: usize) -> Option<Color> {
        self.slot(channel)
            .and_then(|slot| slot.leds.get(index))
            .copied()
    }
}

/// Reorder, scale, gamma-correct and optionally invert one pixel
///
/// Each wire slot reads the byte at the shift stored in the matching field
/// of the strip type.
#[allow(clippy::cast_possible_truncation)]
fn encode_pixel(descriptor: &ChannelDescriptor, color: Color) -> WirePixel {
    let code = descriptor.strip_type.raw();
    let value = color.raw();
    let byte = |field_shift: u32| {
        let shift = (code >> field_shift) & 0xFF;
        let channel = value.checked_shr(shift).unwrap_or(0) & 0xFF;
        descriptor
            .gamma
            .apply(scale8(channel as u8, descriptor.brightness))
    };

    let mut pixel = [byte(16), byte(8), byte(0), 0];
    if descriptor.strip_type.has_white() {
        pixel[3] = byte(24);
    }
    if descriptor.invert {
        let len = descriptor.bytes_per_led();
        for b in &mut pixel[..len] {
            *b = !*b;
        }
    }
    pixel
}
