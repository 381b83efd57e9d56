//! LED strip bound to one hardware channel
//!
//! A [`Strip`] goes through `Uninitialized -> Active -> Finalized`:
//! [`Strip::new`] initializes the channel, setters and [`Strip::render`] work
//! on the active strip, and [`Strip::fini`] consumes it, so a finalized strip
//! cannot be touched again.

use smart_leds::SmartLedsWrite;

use crate::color::Color;
use crate::config::{ChannelIndex, StripConfig};
use crate::driver::{ChannelDescriptor, Driver, DriverStatus};
use crate::error::{Error, Result};

/// One physical LED strip
///
/// The pixel buffer lives in the driver; the strip validates indices and
/// forwards writes. Pass `&mut driver` instead of the driver itself to keep
/// ownership on the caller's side.
#[derive(Debug)]
pub struct Strip<D: Driver> {
    config: StripConfig,
    channel: ChannelIndex,
    led_count: usize,
    driver: D,
}

impl<D: Driver> Strip<D> {
    /// Initialize the configured channel and return an active strip
    ///
    /// Fails with [`Error::Initialization`] when the channel index is not 0
    /// or 1, when `led_count` is zero, or when the driver rejects the
    /// descriptor. Initializing a channel that is already active is reported
    /// by the driver, not masked here.
    ///
    /// A driver passed by value is dropped on failure. Pass `&mut driver` to
    /// retry with another configuration.
    pub fn new(config: StripConfig, mut driver: D) -> Result<Self> {
        let Some(channel) = ChannelIndex::from_raw(config.channel) else {
            #[cfg(feature = "log")]
            log::warn!("[Strip.new] channel {} does not exist", config.channel);
            return Err(Error::Initialization(DriverStatus::GENERIC));
        };
        if config.led_count == 0 {
            #[cfg(feature = "log")]
            log::warn!("[Strip.new] channel {} configured with no LEDs", config.channel);
            return Err(Error::Initialization(DriverStatus::GENERIC));
        }

        let descriptor = ChannelDescriptor::new(channel, &config);
        if let Err(status) = driver.init(&descriptor) {
            #[cfg(feature = "log")]
            log::warn!(
                "[Strip.new] driver init failed on channel {}: {}",
                config.channel,
                status
            );
            return Err(Error::Initialization(status));
        }

        #[cfg(feature = "log")]
        log::debug!(
            "[Strip.new] channel {} active: {} LEDs on GPIO {}, type {}",
            config.channel,
            config.led_count,
            config.gpio_pin,
            config.strip_type
        );

        Ok(Self {
            config,
            channel,
            led_count: usize::from(config.led_count),
            driver,
        })
    }

    /// Number of LEDs on the strip
    pub const fn num_pixels(&self) -> usize {
        self.led_count
    }

    pub const fn config(&self) -> &StripConfig {
        &self.config
    }

    pub const fn channel(&self) -> ChannelIndex {
        self.channel
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Set one pixel
    pub fn set_led(&mut self, index: usize, color: Color) -> Result<()> {
        self.check_index(index)?;
        self.driver.set_pixel(self.channel, index, color);
        Ok(())
    }

    /// Set every pixel to the same color
    pub fn set_strip(&mut self, color: Color) {
        for index in 0..self.led_count {
            self.driver.set_pixel(self.channel, index, color);
        }
    }

    /// Set every pixel to black
    pub fn clear(&mut self) {
        self.set_strip(Color::BLACK);
    }

    /// Copy colors into the buffer starting at pixel 0
    ///
    /// Pixels past the end of `colors` keep their value. A bitmap longer than
    /// the strip is rejected before anything is written.
    pub fn set_bitmap<C>(&mut self, colors: &[C]) -> Result<()>
    where
        C: Copy + Into<Color>,
    {
        if colors.len() > self.led_count {
            return Err(Error::IndexOutOfRange {
                index: colors.len() - 1,
                len: self.led_count,
            });
        }
        for (index, color) in colors.iter().enumerate() {
            self.driver.set_pixel(self.channel, index, (*color).into());
        }
        Ok(())
    }

    /// Read a pixel back from the buffer
    ///
    /// Returns `None` when out of range or when the driver has no readback.
    pub fn led(&self, index: usize) -> Option<Color> {
        if index >= self.led_count {
            return None;
        }
        self.driver.pixel(self.channel, index)
    }

    /// Send the buffer to the LEDs
    ///
    /// A failed render leaves the strip usable.
    pub fn render(&mut self) -> Result<()> {
        self.driver.render(self.channel).map_err(|status| {
            #[cfg(feature = "log")]
            log::warn!("[Strip.render] channel {} failed: {}", self.config.channel, status);
            Error::Render(status)
        })
    }

    /// Wait for the last render to leave the wire
    pub fn wait(&mut self) -> Result<()> {
        self.driver.wait(self.channel).map_err(Error::Wait)
    }

    /// Release the hardware channel and hand the driver back
    pub fn fini(mut self) -> D {
        self.driver.finalize(self.channel);
        #[cfg(feature = "log")]
        log::debug!("[Strip.fini] channel {} released", self.config.channel);
        self.driver
    }

    const fn check_index(&self, index: usize) -> Result<()> {
        if index < self.led_count {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.led_count,
            })
        }
    }
}

impl<D: Driver> SmartLedsWrite for Strip<D> {
    type Error = Error;
    type Color = Color;

    /// Write colors from pixel 0 onward, then render
    ///
    /// Colors past the end of the strip are dropped, and pixels past the end
    /// of the iterator keep their value.
    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        for (index, color) in iterator.into_iter().take(self.led_count).enumerate() {
            self.driver.set_pixel(self.channel, index, color.into());
        }
        self.render()
    }
}
