//! One driver shared by both hardware channels
//!
//! The native driver keeps a single controller for channels 0 and 1. To
//! drive two strips from it, wrap it in a [`SharedDriver`] and give each
//! strip a [`SharedHandle`]. Every driver call runs inside a critical
//! section, so calls from different strips never interleave.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;

use crate::color::Color;
use crate::config::ChannelIndex;
use crate::driver::{ChannelDescriptor, Driver, DriverStatus};

/// A driver behind a critical-section mutex
pub struct SharedDriver<D> {
    inner: Mutex<RefCell<D>>,
}

impl<D> SharedDriver<D> {
    /// Wrap a driver for shared use
    pub const fn new(driver: D) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(driver)),
        }
    }

    /// Get a handle implementing [`Driver`]
    ///
    /// Handles are cheap references; create one per strip.
    pub const fn handle(&self) -> SharedHandle<'_, D> {
        SharedHandle { shared: self }
    }

    /// Run `f` with exclusive access to the driver
    pub fn with<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        critical_section::with(|cs| {
            let mut driver = self.inner.borrow(cs).borrow_mut();
            f(&mut *driver)
        })
    }

    /// Unwrap the driver once no handle is left
    pub fn into_inner(self) -> D {
        self.inner.into_inner().into_inner()
    }
}

/// A [`Driver`] handle for a [`SharedDriver`]
///
/// This is a lightweight reference that can be copied and passed around.
pub struct SharedHandle<'a, D> {
    shared: &'a SharedDriver<D>,
}

impl<D> Clone for SharedHandle<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for SharedHandle<'_, D> {}

impl<D> fmt::Debug for SharedHandle<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedHandle").finish_non_exhaustive()
    }
}

impl<D: Driver> Driver for SharedHandle<'_, D> {
    fn init(&mut self, descriptor: &ChannelDescriptor) -> Result<(), DriverStatus> {
        self.shared.with(|driver| driver.init(descriptor))
    }

    fn render(&mut self, channel: ChannelIndex) -> Result<(), DriverStatus> {
        self.shared.with(|driver| driver.render(channel))
    }

    fn wait(&mut self, channel: ChannelIndex) -> Result<(), DriverStatus> {
        self.shared.with(|driver| driver.wait(channel))
    }

    fn finalize(&mut self, channel: ChannelIndex) {
        self.shared.with(|driver| driver.finalize(channel));
    }

    fn set_pixel(&mut self, channel: ChannelIndex, index: usize, color: Color) {
        self.shared.with(|driver| driver.set_pixel(channel, index, color));
    }

    fn pixel(&self, channel: ChannelIndex, index: usize) -> Option<Color> {
        self.shared.with(|driver| driver.pixel(channel, index))
    }
}
