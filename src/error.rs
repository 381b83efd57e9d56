//! Error types for strip operations

use core::fmt;

use crate::driver::DriverStatus;

/// A `Result` whose error defaults to this crate's [`Error`]
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Error type for strip operations
///
/// Driver failures keep the driver's numeric status verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The driver refused to bring up the channel; the strip is unusable
    Initialization(DriverStatus),
    /// A render call failed; the strip stays usable and may retry
    Render(DriverStatus),
    /// Waiting for a transfer to complete failed
    Wait(DriverStatus),
    /// Pixel index outside the strip
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Driver status behind the error, if it came from the driver
    pub const fn status(&self) -> Option<DriverStatus> {
        match self {
            Self::Initialization(status) | Self::Render(status) | Self::Wait(status) => {
                Some(*status)
            }
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialization(status) => write!(f, "ws2811 init failed: {status}"),
            Self::Render(status) => write!(f, "ws2811 render failed: {status}"),
            Self::Wait(status) => write!(f, "ws2811 wait failed: {status}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "LED index {index} out of range for strip of {len}")
            }
        }
    }
}

impl core::error::Error for Error {}
