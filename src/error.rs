//! Unified error type for hid-echo.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Steady-state endpoint errors are observational only: the echo loop logs
//! them and moves on to the next iteration.

use defmt::Format;
use embassy_usb::class::hid::ReadError;
use embassy_usb::driver::EndpointError;

/// Top-level error type used across the application.
#[derive(Debug, Format)]
pub enum Error {
    /// Endpoint disabled - the host de-configured the device or the bus
    /// was reset mid-transfer.
    UsbDisabled,

    /// Report larger than the endpoint buffer.
    BufferOverflow,

    /// A multi-packet report arrived out of sync and was dropped.
    OutOfSync,
}

// Convenience conversions from the USB stack's error types

impl From<ReadError> for Error {
    fn from(e: ReadError) -> Self {
        match e {
            ReadError::BufferOverflow => Error::BufferOverflow,
            ReadError::Disabled => Error::UsbDisabled,
            ReadError::Sync(_) => Error::OutOfSync,
        }
    }
}

impl From<EndpointError> for Error {
    fn from(e: EndpointError) -> Self {
        match e {
            EndpointError::BufferOverflow => Error::BufferOverflow,
            EndpointError::Disabled => Error::UsbDisabled,
        }
    }
}
