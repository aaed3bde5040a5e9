//! Application-wide constants and compile-time configuration.
//!
//! USB identity, timing parameters, and protocol constants live here so
//! they can be tuned in one place.

// USB

/// USB VID/PID procured for the HID Generic echo device. These, together
/// with the device strings below, are the enumeration contract with
/// existing host applications - do not re-brand.
pub const USB_VID: u16 = 0x058B;
pub const USB_PID: u16 = 0x0274;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "Infineon Technologies";
pub const USB_PRODUCT: &str = "HID 64-byte Generic emUSB device";
pub const USB_SERIAL_NUMBER: &str = "12345678";

/// USB HID polling interval (ms). 1 ms on full speed.
pub const USB_HID_POLL_MS: u8 = 1;

/// Max current drawn from Vbus (mA).
pub const USB_MAX_POWER_MA: u16 = 100;

// Indicator

/// Half-period of the indicator blink while waiting for the host to
/// configure the device (ms). The LED is on for this long, then off for
/// this long, per poll of the configuration state.
pub const WAITING_BLINK_MS: u64 = 500;

// GPIO pin assignments (nRF52840-DK defaults)
//
//   Indicator LED → P0.13 (LED1 on the DK, active low)
