//! USB Device subsystem - presents the vendor-defined raw HID device.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb`. A single HID interface carries the 64-byte raw report
//! descriptor; the HID class allocates the Interrupt IN and Interrupt OUT
//! endpoints behind it.
//!
//! Bus state transitions are mirrored into a `CONFIGURED` flag that the
//! echo task polls before touching either endpoint.

pub mod raw_device;
