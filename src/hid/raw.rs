//! Vendor-defined raw HID report contract.
//!
//! The device exposes a single application collection on a vendor usage
//! page carrying one 64-byte input report (device → host) and one 64-byte
//! output report (host → device). Both are plain byte arrays with no report
//! IDs, so a transfer on either endpoint is exactly one report.
//!
//! The descriptor bytes are part of the compatibility contract with existing
//! host applications and must not change.

/// Report size in bytes, both directions. Also the interrupt endpoint max
/// packet size, so one report is one packet.
pub const REPORT_SIZE: usize = 64;

/// Low byte of the vendor-defined usage page (page = 0xFF00 | this).
/// Must be identical to the value compiled into the host application.
pub const VENDOR_PAGE_ID: u8 = 0x12;

/// USB HID Report Descriptor for the 64-byte echo device.
///
/// Generated per the HID 1.11 spec and the HID Usage Tables; one
/// application collection, byte-granular input and output fields.
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x06, VENDOR_PAGE_ID, 0xFF, // Usage Page (Vendor Defined 0xFF12)
    0x09, 0x01, // Usage (Vendor Usage 1)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Input report: 64 bytes, device -> host -
    0x05, 0x06, //   Usage Page (Generic Device)
    0x09, 0x00, //   Usage (Undefined)
    0x15, 0x00, //   Logical Minimum (0)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x95, REPORT_SIZE as u8, //   Report Count (64)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Output report: 64 bytes, host -> device -
    0x05, 0x06, //   Usage Page (Generic Device)
    0x09, 0x00, //   Usage (Undefined)
    0x15, 0x00, //   Logical Minimum (0)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x95, REPORT_SIZE as u8, //   Report Count (64)
    0x75, 0x08, //   Report Size (8)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    //
    0xC0, // End Collection
];
