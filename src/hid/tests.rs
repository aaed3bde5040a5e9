//! Unit tests for the report descriptor and its parser.
//!
//! These tests run on the host (not embedded) and verify the pure logic
//! of descriptor encoding and decoding.

use super::descriptor::DescriptorSummary;
use super::raw::{REPORT_DESCRIPTOR, REPORT_SIZE, VENDOR_PAGE_ID};

#[test]
fn descriptor_bytes_are_pinned() {
    // The exact byte sequence is the compatibility contract with the host
    // application; any change here breaks enumeration compatibility.
    assert_eq!(
        REPORT_DESCRIPTOR,
        &[
            0x06, 0x12, 0xFF, // Usage Page (Vendor Defined 0xFF12)
            0x09, 0x01, // Usage (Vendor Usage 1)
            0xA1, 0x01, // Collection (Application)
            0x05, 0x06, // Usage Page (Generic Device)
            0x09, 0x00, // Usage (Undefined)
            0x15, 0x00, // Logical Minimum (0)
            0x26, 0xFF, 0x00, // Logical Maximum (255)
            0x95, 0x40, // Report Count (64)
            0x75, 0x08, // Report Size (8)
            0x81, 0x02, // Input (Data, Variable, Absolute)
            0x05, 0x06, // Usage Page (Generic Device)
            0x09, 0x00, // Usage (Undefined)
            0x15, 0x00, // Logical Minimum (0)
            0x26, 0xFF, 0x00, // Logical Maximum (255)
            0x95, 0x40, // Report Count (64)
            0x75, 0x08, // Report Size (8)
            0x91, 0x02, // Output (Data, Variable, Absolute)
            0xC0, // End Collection
        ]
    );
}

#[test]
fn descriptor_decodes_to_vendor_echo_shape() {
    let summary = DescriptorSummary::parse(REPORT_DESCRIPTOR).unwrap();
    assert_eq!(summary.collection_page, 0xFF00 | VENDOR_PAGE_ID as u16);
    assert!(summary.is_vendor_defined());
    assert_eq!(summary.app_collections, 1);
    assert_eq!(summary.input_bytes(), REPORT_SIZE as u32);
    assert_eq!(summary.output_bytes(), REPORT_SIZE as u32);
}

#[test]
fn parser_rejects_truncated_descriptor() {
    // Chop the descriptor mid-item (inside the two-byte logical maximum).
    let cut = &REPORT_DESCRIPTOR[..14];
    assert!(DescriptorSummary::parse(cut).is_none());
}

#[test]
fn parser_rejects_empty_input() {
    assert!(DescriptorSummary::parse(&[]).is_none());
}

#[test]
fn parser_rejects_descriptor_without_application_collection() {
    // Global items only, no collection.
    let data = [0x05, 0x01, 0x75, 0x08, 0x95, 0x01];
    assert!(DescriptorSummary::parse(&data).is_none());
}
