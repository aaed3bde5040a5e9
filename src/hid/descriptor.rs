//! HID Report Descriptor summarizer.
//!
//! Walks the short items of a report descriptor and folds them into a
//! [`DescriptorSummary`]: which usage page the application collection sits
//! on and how many input/output bits its fields declare. This is enough to
//! verify the shape of the vendor-defined echo descriptor against what the
//! host expects, without a full HID parser.
//!
//! ## Limitations
//!
//! Handles the common cases, not the full HID spec:
//! - Long items are not supported (none exist in practice)
//! - Push/Pop global state is not supported
//! - Nested collections are flattened; only Application collections counted

/// Decoded shape of a report descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DescriptorSummary {
    /// Usage page in effect when the first application collection opens.
    pub collection_page: u16,
    /// Number of Collection (Application) items.
    pub app_collections: u8,
    /// Total bits declared across all Input main items.
    pub input_bits: u32,
    /// Total bits declared across all Output main items.
    pub output_bits: u32,
}

impl DescriptorSummary {
    /// Total input field size in whole bytes.
    pub fn input_bytes(&self) -> u32 {
        self.input_bits / 8
    }

    /// Total output field size in whole bytes.
    pub fn output_bytes(&self) -> u32 {
        self.output_bits / 8
    }

    /// `true` if the collection sits on a vendor-defined usage page
    /// (0xFF00-0xFFFF per the HID Usage Tables).
    pub fn is_vendor_defined(&self) -> bool {
        self.collection_page >= 0xFF00
    }
}

/// Collection type code for Application collections.
const COLLECTION_APPLICATION: u32 = 0x01;

impl DescriptorSummary {
    /// Parse a HID Report Descriptor.
    ///
    /// Returns `None` for truncated input or a descriptor with no
    /// application collection.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let mut summary = DescriptorSummary {
            collection_page: 0,
            app_collections: 0,
            input_bits: 0,
            output_bits: 0,
        };

        // Parser state (global items).
        let mut usage_page: u16 = 0;
        let mut report_size: u16 = 0;
        let mut report_count: u16 = 0;

        let mut i = 0;
        while i < data.len() {
            let prefix = data[i];
            let tag = (prefix >> 4) & 0x0F;
            let item_type = (prefix >> 2) & 0x03;
            let size = match prefix & 0x03 {
                0 => 0,
                1 => 1,
                2 => 2,
                // Size code 3 means a 4-byte item.
                _ => 4,
            };

            if i + 1 + size > data.len() {
                // Item data runs past the end of the descriptor.
                return None;
            }

            let value: u32 = match size {
                0 => 0,
                1 => data[i + 1] as u32,
                2 => u16::from_le_bytes([data[i + 1], data[i + 2]]) as u32,
                _ => u32::from_le_bytes([data[i + 1], data[i + 2], data[i + 3], data[i + 4]]),
            };

            match item_type {
                // Main items
                0 => match tag {
                    // Input
                    0x08 => {
                        summary.input_bits += report_size as u32 * report_count as u32;
                    }
                    // Output
                    0x09 => {
                        summary.output_bits += report_size as u32 * report_count as u32;
                    }
                    // Collection
                    0x0A => {
                        if value == COLLECTION_APPLICATION {
                            if summary.app_collections == 0 {
                                summary.collection_page = usage_page;
                            }
                            summary.app_collections += 1;
                        }
                    }
                    // End Collection (and Feature, which we don't track)
                    _ => {}
                },
                // Global items
                1 => match tag {
                    // Usage Page
                    0x00 => usage_page = value as u16,
                    // Report Size
                    0x07 => report_size = value as u16,
                    // Report Count
                    0x09 => report_count = value as u16,
                    _ => {}
                },
                // Local items carry usages; field accounting doesn't need them.
                _ => {}
            }

            i += 1 + size;
        }

        if summary.app_collections == 0 {
            return None;
        }
        Some(summary)
    }
}
