//! Host-testable library interface for hid-echo.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required): the raw report contract,
//! the descriptor parser, and the transfer-outcome classification used by
//! the echo loop.
//!
//! Usage: `cargo test` (lib + integration tests, no target toolchain).
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

// ═══════════════════════════════════════════════════════════════════════════
// Module Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub mod hid {
    pub mod descriptor {
        pub use crate::hid_descriptor_impl::*;
    }
    pub mod raw {
        pub use crate::hid_raw_impl::*;
    }

    pub use descriptor::DescriptorSummary;
}

pub mod echo_logic {
    pub use crate::echo_logic_impl::*;
}

// Internal module paths for the actual implementations
#[path = "echo_logic.rs"]
mod echo_logic_impl;
#[path = "hid/descriptor.rs"]
mod hid_descriptor_impl;
#[path = "hid/raw.rs"]
mod hid_raw_impl;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
