//! hid-echo firmware entry point.
//!
//! Brings up the board, builds the USB raw HID device, and spawns the
//! two tasks that make up the application: the USB stack runner and the
//! echo loop.

#![no_std]
#![no_main]

mod config;
mod echo;
mod echo_logic;
mod error;
mod hid;
mod usb;

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use panic_probe as _;

use crate::echo::EchoContext;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Fatal bring-up failures (bad clock config, broken board) panic here
    // and land in panic-probe; there is no degraded mode before this.
    let p = embassy_nrf::init(Default::default());

    info!("hid-echo: USB HID 64-byte generic echo device");

    let usb = usb::raw_device::init(p.USBD);
    info!("Endpoint initialisation done");

    // Indicator LED, off until the wait loop starts blinking it
    // (active low on the DK).
    let led = Output::new(p.P0_13, Level::High, OutputDrive::Standard);

    spawner.must_spawn(usb::raw_device::run_usb_device(usb.device));
    spawner.must_spawn(echo::echo_task(EchoContext::new(
        usb.reader, usb.writer, led,
    )));

    info!("USB device stack started");
}
