//! Device state wait / echo loop.
//!
//! Once the host configures the device, every report received on the OUT
//! endpoint is written back on the IN endpoint from the same buffer,
//! byte for byte. While unconfigured, the indicator LED blinks and no
//! endpoint is touched.

use defmt::{debug, info, warn};
use embassy_nrf::gpio::Output;
use embassy_time::Timer;
use embassy_usb::class::hid::{HidReader, HidWriter};

use crate::config;
use crate::echo_logic::{classify_read, classify_write, ReadOutcome, WriteOutcome};
use crate::error::Error;
use crate::hid::raw::REPORT_SIZE;
use crate::usb::raw_device::{self, UsbDriver};

/// Everything the echo loop owns: both endpoint halves, the indicator
/// LED, and the single report buffer reused across cycles.
pub struct EchoContext {
    reader: HidReader<'static, UsbDriver, REPORT_SIZE>,
    writer: HidWriter<'static, UsbDriver, REPORT_SIZE>,
    led: Output<'static>,
    buf: [u8; REPORT_SIZE],
}

impl EchoContext {
    pub fn new(
        reader: HidReader<'static, UsbDriver, REPORT_SIZE>,
        writer: HidWriter<'static, UsbDriver, REPORT_SIZE>,
        led: Output<'static>,
    ) -> Self {
        Self {
            reader,
            writer,
            led,
            buf: [0; REPORT_SIZE],
        }
    }

    /// Service loop: wait for configuration, then echo until power-off.
    ///
    /// The configuration state is re-checked before every cycle, so a host
    /// that de-configures the device mid-stream puts it back into the
    /// blinking wait state instead of spinning on dead endpoints.
    async fn run(&mut self) -> ! {
        loop {
            self.wait_for_configured().await;
            self.echo_once().await;
        }
    }

    /// Blink the indicator and poll the device state until the host has
    /// completed configuration.
    async fn wait_for_configured(&mut self) {
        while !raw_device::is_configured() {
            // nRF52840-DK LEDs are active low.
            self.led.set_low();
            Timer::after_millis(config::WAITING_BLINK_MS).await;
            self.led.set_high();
            Timer::after_millis(config::WAITING_BLINK_MS).await;
            info!("Waiting for host configuration...");
        }
    }

    /// One echo cycle: read a report from the OUT endpoint, classify and
    /// log the outcome, then write the buffer to the IN endpoint and
    /// classify that too. Failures are logged and otherwise ignored; a
    /// failed read still echoes the previous buffer contents.
    async fn echo_once(&mut self) {
        let read = match self.reader.read(&mut self.buf).await {
            Ok(n) => classify_read(Some(n), REPORT_SIZE),
            Err(e) => {
                debug!("OUT endpoint: {}", Error::from(e));
                classify_read(None, REPORT_SIZE)
            }
        };
        match read {
            ReadOutcome::Complete => {
                info!("Report read in full ({} bytes)", REPORT_SIZE);
            }
            ReadOutcome::Partial(n) => {
                warn!("Short read: {} of {} bytes within the wait", n, REPORT_SIZE);
            }
            ReadOutcome::Failed => {
                warn!("Failed to read report");
            }
        }

        // The endpoint write either transfers the whole report or fails;
        // the zero/partial outcomes exist for transports that report byte
        // counts.
        let write = match self.writer.write(&self.buf).await {
            Ok(()) => classify_write(Some(REPORT_SIZE), REPORT_SIZE),
            Err(e) => {
                debug!("IN endpoint: {}", Error::from(e));
                classify_write(None, REPORT_SIZE)
            }
        };
        match write {
            WriteOutcome::Complete => {
                info!("Write transfer completed ({} bytes)", REPORT_SIZE);
            }
            WriteOutcome::Started => {
                info!("Write started asynchronously, no data moved yet");
            }
            WriteOutcome::Partial(n) => {
                warn!("Short write: {} of {} bytes within the wait", n, REPORT_SIZE);
            }
            WriteOutcome::Failed => {
                warn!("Failed to write report");
            }
        }
    }
}

/// Echo task - owns the [`EchoContext`] for the lifetime of the firmware.
#[embassy_executor::task]
pub async fn echo_task(mut ctx: EchoContext) -> ! {
    info!("Echo task started");
    ctx.run().await
}
