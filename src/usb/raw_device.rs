//! USB raw HID device - one vendor-defined interface, 64 bytes each way.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral and registers a single HID function whose report descriptor
//! declares the 64-byte input/output echo contract.

use core::sync::atomic::{AtomicBool, Ordering};

use defmt::{debug, info, warn};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_usb::class::hid::{Config as HidConfig, HidReader, HidReaderWriter, HidWriter, State};
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

use crate::config;
use crate::hid::descriptor::DescriptorSummary;
use crate::hid::raw::{REPORT_DESCRIPTOR, REPORT_SIZE};

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

/// The concrete USB driver type for this board.
pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;

static HID_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static USB_STATE_HANDLER: StaticCell<DeviceStateHandler> = StaticCell::new();

/// Set by [`DeviceStateHandler`] from the USB interrupt context, polled by
/// the echo task. Single writer, single reader.
static CONFIGURED: AtomicBool = AtomicBool::new(false);

/// `true` once the host has selected a configuration; cleared again on
/// reset, disable, or de-configuration.
pub fn is_configured() -> bool {
    CONFIGURED.load(Ordering::Relaxed)
}

struct DeviceStateHandler;

impl embassy_usb::Handler for DeviceStateHandler {
    fn enabled(&mut self, enabled: bool) {
        if enabled {
            info!("USB device enabled");
        } else {
            CONFIGURED.store(false, Ordering::Relaxed);
            info!("USB device disabled");
        }
    }

    fn reset(&mut self) {
        CONFIGURED.store(false, Ordering::Relaxed);
        info!("USB bus reset");
    }

    fn addressed(&mut self, addr: u8) {
        debug!("USB address assigned: {}", addr);
    }

    fn configured(&mut self, configured: bool) {
        CONFIGURED.store(configured, Ordering::Relaxed);
        if configured {
            info!("Host configured the device, ready to echo reports");
        } else {
            info!("Device is no longer configured");
        }
    }

    fn suspended(&mut self, suspended: bool) {
        if suspended {
            info!("USB bus suspended");
        } else {
            info!("USB bus resumed");
        }
    }
}

/// Build result containing the USB device runner and the split raw HID
/// endpoints.
pub struct UsbRawDevice {
    pub device: UsbDevice<'static, UsbDriver>,
    /// OUT endpoint: reports from the host.
    pub reader: HidReader<'static, UsbDriver, REPORT_SIZE>,
    /// IN endpoint: reports echoed back to the host.
    pub writer: HidWriter<'static, UsbDriver, REPORT_SIZE>,
}

/// Initialise the USB stack and create the raw HID device.
///
/// Must be called exactly once. All static buffers are consumed here.
/// Endpoint allocation failure panics inside `embassy-usb`.
pub fn init(usbd: peripherals::USBD) -> UsbRawDevice {
    // Create the low-level USB driver with hardware VBUS detection.
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    // Device-level configuration presented during enumeration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = config::USB_MAX_POWER_MA;
    usb_config.max_packet_size_0 = 64;

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 128]);

    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    builder.handler(USB_STATE_HANDLER.init(DeviceStateHandler));

    // Register the HID function. Interrupt IN + OUT, 64-byte packets,
    // 1 ms polling interval.
    let hid_config = HidConfig {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: REPORT_SIZE as u16,
    };
    let hid = HidReaderWriter::<_, REPORT_SIZE, REPORT_SIZE>::new(
        &mut builder,
        HID_STATE.init(State::new()),
        hid_config,
    );

    let device = builder.build();
    let (reader, writer) = hid.split();

    // Boot-time sanity check of the descriptor table shape.
    match DescriptorSummary::parse(REPORT_DESCRIPTOR) {
        Some(summary) if summary.is_vendor_defined() => debug!(
            "Report descriptor: usage page {:#x}, {} in / {} out bytes",
            summary.collection_page,
            summary.input_bytes(),
            summary.output_bytes()
        ),
        _ => warn!("Report descriptor does not decode to a vendor-defined collection"),
    }
    info!("USB raw HID device initialised");

    UsbRawDevice {
        device,
        reader,
        writer,
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// Handles enumeration, suspend/resume, and endpoint servicing. Runs
/// forever.
#[embassy_executor::task]
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    device.run().await
}
