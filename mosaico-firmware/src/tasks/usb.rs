//! USB CDC-ACM tasks
//!
//! Runs the USB device stack and forwards characters received on the
//! CDC-ACM (virtual serial port) interface to the controller.

use defmt::*;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::cdc_acm::CdcAcmClass;
use embassy_usb::driver::EndpointError;
use embassy_usb::UsbDevice;

use crate::channels::USB_CHARS;

/// USB device task - drives enumeration and transfers
#[embassy_executor::task]
pub async fn usb_task(mut usb: UsbDevice<'static, Driver<'static, USB>>) -> ! {
    info!("USB device task started");
    usb.run().await
}

/// USB RX task - publishes received characters for the controller
#[embassy_executor::task]
pub async fn usb_rx_task(mut class: CdcAcmClass<'static, Driver<'static, USB>>) {
    info!("USB RX task started");

    let mut buf = [0u8; 64];

    loop {
        class.wait_connection().await;
        info!("USB host connected");

        loop {
            match class.read_packet(&mut buf).await {
                Ok(n) => {
                    trace!("USB RX: {} bytes", n);
                    for &byte in &buf[..n] {
                        USB_CHARS.signal(byte);
                    }
                }
                Err(EndpointError::Disabled) => break,
                Err(EndpointError::BufferOverflow) => {
                    warn!("USB RX buffer overflow");
                }
            }
        }

        info!("USB host disconnected");
    }
}
