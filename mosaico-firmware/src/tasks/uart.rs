//! UART receive task
//!
//! Forwards characters received on UART0 to the controller.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::UART_CHARS;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 16;

/// UART RX task - publishes received characters for the controller
#[embassy_executor::task]
pub async fn uart_rx_task(mut rx: BufferedUartRx) {
    info!("UART RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("UART RX: {} bytes", n);
                for &byte in &buf[..n] {
                    UART_CHARS.signal(byte);
                }
            }
            Ok(_) => {
                // Zero-length read, nothing to forward
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
