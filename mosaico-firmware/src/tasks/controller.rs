//! Main controller task
//!
//! Single owner of the board's outputs: the two status LEDs, the WS2812
//! matrix and the OLED. Polls the two serial sources and the button
//! queue in a fixed order each pass - USB first, then LED status, then
//! UART - so a character from either source is echoed on the display
//! and, if it is a digit, drawn on the matrix.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_time::Timer;

use mosaico_core::input::{matrix_action, ButtonId, MatrixAction};
use mosaico_core::matrix::{blank_frame, digit_frame};
use mosaico_core::screen::{render_received_char, render_status};

use crate::board::{SETTLE_MS, STARTUP_SECS, TICK_MS};
use crate::channels::{BUTTON_EVENTS, UART_CHARS, USB_CHARS};
use crate::ssd1306::Ssd1306;
use crate::ws2812::Ws2812;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(
    mut display: Ssd1306<I2c<'static, I2C1, Async>>,
    mut matrix: Ws2812<'static, PIO0, 0>,
    mut led_green: Output<'static>,
    mut led_blue: Output<'static>,
) {
    info!("Controller task started");

    // Give a USB host time to enumerate before the first draw
    Timer::after_secs(STARTUP_SECS).await;

    loop {
        // Character from USB CDC, if any. The pauses around the
        // dispatch keep the echo screen readable before the status
        // redraw below replaces it.
        if let Some(byte) = USB_CHARS.try_take() {
            info!("USB char: {}", byte as char);
            Timer::after_millis(SETTLE_MS).await;
            dispatch_char(&mut display, &mut matrix, byte).await;
            Timer::after_millis(SETTLE_MS).await;
        }

        // Apply queued button presses to the LEDs
        while let Ok(id) = BUTTON_EVENTS.try_receive() {
            match id {
                ButtonId::A => {
                    led_green.toggle();
                    info!("Green LED on: {}", led_green.is_set_high());
                }
                ButtonId::B => {
                    led_blue.toggle();
                    info!("Blue LED on: {}", led_blue.is_set_high());
                }
            }
        }

        // Redraw the LED status lines
        render_status(
            display.frame_mut(),
            led_green.is_set_high(),
            led_blue.is_set_high(),
        );
        if let Err(e) = display.flush().await {
            warn!("OLED write failed: {:?}", e);
        }

        // Character from UART0, if any
        if let Some(byte) = UART_CHARS.try_take() {
            info!("UART char: {}", byte as char);
            Timer::after_millis(SETTLE_MS).await;
            dispatch_char(&mut display, &mut matrix, byte).await;
            Timer::after_millis(SETTLE_MS).await;
        }

        Timer::after_millis(TICK_MS).await;
    }
}

/// Apply one received character: update the matrix, then echo the
/// character on the OLED
async fn dispatch_char(
    display: &mut Ssd1306<I2c<'static, I2C1, Async>>,
    matrix: &mut Ws2812<'static, PIO0, 0>,
    byte: u8,
) {
    let c = byte as char;

    match matrix_action(c) {
        MatrixAction::ShowDigit(digit) => {
            debug!("Matrix: digit {}", digit);
            matrix.write(&digit_frame(digit)).await;
        }
        MatrixAction::Clear => {
            debug!("Matrix: clear");
            matrix.write(&blank_frame()).await;
        }
    }

    render_received_char(display.frame_mut(), c);
    if let Err(e) = display.flush().await {
        warn!("OLED write failed: {:?}", e);
    }
}
