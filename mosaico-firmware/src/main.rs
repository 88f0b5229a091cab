//! Mosaico - Serial character display firmware for the BitDogLab
//!
//! Receives single characters over USB CDC or UART0 and puts them on
//! the board: digits light the 5x5 WS2812 matrix in a per-digit colour,
//! every printable character is echoed on the SSD1306 OLED, and the two
//! user buttons toggle the green and blue status LEDs.
//!
//! Named after the Portuguese "mosaico" (mosaic) - each received
//! character lights up a mosaic of coloured tiles.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::{I2C1, PIO0, UART0, USB};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use embassy_usb::{Builder, Config as UsbConfig};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use mosaico_core::input::ButtonId;
use mosaico_core::matrix::blank_frame;

use crate::ssd1306::Ssd1306;
use crate::ws2812::Ws2812;

mod board;
mod channels;
mod ssd1306;
mod tasks;
mod ws2812;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
});

// Buffers for the buffered UART (the driver holds them forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

// USB descriptor and control buffers (same deal)
static CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static CDC_STATE: StaticCell<State> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Mosaico firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Status LEDs, off until a button toggles them
    let led_green = Output::new(p.PIN_11, Level::Low);
    let led_blue = Output::new(p.PIN_12, Level::Low);

    // User buttons, active low
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    // Setup I2C1 for the OLED
    let i2c_config = {
        let mut cfg = I2cConfig::default();
        cfg.frequency = board::I2C_FREQ_HZ;
        cfg
    };
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);

    // Panel RAM powers up with garbage, so flush a blank frame right away
    let mut display = Ssd1306::new(i2c, board::OLED_ADDR);
    if let Err(e) = display.init().await {
        error!("OLED init failed: {:?}", e);
    } else if let Err(e) = display.flush().await {
        error!("OLED clear failed: {:?}", e);
    }
    info!("OLED initialized");

    // Setup PIO0 for the WS2812 matrix
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);

    let mut matrix = Ws2812::new(&mut common, sm0, p.PIN_7);
    matrix.write(&blank_frame()).await;
    info!("WS2812 matrix initialized");

    // Setup UART0 as the wired serial input
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = board::UART_BAUD;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_uart_tx, uart_rx) = uart.split();

    info!("UART initialized");

    // Setup USB CDC-ACM as the virtual serial input
    let usb_driver = Driver::new(p.USB, Irqs);

    let usb_config = {
        let mut cfg = UsbConfig::new(0xc0de, 0xcafe);
        cfg.manufacturer = Some("BitDogLab");
        cfg.product = Some("Mosaico serial display");
        cfg.serial_number = Some("12345678");
        cfg
    };

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        CONFIG_DESC.init([0; 256]),
        BOS_DESC.init([0; 256]),
        &mut [], // no msos descriptors
        CONTROL_BUF.init([0; 64]),
    );

    let cdc = CdcAcmClass::new(&mut builder, CDC_STATE.init(State::new()), 64);
    let usb = builder.build();

    info!("USB initialized");

    // Spawn tasks
    spawner.spawn(tasks::usb_task(usb)).unwrap();
    spawner.spawn(tasks::usb_rx_task(cdc)).unwrap();
    spawner.spawn(tasks::uart_rx_task(uart_rx)).unwrap();
    spawner
        .spawn(tasks::button_task(ButtonId::A, button_a))
        .unwrap();
    spawner
        .spawn(tasks::button_task(ButtonId::B, button_b))
        .unwrap();
    spawner
        .spawn(tasks::controller_task(display, matrix, led_green, led_blue))
        .unwrap();

    info!("All tasks spawned, board is live");

    // Nothing left for the main task - the spawned tasks do all the work
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main task heartbeat");
    }
}
