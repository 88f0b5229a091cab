//! BitDogLab board definitions
//!
//! Pin assignments and timing constants for the BitDogLab, an RP2040
//! education board with a 5x5 WS2812 matrix, an SSD1306 OLED, two user
//! buttons and an RGB LED wired to discrete GPIOs.
//!
//! Pins are claimed by name (`p.PIN_x`) in `main`, so the GPIO numbers
//! here are documentation plus the few values that are passed around as
//! data (bus speeds, addresses, debounce windows).

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

// GPIO map (see the BitDogLab schematic):
//   GPIO 5  - button A (active low, internal pull-up)
//   GPIO 6  - button B (active low, internal pull-up)
//   GPIO 7  - WS2812 matrix data in
//   GPIO 11 - green LED
//   GPIO 12 - blue LED
//   GPIO 14 - I2C1 SDA (OLED)
//   GPIO 15 - I2C1 SCL (OLED)

/// I2C bus frequency for the OLED
pub const I2C_FREQ_HZ: u32 = 400_000;

/// SSD1306 I2C address
pub const OLED_ADDR: u8 = 0x3C;

/// UART0 baud rate (TX = GPIO 0, RX = GPIO 1)
pub const UART_BAUD: u32 = 9600;

/// Button debounce window in microseconds
pub const DEBOUNCE_US: u32 = 200_000;

/// Delay on either side of a received-character dispatch, giving the
/// host-side terminal time to settle between echoes
pub const SETTLE_MS: u64 = 500;

/// Main control loop period
pub const TICK_MS: u64 = 200;

/// Startup delay before the control loop runs, so a USB host has time
/// to enumerate the CDC device
pub const STARTUP_SECS: u64 = 2;
