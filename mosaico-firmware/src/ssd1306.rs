//! SSD1306 OLED display driver
//!
//! Driver for the BitDogLab's 128x64 SSD1306 OLED via I2C. Drawing
//! happens on an in-memory `FrameBuffer`; `flush` pushes the whole
//! frame to the panel in a single data transfer using horizontal
//! addressing mode.

use mosaico_core::framebuffer::{FrameBuffer, BUF_LEN, PAGES, WIDTH};

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const SET_MEM_MODE: u8 = 0x20;
    pub const SET_COL_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const ENTIRE_ON: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    addr: u8,
    frame: FrameBuffer,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self {
            i2c,
            addr,
            frame: FrameBuffer::new(),
        }
    }

    /// Run the power-on init sequence
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        // Initialization sequence for SSD1306 (internal charge pump)
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_MEM_MODE,
            0x00, // Horizontal addressing
            cmd::SET_START_LINE | 0x00,
            cmd::SET_SEG_REMAP,    // Column 127 maps to SEG0
            cmd::SET_MUX_RATIO,
            0x3F, // 64 rows
            cmd::SET_COM_SCAN_DEC, // Scan COM63 down to COM0
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_COM_PINS,
            0x12, // Alternate COM pin layout
            cmd::SET_CLOCK_DIV,
            0x80, // Reset oscillator frequency
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x30,
            cmd::SET_CONTRAST,
            0xFF,
            cmd::ENTIRE_ON, // Follow RAM contents
            cmd::SET_NORMAL,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::DEACTIVATE_SCROLL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        Ok(())
    }

    /// Send one command byte (control byte 0x00, then the command)
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.addr, &[0x00, cmd]).await
    }

    /// Access the frame buffer for drawing
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// Push the frame buffer to the panel
    ///
    /// Resets the column and page window to the full panel, then streams
    /// all eight pages as one data transfer.
    pub async fn flush(&mut self) -> Result<(), I2C::Error> {
        let window: &[u8] = &[
            cmd::SET_COL_ADDR,
            0,
            (WIDTH - 1) as u8,
            cmd::SET_PAGE_ADDR,
            0,
            (PAGES - 1) as u8,
        ];
        for &c in window {
            self.command(c).await?;
        }

        let mut data = [0u8; BUF_LEN + 1];
        data[0] = 0x40; // Data mode
        data[1..].copy_from_slice(self.frame.as_bytes());
        self.i2c.write(self.addr, &data).await
    }

    /// Set panel contrast
    #[allow(dead_code)]
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CONTRAST).await?;
        self.command(contrast).await
    }

    /// Switch the panel on or off
    #[allow(dead_code)]
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.command(cmd::DISPLAY_ON).await
        } else {
            self.command(cmd::DISPLAY_OFF).await
        }
    }
}
