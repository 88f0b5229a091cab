//! PIO-based WS2812 matrix driver
//!
//! Uses RP2040's Programmable I/O to generate the WS2812 waveform for
//! the BitDogLab's 5x5 matrix. The CPU only pushes packed GRB words
//! into the TX FIFO; the state machine owns the bit timing.

use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use embassy_time::Timer;
use fixed::types::U24F8;

use mosaico_core::matrix::Frame;

use crate::board::SYS_CLK_HZ;

/// WS2812 bit rate
const WS2812_FREQ_HZ: u32 = 800_000;

/// PIO cycles per WS2812 bit
const CYCLES_PER_BIT: u32 = 10;

/// Low time after the last bit that makes the pixels latch
const LATCH_US: u64 = 50;

/// WS2812 matrix driver
///
/// Drives a chain of WS2812 pixels from a single PIO state machine.
pub struct Ws2812<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> Ws2812<'d, PIO, SM> {
    /// Create a new WS2812 driver
    ///
    /// # Arguments
    /// * `common` - PIO common resources (for loading program)
    /// * `sm` - State machine to use
    /// * `data_pin` - GPIO pin wired to the first pixel's data-in
    pub fn new<DATA: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        data_pin: Peri<'d, DATA>,
    ) -> Self {
        // Standard WS2812 waveform program. Each bit takes 10 PIO
        // cycles: a one is high for 7 and low for 3, a zero is high
        // for 2 and low for 8.
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "out x, 1       side 0 [2]",
            "jmp !x do_zero side 1 [1]",
            "do_one:",
            "jmp bitloop    side 1 [4]",
            "do_zero:",
            "nop            side 0 [4]",
            ".wrap"
        );

        let installed = common.load_program(&prg.program);

        // Create the PIO pin for the data output
        let data_pio_pin = common.make_pio_pin(data_pin);

        // Configure state machine
        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&data_pio_pin]);

        // One FIFO word per pixel: 24 colour bits shifted out MSB
        // first, autopull refilling the shift register
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };
        cfg.fifo_join = FifoJoin::TxOnly;

        // divider * 256 = (SYS_CLK * 256) / (bit_freq * cycles_per_bit)
        // FixedU32<U8> has 24 integer bits and 8 fractional bits
        let divisor = WS2812_FREQ_HZ * CYCLES_PER_BIT;
        let divider_x256 = (SYS_CLK_HZ as u64 * 256) / (divisor as u64);
        cfg.clock_divider = U24F8::from_bits(divider_x256 as u32);

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&data_pio_pin]);
        sm.set_enable(true);

        Self { sm }
    }

    /// Shift out a full frame and latch it
    ///
    /// Pushes one word per pixel in chain order, waiting for FIFO space
    /// as needed, then holds the line low so the pixels latch.
    pub async fn write(&mut self, frame: &Frame) {
        for &word in frame.iter() {
            self.sm.tx().wait_push(word).await;
        }
        Timer::after_micros(LATCH_US).await;
    }
}
