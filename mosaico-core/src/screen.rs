//! OLED screen layouts
//!
//! Pixel coordinates follow the board's original layout: LED status on the
//! first two text rows, the received-character echo on the third. Every
//! render wipes the whole frame first, so the echo line survives only until
//! the next status redraw.

use crate::framebuffer::FrameBuffer;

/// y coordinate of the green LED status line.
pub const GREEN_LINE_Y: usize = 0;
/// y coordinate of the blue LED status line.
pub const BLUE_LINE_Y: usize = 15;
/// y coordinate of the received-character line.
pub const ECHO_LINE_Y: usize = 30;
/// x coordinate where the echoed character lands, one cell past the label.
pub const ECHO_CHAR_X: usize = 80;

/// Label drawn before the echoed character.
pub const ECHO_LABEL: &str = "Caractere ";

/// The two status LEDs reported on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLed {
    Green,
    Blue,
}

/// Status text for one LED line.
pub fn status_label(led: StatusLed, on: bool) -> &'static str {
    match (led, on) {
        (StatusLed::Green, true) => "Verde ON",
        (StatusLed::Green, false) => "Verde OFF",
        (StatusLed::Blue, true) => "Azul ON",
        (StatusLed::Blue, false) => "Azul OFF",
    }
}

/// Wipe the screen and draw both LED status lines.
pub fn render_status(fb: &mut FrameBuffer, green_on: bool, blue_on: bool) {
    fb.fill(false);
    fb.draw_string(0, GREEN_LINE_Y, status_label(StatusLed::Green, green_on));
    fb.draw_string(0, BLUE_LINE_Y, status_label(StatusLed::Blue, blue_on));
}

/// Wipe the screen and draw the received-character echo line.
pub fn render_received_char(fb: &mut FrameBuffer, c: char) {
    fb.fill(false);
    fb.draw_string(0, ECHO_LINE_Y, ECHO_LABEL);
    fb.draw_char(ECHO_CHAR_X, ECHO_LINE_Y, c);
}
