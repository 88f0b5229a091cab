//! Board-agnostic display logic for the Mosaico serial character firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Button press debouncing over a wrapping microsecond clock
//! - Digit glyphs and colors for the 5x5 WS2812 matrix
//! - Monochrome frame buffer and 5x7 font for the 128x64 OLED
//! - Screen layouts (LED status lines, received-character echo)
//! - Received-character dispatch

#![no_std]
#![deny(unsafe_code)]

pub mod debounce;
pub mod font;
pub mod framebuffer;
pub mod input;
pub mod matrix;
pub mod screen;

pub use debounce::Debouncer;
pub use framebuffer::FrameBuffer;
