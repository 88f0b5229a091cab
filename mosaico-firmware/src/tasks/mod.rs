//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod controller;
pub mod uart;
pub mod usb;

pub use buttons::button_task;
pub use controller::controller_task;
pub use uart::uart_rx_task;
pub use usb::{usb_rx_task, usb_task};
