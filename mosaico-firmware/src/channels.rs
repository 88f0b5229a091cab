//! Inter-task communication channels
//!
//! Static embassy-sync primitives wiring the input tasks (buttons, USB
//! CDC, UART) to the controller task, which owns every output.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use mosaico_core::input::ButtonId;

/// Channel capacity for button events
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Button presses that survived debouncing, in press order
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonId, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Most recent character received over USB CDC
///
/// A `Signal` rather than a channel: the control loop polls once per
/// tick, and characters typed faster than that overwrite each other,
/// keeping only the latest. This mirrors polling a serial FIFO that is
/// drained one byte per loop pass.
pub static USB_CHARS: Signal<CriticalSectionRawMutex, u8> = Signal::new();

/// Most recent character received over UART0
pub static UART_CHARS: Signal<CriticalSectionRawMutex, u8> = Signal::new();
