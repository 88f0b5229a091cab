//! Button input task
//!
//! Watches one user button, debounces presses in software, and queues
//! accepted presses for the controller.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use mosaico_core::input::ButtonId;
use mosaico_core::Debouncer;

use crate::board::DEBOUNCE_US;
use crate::channels::BUTTON_EVENTS;

/// Button task - one instance per button
///
/// The BitDogLab buttons are active low (pressed = pulled to ground),
/// so a press is a falling edge. Releases are not reported; the
/// debouncer swallows the contact bounce around each press.
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(id: ButtonId, mut pin: Input<'static>) {
    info!("Button task started: {:?}", id);

    let mut debouncer = Debouncer::new(DEBOUNCE_US);

    loop {
        pin.wait_for_falling_edge().await;

        let now_us = Instant::now().as_micros() as u32;
        if debouncer.check(now_us) {
            debug!("Button pressed: {:?}", id);
            if BUTTON_EVENTS.try_send(id).is_err() {
                warn!("Button channel full, dropping press");
            }
        }
    }
}
