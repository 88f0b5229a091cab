//! Button press debouncing
//!
//! Pure press-interval filter over a wrapping 32-bit microsecond counter.
//! The caller samples its platform clock and feeds the value in; the filter
//! never reads time itself, which keeps it testable on the host.

/// Debounce filter for a single button.
///
/// A press is accepted when more than `threshold_us` microseconds have
/// elapsed since the last accepted press. Rejected presses leave the filter
/// untouched, so a bounce burst collapses to its first edge and continuous
/// bouncing cannot postpone the next acceptance.
///
/// Each button gets its own filter; timer state is never shared.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Minimum quiet period between accepted presses (µs)
    threshold_us: u32,
    /// Counter value at the last accepted press (µs)
    last_accepted_us: u32,
}

impl Debouncer {
    /// Create a filter with the last-accepted timestamp at counter zero.
    pub const fn new(threshold_us: u32) -> Self {
        Self {
            threshold_us,
            last_accepted_us: 0,
        }
    }

    /// Feed a press edge observed at `now_us`. Returns `true` if accepted.
    ///
    /// `wrapping_sub` keeps the elapsed-time comparison correct across
    /// counter wraparound (the RP2040 timer truncates to 32 bits roughly
    /// every 71.6 minutes).
    pub fn check(&mut self, now_us: u32) -> bool {
        if now_us.wrapping_sub(self.last_accepted_us) > self.threshold_us {
            self.last_accepted_us = now_us;
            true
        } else {
            false
        }
    }

    /// Counter value recorded at the last accepted press.
    pub fn last_accepted_us(&self) -> u32 {
        self.last_accepted_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const THRESHOLD: u32 = 200_000; // 200ms, the production window

    #[test]
    fn accepts_after_quiet_period() {
        let mut d = Debouncer::new(THRESHOLD);
        assert!(d.check(1_000_000));
        assert!(d.check(1_000_000 + THRESHOLD + 1));
    }

    #[test]
    fn rejects_within_quiet_period() {
        let mut d = Debouncer::new(THRESHOLD);
        assert!(d.check(1_000_000));
        assert!(!d.check(1_000_000 + THRESHOLD / 2));
        assert!(!d.check(1_000_000 + THRESHOLD)); // boundary: elapsed == threshold rejects
    }

    #[test]
    fn rejection_does_not_reset_the_window() {
        let mut d = Debouncer::new(THRESHOLD);
        assert!(d.check(1_000_000));
        // A bounce at +150ms is rejected and must not push the window out:
        // the press at +250ms still measures from the accepted press.
        assert!(!d.check(1_150_000));
        assert!(d.check(1_250_000));
    }

    #[test]
    fn double_press_within_window_collapses_to_one() {
        // Button pressed twice within 100ms with a 200ms window: one accept.
        let mut d = Debouncer::new(THRESHOLD);
        let presses = [2_000_000, 2_100_000];
        let accepted = presses.iter().filter(|&&t| d.check(t)).count();
        assert_eq!(accepted, 1);
    }

    #[test]
    fn accepts_across_counter_wraparound() {
        let mut d = Debouncer::new(THRESHOLD);
        assert!(d.check(u32::MAX - 50_000));
        // Just past the window in wall time, counter wrapped past zero.
        assert!(d.check(200_001 - 50_001));
    }

    #[test]
    fn rejects_across_counter_wraparound() {
        let mut d = Debouncer::new(THRESHOLD);
        assert!(d.check(u32::MAX - 50_000));
        // Only 100ms later; wrapped elapsed is still inside the window.
        assert!(!d.check(50_000));
        assert_eq!(d.last_accepted_us(), u32::MAX - 50_000);
    }

    proptest! {
        /// Elapsed strictly greater than the threshold (mod 2^32) is
        /// always accepted and records the new timestamp.
        #[test]
        fn accepts_any_gap_beyond_threshold(
            last in any::<u32>(),
            excess in 1u32..=1 << 30,
        ) {
            let mut d = Debouncer::new(THRESHOLD);
            prop_assume!(d.check(last) || last == 0);
            let now = last.wrapping_add(THRESHOLD).wrapping_add(excess);
            prop_assert!(d.check(now));
            prop_assert_eq!(d.last_accepted_us(), now);
        }

        /// Elapsed at or below the threshold is always rejected and the
        /// recorded timestamp survives unchanged.
        #[test]
        fn rejects_any_gap_within_threshold(
            last in any::<u32>(),
            gap in 0u32..=THRESHOLD,
        ) {
            let mut d = Debouncer::new(THRESHOLD);
            prop_assume!(d.check(last) || last == 0);
            let before = d.last_accepted_us();
            let now = last.wrapping_add(gap);
            prop_assert!(!d.check(now));
            prop_assert_eq!(d.last_accepted_us(), before);
        }
    }
}
