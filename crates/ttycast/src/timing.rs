//! Inter-record delay calculation.
//!
//! Timestamps in a recording are absolute; asciicast frames carry the delay
//! since the previous frame. Delays are trusted as recorded: a clock that
//! steps backwards produces a negative delay rather than being clamped.

use tracing::warn;

use crate::ttyrec::Timestamp;

/// Microseconds in one second.
pub const MICROS_PER_SEC: i64 = 1_000_000;

/// Seconds elapsed from `previous` to `current`.
///
/// The subtraction is signed, with a single microsecond borrow applied when
/// the microsecond difference is negative.
///
/// # Example
///
/// ```
/// use ttycast::timing::delay_between;
/// use ttycast::ttyrec::Timestamp;
///
/// let delay = delay_between(Timestamp::new(10, 500_000), Timestamp::new(11, 200_000));
/// assert_eq!(delay, 0.7);
/// ```
#[must_use]
pub fn delay_between(previous: Timestamp, current: Timestamp) -> f64 {
    let mut secs = i64::from(current.secs) - i64::from(previous.secs);
    let mut micros = i64::from(current.micros) - i64::from(previous.micros);

    if micros < 0 {
        secs -= 1;
        micros += MICROS_PER_SEC;
    }

    secs as f64 + micros as f64 / MICROS_PER_SEC as f64
}

/// Tracks the previous timestamp and the running total of delays.
#[derive(Debug, Clone, Default)]
pub struct TimingAccumulator {
    previous: Option<Timestamp>,
    total: f64,
}

impl TimingAccumulator {
    /// Create an accumulator that has not seen any record yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: None,
            total: 0.0,
        }
    }

    /// Delay for a record given the previous record's timestamp, if any.
    ///
    /// The first record of a recording always has a delay of zero.
    #[must_use]
    pub fn delay(previous: Option<Timestamp>, current: Timestamp) -> f64 {
        previous.map_or(0.0, |prev| delay_between(prev, current))
    }

    /// Account for the next record and return its delay.
    pub fn advance(&mut self, current: Timestamp) -> f64 {
        let delay = Self::delay(self.previous, current);
        if let Some(previous) = self.previous {
            if delay < 0.0 {
                warn!(
                    delay,
                    from = previous.secs,
                    to = current.secs,
                    "timestamp went backwards"
                );
            }
            self.total += delay;
        }
        self.previous = Some(current);
        delay
    }

    /// Sum of every delay returned so far.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Timestamp of the last record seen.
    #[must_use]
    pub const fn previous(&self) -> Option<Timestamp> {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: u32, micros: u32) -> Timestamp {
        Timestamp::new(secs, micros)
    }

    #[test]
    fn first_delay_is_zero() {
        assert_eq!(TimingAccumulator::delay(None, ts(1_700_000_000, 42)), 0.0);

        let mut timing = TimingAccumulator::new();
        assert_eq!(timing.advance(ts(99, 999_999)), 0.0);
        assert_eq!(timing.total(), 0.0);
        assert_eq!(timing.previous(), Some(ts(99, 999_999)));
    }

    #[test]
    fn borrows_from_seconds() {
        assert_eq!(delay_between(ts(10, 500_000), ts(11, 200_000)), 0.7);
    }

    #[test]
    fn whole_seconds() {
        assert_eq!(delay_between(ts(5, 0), ts(8, 0)), 3.0);
        assert_eq!(delay_between(ts(5, 250_000), ts(5, 750_000)), 0.5);
    }

    #[test]
    fn backwards_clock_is_negative() {
        assert_eq!(delay_between(ts(10, 0), ts(9, 0)), -1.0);
        assert_eq!(delay_between(ts(10, 500_000), ts(10, 0)), -0.5);
    }

    #[test]
    fn no_overflow_at_extremes() {
        assert_eq!(delay_between(ts(0, 0), ts(u32::MAX, 0)), f64::from(u32::MAX));
        assert_eq!(
            delay_between(ts(u32::MAX, 0), ts(0, 0)),
            -f64::from(u32::MAX)
        );
    }

    #[test]
    fn out_of_range_micros_are_not_rejected() {
        // 2_000_000 micros is two seconds the format never normalised
        assert_eq!(delay_between(ts(1, 0), ts(1, 2_000_000)), 2.0);
    }

    #[test]
    fn total_accumulates_every_delay() {
        let mut timing = TimingAccumulator::new();
        let delays: Vec<f64> = [ts(10, 0), ts(10, 500_000), ts(12, 0), ts(11, 0)]
            .into_iter()
            .map(|t| timing.advance(t))
            .collect();

        assert_eq!(delays, vec![0.0, 0.5, 1.5, -1.0]);
        assert_eq!(timing.total(), 1.0);
    }
}
