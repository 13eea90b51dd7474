use std::time::Instant;

use chrono::NaiveDate;

/// Time inputs for a dispatch cycle.
///
/// The engine never reads the system clock itself. Callers construct a
/// `Clock` per event (or once per frame) and pass it in, so tests can pin
/// both the monotonic instant (shake deadlines) and the calendar date
/// (expiry validation) to fixed values.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    /// Monotonic timestamp for animation deadlines.
    pub now: Instant,
    /// Calendar date for date-sensitive validators.
    pub today: NaiveDate,
}

impl Clock {
    /// Clock reflecting the real system time.
    pub fn system() -> Self {
        Self {
            now: Instant::now(),
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Clock with a pinned calendar date. The monotonic instant still
    /// comes from the host; tests that care about deadlines pass their own
    /// `now` via [`Clock::at`].
    pub fn fixed(today: NaiveDate) -> Self {
        Self {
            now: Instant::now(),
            today,
        }
    }

    /// Fully pinned clock.
    pub fn at(now: Instant, today: NaiveDate) -> Self {
        Self { now, today }
    }
}
