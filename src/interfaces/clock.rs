// ============================================================================
// Clock Interface
// Abstract wall-clock provider for the day-order reaper
// ============================================================================

use chrono::NaiveDateTime;

/// Wall-clock source driving day-order expiry.
///
/// Injected so tests can pin the clock and exercise cutoff arithmetic
/// deterministically instead of waiting for the real close of day.
pub trait Clock: Send + Sync {
    /// Current wall-clock time in the venue's local frame.
    fn now(&self) -> NaiveDateTime;
}

/// System wall clock in the process-local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
