// ============================================================================
// Book Configuration
// Venue-level settings for a single order book instance
// ============================================================================

use chrono::NaiveTime;
use std::time::Duration;

/// Configuration for one order book.
///
/// The cutoff is the venue's daily close in the engine clock's local
/// frame; day orders are reaped shortly after it. The grace delay keeps
/// the reaper from firing marginally before the cutoff on coarse timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookConfig {
    cutoff: NaiveTime,
    grace: Duration,
}

impl BookConfig {
    pub fn new(cutoff: NaiveTime, grace: Duration) -> Self {
        Self { cutoff, grace }
    }

    /// Daily cutoff at which GoodForDay orders expire.
    pub fn cutoff(&self) -> NaiveTime {
        self.cutoff
    }

    /// Delay added past the cutoff before the reaper runs.
    pub fn grace(&self) -> Duration {
        self.grace
    }

    /// Builder method: set the daily cutoff.
    pub fn with_cutoff(mut self, cutoff: NaiveTime) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Builder method: set the reaper grace delay.
    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.grace >= Duration::from_secs(24 * 60 * 60) {
            return Err("Grace delay must be shorter than one day".to_string());
        }

        Ok(())
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            cutoff: NaiveTime::from_hms_opt(16, 0, 0).expect("16:00:00 is a valid time"),
            grace: Duration::from_millis(100),
        }
    }
}
