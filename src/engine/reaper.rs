// ============================================================================
// Day-Order Reaper
// Background task cancelling GoodForDay orders at the daily cutoff
// ============================================================================

use crate::domain::BookConfig;
use crate::engine::book::BookCore;
use crate::engine::orderbook::Shutdown;
use crate::interfaces::Clock;
use chrono::{Days, NaiveDateTime, NaiveTime};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Wait applied when cutoff arithmetic has no answer (date overflow).
const FALLBACK_WAIT: Duration = Duration::from_secs(24 * 60 * 60);

/// Reaper loop. Sleeps until the next daily cutoff (plus the configured
/// grace), then snapshots the GoodForDay ids under the book lock,
/// releases it, and cancels them in a second critical section so the
/// lock is never held while the id list is being gathered and acted on
/// in one long stretch. Returns when the shutdown latch fires.
pub(crate) fn run(
    core: Arc<Mutex<BookCore>>,
    shutdown: Arc<Shutdown>,
    clock: Arc<dyn Clock>,
    config: BookConfig,
) {
    loop {
        let wait = time_until_cutoff(clock.now(), config.cutoff())
            .map(|until| until + config.grace())
            .unwrap_or(FALLBACK_WAIT);

        {
            let mut stop = shutdown.stop.lock();
            if *stop {
                return;
            }
            let timed_out = shutdown.signal.wait_for(&mut stop, wait).timed_out();
            if *stop {
                return;
            }
            if !timed_out {
                // spurious wake: recompute the deadline and keep waiting
                continue;
            }
        }

        let order_ids = core.lock().day_order_ids();
        if order_ids.is_empty() {
            continue;
        }

        tracing::debug!(count = order_ids.len(), "expiring day orders at cutoff");

        let mut book = core.lock();
        for order_id in order_ids {
            book.expire_order(order_id);
        }
    }
}

/// Time remaining until the next daily cutoff strictly after `now`.
/// A timestamp exactly at the cutoff rolls over to tomorrow's.
pub(crate) fn time_until_cutoff(now: NaiveDateTime, cutoff: NaiveTime) -> Option<Duration> {
    let date = if now.time() >= cutoff {
        now.date().checked_add_days(Days::new(1))?
    } else {
        now.date()
    };

    (date.and_time(cutoff) - now).to_std().ok()
}
