// ============================================================================
// Orderbook
// Public API: mutex envelope around the book core plus the reaper thread
// ============================================================================

use crate::domain::{BookConfig, BookDepth, Order, OrderError, OrderId, OrderModify, Trades};
use crate::engine::book::BookCore;
use crate::engine::reaper;
use crate::interfaces::{Clock, EventHandler, NoOpEventHandler, SystemClock};
use chrono::NaiveTime;
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Latch the engine uses to stop the reaper thread on drop.
pub(crate) struct Shutdown {
    pub(crate) stop: Mutex<bool>,
    pub(crate) signal: Condvar,
}

/// A single-instrument price-time priority limit order book.
///
/// One exclusive mutex guards all mutable state, so every public
/// operation is linearizable and the handle can be shared freely across
/// threads. Construction spawns the day-order reaper; dropping the book
/// signals it and joins.
pub struct Orderbook {
    core: Arc<Mutex<BookCore>>,
    shutdown: Arc<Shutdown>,
    reaper: Option<JoinHandle<()>>,
}

impl Orderbook {
    /// Book with the default configuration, system clock, and no event
    /// handler.
    pub fn new() -> Self {
        Self::with_config(
            BookConfig::default(),
            Arc::new(SystemClock),
            Arc::new(NoOpEventHandler),
        )
    }

    pub fn with_config(
        config: BookConfig,
        clock: Arc<dyn Clock>,
        events: Arc<dyn EventHandler>,
    ) -> Self {
        let core = Arc::new(Mutex::new(BookCore::new(events)));
        let shutdown = Arc::new(Shutdown {
            stop: Mutex::new(false),
            signal: Condvar::new(),
        });

        let reaper = {
            let core = Arc::clone(&core);
            let shutdown = Arc::clone(&shutdown);
            std::thread::spawn(move || reaper::run(core, shutdown, clock, config))
        };

        Self {
            core,
            shutdown,
            reaper: Some(reaper),
        }
    }

    /// Submit an order. Returns the trades it generated; admission
    /// failures (duplicate id, unmarketable FillAndKill, uncoverable
    /// FillOrKill, market order against an empty side) return no trades
    /// and leave the book untouched.
    pub fn add_order(&self, order: Order) -> Result<Trades, OrderError> {
        self.core.lock().add_order(order)
    }

    /// Cancel a live order. Unknown ids are a silent no-op.
    pub fn cancel_order(&self, order_id: OrderId) {
        self.core.lock().cancel_order(order_id);
    }

    /// Cancel-and-replace in one critical section. The replacement
    /// inherits the original's type and re-enters the queue at the back.
    pub fn modify_order(&self, modify: OrderModify) -> Result<Trades, OrderError> {
        self.core.lock().modify_order(modify)
    }

    /// Number of live orders.
    pub fn len(&self) -> usize {
        self.core.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consistent aggregated depth snapshot: bids descending, asks
    /// ascending.
    pub fn depth(&self) -> BookDepth {
        self.core.lock().depth()
    }
}

impl Default for Orderbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Orderbook {
    fn drop(&mut self) {
        *self.shutdown.stop.lock() = true;
        self.shutdown.signal.notify_one();
        if let Some(handle) = self.reaper.take() {
            let _ = handle.join();
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent constructor for books that need a non-default cutoff, clock,
/// or event handler.
///
/// # Example
/// ```
/// use orderbook::engine::OrderbookBuilder;
/// use orderbook::interfaces::LoggingEventHandler;
/// use std::sync::Arc;
///
/// let book = OrderbookBuilder::new()
///     .with_event_handler(Arc::new(LoggingEventHandler))
///     .build()
///     .unwrap();
/// assert!(book.is_empty());
/// ```
pub struct OrderbookBuilder {
    config: BookConfig,
    clock: Arc<dyn Clock>,
    events: Arc<dyn EventHandler>,
}

impl OrderbookBuilder {
    pub fn new() -> Self {
        Self {
            config: BookConfig::default(),
            clock: Arc::new(SystemClock),
            events: Arc::new(NoOpEventHandler),
        }
    }

    /// Set the daily cutoff for GoodForDay expiry.
    pub fn with_cutoff(mut self, cutoff: NaiveTime) -> Self {
        self.config = self.config.with_cutoff(cutoff);
        self
    }

    /// Set the reaper grace delay.
    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.config = self.config.with_grace(grace);
        self
    }

    /// Inject a wall-clock source (tests use a pinned clock).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Attach an event handler.
    pub fn with_event_handler(mut self, events: Arc<dyn EventHandler>) -> Self {
        self.events = events;
        self
    }

    /// Validate the configuration and build the book.
    pub fn build(self) -> Result<Orderbook, String> {
        self.config.validate()?;
        Ok(Orderbook::with_config(self.config, self.clock, self.events))
    }
}

impl Default for OrderbookBuilder {
    fn default() -> Self {
        Self::new()
    }
}
