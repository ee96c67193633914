// ============================================================================
// Orderbook Library
// Price-time priority limit order book with aggregate depth caching
// ============================================================================

//! # Orderbook
//!
//! An in-memory price-time priority limit order book for a single
//! instrument.
//!
//! ## Features
//!
//! - **Price-time priority matching** with strict FIFO inside each level
//! - **Five order types**: GoodTillCancel, GoodForDay, FillAndKill,
//!   FillOrKill, and Market (repegged against available liquidity)
//! - **O(1) cancellation** through stable arena locators
//! - **Cached per-level aggregates** powering depth snapshots and
//!   FillOrKill admission look-ahead
//! - **Day-order reaper**: a background task expiring GoodForDay orders
//!   at a configurable daily cutoff
//! - **Thread-safe**: one lock, shareable handle, linearizable operations
//!
//! ## Example
//!
//! ```rust
//! use orderbook::prelude::*;
//!
//! let book = Orderbook::new();
//!
//! book.add_order(Order::new(OrderType::GoodTillCancel, 1, Side::Sell, 100, 10))
//!     .unwrap();
//! let trades = book
//!     .add_order(Order::new(OrderType::GoodTillCancel, 2, Side::Buy, 100, 10))
//!     .unwrap();
//!
//! assert_eq!(trades.len(), 1);
//! assert_eq!(trades[0].quantity(), 10);
//! assert!(book.is_empty());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod scenario;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BookConfig, BookDepth, LevelInfo, Order, OrderError, OrderId, OrderModify, OrderType,
        Price, Quantity, Side, Trade, TradeInfo, Trades, INVALID_PRICE,
    };
    pub use crate::engine::{Orderbook, OrderbookBuilder};
    pub use crate::interfaces::{
        BookEvent, Clock, EventHandler, LoggingEventHandler, NoOpEventHandler, RejectReason,
        SystemClock,
    };
}
