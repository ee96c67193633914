// ============================================================================
// Engine Module
// Contains the core matching and book-keeping logic
// ============================================================================

pub(crate) mod book;
mod orderbook;
pub(crate) mod reaper;

pub use orderbook::{Orderbook, OrderbookBuilder};
