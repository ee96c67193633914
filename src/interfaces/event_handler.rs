// ============================================================================
// Event Handler Interface
// Defines the contract for observing order book activity
// ============================================================================

use crate::domain::{OrderId, Price, Quantity, Side, Trade};

/// Why an order was turned away at admission. Rejections are reported
/// through events only; the submitting call just returns no trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// An order with this id is already live
    DuplicateId,
    /// Order carried a zero quantity
    ZeroQuantity,
    /// FillAndKill with nothing crossable on the opposite side
    NotMarketable,
    /// FillOrKill that the visible depth cannot fully cover
    InsufficientLiquidity,
    /// Market order against an empty opposite side
    NoReferencePrice,
}

/// Events emitted by the order book.
#[derive(Debug, Clone)]
pub enum BookEvent {
    /// Order admitted and resting (possibly about to match)
    OrderAdded {
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    },

    /// Order refused at admission; no state changed
    OrderRejected {
        order_id: OrderId,
        reason: RejectReason,
    },

    /// A bid and an ask crossed
    TradeExecuted { trade: Trade },

    /// Order removed on request
    OrderCancelled { order_id: OrderId },

    /// GoodForDay order removed by the daily cutoff reaper
    OrderExpired { order_id: OrderId },
}

/// Event handler trait for processing order book events
/// Implementations can handle logging, metrics, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a book event
    fn on_event(&self, event: BookEvent);
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: BookEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: BookEvent) {
        tracing::debug!("order book event: {:?}", event);
    }
}
