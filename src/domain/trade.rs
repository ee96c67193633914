// ============================================================================
// Trade Domain Model
// ============================================================================

use crate::domain::order::{OrderId, Price, Quantity};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One leg of a trade: the participating order, the price it printed at,
/// and the traded quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TradeInfo {
    pub order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

/// A match between a bid and an ask.
///
/// Both legs carry the same quantity; each leg prints at its own resting
/// price, so the two prices differ only when the aggressor was priced
/// through the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trade {
    bid: TradeInfo,
    ask: TradeInfo,
}

impl Trade {
    pub fn new(bid: TradeInfo, ask: TradeInfo) -> Self {
        Self { bid, ask }
    }

    pub fn bid(&self) -> &TradeInfo {
        &self.bid
    }

    pub fn ask(&self) -> &TradeInfo {
        &self.ask
    }

    /// Quantity printed by both legs.
    pub fn quantity(&self) -> Quantity {
        self.bid.quantity
    }
}

pub type Trades = Vec<Trade>;
