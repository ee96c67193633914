// ============================================================================
// Order Domain Model
// ============================================================================

use crate::domain::errors::OrderError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Limit price in ticks. Signed by convention; a resting limit is always
/// non-negative in practice.
pub type Price = i32;

/// Order quantity in lots.
pub type Quantity = u32;

/// Globally unique (per book) order identifier.
pub type OrderId = u64;

pub type OrderIds = Vec<OrderId>;

/// Sentinel carried by a market order until the engine repegs it.
pub const INVALID_PRICE: Price = Price::MIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrderType {
    /// Rests until filled or cancelled
    GoodTillCancel,
    /// Rests until the daily cutoff, then auto-cancelled
    GoodForDay,
    /// Immediate-or-cancel: match what crosses, cancel any residual
    FillAndKill,
    /// Fill the entire quantity immediately or do nothing
    FillOrKill,
    /// Unpriced; repegged against the opposite side and converted to
    /// GoodTillCancel before admission
    Market,
}

// ============================================================================
// Order
// ============================================================================

/// A single order with its lifecycle state.
///
/// `remaining_quantity` only ever decreases; the price is fixed for the
/// life of the order except for the one-shot market repeg.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    order_type: OrderType,
    order_id: OrderId,
    side: Side,
    price: Price,
    initial_quantity: Quantity,
    remaining_quantity: Quantity,
}

impl Order {
    pub fn new(
        order_type: OrderType,
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            order_type,
            order_id,
            side,
            price,
            initial_quantity: quantity,
            remaining_quantity: quantity,
        }
    }

    /// Create a market order. It carries [`INVALID_PRICE`] until the
    /// engine repegs it against the opposite side of the book.
    pub fn market(order_id: OrderId, side: Side, quantity: Quantity) -> Self {
        Self::new(OrderType::Market, order_id, side, INVALID_PRICE, quantity)
    }

    pub fn id(&self) -> OrderId {
        self.order_id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn initial_quantity(&self) -> Quantity {
        self.initial_quantity
    }

    pub fn remaining_quantity(&self) -> Quantity {
        self.remaining_quantity
    }

    pub fn filled_quantity(&self) -> Quantity {
        self.initial_quantity - self.remaining_quantity
    }

    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Fill a quantity of this order.
    ///
    /// Fails with [`OrderError::Overfill`] when `quantity` exceeds the
    /// remainder; the matching loop never requests more than that.
    pub fn fill(&mut self, quantity: Quantity) -> Result<(), OrderError> {
        if quantity > self.remaining_quantity {
            return Err(OrderError::Overfill {
                order_id: self.order_id,
                requested: quantity,
                remaining: self.remaining_quantity,
            });
        }

        self.remaining_quantity -= quantity;
        Ok(())
    }

    /// Repeg a market order to `price` and convert it to GoodTillCancel.
    ///
    /// Only market orders permit repricing; anything else fails with
    /// [`OrderError::InvalidRepeg`].
    pub fn to_good_till_cancel(&mut self, price: Price) -> Result<(), OrderError> {
        if self.order_type != OrderType::Market {
            return Err(OrderError::InvalidRepeg {
                order_id: self.order_id,
            });
        }

        self.price = price;
        self.order_type = OrderType::GoodTillCancel;
        Ok(())
    }
}

// ============================================================================
// OrderModify
// ============================================================================

/// A modify request: replaces an existing order with a fresh one that
/// inherits the original's type at apply time. Re-submission moves the
/// order to the back of its new price queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderModify {
    order_id: OrderId,
    side: Side,
    price: Price,
    quantity: Quantity,
}

impl OrderModify {
    pub fn new(order_id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Build the replacement order with the given type.
    pub fn to_order(&self, order_type: OrderType) -> Order {
        Order::new(
            order_type,
            self.order_id,
            self.side,
            self.price,
            self.quantity,
        )
    }
}
