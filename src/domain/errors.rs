// ============================================================================
// Order Errors
// Contract-violation errors for order lifecycle operations
// ============================================================================

use crate::domain::order::{OrderId, Quantity};
use std::fmt;

/// Errors raised when an order lifecycle contract is violated.
///
/// These never occur during correct engine operation; surfacing one
/// indicates a bug in the matching loop or in the caller, not a bad
/// user request. User-level outcomes (rejections, unknown ids) are
/// expressed as empty return values instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderError {
    /// Fill requested more than the order's remaining quantity
    Overfill {
        order_id: OrderId,
        requested: Quantity,
        remaining: Quantity,
    },
    /// Price repeg attempted on a non-market order
    InvalidRepeg { order_id: OrderId },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::Overfill {
                order_id,
                requested,
                remaining,
            } => write!(
                f,
                "order ({order_id}) cannot be filled for {requested}, only {remaining} remaining"
            ),
            OrderError::InvalidRepeg { order_id } => write!(
                f,
                "order ({order_id}) cannot have its price adjusted, only market orders can"
            ),
        }
    }
}

impl std::error::Error for OrderError {}

/// Result type alias for order operations
pub type OrderResult<T> = Result<T, OrderError>;
