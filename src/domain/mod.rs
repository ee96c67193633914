// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod errors;
pub mod ladder;
pub mod levels;
pub mod order;
pub mod trade;

pub use config::BookConfig;
pub use errors::{OrderError, OrderResult};
pub use ladder::{Ladder, LevelIter, OrderArena, OrderKey, OrderNode};
pub use levels::{BookDepth, LevelData, LevelInfo};
pub use order::{
    Order, OrderId, OrderIds, OrderModify, OrderType, Price, Quantity, Side, INVALID_PRICE,
};
pub use trade::{Trade, TradeInfo, Trades};
