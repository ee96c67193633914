// ============================================================================
// Book Core
// Unsynchronized order book state: ladders, id index, aggregate cache,
// admission rules, and the crossing loop
// ============================================================================

use crate::domain::ladder::{Ladder, OrderArena, OrderKey, OrderNode};
use crate::domain::levels::{BookDepth, LevelAction, LevelData, LevelInfo};
use crate::domain::{
    Order, OrderError, OrderId, OrderIds, OrderModify, OrderType, Price, Quantity, Side, Trade,
    TradeInfo, Trades,
};
use crate::interfaces::{BookEvent, EventHandler, RejectReason};
use std::collections::HashMap;
use std::sync::Arc;

/// The mutable heart of the book. Holds every cross-referenced index and
/// keeps them consistent after each operation:
///
/// - `arena` owns the resting orders; ladders and the id index refer
///   into it by key.
/// - `bids` / `asks` order the arena keys by price and arrival.
/// - `orders` maps an order id to its arena key for O(1) cancellation.
/// - `levels` shadows both ladders with per-price (quantity, count)
///   aggregates; an entry exists iff the price is occupied.
///
/// All synchronization lives in the [`Orderbook`](crate::engine::Orderbook)
/// envelope; nothing in here locks.
pub(crate) struct BookCore {
    arena: OrderArena,
    bids: Ladder,
    asks: Ladder,
    orders: HashMap<OrderId, OrderKey>,
    levels: HashMap<Price, LevelData>,
    events: Arc<dyn EventHandler>,
}

impl BookCore {
    pub(crate) fn new(events: Arc<dyn EventHandler>) -> Self {
        Self {
            arena: OrderArena::default(),
            bids: Ladder::new(Side::Buy),
            asks: Ladder::new(Side::Sell),
            orders: HashMap::new(),
            levels: HashMap::new(),
            events,
        }
    }

    /// Number of live orders.
    pub(crate) fn len(&self) -> usize {
        self.orders.len()
    }

    // ========================================================================
    // Order Entry
    // ========================================================================

    /// Admit an order, rest it, and run the crossing loop.
    ///
    /// Admission failures (duplicate id, unmarketable FillAndKill,
    /// uncoverable FillOrKill, market order with no reference price) are
    /// silent: no trades, no state change, a reject event.
    pub(crate) fn add_order(&mut self, mut order: Order) -> Result<Trades, OrderError> {
        if self.orders.contains_key(&order.id()) {
            return Ok(self.reject(order.id(), RejectReason::DuplicateId));
        }

        if order.initial_quantity() == 0 {
            return Ok(self.reject(order.id(), RejectReason::ZeroQuantity));
        }

        if order.order_type() == OrderType::Market {
            // Repeg to the opposite side's deepest price so the order
            // trades through everything currently resting, then rests at
            // that price as GoodTillCancel.
            let reference = match order.side() {
                Side::Buy => self.asks.worst_price(),
                Side::Sell => self.bids.worst_price(),
            };
            match reference {
                Some(price) => order.to_good_till_cancel(price)?,
                None => return Ok(self.reject(order.id(), RejectReason::NoReferencePrice)),
            }
        }

        if order.order_type() == OrderType::FillAndKill
            && !self.can_match(order.side(), order.price())
        {
            return Ok(self.reject(order.id(), RejectReason::NotMarketable));
        }

        if order.order_type() == OrderType::FillOrKill
            && !self.can_fully_fill(order.side(), order.price(), order.initial_quantity())
        {
            return Ok(self.reject(order.id(), RejectReason::InsufficientLiquidity));
        }

        let order_id = order.id();
        let side = order.side();
        let price = order.price();
        let quantity = order.initial_quantity();

        let key = self.arena.insert(OrderNode::new(order));
        match side {
            Side::Buy => self.bids.push_back(&mut self.arena, price, key),
            Side::Sell => self.asks.push_back(&mut self.arena, price, key),
        }
        self.orders.insert(order_id, key);
        self.update_level_data(price, quantity, LevelAction::Add);

        self.events.on_event(BookEvent::OrderAdded {
            order_id,
            side,
            price,
            quantity,
        });

        self.match_orders()
    }

    /// Remove a live order. Unknown ids are a silent no-op, which also
    /// makes cancellation idempotent.
    pub(crate) fn cancel_order(&mut self, order_id: OrderId) {
        if self.remove_resting(order_id) {
            self.events.on_event(BookEvent::OrderCancelled { order_id });
        }
    }

    /// Cancel-and-replace. The replacement inherits the original's type
    /// but joins the back of its new price queue, giving up time
    /// priority. Unknown ids produce no trades and no state change.
    pub(crate) fn modify_order(&mut self, modify: OrderModify) -> Result<Trades, OrderError> {
        let Some(&key) = self.orders.get(&modify.order_id()) else {
            return Ok(Trades::new());
        };
        let order_type = self.arena[key].order.order_type();

        self.cancel_order(modify.order_id());
        self.add_order(modify.to_order(order_type))
    }

    /// Remove a GoodForDay order at the daily cutoff.
    pub(crate) fn expire_order(&mut self, order_id: OrderId) {
        if self.remove_resting(order_id) {
            self.events.on_event(BookEvent::OrderExpired { order_id });
        }
    }

    /// Ids of every live GoodForDay order, snapshotted for the reaper.
    pub(crate) fn day_order_ids(&self) -> OrderIds {
        self.arena
            .values()
            .filter(|node| node.order.order_type() == OrderType::GoodForDay)
            .map(|node| node.order.id())
            .collect()
    }

    // ========================================================================
    // Depth
    // ========================================================================

    /// Aggregated (price, quantity) depth per side, best level first.
    /// Reads the level cache, which mirrors the queues exactly.
    pub(crate) fn depth(&self) -> BookDepth {
        let collect = |ladder: &Ladder| -> Vec<LevelInfo> {
            ladder
                .prices_best_first()
                .map(|price| LevelInfo {
                    price,
                    quantity: self
                        .levels
                        .get(&price)
                        .map_or(0, |data| data.quantity()),
                })
                .collect()
        };

        BookDepth::new(collect(&self.bids), collect(&self.asks))
    }

    // ========================================================================
    // Admission Predicates
    // ========================================================================

    /// Is a `side` order at `price` immediately crossable against the
    /// opposite best?
    fn can_match(&self, side: Side, price: Price) -> bool {
        match side {
            Side::Buy => self
                .asks
                .best_price()
                .is_some_and(|best_ask| price >= best_ask),
            Side::Sell => self
                .bids
                .best_price()
                .is_some_and(|best_bid| price <= best_bid),
        }
    }

    /// Look-ahead for FillOrKill: walk the opposite side from best to
    /// deep, stopping at levels worse than `price`, and check whether
    /// the accumulated aggregate quantity covers the order.
    fn can_fully_fill(&self, side: Side, price: Price, quantity: Quantity) -> bool {
        if !self.can_match(side, price) {
            return false;
        }

        let opposite = match side {
            Side::Buy => &self.asks,
            Side::Sell => &self.bids,
        };

        let mut needed = quantity;
        for level_price in opposite.prices_best_first() {
            let beyond_limit = match side {
                Side::Buy => level_price > price,
                Side::Sell => level_price < price,
            };
            if beyond_limit {
                break;
            }

            let Some(data) = self.levels.get(&level_price) else {
                continue;
            };
            if needed <= data.quantity() {
                return true;
            }
            needed -= data.quantity();
        }

        false
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// The crossing loop. While the book is crossed, trade the FIFO
    /// heads of the two best levels against each other at
    /// `min(remainings)`, each leg printing at its own resting price.
    /// Afterwards a FillAndKill residual left at the top of either side
    /// is cancelled so IOC orders never rest.
    fn match_orders(&mut self) -> Result<Trades, OrderError> {
        let mut trades = Trades::new();

        loop {
            let (Some(bid_price), Some(ask_price)) =
                (self.bids.best_price(), self.asks.best_price())
            else {
                break;
            };
            if bid_price < ask_price {
                break;
            }

            let (Some(bid_key), Some(ask_key)) =
                (self.bids.front(bid_price), self.asks.front(ask_price))
            else {
                break;
            };

            let quantity = self.arena[bid_key]
                .order
                .remaining_quantity()
                .min(self.arena[ask_key].order.remaining_quantity());

            self.arena[bid_key].order.fill(quantity)?;
            self.arena[ask_key].order.fill(quantity)?;

            let (bid_leg, bid_filled) = {
                let bid = &self.arena[bid_key].order;
                (
                    TradeInfo {
                        order_id: bid.id(),
                        price: bid.price(),
                        quantity,
                    },
                    bid.is_filled(),
                )
            };
            let (ask_leg, ask_filled) = {
                let ask = &self.arena[ask_key].order;
                (
                    TradeInfo {
                        order_id: ask.id(),
                        price: ask.price(),
                        quantity,
                    },
                    ask.is_filled(),
                )
            };

            let trade = Trade::new(bid_leg, ask_leg);
            self.events.on_event(BookEvent::TradeExecuted { trade });
            trades.push(trade);

            if bid_filled {
                self.bids.unlink(&mut self.arena, bid_price, bid_key);
                self.orders.remove(&bid_leg.order_id);
                self.arena.remove(bid_key);
            }
            self.on_order_matched(bid_price, quantity, bid_filled);

            if ask_filled {
                self.asks.unlink(&mut self.arena, ask_price, ask_key);
                self.orders.remove(&ask_leg.order_id);
                self.arena.remove(ask_key);
            }
            self.on_order_matched(ask_price, quantity, ask_filled);
        }

        self.drop_fill_and_kill_residual(Side::Buy);
        self.drop_fill_and_kill_residual(Side::Sell);

        Ok(trades)
    }

    fn drop_fill_and_kill_residual(&mut self, side: Side) {
        let ladder = match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        };
        let residual = ladder
            .best_price()
            .and_then(|price| ladder.front(price))
            .map(|key| &self.arena[key].order)
            .filter(|order| order.order_type() == OrderType::FillAndKill)
            .map(|order| order.id());

        if let Some(order_id) = residual {
            self.cancel_order(order_id);
        }
    }

    // ========================================================================
    // Level Cache Maintenance
    // ========================================================================

    fn on_order_matched(&mut self, price: Price, quantity: Quantity, filled: bool) {
        let action = if filled {
            LevelAction::Remove
        } else {
            LevelAction::Match
        };
        self.update_level_data(price, quantity, action);
    }

    fn update_level_data(&mut self, price: Price, quantity: Quantity, action: LevelAction) {
        let data = self.levels.entry(price).or_default();
        data.apply(quantity, action);
        let cleared = data.is_cleared();
        if cleared {
            self.levels.remove(&price);
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Shared removal path for cancel and expiry: unlink from the queue,
    /// drop the id index entry, free the arena node, and update the
    /// aggregate with the order's remaining quantity. Returns whether a
    /// live order was actually removed.
    fn remove_resting(&mut self, order_id: OrderId) -> bool {
        let Some(key) = self.orders.remove(&order_id) else {
            return false;
        };

        let (side, price, remaining) = {
            let order = &self.arena[key].order;
            (order.side(), order.price(), order.remaining_quantity())
        };

        match side {
            Side::Buy => self.bids.unlink(&mut self.arena, price, key),
            Side::Sell => self.asks.unlink(&mut self.arena, price, key),
        }
        self.arena.remove(key);
        self.update_level_data(price, remaining, LevelAction::Remove);

        true
    }

    fn reject(&self, order_id: OrderId, reason: RejectReason) -> Trades {
        self.events
            .on_event(BookEvent::OrderRejected { order_id, reason });
        Trades::new()
    }

    // ========================================================================
    // Test Support
    // ========================================================================

    /// Check every cross-index invariant. Called after operations in
    /// tests; any violation is a bug in the mutation paths above.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        // The book is never crossed at rest.
        if let (Some(best_bid), Some(best_ask)) = (self.bids.best_price(), self.asks.best_price())
        {
            assert!(
                best_bid < best_ask,
                "book is crossed: bid {best_bid} >= ask {best_ask}"
            );
        }

        // Aggregate cache mirrors the queues exactly, with no stale entries.
        let mut occupied = 0;
        for ladder in [&self.bids, &self.asks] {
            for price in ladder.prices_best_first() {
                occupied += 1;
                let (mut total, mut count) = (0u32, 0u32);
                for key in ladder.iter_at(&self.arena, price) {
                    let order = &self.arena[key].order;
                    assert_eq!(order.price(), price);
                    assert_eq!(order.side(), ladder.side());
                    total += order.remaining_quantity();
                    count += 1;
                }
                let data = self
                    .levels
                    .get(&price)
                    .unwrap_or_else(|| panic!("missing aggregate for occupied price {price}"));
                assert_eq!(data.quantity(), total, "aggregate quantity at {price}");
                assert_eq!(data.count(), count, "aggregate count at {price}");
                assert_eq!(count as usize, ladder.len_at(price));
            }
        }
        assert_eq!(self.levels.len(), occupied, "stale aggregate entries");

        // Every id-index entry resolves to a node resting in the right queue.
        assert_eq!(self.orders.len(), self.arena.len());
        for (&order_id, &key) in &self.orders {
            let node = self
                .arena
                .get(key)
                .unwrap_or_else(|| panic!("dangling locator for order {order_id}"));
            assert_eq!(node.order.id(), order_id);
            let ladder = match node.order.side() {
                Side::Buy => &self.bids,
                Side::Sell => &self.asks,
            };
            assert!(
                ladder
                    .iter_at(&self.arena, node.order.price())
                    .any(|queued| queued == key),
                "order {order_id} missing from its price queue"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    fn book() -> BookCore {
        BookCore::new(Arc::new(NoOpEventHandler))
    }

    fn gtc(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Order {
        Order::new(OrderType::GoodTillCancel, id, side, price, quantity)
    }

    #[test]
    fn test_resting_order_does_not_match() {
        let mut book = book();

        let trades = book.add_order(gtc(1, Side::Buy, 100, 10)).unwrap();

        assert!(trades.is_empty());
        assert_eq!(book.len(), 1);
        book.assert_invariants();
    }

    #[test]
    fn test_full_cross_empties_book() {
        let mut book = book();

        book.add_order(gtc(1, Side::Buy, 100, 10)).unwrap();
        let trades = book.add_order(gtc(2, Side::Sell, 100, 10)).unwrap();

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].bid().order_id, 1);
        assert_eq!(trades[0].ask().order_id, 2);
        assert_eq!(trades[0].quantity(), 10);
        assert_eq!(book.len(), 0);
        book.assert_invariants();
    }

    #[test]
    fn test_partial_fill_leaves_remainder_resting() {
        let mut book = book();

        book.add_order(gtc(1, Side::Sell, 100, 10)).unwrap();
        let trades = book.add_order(gtc(2, Side::Buy, 100, 4)).unwrap();

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity(), 4);
        assert_eq!(book.len(), 1);

        let depth = book.depth();
        assert_eq!(depth.asks(), &[LevelInfo { price: 100, quantity: 6 }]);
        book.assert_invariants();
    }

    #[test]
    fn test_aggressive_price_prints_each_leg_at_its_own_price() {
        let mut book = book();

        book.add_order(gtc(1, Side::Sell, 100, 5)).unwrap();
        let trades = book.add_order(gtc(2, Side::Buy, 103, 5)).unwrap();

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].bid().price, 103);
        assert_eq!(trades[0].ask().price, 100);
        book.assert_invariants();
    }

    #[test]
    fn test_price_priority_sweeps_best_levels_first() {
        let mut book = book();

        book.add_order(gtc(1, Side::Sell, 102, 5)).unwrap();
        book.add_order(gtc(2, Side::Sell, 100, 5)).unwrap();
        book.add_order(gtc(3, Side::Sell, 101, 5)).unwrap();

        let trades = book.add_order(gtc(4, Side::Buy, 102, 12)).unwrap();

        assert_eq!(trades.len(), 3);
        assert_eq!(trades[0].ask().order_id, 2);
        assert_eq!(trades[1].ask().order_id, 3);
        assert_eq!(trades[2].ask().order_id, 1);
        assert_eq!(trades[2].quantity(), 2);
        book.assert_invariants();
    }

    #[test]
    fn test_time_priority_within_level() {
        let mut book = book();

        book.add_order(gtc(1, Side::Sell, 100, 5)).unwrap();
        book.add_order(gtc(2, Side::Sell, 100, 5)).unwrap();

        let trades = book.add_order(gtc(3, Side::Buy, 100, 5)).unwrap();

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].ask().order_id, 1);
        assert_eq!(book.len(), 1);
        book.assert_invariants();
    }

    #[test]
    fn test_fill_conservation_across_trades() {
        let mut book = book();

        book.add_order(gtc(1, Side::Sell, 100, 3)).unwrap();
        book.add_order(gtc(2, Side::Sell, 100, 4)).unwrap();
        let trades = book.add_order(gtc(3, Side::Buy, 100, 7)).unwrap();

        let traded: Quantity = trades.iter().map(|trade| trade.quantity()).sum();
        assert_eq!(traded, 7);
        assert_eq!(book.len(), 0);
        book.assert_invariants();
    }

    #[test]
    fn test_duplicate_id_is_silent_noop() {
        let mut book = book();

        book.add_order(gtc(1, Side::Buy, 100, 10)).unwrap();
        let trades = book.add_order(gtc(1, Side::Sell, 100, 10)).unwrap();

        assert!(trades.is_empty());
        assert_eq!(book.len(), 1);
        assert_eq!(book.depth().best_bid(), Some(100));
        book.assert_invariants();
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut book = book();

        let trades = book.add_order(gtc(1, Side::Buy, 100, 0)).unwrap();

        assert!(trades.is_empty());
        assert_eq!(book.len(), 0);
        book.assert_invariants();
    }

    #[test]
    fn test_fill_and_kill_rejected_when_not_marketable() {
        let mut book = book();

        book.add_order(gtc(1, Side::Sell, 101, 5)).unwrap();
        let trades = book
            .add_order(Order::new(OrderType::FillAndKill, 2, Side::Buy, 100, 5))
            .unwrap();

        assert!(trades.is_empty());
        assert_eq!(book.len(), 1);
        book.assert_invariants();
    }

    #[test]
    fn test_fill_and_kill_residual_is_cancelled() {
        let mut book = book();

        book.add_order(gtc(1, Side::Sell, 100, 5)).unwrap();
        let trades = book
            .add_order(Order::new(OrderType::FillAndKill, 2, Side::Buy, 100, 10))
            .unwrap();

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity(), 5);
        // the unfilled half never rests
        assert_eq!(book.len(), 0);
        book.assert_invariants();
    }

    #[test]
    fn test_fill_or_kill_rejected_without_cover() {
        let mut book = book();

        book.add_order(gtc(1, Side::Sell, 100, 5)).unwrap();
        let trades = book
            .add_order(Order::new(OrderType::FillOrKill, 2, Side::Buy, 100, 10))
            .unwrap();

        assert!(trades.is_empty());
        assert_eq!(book.len(), 1);
        book.assert_invariants();
    }

    #[test]
    fn test_fill_or_kill_sweeps_multiple_levels() {
        let mut book = book();

        book.add_order(gtc(1, Side::Sell, 100, 5)).unwrap();
        book.add_order(gtc(2, Side::Sell, 101, 5)).unwrap();
        let trades = book
            .add_order(Order::new(OrderType::FillOrKill, 3, Side::Buy, 101, 10))
            .unwrap();

        assert_eq!(trades.len(), 2);
        let traded: Quantity = trades.iter().map(|trade| trade.quantity()).sum();
        assert_eq!(traded, 10);
        assert_eq!(book.len(), 0);
        book.assert_invariants();
    }

    #[test]
    fn test_fill_or_kill_ignores_levels_beyond_limit() {
        let mut book = book();

        book.add_order(gtc(1, Side::Sell, 100, 5)).unwrap();
        book.add_order(gtc(2, Side::Sell, 105, 20)).unwrap();
        // 105 is beyond the limit, so only 5 of the needed 10 are coverable
        let trades = book
            .add_order(Order::new(OrderType::FillOrKill, 3, Side::Buy, 101, 10))
            .unwrap();

        assert!(trades.is_empty());
        assert_eq!(book.len(), 2);
        book.assert_invariants();
    }

    #[test]
    fn test_market_order_sweeps_and_rests_at_worst_price() {
        let mut book = book();

        book.add_order(gtc(1, Side::Sell, 100, 5)).unwrap();
        book.add_order(gtc(2, Side::Sell, 101, 5)).unwrap();
        let trades = book.add_order(Order::market(9, Side::Buy, 12)).unwrap();

        assert_eq!(trades.len(), 2);
        let traded: Quantity = trades.iter().map(|trade| trade.quantity()).sum();
        assert_eq!(traded, 10);
        // the residual rests as GoodTillCancel at the repegged price
        assert_eq!(book.len(), 1);
        assert_eq!(book.depth().best_bid(), Some(101));
        let depth = book.depth();
        assert_eq!(depth.bids(), &[LevelInfo { price: 101, quantity: 2 }]);
        book.assert_invariants();
    }

    #[test]
    fn test_market_order_rejected_against_empty_side() {
        let mut book = book();

        let trades = book.add_order(Order::market(9, Side::Buy, 10)).unwrap();

        assert!(trades.is_empty());
        assert_eq!(book.len(), 0);
        book.assert_invariants();
    }

    #[test]
    fn test_cancel_removes_order_and_level() {
        let mut book = book();

        book.add_order(gtc(1, Side::Buy, 99, 4)).unwrap();
        book.cancel_order(1);

        assert_eq!(book.len(), 0);
        assert!(book.depth().bids().is_empty());
        book.assert_invariants();
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut book = book();

        book.add_order(gtc(1, Side::Buy, 99, 4)).unwrap();
        book.add_order(gtc(2, Side::Buy, 99, 6)).unwrap();
        book.cancel_order(1);
        book.cancel_order(1);
        book.cancel_order(77); // never existed

        assert_eq!(book.len(), 1);
        assert_eq!(book.depth().bids(), &[LevelInfo { price: 99, quantity: 6 }]);
        book.assert_invariants();
    }

    #[test]
    fn test_modify_loses_time_priority() {
        let mut book = book();

        book.add_order(gtc(1, Side::Buy, 100, 5)).unwrap();
        book.add_order(gtc(2, Side::Buy, 100, 5)).unwrap();
        book.modify_order(OrderModify::new(1, Side::Buy, 100, 5))
            .unwrap();

        // order 2 is now first in the queue at 100
        let trades = book.add_order(gtc(3, Side::Sell, 100, 5)).unwrap();
        assert_eq!(trades[0].bid().order_id, 2);
        book.assert_invariants();
    }

    #[test]
    fn test_modify_inherits_order_type() {
        let mut book = book();

        book.add_order(Order::new(OrderType::GoodForDay, 1, Side::Buy, 100, 5))
            .unwrap();
        book.modify_order(OrderModify::new(1, Side::Buy, 101, 7))
            .unwrap();

        assert_eq!(book.day_order_ids(), vec![1]);
        assert_eq!(book.depth().best_bid(), Some(101));
        book.assert_invariants();
    }

    #[test]
    fn test_modify_unknown_order_is_noop() {
        let mut book = book();

        let trades = book
            .modify_order(OrderModify::new(42, Side::Buy, 100, 5))
            .unwrap();

        assert!(trades.is_empty());
        assert_eq!(book.len(), 0);
        book.assert_invariants();
    }

    #[test]
    fn test_modify_can_trigger_matching() {
        let mut book = book();

        book.add_order(gtc(1, Side::Buy, 99, 5)).unwrap();
        book.add_order(gtc(2, Side::Sell, 101, 5)).unwrap();
        let trades = book
            .modify_order(OrderModify::new(1, Side::Buy, 101, 5))
            .unwrap();

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity(), 5);
        assert_eq!(book.len(), 0);
        book.assert_invariants();
    }

    #[test]
    fn test_day_order_snapshot_and_expiry() {
        let mut book = book();

        book.add_order(Order::new(OrderType::GoodForDay, 1, Side::Buy, 100, 5))
            .unwrap();
        book.add_order(gtc(2, Side::Buy, 100, 5)).unwrap();
        book.add_order(Order::new(OrderType::GoodForDay, 3, Side::Sell, 105, 5))
            .unwrap();

        let mut ids = book.day_order_ids();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 3]);

        for order_id in ids {
            book.expire_order(order_id);
        }

        assert_eq!(book.len(), 1);
        assert_eq!(book.depth().best_bid(), Some(100));
        assert!(book.depth().asks().is_empty());
        book.assert_invariants();
    }

    #[test]
    fn test_depth_ordering() {
        let mut book = book();

        book.add_order(gtc(1, Side::Buy, 98, 1)).unwrap();
        book.add_order(gtc(2, Side::Buy, 100, 2)).unwrap();
        book.add_order(gtc(3, Side::Buy, 99, 3)).unwrap();
        book.add_order(gtc(4, Side::Sell, 103, 1)).unwrap();
        book.add_order(gtc(5, Side::Sell, 101, 2)).unwrap();
        book.add_order(gtc(6, Side::Sell, 102, 3)).unwrap();

        let depth = book.depth();
        let bid_prices: Vec<Price> = depth.bids().iter().map(|level| level.price).collect();
        let ask_prices: Vec<Price> = depth.asks().iter().map(|level| level.price).collect();
        assert_eq!(bid_prices, vec![100, 99, 98]);
        assert_eq!(ask_prices, vec![101, 102, 103]);
        book.assert_invariants();
    }
}
