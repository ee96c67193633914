// ============================================================================
// Ladder Domain Model
// Price-ordered FIFO queues of resting orders over an arena of nodes
// ============================================================================

use crate::domain::order::{Order, Price, Side};
use slotmap::{new_key_type, SlotMap};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

new_key_type! {
    /// Stable locator for a resting order.
    ///
    /// Keys survive unrelated inserts and erases, so the id index can
    /// hold one and splice the order out of its queue in O(1) later.
    pub struct OrderKey;
}

/// Arena slot: the order plus its intrusive FIFO links.
///
/// Each node belongs to the doubly-linked queue of its price level;
/// `prev` points toward the head (older orders), `next` toward the tail.
#[derive(Debug)]
pub struct OrderNode {
    pub order: Order,
    prev: Option<OrderKey>,
    next: Option<OrderKey>,
}

impl OrderNode {
    pub fn new(order: Order) -> Self {
        Self {
            order,
            prev: None,
            next: None,
        }
    }
}

/// Arena owning every resting order in the book.
pub type OrderArena = SlotMap<OrderKey, OrderNode>;

/// Queue endpoints for one occupied price. Levels exist only while
/// non-empty; an empty level is removed rather than kept around.
#[derive(Debug)]
struct Level {
    head: OrderKey,
    tail: OrderKey,
    len: usize,
}

// ============================================================================
// Ladder
// ============================================================================

/// One side of the book: resting orders indexed by price, best first.
///
/// Bids iterate descending, asks ascending, so "best" is always the
/// front of the iteration regardless of side.
#[derive(Debug)]
pub struct Ladder {
    side: Side,
    levels: BTreeMap<Price, Level>,
}

impl Ladder {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of occupied price levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Top-of-book price: highest bid or lowest ask.
    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Deepest resting price: lowest bid or highest ask. This is the
    /// repeg target for incoming market orders on the other side.
    pub fn worst_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next().copied(),
            Side::Sell => self.levels.keys().next_back().copied(),
        }
    }

    /// FIFO head of the queue at `price`.
    pub fn front(&self, price: Price) -> Option<OrderKey> {
        self.levels.get(&price).map(|level| level.head)
    }

    /// Queue length at `price` (zero if the level does not exist).
    pub fn len_at(&self, price: Price) -> usize {
        self.levels.get(&price).map_or(0, |level| level.len)
    }

    /// Append a freshly inserted node to the tail of its price queue,
    /// creating the level if this is the first order at that price.
    pub fn push_back(&mut self, arena: &mut OrderArena, price: Price, key: OrderKey) {
        match self.levels.entry(price) {
            Entry::Occupied(mut entry) => {
                let level = entry.get_mut();
                let old_tail = level.tail;
                arena[old_tail].next = Some(key);
                arena[key].prev = Some(old_tail);
                level.tail = key;
                level.len += 1;
            }
            Entry::Vacant(entry) => {
                entry.insert(Level {
                    head: key,
                    tail: key,
                    len: 1,
                });
            }
        }
    }

    /// Splice a node out of its price queue in O(1), removing the level
    /// when it empties. The node itself stays in the arena; freeing it is
    /// the caller's job.
    pub fn unlink(&mut self, arena: &mut OrderArena, price: Price, key: OrderKey) {
        let Some(level) = self.levels.get_mut(&price) else {
            return;
        };

        let (prev, next) = {
            let node = &mut arena[key];
            (node.prev.take(), node.next.take())
        };

        match prev {
            Some(prev_key) => arena[prev_key].next = next,
            None => {
                if let Some(next_key) = next {
                    level.head = next_key;
                }
            }
        }
        match next {
            Some(next_key) => arena[next_key].prev = prev,
            None => {
                if let Some(prev_key) = prev {
                    level.tail = prev_key;
                }
            }
        }

        level.len -= 1;
        if level.len == 0 {
            self.levels.remove(&price);
        }
    }

    /// Occupied prices from best to worst.
    pub fn prices_best_first(&self) -> Box<dyn Iterator<Item = Price> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.keys().rev().copied()),
            Side::Sell => Box::new(self.levels.keys().copied()),
        }
    }

    /// Walk the FIFO queue at `price` from head to tail.
    pub fn iter_at<'a>(&self, arena: &'a OrderArena, price: Price) -> LevelIter<'a> {
        LevelIter {
            arena,
            next: self.levels.get(&price).map(|level| level.head),
        }
    }
}

/// Head-to-tail iterator over one price queue.
pub struct LevelIter<'a> {
    arena: &'a OrderArena,
    next: Option<OrderKey>,
}

impl Iterator for LevelIter<'_> {
    type Item = OrderKey;

    fn next(&mut self) -> Option<OrderKey> {
        let key = self.next?;
        self.next = self.arena[key].next;
        Some(key)
    }
}
