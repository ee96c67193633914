// ============================================================================
// Scenario Format
// Whitespace-separated order flow scripts shared with the external test
// harness: A/M/C action lines closed by a single trailing R result line
// ============================================================================

use crate::domain::{
    Order, OrderError, OrderId, OrderModify, OrderType, Price, Quantity, Side, Trades,
};
use crate::engine::Orderbook;
use std::fmt;

// ============================================================================
// Model
// ============================================================================

/// One parsed action line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `A <B|S> <TypeName> <price> <quantity> <orderId>`
    Add {
        side: Side,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
        order_id: OrderId,
    },
    /// `M <orderId> <B|S> <price> <quantity>`
    Modify {
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    },
    /// `C <orderId>`
    Cancel { order_id: OrderId },
}

/// Expected post-state from the trailing `R` line:
/// `R <totalLiveOrders> <bidLevels> <askLevels>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedState {
    pub live_orders: usize,
    pub bid_levels: usize,
    pub ask_levels: usize,
}

/// A complete scenario: the action script plus the expected final state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub actions: Vec<Action>,
    pub expected: ExpectedState,
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while parsing scenario text. Line numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    UnknownTag { line: usize },
    UnknownSide { line: usize },
    UnknownOrderType { line: usize },
    InvalidNumber { line: usize },
    MissingField { line: usize },
    /// Input continued after the result line
    ResultNotFinal { line: usize },
    /// The scenario never stated its expected result
    MissingResult,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownTag { line } => write!(f, "line {line}: unknown action tag"),
            ParseError::UnknownSide { line } => write!(f, "line {line}: unknown side"),
            ParseError::UnknownOrderType { line } => {
                write!(f, "line {line}: unknown order type")
            }
            ParseError::InvalidNumber { line } => {
                write!(f, "line {line}: expected a non-negative integer")
            }
            ParseError::MissingField { line } => write!(f, "line {line}: missing field"),
            ParseError::ResultNotFinal { line } => {
                write!(f, "line {line}: result must be the final line")
            }
            ParseError::MissingResult => write!(f, "no result line specified"),
        }
    }
}

impl std::error::Error for ParseError {}

// ============================================================================
// Parsing
// ============================================================================

impl Scenario {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut actions = Vec::new();
        let mut expected = None;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let mut fields = raw.split_whitespace();
            let Some(tag) = fields.next() else {
                continue; // blank line
            };

            if expected.is_some() {
                return Err(ParseError::ResultNotFinal { line });
            }

            match tag {
                "A" => {
                    let side = parse_side(fields.next(), line)?;
                    let order_type = parse_order_type(fields.next(), line)?;
                    // market orders are unpriced: the column is required
                    // but its value is ignored
                    let price = match order_type {
                        OrderType::Market => {
                            require(fields.next(), line)?;
                            crate::domain::INVALID_PRICE
                        }
                        _ => parse_price(fields.next(), line)?,
                    };
                    let quantity = parse_quantity(fields.next(), line)?;
                    let order_id = parse_order_id(fields.next(), line)?;
                    actions.push(Action::Add {
                        side,
                        order_type,
                        price,
                        quantity,
                        order_id,
                    });
                }
                "M" => {
                    let order_id = parse_order_id(fields.next(), line)?;
                    let side = parse_side(fields.next(), line)?;
                    let price = parse_price(fields.next(), line)?;
                    let quantity = parse_quantity(fields.next(), line)?;
                    actions.push(Action::Modify {
                        order_id,
                        side,
                        price,
                        quantity,
                    });
                }
                "C" => {
                    let order_id = parse_order_id(fields.next(), line)?;
                    actions.push(Action::Cancel { order_id });
                }
                "R" => {
                    expected = Some(ExpectedState {
                        live_orders: parse_count(fields.next(), line)?,
                        bid_levels: parse_count(fields.next(), line)?,
                        ask_levels: parse_count(fields.next(), line)?,
                    });
                }
                _ => return Err(ParseError::UnknownTag { line }),
            }
        }

        match expected {
            Some(expected) => Ok(Self { actions, expected }),
            None => Err(ParseError::MissingResult),
        }
    }

    /// Apply every action to the book, collecting all emitted trades.
    /// Asserting the expected state is left to the caller.
    pub fn run(&self, book: &Orderbook) -> Result<Trades, OrderError> {
        let mut trades = Trades::new();

        for action in &self.actions {
            match *action {
                Action::Add {
                    side,
                    order_type,
                    price,
                    quantity,
                    order_id,
                } => {
                    let order = match order_type {
                        OrderType::Market => Order::market(order_id, side, quantity),
                        _ => Order::new(order_type, order_id, side, price, quantity),
                    };
                    trades.extend(book.add_order(order)?);
                }
                Action::Modify {
                    order_id,
                    side,
                    price,
                    quantity,
                } => {
                    trades.extend(
                        book.modify_order(OrderModify::new(order_id, side, price, quantity))?,
                    );
                }
                Action::Cancel { order_id } => book.cancel_order(order_id),
            }
        }

        Ok(trades)
    }
}

// ============================================================================
// Field Parsers
// ============================================================================

fn require(field: Option<&str>, line: usize) -> Result<&str, ParseError> {
    field.ok_or(ParseError::MissingField { line })
}

fn parse_side(field: Option<&str>, line: usize) -> Result<Side, ParseError> {
    match require(field, line)? {
        "B" => Ok(Side::Buy),
        "S" => Ok(Side::Sell),
        _ => Err(ParseError::UnknownSide { line }),
    }
}

fn parse_order_type(field: Option<&str>, line: usize) -> Result<OrderType, ParseError> {
    match require(field, line)? {
        "GoodTillCancel" => Ok(OrderType::GoodTillCancel),
        "GoodForDay" => Ok(OrderType::GoodForDay),
        "FillAndKill" => Ok(OrderType::FillAndKill),
        "FillOrKill" => Ok(OrderType::FillOrKill),
        "Market" => Ok(OrderType::Market),
        _ => Err(ParseError::UnknownOrderType { line }),
    }
}

fn parse_price(field: Option<&str>, line: usize) -> Result<Price, ParseError> {
    // non-negative by format; parse unsigned first so "-5" is rejected
    let value: u32 = require(field, line)?
        .parse()
        .map_err(|_| ParseError::InvalidNumber { line })?;
    Price::try_from(value).map_err(|_| ParseError::InvalidNumber { line })
}

fn parse_quantity(field: Option<&str>, line: usize) -> Result<Quantity, ParseError> {
    require(field, line)?
        .parse()
        .map_err(|_| ParseError::InvalidNumber { line })
}

fn parse_order_id(field: Option<&str>, line: usize) -> Result<OrderId, ParseError> {
    require(field, line)?
        .parse()
        .map_err(|_| ParseError::InvalidNumber { line })
}

fn parse_count(field: Option<&str>, line: usize) -> Result<usize, ParseError> {
    require(field, line)?
        .parse()
        .map_err(|_| ParseError::InvalidNumber { line })
}
