//! Common domain types for the Bittrex API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BittrexError;

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuySell {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl fmt::Display for BuySell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuySell::Buy => write!(f, "buy"),
            BuySell::Sell => write!(f, "sell"),
        }
    }
}

/// Order type for trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Market order - execute immediately at best available price
    Market,
    /// Limit order - execute at specified rate or better
    Limit,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Market => write!(f, "market"),
            OrderType::Limit => write!(f, "limit"),
        }
    }
}

/// Which side(s) of the order book to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBookType {
    /// Bids only
    Buy,
    /// Asks only
    Sell,
    /// Both sides
    Both,
}

impl OrderBookType {
    /// Wire value of the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBookType::Buy => "buy",
            OrderBookType::Sell => "sell",
            OrderBookType::Both => "both",
        }
    }

    /// Parse a category, substituting `fallback` for anything unrecognised.
    pub fn parse_or(category: &str, fallback: OrderBookType) -> OrderBookType {
        category.parse().unwrap_or(fallback)
    }
}

impl fmt::Display for OrderBookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBookType {
    type Err = BittrexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(OrderBookType::Buy),
            "sell" => Ok(OrderBookType::Sell),
            "both" => Ok(OrderBookType::Both),
            other => Err(BittrexError::Validation(format!(
                "unknown order book type {other:?}"
            ))),
        }
    }
}

/// Candle width accepted by the ticks endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleInterval {
    /// 1 minute
    #[serde(rename = "oneMin")]
    OneMin,
    /// 5 minutes
    #[serde(rename = "fiveMin")]
    FiveMin,
    /// 30 minutes
    #[serde(rename = "thirtyMin")]
    ThirtyMin,
    /// 1 hour
    #[serde(rename = "hour")]
    Hour,
    /// 1 day
    #[serde(rename = "day")]
    Day,
}

impl CandleInterval {
    /// Every supported interval.
    pub const ALL: [CandleInterval; 5] = [
        CandleInterval::OneMin,
        CandleInterval::FiveMin,
        CandleInterval::ThirtyMin,
        CandleInterval::Hour,
        CandleInterval::Day,
    ];

    /// Wire value of the `tickInterval` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            CandleInterval::OneMin => "oneMin",
            CandleInterval::FiveMin => "fiveMin",
            CandleInterval::ThirtyMin => "thirtyMin",
            CandleInterval::Hour => "hour",
            CandleInterval::Day => "day",
        }
    }
}

impl fmt::Display for CandleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandleInterval {
    type Err = BittrexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CandleInterval::ALL
            .into_iter()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| BittrexError::Validation(format!("unsupported candle interval {s:?}")))
    }
}

impl TryFrom<&str> for CandleInterval {
    type Error = BittrexError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
