//! Types for public REST API endpoints.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::types::timestamp::wire_timestamp;
use crate::types::{CandleInterval, OrderBookType};

/// Largest order book depth Bittrex serves.
pub const MAX_ORDER_BOOK_DEPTH: u32 = 100;

/// Clamp a requested order book depth into `1..=100`.
pub fn clamp_depth(depth: i64) -> u32 {
    depth.clamp(1, i64::from(MAX_ORDER_BOOK_DEPTH)) as u32
}

/// Request parameters for endpoints scoped to one market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketRequest {
    /// Market name, e.g. `BTC-LTC`. Always uppercase.
    pub market: String,
}

impl MarketRequest {
    /// Create a request, uppercasing the market name.
    pub fn new(market: &str) -> Self {
        Self {
            market: market.to_uppercase(),
        }
    }
}

/// Request parameters for the order book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderBookRequest {
    /// Market name, uppercase.
    pub market: String,
    /// Which side(s) to fetch.
    #[serde(rename = "type")]
    pub book_type: OrderBookType,
    /// Levels per side, within `1..=100`.
    pub depth: u32,
}

impl OrderBookRequest {
    /// Create a request with the market uppercased and depth clamped.
    pub fn new(market: &str, book_type: OrderBookType, depth: i64) -> Self {
        Self {
            market: market.to_uppercase(),
            book_type,
            depth: clamp_depth(depth),
        }
    }
}

/// Request parameters for the balance distribution endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionRequest {
    /// Currency code, uppercase.
    #[serde(rename = "currencyName")]
    pub currency_name: String,
}

impl DistributionRequest {
    /// Create a request, uppercasing the currency.
    pub fn new(currency: &str) -> Self {
        Self {
            currency_name: currency.to_uppercase(),
        }
    }
}

/// Request parameters for candle ticks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicksRequest {
    /// Candle width.
    #[serde(rename = "tickInterval")]
    pub tick_interval: CandleInterval,
    /// Market name, uppercase.
    #[serde(rename = "marketName")]
    pub market_name: String,
    /// Cache-busting value.
    #[serde(rename = "_")]
    pub cache_buster: u64,
}

impl TicksRequest {
    /// Create a request, uppercasing the market name.
    pub fn new(market: &str, interval: CandleInterval, cache_buster: u64) -> Self {
        Self {
            tick_interval: interval,
            market_name: market.to_uppercase(),
            cache_buster,
        }
    }
}

/// A currency supported by Bittrex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    /// Currency code (e.g., "BTC").
    pub currency: String,
    /// Full name.
    pub currency_long: String,
    /// Confirmations required before a deposit is credited.
    pub min_confirmation: u32,
    /// Withdrawal fee.
    pub tx_fee: f64,
    /// Whether the currency is enabled.
    pub is_active: bool,
    /// Coin family (e.g., "BITCOIN").
    pub coin_type: String,
    /// Shared deposit address for memo-based coins.
    pub base_address: Option<String>,
    /// Exchange notice.
    pub notice: Option<String>,
}

/// A tradable market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    /// Traded currency.
    pub market_currency: String,
    /// Quote currency.
    pub base_currency: String,
    /// Full name of the traded currency.
    pub market_currency_long: String,
    /// Full name of the quote currency.
    pub base_currency_long: String,
    /// Minimum order quantity.
    pub min_trade_size: f64,
    /// Market name (e.g., "BTC-LTC").
    pub market_name: String,
    /// Whether trading is enabled.
    pub is_active: bool,
    /// Listing time.
    #[serde(with = "wire_timestamp")]
    pub created: Option<PrimitiveDateTime>,
    /// Exchange notice.
    pub notice: Option<String>,
    /// Sponsored listing flag.
    pub is_sponsored: Option<bool>,
    /// Logo of the traded currency.
    pub logo_url: Option<String>,
}

/// Current best bid, best ask and last trade price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ticker {
    /// Best bid.
    pub bid: f64,
    /// Best ask.
    pub ask: f64,
    /// Last trade price.
    pub last: f64,
}

impl Ticker {
    /// Difference between ask and bid.
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }
}

/// 24 hour summary of a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    /// Market name.
    pub market_name: String,
    /// 24h high.
    pub high: f64,
    /// 24h low.
    pub low: f64,
    /// Best ask.
    pub ask: f64,
    /// Best bid.
    pub bid: f64,
    /// Number of open buy orders.
    pub open_buy_orders: u32,
    /// Number of open sell orders.
    pub open_sell_orders: u32,
    /// 24h volume in the traded currency.
    pub volume: f64,
    /// Last trade price.
    pub last: f64,
    /// 24h volume in the quote currency.
    pub base_volume: f64,
    /// Last price 24 hours ago.
    pub prev_day: f64,
    /// Summary time.
    #[serde(with = "wire_timestamp")]
    pub time_stamp: Option<PrimitiveDateTime>,
}

/// Order summaries from the most to the least traded by base volume.
pub fn sort_by_base_volume(summaries: &mut [MarketSummary]) {
    summaries.sort_by(|a, b| b.base_volume.total_cmp(&a.base_volume));
}

/// A single price level of the order book.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderBookEntry {
    /// Quantity available at this rate.
    pub quantity: f64,
    /// Price level.
    pub rate: f64,
}

/// Order book snapshot.
///
/// When only one side was requested the other side is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Bids, best first.
    pub buy: Vec<OrderBookEntry>,
    /// Asks, best first.
    pub sell: Vec<OrderBookEntry>,
}

/// A trade from the market history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trade {
    /// Order identifier.
    pub order_uuid: String,
    /// Execution time.
    #[serde(with = "wire_timestamp")]
    pub time_stamp: Option<PrimitiveDateTime>,
    /// Executed quantity.
    pub quantity: f64,
    /// Execution price.
    pub price: f64,
    /// Quantity times price.
    pub total: f64,
    /// `FILL` or `PARTIAL_FILL`.
    pub fill_type: String,
    /// `BUY` or `SELL`.
    pub order_type: String,
}

/// OHLC candle from the v2.0 ticks endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Candle open time.
    #[serde(rename = "T", with = "wire_timestamp")]
    pub time_stamp: Option<PrimitiveDateTime>,
    /// Open price.
    #[serde(rename = "O")]
    pub open: f64,
    /// Close price.
    #[serde(rename = "C")]
    pub close: f64,
    /// High price.
    #[serde(rename = "H")]
    pub high: f64,
    /// Low price.
    #[serde(rename = "L")]
    pub low: f64,
    /// Volume in the traded currency.
    #[serde(rename = "V")]
    pub volume: f64,
    /// Volume in the quote currency.
    #[serde(rename = "BV")]
    pub base_volume: f64,
}

/// One holder balance in a [`Distribution`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DistributionBalance {
    /// Balance held.
    pub balance: f64,
}

/// Balance distribution of a currency across holders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Distribution {
    /// Largest balances.
    pub distribution: Vec<DistributionBalance>,
    /// Number of balances.
    pub balances: f64,
    /// Mean balance.
    pub average_balance: f64,
}
