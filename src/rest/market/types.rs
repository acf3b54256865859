//! Types for trading endpoints.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::error::BittrexError;
use crate::types::serde_helpers::fixed8;
use crate::types::timestamp::wire_timestamp;
use crate::types::{BuySell, OrderType};

/// Request parameters for placing an order.
///
/// Side and type select the endpoint and are not sent as parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceOrderRequest {
    /// Buy or sell.
    #[serde(skip)]
    pub side: BuySell,
    /// Limit or market.
    #[serde(skip)]
    pub order_type: OrderType,
    /// Market name, uppercase.
    pub market: String,
    /// Order quantity.
    #[serde(serialize_with = "fixed8::serialize")]
    pub quantity: f64,
    /// Limit rate, only for limit orders.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "fixed8::serialize_option"
    )]
    pub rate: Option<f64>,
}

impl PlaceOrderRequest {
    /// A limit order at `rate`.
    pub fn limit(side: BuySell, market: &str, quantity: f64, rate: f64) -> Self {
        Self {
            side,
            order_type: OrderType::Limit,
            market: market.to_uppercase(),
            quantity,
            rate: Some(rate),
        }
    }

    /// A market order.
    pub fn market(side: BuySell, market: &str, quantity: f64) -> Self {
        Self {
            side,
            order_type: OrderType::Market,
            market: market.to_uppercase(),
            quantity,
            rate: None,
        }
    }

    /// Reject requests Bittrex could never accept.
    pub fn validate(&self) -> Result<(), BittrexError> {
        if self.market.is_empty() {
            return Err(BittrexError::Validation("market must not be empty".into()));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(BittrexError::Validation(format!(
                "quantity must be a positive number, got {}",
                self.quantity
            )));
        }
        match (self.order_type, self.rate) {
            (OrderType::Limit, Some(rate)) if rate.is_finite() && rate > 0.0 => Ok(()),
            (OrderType::Limit, rate) => Err(BittrexError::Validation(format!(
                "limit orders need a positive rate, got {rate:?}"
            ))),
            (OrderType::Market, _) => Ok(()),
        }
    }
}

/// Request parameters for endpoints addressing one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UuidRequest {
    /// Order or payment identifier.
    pub uuid: String,
}

impl UuidRequest {
    /// Create a request for `uuid`.
    pub fn new(uuid: impl Into<String>) -> Self {
        Self { uuid: uuid.into() }
    }
}

/// Request parameters for listings optionally filtered by market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionalMarketRequest {
    /// Market name, uppercase. `None` lists every market.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
}

impl OptionalMarketRequest {
    /// Create a request, uppercasing the market name.
    pub fn new(market: Option<&str>) -> Self {
        Self {
            market: market.map(str::to_uppercase),
        }
    }
}

/// Identifier returned when an order or withdrawal is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderId {
    /// The new order or payment uuid.
    pub uuid: String,
}

/// An open or historical order.
///
/// Order history names the creation time `TimeStamp` and the fee
/// `Commission`; open orders call them `Opened` and `CommissionPaid`.
/// Both shapes decode, and encoding uses the history names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    /// Order identifier.
    pub order_uuid: String,
    /// Market name.
    pub exchange: String,
    /// Creation time.
    #[serde(alias = "Opened", with = "wire_timestamp")]
    pub time_stamp: Option<PrimitiveDateTime>,
    /// e.g. `LIMIT_BUY`.
    pub order_type: String,
    /// Limit rate.
    pub limit: f64,
    /// Ordered quantity.
    pub quantity: f64,
    /// Quantity not yet filled.
    pub quantity_remaining: f64,
    /// Commission charged.
    #[serde(alias = "CommissionPaid")]
    pub commission: f64,
    /// Total price paid or received.
    pub price: f64,
    /// Average price per unit, if filled.
    pub price_per_unit: Option<f64>,
}

impl Order {
    /// Quantity filled so far.
    pub fn quantity_filled(&self) -> f64 {
        self.quantity - self.quantity_remaining
    }
}
