//! Trading endpoints (authentication required).

mod types;

pub use types::*;

use crate::error::BittrexError;
use crate::rest::BittrexRestClient;
use crate::rest::endpoints::{self, order_endpoint};
use crate::types::BuySell;

impl BittrexRestClient {
    /// Place a limit buy order. Returns the order uuid.
    pub async fn buy_limit(
        &self,
        market: &str,
        quantity: f64,
        rate: f64,
    ) -> Result<String, BittrexError> {
        self.place_order(&PlaceOrderRequest::limit(BuySell::Buy, market, quantity, rate))
            .await
    }

    /// Place a market buy order. Returns the order uuid.
    pub async fn buy_market(&self, market: &str, quantity: f64) -> Result<String, BittrexError> {
        self.place_order(&PlaceOrderRequest::market(BuySell::Buy, market, quantity))
            .await
    }

    /// Place a limit sell order. Returns the order uuid.
    pub async fn sell_limit(
        &self,
        market: &str,
        quantity: f64,
        rate: f64,
    ) -> Result<String, BittrexError> {
        self.place_order(&PlaceOrderRequest::limit(BuySell::Sell, market, quantity, rate))
            .await
    }

    /// Place a market sell order. Returns the order uuid.
    pub async fn sell_market(&self, market: &str, quantity: f64) -> Result<String, BittrexError> {
        self.place_order(&PlaceOrderRequest::market(BuySell::Sell, market, quantity))
            .await
    }

    /// Place an order described by `request`. Returns the order uuid.
    ///
    /// The request is validated before anything is sent.
    pub async fn place_order(&self, request: &PlaceOrderRequest) -> Result<String, BittrexError> {
        request.validate()?;
        let endpoint = order_endpoint(request.side, request.order_type);
        let id: OrderId = self.private_get(endpoint, request).await?;
        Ok(id.uuid)
    }

    /// Cancel an open order.
    pub async fn cancel_order(&self, order_uuid: &str) -> Result<(), BittrexError> {
        self.get_result(endpoints::market::CANCEL, &UuidRequest::new(order_uuid), true)
            .await?;
        Ok(())
    }

    /// List open orders, for one market or for all of them when `market` is `None`.
    pub async fn get_open_orders(&self, market: Option<&str>) -> Result<Vec<Order>, BittrexError> {
        self.private_get(
            endpoints::market::GET_OPEN_ORDERS,
            &OptionalMarketRequest::new(market),
        )
        .await
    }
}
