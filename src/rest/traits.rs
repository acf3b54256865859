//! Trait definition for the Bittrex REST API client.
//!
//! [`BittrexClient`] abstracts every REST operation so strategies and tools
//! can be tested against a mock or wrapped in a decorator.
//!
//! # Example
//!
//! ```rust,ignore
//! use bittrex_api_client::rest::{BittrexClient, BittrexRestClient};
//!
//! async fn open_order_count<C: BittrexClient>(client: &C) -> Result<usize, bittrex_api_client::BittrexError> {
//!     Ok(client.get_open_orders(None).await?.len())
//! }
//! ```

use std::future::Future;

use crate::error::BittrexError;
use crate::rest::BittrexRestClient;
use crate::rest::account::{Address, Balance, Deposit, OrderDetail, Withdrawal};
use crate::rest::market::Order;
use crate::rest::public::{
    Candle, Currency, Distribution, Market, MarketSummary, OrderBook, OrderBookEntry, Ticker,
    Trade,
};
use crate::types::CandleInterval;

/// Trait defining all Bittrex REST API operations.
///
/// All methods are async and return `Result<T, BittrexError>`.
pub trait BittrexClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get all supported currencies.
    fn get_currencies(&self) -> impl Future<Output = Result<Vec<Currency>, BittrexError>> + Send;

    /// Get all markets.
    fn get_markets(&self) -> impl Future<Output = Result<Vec<Market>, BittrexError>> + Send;

    /// Get the ticker of a market.
    fn get_ticker(&self, market: &str)
    -> impl Future<Output = Result<Ticker, BittrexError>> + Send;

    /// Get the 24h summaries of all markets.
    fn get_market_summaries(
        &self,
    ) -> impl Future<Output = Result<Vec<MarketSummary>, BittrexError>> + Send;

    /// Get the 24h summary of one market.
    fn get_market_summary(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Vec<MarketSummary>, BittrexError>> + Send;

    /// Get the order book of a market.
    fn get_order_book(
        &self,
        market: &str,
        category: &str,
        depth: i64,
    ) -> impl Future<Output = Result<OrderBook, BittrexError>> + Send;

    /// Get one side of the order book of a market.
    fn get_order_book_side(
        &self,
        market: &str,
        category: &str,
        depth: i64,
    ) -> impl Future<Output = Result<Vec<OrderBookEntry>, BittrexError>> + Send;

    /// Get the latest trades of a market.
    fn get_market_history(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Vec<Trade>, BittrexError>> + Send;

    /// Get the balance distribution of a currency.
    fn get_distribution(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Distribution, BittrexError>> + Send;

    /// Get candles of a market.
    fn get_ticks(
        &self,
        market: &str,
        interval: CandleInterval,
    ) -> impl Future<Output = Result<Vec<Candle>, BittrexError>> + Send;

    // ========== Market Endpoints ==========

    /// Place a limit buy order.
    fn buy_limit(
        &self,
        market: &str,
        quantity: f64,
        rate: f64,
    ) -> impl Future<Output = Result<String, BittrexError>> + Send;

    /// Place a market buy order.
    fn buy_market(
        &self,
        market: &str,
        quantity: f64,
    ) -> impl Future<Output = Result<String, BittrexError>> + Send;

    /// Place a limit sell order.
    fn sell_limit(
        &self,
        market: &str,
        quantity: f64,
        rate: f64,
    ) -> impl Future<Output = Result<String, BittrexError>> + Send;

    /// Place a market sell order.
    fn sell_market(
        &self,
        market: &str,
        quantity: f64,
    ) -> impl Future<Output = Result<String, BittrexError>> + Send;

    /// Cancel an open order.
    fn cancel_order(&self, order_uuid: &str)
    -> impl Future<Output = Result<(), BittrexError>> + Send;

    /// List open orders.
    fn get_open_orders(
        &self,
        market: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Order>, BittrexError>> + Send;

    // ========== Account Endpoints ==========

    /// Get all balances.
    fn get_balances(&self) -> impl Future<Output = Result<Vec<Balance>, BittrexError>> + Send;

    /// Get the balance of one currency.
    fn get_balance(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Balance, BittrexError>> + Send;

    /// Get the deposit address of a currency.
    fn get_deposit_address(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Address, BittrexError>> + Send;

    /// Withdraw funds.
    fn withdraw(
        &self,
        address: &str,
        currency: &str,
        quantity: f64,
    ) -> impl Future<Output = Result<String, BittrexError>> + Send;

    /// Get the order history.
    fn get_order_history(
        &self,
        market: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Order>, BittrexError>> + Send;

    /// Get the withdrawal history.
    fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Withdrawal>, BittrexError>> + Send;

    /// Get the deposit history.
    fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Deposit>, BittrexError>> + Send;

    /// Get the details of a single order.
    fn get_order(
        &self,
        order_uuid: &str,
    ) -> impl Future<Output = Result<OrderDetail, BittrexError>> + Send;
}

// BittrexClient trait implementation.

impl BittrexClient for BittrexRestClient {
    // ========== Public Endpoints ==========

    async fn get_currencies(&self) -> Result<Vec<Currency>, BittrexError> {
        BittrexRestClient::get_currencies(self).await
    }

    async fn get_markets(&self) -> Result<Vec<Market>, BittrexError> {
        BittrexRestClient::get_markets(self).await
    }

    async fn get_ticker(&self, market: &str) -> Result<Ticker, BittrexError> {
        BittrexRestClient::get_ticker(self, market).await
    }

    async fn get_market_summaries(&self) -> Result<Vec<MarketSummary>, BittrexError> {
        BittrexRestClient::get_market_summaries(self).await
    }

    async fn get_market_summary(&self, market: &str) -> Result<Vec<MarketSummary>, BittrexError> {
        BittrexRestClient::get_market_summary(self, market).await
    }

    async fn get_order_book(
        &self,
        market: &str,
        category: &str,
        depth: i64,
    ) -> Result<OrderBook, BittrexError> {
        BittrexRestClient::get_order_book(self, market, category, depth).await
    }

    async fn get_order_book_side(
        &self,
        market: &str,
        category: &str,
        depth: i64,
    ) -> Result<Vec<OrderBookEntry>, BittrexError> {
        BittrexRestClient::get_order_book_side(self, market, category, depth).await
    }

    async fn get_market_history(&self, market: &str) -> Result<Vec<Trade>, BittrexError> {
        BittrexRestClient::get_market_history(self, market).await
    }

    async fn get_distribution(&self, currency: &str) -> Result<Distribution, BittrexError> {
        BittrexRestClient::get_distribution(self, currency).await
    }

    async fn get_ticks(
        &self,
        market: &str,
        interval: CandleInterval,
    ) -> Result<Vec<Candle>, BittrexError> {
        BittrexRestClient::get_ticks(self, market, interval).await
    }

    // ========== Market Endpoints ==========

    async fn buy_limit(&self, market: &str, quantity: f64, rate: f64) -> Result<String, BittrexError> {
        BittrexRestClient::buy_limit(self, market, quantity, rate).await
    }

    async fn buy_market(&self, market: &str, quantity: f64) -> Result<String, BittrexError> {
        BittrexRestClient::buy_market(self, market, quantity).await
    }

    async fn sell_limit(
        &self,
        market: &str,
        quantity: f64,
        rate: f64,
    ) -> Result<String, BittrexError> {
        BittrexRestClient::sell_limit(self, market, quantity, rate).await
    }

    async fn sell_market(&self, market: &str, quantity: f64) -> Result<String, BittrexError> {
        BittrexRestClient::sell_market(self, market, quantity).await
    }

    async fn cancel_order(&self, order_uuid: &str) -> Result<(), BittrexError> {
        BittrexRestClient::cancel_order(self, order_uuid).await
    }

    async fn get_open_orders(&self, market: Option<&str>) -> Result<Vec<Order>, BittrexError> {
        BittrexRestClient::get_open_orders(self, market).await
    }

    // ========== Account Endpoints ==========

    async fn get_balances(&self) -> Result<Vec<Balance>, BittrexError> {
        BittrexRestClient::get_balances(self).await
    }

    async fn get_balance(&self, currency: &str) -> Result<Balance, BittrexError> {
        BittrexRestClient::get_balance(self, currency).await
    }

    async fn get_deposit_address(&self, currency: &str) -> Result<Address, BittrexError> {
        BittrexRestClient::get_deposit_address(self, currency).await
    }

    async fn withdraw(
        &self,
        address: &str,
        currency: &str,
        quantity: f64,
    ) -> Result<String, BittrexError> {
        BittrexRestClient::withdraw(self, address, currency, quantity).await
    }

    async fn get_order_history(&self, market: Option<&str>) -> Result<Vec<Order>, BittrexError> {
        BittrexRestClient::get_order_history(self, market).await
    }

    async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<Withdrawal>, BittrexError> {
        BittrexRestClient::get_withdrawal_history(self, currency).await
    }

    async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<Deposit>, BittrexError> {
        BittrexRestClient::get_deposit_history(self, currency).await
    }

    async fn get_order(&self, order_uuid: &str) -> Result<OrderDetail, BittrexError> {
        BittrexRestClient::get_order(self, order_uuid).await
    }
}
