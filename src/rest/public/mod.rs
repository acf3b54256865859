//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::BittrexError;
use crate::rest::BittrexRestClient;
use crate::rest::client::NO_PARAMS;
use crate::rest::endpoints::{public, v2};
use crate::rest::envelope::decode_result;
use crate::types::{CandleInterval, OrderBookType};

impl BittrexRestClient {
    /// Get all supported currencies along with their metadata.
    pub async fn get_currencies(&self) -> Result<Vec<Currency>, BittrexError> {
        self.public_get(public::GET_CURRENCIES, NO_PARAMS).await
    }

    /// Get the open and available trading markets.
    pub async fn get_markets(&self) -> Result<Vec<Market>, BittrexError> {
        self.public_get(public::GET_MARKETS, NO_PARAMS).await
    }

    /// Get the current ticker values for a market.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bittrex_api_client::rest::BittrexRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BittrexRestClient::new();
    ///     let ticker = client.get_ticker("BTC-LTC").await?;
    ///     println!("bid {} ask {} last {}", ticker.bid, ticker.ask, ticker.last);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_ticker(&self, market: &str) -> Result<Ticker, BittrexError> {
        self.public_get(public::GET_TICKER, &MarketRequest::new(market))
            .await
    }

    /// Get the last 24 hour summary of all active markets.
    pub async fn get_market_summaries(&self) -> Result<Vec<MarketSummary>, BittrexError> {
        self.public_get(public::GET_MARKET_SUMMARIES, NO_PARAMS).await
    }

    /// Get the last 24 hour summary of one market.
    ///
    /// Bittrex answers with a one-element list.
    pub async fn get_market_summary(&self, market: &str) -> Result<Vec<MarketSummary>, BittrexError> {
        self.public_get(public::GET_MARKET_SUMMARY, &MarketRequest::new(market))
            .await
    }

    /// Get the order book of a market.
    ///
    /// # Arguments
    ///
    /// * `market` - Market name, e.g. "BTC-LTC" (case-insensitive).
    /// * `category` - "buy", "sell" or "both"; anything else means "both".
    /// * `depth` - Levels per side, clamped to `1..=100`.
    pub async fn get_order_book(
        &self,
        market: &str,
        category: &str,
        depth: i64,
    ) -> Result<OrderBook, BittrexError> {
        let book_type = OrderBookType::parse_or(category, OrderBookType::Both);
        self.fetch_order_book(&OrderBookRequest::new(market, book_type, depth))
            .await
    }

    /// Get one side of the order book of a market.
    ///
    /// `category` is "buy" or "sell"; anything else (including "both") means "buy".
    pub async fn get_order_book_side(
        &self,
        market: &str,
        category: &str,
        depth: i64,
    ) -> Result<Vec<OrderBookEntry>, BittrexError> {
        let book_type = match OrderBookType::parse_or(category, OrderBookType::Buy) {
            OrderBookType::Sell => OrderBookType::Sell,
            _ => OrderBookType::Buy,
        };
        self.public_get(
            public::GET_ORDER_BOOK,
            &OrderBookRequest::new(market, book_type, depth),
        )
        .await
    }

    /// Fetch an order book for an already normalized request.
    ///
    /// A single-side request fills only that side of the returned book.
    pub async fn fetch_order_book(
        &self,
        request: &OrderBookRequest,
    ) -> Result<OrderBook, BittrexError> {
        let result = self.get_result(public::GET_ORDER_BOOK, request, false).await?;
        match request.book_type {
            OrderBookType::Both => decode_result(result),
            OrderBookType::Buy => Ok(OrderBook {
                buy: decode_result(result)?,
                sell: Vec::new(),
            }),
            OrderBookType::Sell => Ok(OrderBook {
                buy: Vec::new(),
                sell: decode_result(result)?,
            }),
        }
    }

    /// Get the latest trades of a market.
    pub async fn get_market_history(&self, market: &str) -> Result<Vec<Trade>, BittrexError> {
        self.public_get(public::GET_MARKET_HISTORY, &MarketRequest::new(market))
            .await
    }

    /// Get the balance distribution of a currency (v2.0 API).
    pub async fn get_distribution(&self, currency: &str) -> Result<Distribution, BittrexError> {
        let url = self.v2_url(v2::GET_BALANCE_DISTRIBUTION);
        self.public_get(&url, &DistributionRequest::new(currency))
            .await
    }

    /// Get candles of a market (v2.0 API).
    ///
    /// Accepts a [`CandleInterval`] or its wire name; an unknown name fails
    /// with [`BittrexError::Validation`] before any request is made.
    ///
    /// ```rust,no_run
    /// use bittrex_api_client::CandleInterval;
    /// use bittrex_api_client::rest::BittrexRestClient;
    ///
    /// # async fn run() -> Result<(), bittrex_api_client::BittrexError> {
    /// let client = BittrexRestClient::new();
    /// let hourly = client.get_ticks("BTC-ETH", CandleInterval::Hour).await?;
    /// let daily = client.get_ticks("BTC-ETH", "day").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_ticks<I>(&self, market: &str, interval: I) -> Result<Vec<Candle>, BittrexError>
    where
        I: TryInto<CandleInterval>,
        I::Error: Into<BittrexError>,
    {
        let interval = interval.try_into().map_err(Into::into)?;
        let request = TicksRequest::new(market, interval, self.next_nonce());
        let url = self.v2_url(v2::GET_TICKS);
        self.public_get(&url, &request).await
    }
}
