//! # Bittrex Client
//!
//! An async Rust client library for the Bittrex exchange REST API.
//!
//! ## Features
//!
//! - Public market data: currencies, markets, tickers, summaries, order books,
//!   trade history, candles and balance distribution
//! - Authenticated trading and account endpoints with HMAC-SHA512 request signing
//! - Strong typing for every response entity, including the exchange timestamp format
//! - Parameter normalization before anything reaches the network
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bittrex_api_client::rest::BittrexRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BittrexRestClient::new();
//!     let ticker = client.get_ticker("btc-ltc").await?;
//!     println!("Last: {}", ticker.last);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, BittrexError};
pub use types::common::{CandleInterval, OrderBookType};

/// Result type alias using BittrexError
pub type Result<T> = std::result::Result<T, BittrexError>;
