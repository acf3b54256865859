//! Bittrex REST API client.
//!
//! Provides access to the public, market and account endpoints of the
//! v1.1 API, plus the two v2.0 endpoints (balance distribution and candles).
//!
//! # Trait-based API
//!
//! The [`BittrexClient`] trait abstracts every REST operation so callers
//! can swap in a mock or a decorator.
//!
//! ```rust,ignore
//! use bittrex_api_client::rest::{BittrexClient, BittrexRestClient};
//!
//! async fn spread<C: BittrexClient>(client: &C) -> Result<f64, bittrex_api_client::BittrexError> {
//!     let ticker = client.get_ticker("BTC-LTC").await?;
//!     Ok(ticker.spread())
//! }
//! ```

pub mod account;
mod client;
pub mod endpoints;
pub mod envelope;
pub mod market;
pub mod public;
mod traits;

pub use client::{BittrexRestClient, BittrexRestClientBuilder, SIGNATURE_HEADER};
pub use traits::BittrexClient;
