//! Common types used across the Bittrex client library.

pub mod common;
pub mod serde_helpers;
pub mod timestamp;

pub use common::*;
pub use timestamp::{format_timestamp, parse_timestamp};
