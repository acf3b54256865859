//! Error types for the Bittrex client library.

use thiserror::Error;

/// The main error type for all Bittrex client operations.
#[derive(Error, Debug)]
pub enum BittrexError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The response body could not be read as a Bittrex envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Bittrex API returned `success: false`
    #[error("Bittrex API error: {0}")]
    Api(ApiError),

    /// The envelope payload did not match the expected entity shape
    #[error("Failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A timestamp did not match the exchange format
    #[error("Invalid timestamp: {value:?}")]
    Timestamp {
        /// The offending wire value
        value: String,
    },

    /// Invalid caller input, rejected before any request was made
    #[error("Invalid parameter: {0}")]
    Validation(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for private endpoints")]
    MissingCredentials,
}

impl BittrexError {
    /// True for connectivity, protocol and unreadable-body failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            BittrexError::Http(_)
                | BittrexError::HttpMiddleware(_)
                | BittrexError::Url(_)
                | BittrexError::InvalidResponse(_)
        )
    }

    /// True when a payload failed to map onto the expected entity.
    pub fn is_decode(&self) -> bool {
        matches!(self, BittrexError::Decode(_) | BittrexError::Timestamp { .. })
    }

    /// The exchange error, if the API reported one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            BittrexError::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::convert::Infallible> for BittrexError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// An error reported by Bittrex in the response envelope.
///
/// Bittrex answers application errors with HTTP 200 and
/// `{"success": false, "message": "INVALID_MARKET", "result": null}`.
/// The message is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The message from the envelope (e.g., "INVALID_MARKET")
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ApiError {
    /// Create a new API error from the envelope message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Check if the market does not exist.
    pub fn is_invalid_market(&self) -> bool {
        self.message == error_codes::INVALID_MARKET
    }

    /// Check if the account lacks funds for the request.
    pub fn is_insufficient_funds(&self) -> bool {
        self.message == error_codes::INSUFFICIENT_FUNDS
    }

    /// Check if the nonce was already used.
    pub fn is_nonce_used(&self) -> bool {
        self.message == error_codes::NONCE_USED
    }

    /// Check if the API key or signature was rejected.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self.message.as_str(),
            error_codes::APIKEY_INVALID
                | error_codes::INVALID_SIGNATURE
                | error_codes::APIKEY_NOT_PROVIDED
                | error_codes::APISIGN_NOT_PROVIDED
                | error_codes::INVALID_PERMISSION
        )
    }

    /// Check if the deposit address is still being generated.
    pub fn is_address_generating(&self) -> bool {
        self.message == error_codes::ADDRESS_GENERATING
    }
}

/// Known Bittrex envelope messages for pattern matching.
pub mod error_codes {
    /// Market errors
    pub const INVALID_MARKET: &str = "INVALID_MARKET";
    pub const MARKET_NOT_PROVIDED: &str = "MARKET_NOT_PROVIDED";
    pub const MIN_TRADE_REQUIREMENT_NOT_MET: &str = "MIN_TRADE_REQUIREMENT_NOT_MET";
    pub const DUST_TRADE_DISALLOWED: &str = "DUST_TRADE_DISALLOWED_MIN_VALUE_50K_SAT";

    /// Order errors
    pub const INSUFFICIENT_FUNDS: &str = "INSUFFICIENT_FUNDS";
    pub const ORDER_NOT_OPEN: &str = "ORDER_NOT_OPEN";
    pub const INVALID_ORDER: &str = "INVALID_ORDER";
    pub const UUID_INVALID: &str = "UUID_INVALID";
    pub const QUANTITY_NOT_PROVIDED: &str = "QUANTITY_NOT_PROVIDED";
    pub const RATE_NOT_PROVIDED: &str = "RATE_NOT_PROVIDED";

    /// Authentication errors
    pub const APIKEY_INVALID: &str = "APIKEY_INVALID";
    pub const APIKEY_NOT_PROVIDED: &str = "APIKEY_NOT_PROVIDED";
    pub const APISIGN_NOT_PROVIDED: &str = "APISIGN_NOT_PROVIDED";
    pub const INVALID_SIGNATURE: &str = "INVALID_SIGNATURE";
    pub const INVALID_PERMISSION: &str = "INVALID_PERMISSION";
    pub const NONCE_USED: &str = "NONCE_USED";

    /// Account errors
    pub const ADDRESS_GENERATING: &str = "ADDRESS_GENERATING";
    pub const CURRENCY_DOES_NOT_EXIST: &str = "CURRENCY_DOES_NOT_EXIST";
    pub const INVALID_CURRENCY: &str = "INVALID_CURRENCY";
    pub const WITHDRAWAL_TOO_SMALL: &str = "WITHDRAWAL_TOO_SMALL";
}
