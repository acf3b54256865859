//! The `{success, message, result}` wrapper common to every Bittrex response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ApiError, BittrexError};

/// A decoded response envelope.
///
/// `result` is kept opaque; the caller decides which entity it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Whether the request succeeded.
    pub success: bool,
    /// Error code on failure, usually empty on success.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    /// Endpoint-specific payload.
    #[serde(default)]
    pub result: Value,
}

impl Envelope {
    /// Parse a raw response body.
    pub fn from_body(body: &str) -> Result<Self, BittrexError> {
        serde_json::from_str(body).map_err(|e| {
            BittrexError::InvalidResponse(format!("Failed to parse response: {e}. Body: {body}"))
        })
    }

    /// Unwrap the payload, or surface `success: false` as [`BittrexError::Api`].
    pub fn into_result(self) -> Result<Value, BittrexError> {
        if self.success {
            Ok(self.result)
        } else {
            tracing::warn!(message = %self.message, "Bittrex reported failure");
            Err(BittrexError::Api(ApiError::new(self.message)))
        }
    }
}

/// Decode an unwrapped payload into a typed entity.
pub fn decode_result<T>(result: Value) -> Result<T, BittrexError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(result).map_err(BittrexError::Decode)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
