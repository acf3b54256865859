//! Serde helpers for Bittrex request parameters.

use serde::Serializer;

/// Serialize an `f64` with exactly eight decimal digits.
///
/// Bittrex expects quantities and rates with satoshi precision.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use bittrex_api_client::types::serde_helpers::fixed8;
///
/// #[derive(Serialize)]
/// struct Params {
///     #[serde(serialize_with = "fixed8::serialize")]
///     quantity: f64,
/// }
///
/// let query = serde_urlencoded::to_string(Params { quantity: 1.5 }).unwrap();
/// assert_eq!(query, "quantity=1.50000000");
/// ```
pub mod fixed8 {
    use super::*;

    /// Format the value as `{:.8}`.
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{value:.8}"))
    }

    /// Format `Some` as `{:.8}`; pair with `skip_serializing_if = "Option::is_none"`.
    pub fn serialize_option<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }
}
