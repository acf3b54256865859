//! HMAC-SHA512 signature generation for Bittrex API authentication.
//!
//! Private endpoints are signed over the complete request URL, including the
//! `apikey` and `nonce` query parameters:
//! ```text
//! hex(HMAC-SHA512(full_url, api_secret))
//! ```
//!
//! The digest is sent in the `apisign` header.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::auth::Credentials;
use crate::error::BittrexError;

type HmacSha512 = Hmac<Sha512>;

/// Sign a fully-qualified request URL.
///
/// # Example
///
/// ```rust
/// use bittrex_api_client::auth::{Credentials, sign_url};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_url(
///     &credentials,
///     "https://bittrex.com/api/v1.1/account/getbalances?apikey=api_key&nonce=1",
/// )?;
/// assert_eq!(signature.len(), 128);
/// # Ok(())
/// # }
/// ```
pub fn sign_url(credentials: &Credentials, url: &str) -> Result<String, BittrexError> {
    let mut hmac = HmacSha512::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BittrexError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(url.as_bytes());
    Ok(hex::encode(hmac.finalize().into_bytes()))
}
