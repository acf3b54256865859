//! Bittrex API keys.
//!
//! A key pair is created on the Bittrex settings page. The key goes out in
//! the `apikey` query parameter of every signed request; the secret only
//! ever keys the HMAC and is kept in a [`SecretString`].

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::error::BittrexError;

/// Environment variable read by [`EnvCredentials::from_env`] for the key.
pub const API_KEY_VAR: &str = "BITTREX_API_KEY";
/// Environment variable read by [`EnvCredentials::from_env`] for the secret.
pub const API_SECRET_VAR: &str = "BITTREX_API_SECRET";

/// An API key and its secret.
#[derive(Clone)]
pub struct Credentials {
    /// Public half, sent as `apikey`.
    pub api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Pair a key with its secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// The raw secret, for signing.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Reject blank halves locally.
    ///
    /// Bittrex would answer them with `APIKEY_NOT_PROVIDED` or
    /// `APIKEY_INVALID` after a round trip.
    pub fn check(&self) -> Result<(), BittrexError> {
        if self.api_key.trim().is_empty() {
            return Err(BittrexError::Auth("API key is empty".into()));
        }
        if self.expose_secret().trim().is_empty() {
            return Err(BittrexError::Auth("API secret is empty".into()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Where the client gets its key pair from.
///
/// Implement this to pull keys from a vault or to rotate them.
pub trait CredentialsProvider: Send + Sync {
    /// The key pair to sign the next request with.
    fn get_credentials(&self) -> &Credentials;
}

impl<P: CredentialsProvider + ?Sized> CredentialsProvider for Arc<P> {
    fn get_credentials(&self) -> &Credentials {
        (**self).get_credentials()
    }
}

/// A fixed key pair.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Hold `api_key` / `api_secret` for the lifetime of the client.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Credentials::new(api_key, api_secret).into()
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// A key pair read once from the environment.
///
/// Unset and blank variables both count as missing.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Read `BITTREX_API_KEY` and `BITTREX_API_SECRET`.
    pub fn from_env() -> Result<Self, BittrexError> {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Read the key pair from custom variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, BittrexError> {
        Self::try_from_env_vars(key_var, secret_var).ok_or(BittrexError::MissingCredentials)
    }

    /// Like [`EnvCredentials::from_env`], `None` when either variable is missing.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Like [`EnvCredentials::from_env_vars`], `None` when either variable is missing.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        let read = |name: &str| {
            std::env::var(name)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let credentials = Credentials::new(read(key_var)?, read(secret_var)?);
        Some(Self { credentials })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
