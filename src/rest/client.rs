//! Bittrex REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::auth::{CredentialsProvider, IncreasingNonce, NonceProvider, sign_url};
use crate::error::BittrexError;
use crate::rest::endpoints::{BITTREX_BASE_URL, BITTREX_V2_BASE_URL};
use crate::rest::envelope::{Envelope, decode_result};

/// Query for endpoints without parameters.
pub(crate) const NO_PARAMS: &[(&str, &str)] = &[];

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "apisign";

/// The Bittrex REST API client.
///
/// Handles URL construction, request signing for private endpoints and
/// envelope decoding. Every endpoint is a single, independent round trip;
/// the client holds no mutable state besides the nonce counter.
///
/// # Example
///
/// ```rust,no_run
/// use bittrex_api_client::rest::BittrexRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BittrexRestClient::new();
///
///     let markets = client.get_markets().await?;
///     println!("{} markets", markets.len());
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use bittrex_api_client::rest::BittrexRestClient;
/// use bittrex_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = BittrexRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balances = client.get_balances().await?;
///     println!("Balances: {:?}", balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BittrexRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    v2_base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl BittrexRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`BittrexRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> BittrexRestClientBuilder {
        BittrexRestClientBuilder::new()
    }

    /// Fully-qualified URL of a v2.0 endpoint.
    pub fn v2_url(&self, path: &str) -> String {
        format!("{}{}", self.v2_base_url.trim_end_matches('/'), path)
    }

    /// Next value from the configured nonce provider.
    pub(crate) fn next_nonce(&self) -> u64 {
        self.nonce_provider.next_nonce()
    }

    /// Issue one request and return the raw response body.
    ///
    /// `target` is either a path relative to the v1.1 base URL or a
    /// fully-qualified URL. When `auth` is set, `apikey` and `nonce` are
    /// appended to the query and the complete URL is signed into the
    /// `apisign` header.
    ///
    /// Non-2xx responses are returned as long as the body is still an
    /// envelope; anything else is [`BittrexError::InvalidResponse`].
    pub async fn send<Q>(
        &self,
        method: Method,
        target: &str,
        query: &Q,
        auth: bool,
    ) -> Result<String, BittrexError>
    where
        Q: Serialize + ?Sized,
    {
        let (status, body) = self.dispatch(method, target, query, auth).await?;
        if !status.is_success() {
            Envelope::from_body(&body).map_err(|_| http_failure(status, &body))?;
        }
        Ok(body)
    }

    /// Send a GET request and unwrap the envelope.
    pub(crate) async fn get_result<Q>(
        &self,
        target: &str,
        query: &Q,
        auth: bool,
    ) -> Result<Value, BittrexError>
    where
        Q: Serialize + ?Sized,
    {
        let (status, body) = self.dispatch(Method::GET, target, query, auth).await?;
        let envelope = match Envelope::from_body(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(http_failure(status, &body)),
            Err(err) => return Err(err),
        };
        envelope.into_result()
    }

    async fn dispatch<Q>(
        &self,
        method: Method,
        target: &str,
        query: &Q,
        auth: bool,
    ) -> Result<(StatusCode, String), BittrexError>
    where
        Q: Serialize + ?Sized,
    {
        let mut url = self.resolve(target)?;

        let query_string = serde_urlencoded::to_string(query)
            .map_err(|e| BittrexError::Validation(format!("Unencodable parameters: {e}")))?;
        if !query_string.is_empty() {
            url.set_query(Some(&query_string));
        }

        let request = if auth {
            let credentials = self
                .credentials
                .as_ref()
                .ok_or(BittrexError::MissingCredentials)?
                .get_credentials();
            credentials.check()?;
            let nonce = self.nonce_provider.next_nonce();

            url.query_pairs_mut()
                .append_pair("apikey", &credentials.api_key)
                .append_pair("nonce", &nonce.to_string());

            let signature = sign_url(credentials, url.as_str())?;
            tracing::debug!(method = %method, endpoint = url.path(), nonce, "sending signed request");
            self.http_client
                .request(method, url)
                .header(SIGNATURE_HEADER, signature)
        } else {
            tracing::debug!(method = %method, url = %url, "sending public request");
            self.http_client.request(method, url)
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// Make a public GET request and decode the result.
    pub(crate) async fn public_get<T, Q>(&self, target: &str, query: &Q) -> Result<T, BittrexError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        decode_result(self.get_result(target, query, false).await?)
    }

    /// Make a signed GET request and decode the result.
    pub(crate) async fn private_get<T, Q>(&self, target: &str, query: &Q) -> Result<T, BittrexError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        decode_result(self.get_result(target, query, true).await?)
    }

    fn resolve(&self, target: &str) -> Result<Url, BittrexError> {
        if target.starts_with("https://") || target.starts_with("http://") {
            Ok(Url::parse(target)?)
        } else {
            Ok(Url::parse(&format!(
                "{}{}",
                self.base_url.trim_end_matches('/'),
                target
            ))?)
        }
    }
}

fn http_failure(status: StatusCode, body: &str) -> BittrexError {
    BittrexError::InvalidResponse(format!("HTTP {status}: {body}"))
}

impl Default for BittrexRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BittrexRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BittrexRestClient")
            .field("base_url", &self.base_url)
            .field("v2_base_url", &self.v2_base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`BittrexRestClient`].
pub struct BittrexRestClientBuilder {
    base_url: String,
    v2_base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl BittrexRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BITTREX_BASE_URL.to_string(),
            v2_base_url: BITTREX_V2_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            timeout: None,
            http_client: None,
        }
    }

    /// Set the v1.1 base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the v2.0 base URL used by the distribution and candle endpoints.
    pub fn v2_base_url(mut self, url: impl Into<String>) -> Self {
        self.v2_base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent. Ignored when a custom HTTP client is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the per-request timeout. Ignored when a custom HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured reqwest client as transport.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> BittrexRestClient {
        let reqwest_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut headers = HeaderMap::new();
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("bittrex-api-client/{}", env!("CARGO_PKG_VERSION")));
                let header_value = HeaderValue::from_str(&user_agent)
                    .unwrap_or_else(|_| HeaderValue::from_static("bittrex-api-client"));
                headers.insert(USER_AGENT, header_value);

                let mut builder = reqwest::Client::builder().default_headers(headers);
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().unwrap_or_else(|_| reqwest::Client::new())
            }
        };

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(IncreasingNonce::new()));

        BittrexRestClient {
            http_client: client,
            base_url: self.base_url,
            v2_base_url: self.v2_base_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for BittrexRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
