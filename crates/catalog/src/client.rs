//! HTTP client for the catalog's character listing.
//!
//! Wraps `GET /v1/public/characters` using [`reqwest`], signing every
//! request with the configured key pair.

use async_trait::async_trait;

use crate::models::{CatalogEnvelope, CatalogPage};
use crate::{signing, PAGE_SIZE};

/// API key pair issued by the catalog.
#[derive(Clone)]
pub struct CatalogCredentials {
    pub public_key: String,
    pub private_key: String,
}

impl std::fmt::Debug for CatalogCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogCredentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Errors from the catalog REST layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Anything that can produce one page of catalog characters.
///
/// Implemented by [`CatalogClient`]; the sync pipeline depends only on this
/// trait so it can be driven without network access.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch up to [`PAGE_SIZE`] characters starting at `offset`.
    async fn fetch_page(&self, offset: i64) -> Result<CatalogPage, CatalogError>;
}

/// HTTP client for the catalog.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    credentials: CatalogCredentials,
}

impl CatalogClient {
    /// Create a client for the catalog at `base_url`, e.g.
    /// `https://gateway.marvel.com`.
    pub fn new(base_url: String, credentials: CatalogCredentials) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, credentials)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        credentials: CatalogCredentials,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, otherwise turn it
    /// into [`CatalogError::Api`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_page(&self, offset: i64) -> Result<CatalogPage, CatalogError> {
        let ts = signing::timestamp();
        let hash = signing::request_hash(
            &ts,
            &self.credentials.private_key,
            &self.credentials.public_key,
        );
        let limit = PAGE_SIZE.to_string();
        let offset_param = offset.to_string();

        tracing::debug!(offset, "Fetching catalog page");

        let response = self
            .client
            .get(format!("{}/v1/public/characters", self.base_url))
            .query(&[
                ("ts", ts.as_str()),
                ("hash", hash.as_str()),
                ("apikey", self.credentials.public_key.as_str()),
                ("limit", limit.as_str()),
                ("offset", offset_param.as_str()),
            ])
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let envelope = response.json::<CatalogEnvelope>().await?;
        Ok(envelope.data)
    }
}
