//! Provides a client for the Twitter v1.1 `trends/place` endpoint.
//!
//! This module defines the `TwitterClient` struct, which signs each request with
//! OAuth 1.0a (HMAC-SHA1) user credentials, and `ProviderError`, the taxonomy of
//! everything that can go wrong while talking to the provider.

use super::TrendProvider;
use crate::models::{PlaceTrends, ProviderTrend};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use sha1::Sha1;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

type HmacSha1 = Hmac<Sha1>;

pub const BASE_URL: &str = "https://api.twitter.com";
const PLACE_TRENDS_PATH: &str = "/1.1/trends/place.json";

/// Failures reported by the live trend provider.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// Transport-level failure (connection, TLS, body read).
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// The provider rejected the credentials (401/403).
    #[error("authentication rejected with status {0}")]
    Unauthorized(u16),

    /// The provider's rate limit or quota was exceeded (429).
    #[error("rate limit exceeded")]
    RateLimited,

    /// Any other non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body could not be decoded as a trends payload.
    #[error("malformed trends payload: {0}")]
    Decode(Arc<reqwest::Error>),

    /// The payload held no trend block for the requested location.
    #[error("no trends returned for location {0}")]
    EmptyResponse(String),

    /// The request signature could not be computed.
    #[error("failed to sign request: {0}")]
    Signing(String),
}

/// The four OAuth 1.0a values needed to sign a user-context request.
#[derive(Clone)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl std::fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCredentials").finish_non_exhaustive()
    }
}

/// An asynchronous, OAuth-signed session against the trend provider.
pub struct TwitterClient {
    client: Client,
    credentials: OAuthCredentials,
    base_url: String,
}

impl TwitterClient {
    /// Creates a new session from complete credentials against `base_url`.
    pub fn new(credentials: OAuthCredentials, base_url: &str) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!("trends-service/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::Network(Arc::new(e)))?;

        Ok(Self {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the provider's ranked trend list for a location (a WOEID).
    pub async fn get_place_trends(
        &self,
        location_id: &str,
    ) -> Result<Vec<ProviderTrend>, ProviderError> {
        info!("Fetching trends for location: {}", location_id);

        let url = format!("{}{}", self.base_url, PLACE_TRENDS_PATH);
        let query = [("id".to_string(), location_id.to_string())];
        let authorization = self.authorization_header("GET", &url, &query)?;

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, authorization)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                error!("Error fetching trends for {}: {}", location_id, e);
                ProviderError::Network(Arc::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "Trends request for {} failed with status {}",
                location_id, status
            );
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ProviderError::Unauthorized(status.as_u16())
                },
                StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
                other => ProviderError::Status(other.as_u16()),
            });
        }

        let blocks: Vec<PlaceTrends> = response.json().await.map_err(|e| {
            error!("Error parsing trends response JSON: {}", e);
            ProviderError::Decode(Arc::new(e))
        })?;

        let trends = blocks
            .into_iter()
            .next()
            .map(|block| block.trends)
            .ok_or_else(|| ProviderError::EmptyResponse(location_id.to_string()))?;

        debug!("Received {} trends for {}", trends.len(), location_id);
        Ok(trends)
    }

    /// Builds the `Authorization: OAuth ...` header value for one request.
    fn authorization_header(
        &self,
        method: &str,
        url: &str,
        query: &[(String, String)],
    ) -> Result<String, ProviderError> {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let timestamp = chrono::Utc::now().timestamp().to_string();

        let mut oauth_params = vec![
            ("oauth_consumer_key".to_string(), self.credentials.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), timestamp),
            ("oauth_token".to_string(), self.credentials.access_token.clone()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ];

        let mut signed_params = oauth_params.clone();
        signed_params.extend_from_slice(query);
        let signature = sign(
            method,
            url,
            &signed_params,
            &self.credentials.consumer_secret,
            &self.credentials.access_token_secret,
        )?;
        oauth_params.push(("oauth_signature".to_string(), signature));

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("OAuth {}", header))
    }
}

#[async_trait]
impl TrendProvider for TwitterClient {
    async fn place_trends(&self, location_id: &str) -> Result<Vec<ProviderTrend>, ProviderError> {
        self.get_place_trends(location_id).await
    }
}

/// RFC 3986 percent-encoding (everything but `A-Z a-z 0-9 - . _ ~`).
fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Computes the OAuth 1.0a HMAC-SHA1 signature over a request.
pub(crate) fn sign(
    method: &str,
    url: &str,
    params: &[(String, String)],
    consumer_secret: &str,
    token_secret: &str,
) -> Result<String, ProviderError> {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();

    let parameter_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let base_string = format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(url),
        encode(&parameter_string)
    );
    let signing_key = format!("{}&{}", encode(consumer_secret), encode(token_secret));

    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
        .map_err(|e| ProviderError::Signing(e.to_string()))?;
    mac.update(base_string.as_bytes());

    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
