//! Credential handling for Watson service requests.
//!
//! IBM Cloud services accept either a bearer token managed by the caller or
//! an IAM API key. With an API key, the key is exchanged for a bearer token
//! at the IAM endpoint; the token is cached and refreshed shortly before it
//! expires. With a caller-managed token, the caller accepts responsibility
//! for replacing it before expiry.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::RwLock;
use tracing::debug;
use url::form_urlencoded;

use crate::error::{Error, Result};

/// IBM Cloud IAM authentication endpoint.
pub const IBM_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Cached IAM token.
#[derive(Debug, Clone)]
struct IamToken {
    access_token: String,
    expires_at: Instant,
}

impl IamToken {
    /// Check if the token is expired or about to expire (within 5 minutes).
    fn is_expired(&self) -> bool {
        self.expires_at <= Instant::now() + Duration::from_secs(300)
    }
}

/// IAM token response from IBM Cloud.
#[derive(Debug, serde::Deserialize)]
struct IamTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

/// Fetch a fresh IAM token for the given API key.
async fn fetch_iam_token(client: &Client, iam_url: &str, api_key: &str) -> Result<IamToken> {
    let encoded_api_key: String = form_urlencoded::byte_serialize(api_key.as_bytes()).collect();

    let response = client
        .post(iam_url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(format!(
            "grant_type=urn:ibm:params:oauth:grant-type:apikey&apikey={}",
            encoded_api_key
        ))
        .send()
        .await
        .map_err(|e| Error::Authentication(format!("failed to reach IAM endpoint: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Authentication(format!(
            "IAM token request failed with status {}: {}",
            status, body
        )));
    }

    let token_response: IamTokenResponse = response
        .json()
        .await
        .map_err(|e| Error::Authentication(format!("failed to parse IAM token: {}", e)))?;

    // Default to 1 hour if expires_in is not provided
    let expires_in = if token_response.expires_in > 0 {
        token_response.expires_in
    } else {
        3600
    };

    debug!(expires_in, "IAM token fetched");

    Ok(IamToken {
        access_token: token_response.access_token,
        expires_at: Instant::now() + Duration::from_secs(expires_in),
    })
}

/// Authentication strategy for outgoing requests.
#[derive(Clone)]
pub struct Authenticator {
    inner: AuthInner,
}

#[derive(Clone)]
enum AuthInner {
    /// IAM API key, exchanged for a cached bearer token as needed.
    Iam {
        api_key: String,
        iam_url: String,
        token: Arc<RwLock<Option<IamToken>>>,
    },
    /// A bearer token managed entirely by the caller.
    BearerToken(String),
}

impl Authenticator {
    /// Authenticate with an IAM API key.
    pub fn iam(api_key: impl Into<String>) -> Self {
        Self {
            inner: AuthInner::Iam {
                api_key: api_key.into(),
                iam_url: IBM_IAM_URL.to_string(),
                token: Arc::new(RwLock::new(None)),
            },
        }
    }

    /// Authenticate with an IAM API key against a non-default IAM endpoint.
    pub fn iam_with_url(api_key: impl Into<String>, iam_url: impl Into<String>) -> Self {
        Self {
            inner: AuthInner::Iam {
                api_key: api_key.into(),
                iam_url: iam_url.into(),
                token: Arc::new(RwLock::new(None)),
            },
        }
    }

    /// Authenticate with a caller-managed bearer token.
    pub fn bearer_token(token: impl Into<String>) -> Self {
        Self {
            inner: AuthInner::BearerToken(token.into()),
        }
    }

    /// Resolve the bearer token to attach to the next request.
    pub(crate) async fn access_token(&self, client: &Client) -> Result<String> {
        match &self.inner {
            AuthInner::BearerToken(token) => Ok(token.clone()),
            AuthInner::Iam {
                api_key,
                iam_url,
                token,
            } => {
                {
                    let token_guard = token.read().await;
                    if let Some(ref cached) = *token_guard
                        && !cached.is_expired()
                    {
                        return Ok(cached.access_token.clone());
                    }
                }

                debug!("fetching new IAM token");
                let new_token = fetch_iam_token(client, iam_url, api_key).await?;
                let access_token = new_token.access_token.clone();
                *token.write().await = Some(new_token);

                Ok(access_token)
            }
        }
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print credentials
        match self.inner {
            AuthInner::Iam { .. } => f.write_str("Authenticator::Iam"),
            AuthInner::BearerToken(_) => f.write_str("Authenticator::BearerToken"),
        }
    }
}
