//! OAuth2 client-credentials token exchange against the RTE portal

use crate::config::ApiConfig;
use crate::error::{Result, TempoError};
use crate::logging::get_logger;

/// Client credentials issued by the RTE API portal
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token. The raw value stays inside the `rte` module; it is
/// only ever written into an Authorization header.
#[derive(Clone)]
pub struct AccessToken {
    secret: String,
}

impl AccessToken {
    pub(super) fn new(secret: String) -> Self {
        Self { secret }
    }

    pub(super) fn as_str(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Exchanges client credentials for bearer tokens. No local caching: every
/// poll cycle re-authenticates.
pub struct TokenProvider {
    credentials: Credentials,
    token_url: String,
    http: reqwest::Client,
    logger: crate::logging::StructuredLogger,
}

impl TokenProvider {
    /// Create a new token provider from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            credentials: Credentials {
                client_id: config.client_id.clone(),
                client_secret: config.client_secret.clone(),
            },
            token_url: config.token_url.clone(),
            http,
            logger: get_logger("auth"),
        })
    }

    /// Perform one client-credentials exchange and return the bearer token
    pub async fn fetch_token(&self) -> Result<AccessToken> {
        self.logger.debug("Requesting access token");

        let resp = self
            .http
            .post(&self.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TempoError::auth(format!(
                "Token endpoint rejected credentials: {}",
                status
            )));
        }

        let body: serde_json::Value = resp.json().await?;
        let token = body
            .get("access_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| TempoError::parse("Token response missing access_token"))?;

        Ok(AccessToken::new(token.to_string()))
    }
}
