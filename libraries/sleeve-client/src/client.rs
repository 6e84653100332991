//! Main client for the hosted service.

use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::query::Query;
use crate::types::{AuthState, ServiceConfig, Session};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info, warn};

/// Accept header for writes that must return exactly one row.
const OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";

/// Client for the hosted data and identity APIs.
///
/// Every data request carries the public anon key as `apikey`; the bearer
/// credential is the signed-in user's access token when a session is held
/// and the anon key otherwise, so anonymous traffic sends the same value
/// in both headers. The service's row-level rules do the rest.
///
/// # Example
///
/// ```ignore
/// use sleeve_client::{Query, ServiceConfig, SleeveClient};
/// use sleeve_core::{Album, types::ALBUMS_TABLE};
///
/// let config = ServiceConfig::new("https://project.example.co", anon_key);
/// let client = SleeveClient::new(config)?;
///
/// // Public read
/// let query = Query::new().eq("visibility", "PUBLIC");
/// let albums: Vec<Album> = client.rows(ALBUMS_TABLE, &query).await?;
///
/// // Admin session
/// client.sign_in("admin@example.com", "password").await?;
/// ```
#[derive(Debug)]
pub struct SleeveClient {
    http: Client,
    config: Arc<RwLock<ServiceConfig>>,
    auth_events: watch::Sender<AuthState>,
}

impl SleeveClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let normalized_config = ServiceConfig {
            url,
            anon_key: config.anon_key,
            session: config.session,
        };

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Sleeve/{} (Site)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        let initial = match &normalized_config.session {
            Some(session) if !session.is_expired() => AuthState::SignedIn {
                user: session.user.clone(),
            },
            _ => AuthState::SignedOut,
        };
        let (auth_events, _) = watch::channel(initial);

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
            auth_events,
        })
    }

    /// Get the service URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Whether an unexpired session is held.
    pub async fn is_authenticated(&self) -> bool {
        self.config
            .read()
            .await
            .session
            .as_ref()
            .is_some_and(|session| !session.is_expired())
    }

    // ===== Identity =====

    /// The held session, if present and not expired.
    pub async fn session(&self) -> Option<Session> {
        self.config
            .read()
            .await
            .session
            .clone()
            .filter(|session| !session.is_expired())
    }

    /// Sign in with email and password.
    ///
    /// On success the session is stored for subsequent requests and
    /// auth-state subscribers are notified.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let config = self.config.read().await;
        let base_url = config.url.clone();
        let anon_key = config.anon_key.clone();
        drop(config);

        let auth_client = AuthClient::new(&self.http, &base_url, &anon_key);
        let session = auth_client.sign_in_with_password(email, password).await?;

        // Store the session
        let mut config = self.config.write().await;
        config.session = Some(session.clone());
        drop(config);

        self.auth_events.send_replace(AuthState::SignedIn {
            user: session.user.clone(),
        });

        Ok(session)
    }

    /// Sign out.
    ///
    /// The remote revoke is best-effort; the local session is cleared and
    /// subscribers are notified regardless.
    pub async fn sign_out(&self) {
        let config = self.config.read().await;
        let base_url = config.url.clone();
        let anon_key = config.anon_key.clone();
        let token = config
            .session
            .as_ref()
            .map(|session| session.access_token.clone());
        drop(config);

        if let Some(token) = token {
            let auth_client = AuthClient::new(&self.http, &base_url, &anon_key);
            if let Err(error) = auth_client.sign_out(&token).await {
                warn!(error = %error, "Remote sign-out failed, clearing session anyway");
            }
        }

        let mut config = self.config.write().await;
        config.session = None;
        drop(config);

        info!("Signed out");
        self.auth_events.send_replace(AuthState::SignedOut);
    }

    /// Seed a session restored from persistent storage.
    pub async fn restore_session(&self, session: Session) {
        let state = if session.is_expired() {
            AuthState::SignedOut
        } else {
            AuthState::SignedIn {
                user: session.user.clone(),
            }
        };

        let mut config = self.config.write().await;
        config.session = Some(session);
        drop(config);

        self.auth_events.send_replace(state);
    }

    /// Check the held session against the identity API.
    pub async fn validate_session(&self) -> Result<bool> {
        let config = self.config.read().await;
        let token = match &config.session {
            Some(session) if !session.is_expired() => session.access_token.clone(),
            _ => return Ok(false),
        };
        let base_url = config.url.clone();
        let anon_key = config.anon_key.clone();
        drop(config);

        let auth_client = AuthClient::new(&self.http, &base_url, &anon_key);
        auth_client.validate_token(&token).await
    }

    /// Subscribe to auth-state changes (sign-in, sign-out, restore).
    pub fn subscribe_auth(&self) -> watch::Receiver<AuthState> {
        self.auth_events.subscribe()
    }

    // ===== Data =====

    /// Fetch all rows matching `query`.
    pub async fn rows<T: DeserializeOwned>(&self, table: &str, query: &Query) -> Result<Vec<T>> {
        let response = self.send(Method::GET, table, query, None, None, false).await?;
        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse rows from {}: {}", table, e))
        })
    }

    /// Fetch the first row matching `query`, if any.
    pub async fn row<T: DeserializeOwned>(&self, table: &str, query: &Query) -> Result<Option<T>> {
        let limited = query.clone().limit(1);
        let rows: Vec<T> = self.rows(table, &limited).await?;
        Ok(rows.into_iter().next())
    }

    /// Insert one row and return the created row.
    pub async fn insert_one<T, B>(&self, table: &str, draft: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(draft).map_err(|e| {
            ClientError::ParseError(format!("Failed to serialize payload: {}", e))
        })?;
        let response = self
            .send(
                Method::POST,
                table,
                &Query::new(),
                Some(&body),
                Some("return=representation"),
                true,
            )
            .await?;
        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse created row from {}: {}", table, e))
        })
    }

    /// Update the rows matching `query` and return the updated row.
    pub async fn update_one<T, B>(&self, table: &str, query: &Query, draft: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(draft).map_err(|e| {
            ClientError::ParseError(format!("Failed to serialize payload: {}", e))
        })?;
        let response = self
            .send(
                Method::PATCH,
                table,
                query,
                Some(&body),
                Some("return=representation"),
                true,
            )
            .await?;
        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse updated row from {}: {}", table, e))
        })
    }

    /// Delete the rows matching `query`, discarding any representation.
    pub async fn delete(&self, table: &str, query: &Query) -> Result<()> {
        self.send(Method::DELETE, table, query, None, Some("return=minimal"), false)
            .await?;
        Ok(())
    }

    /// Delete one row matching `query` and return it.
    pub async fn delete_one<T: DeserializeOwned>(&self, table: &str, query: &Query) -> Result<T> {
        let response = self
            .send(
                Method::DELETE,
                table,
                query,
                None,
                Some("return=representation"),
                true,
            )
            .await?;
        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse deleted row from {}: {}", table, e))
        })
    }

    /// Send a request against a table with the standard credential
    /// headers and parse the JSON reply.
    ///
    /// The typed operations above cover the usual cases; this is the raw
    /// surface for anything else.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        table: &str,
        query: &Query,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let prefer = (method != Method::GET).then_some("return=representation");
        let response = self
            .send(method, table, query, body.as_ref(), prefer, false)
            .await?;
        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse response from {}: {}", table, e))
        })
    }

    async fn send(
        &self,
        method: Method,
        table: &str,
        query: &Query,
        body: Option<&serde_json::Value>,
        prefer: Option<&str>,
        single_object: bool,
    ) -> Result<reqwest::Response> {
        let config = self.config.read().await;
        let base_url = config.url.clone();
        let anon_key = config.anon_key.clone();
        let bearer = config
            .session
            .as_ref()
            .filter(|session| !session.is_expired())
            .map_or_else(|| anon_key.clone(), |session| session.access_token.clone());
        drop(config);

        let query_string = query.to_query_string();
        let url = if query_string.is_empty() {
            format!("{}/rest/v1/{}", base_url, table)
        } else {
            format!("{}/rest/v1/{}?{}", base_url, table, query_string)
        };

        debug!(method = %method, url = %url, "Sending data request");

        let mut request = self
            .http
            .request(method, &url)
            .header("apikey", &anon_key)
            .bearer_auth(&bearer);
        if let Some(prefer) = prefer {
            request = request.header("Prefer", prefer);
        }
        if single_object {
            request = request.header("Accept", OBJECT_ACCEPT);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServiceUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, table = %table, "Data request failed");
            Err(ClientError::Api {
                status: status.as_u16(),
                body: error_text,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(SleeveClient::new(ServiceConfig::new("https://project.example.co", "key")).is_ok());
        assert!(SleeveClient::new(ServiceConfig::new("http://localhost:54321", "key")).is_ok());

        // Invalid URLs
        assert!(SleeveClient::new(ServiceConfig::new("", "key")).is_err());
        assert!(SleeveClient::new(ServiceConfig::new("not-a-url", "key")).is_err());
        assert!(SleeveClient::new(ServiceConfig::new("ftp://example.co", "key")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = SleeveClient::new(ServiceConfig::new("https://project.example.co/", "key"))
            .expect("valid url");

        // URL should have trailing slash removed
        let url = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(client.url());
        assert_eq!(url, "https://project.example.co");
    }
}
