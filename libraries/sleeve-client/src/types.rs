//! Types for the hosted-service client.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ===== Configuration =====

/// Connection settings for the hosted service.
///
/// The anon key doubles as the `apikey` header and, until someone signs
/// in, as the bearer credential; the service's row-level rules decide
/// what that identity may see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service base URL, e.g. `https://project.example.co`
    pub url: String,
    /// Public anon key issued by the service
    pub anon_key: String,
    /// Session restored from persistent storage, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl ServiceConfig {
    /// Create a config without a session (anonymous access).
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            session: None,
        }
    }

    /// Create a config seeded with a previously stored session.
    pub fn with_session(
        url: impl Into<String>,
        anon_key: impl Into<String>,
        session: Session,
    ) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            session: Some(session),
        }
    }
}

// ===== Identity =====

/// An authenticated session issued by the identity API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Instant the access token stops working; `None` when the service
    /// did not say
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: UserInfo,
}

impl Session {
    /// Whether the access token is past its expiry instant.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => at <= Utc::now(),
            None => false,
        }
    }
}

/// The user a session belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Opaque user id assigned by the identity API
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Password-grant request body.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordGrantRequest {
    pub email: String,
    pub password: String,
}

/// Password-grant response body.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordGrantResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    /// Lifetime of the access token in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: UserInfo,
}

impl PasswordGrantResponse {
    /// Convert the grant into a stored session, pinning the expiry
    /// instant now so later checks need no clock math.
    pub fn into_session(self) -> Session {
        let expires_at = self.expires_in.map(|secs| Utc::now() + Duration::seconds(secs));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Auth-state change notification, published on sign-in, sign-out, and
/// session restore.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    SignedOut,
    SignedIn {
        user: UserInfo,
    },
}

impl AuthState {
    /// Whether this state carries an authenticated user.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}
