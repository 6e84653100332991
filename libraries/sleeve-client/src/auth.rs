//! Identity operations against the hosted auth API.

use crate::error::{ClientError, Result};
use crate::types::{PasswordGrantRequest, PasswordGrantResponse, Session, UserInfo};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Identity client for the hosted auth endpoints.
///
/// Borrowed from [`crate::SleeveClient`]; every call carries the public
/// anon key as `apikey` the way the service requires.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    anon_key: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, anon_key: &'a str) -> Self {
        Self {
            http,
            base_url,
            anon_key,
        }
    }

    /// Sign in with email and password.
    ///
    /// Returns a session on success.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        debug!(url = %url, email = %email, "Attempting sign-in");

        let request = PasswordGrantRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .header("apikey", self.anon_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::ServiceUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let grant: PasswordGrantResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse sign-in response: {}", e))
            })?;

            let session = grant.into_session();
            info!(
                user_id = %session.user.id,
                email = session.user.email.as_deref().unwrap_or(""),
                "Sign-in successful"
            );

            Ok(session)
        } else if status.as_u16() == 400 || status.as_u16() == 401 {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Sign-in failed: invalid credentials");
            Err(ClientError::AuthFailed(
                "Invalid email or password".to_string(),
            ))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                body: error_text,
            })
        }
    }

    /// Revoke a session's tokens.
    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        debug!(url = %url, "Signing out");

        let response = self
            .http
            .post(&url)
            .header("apikey", self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::ServiceUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                body: error_text,
            })
        }
    }

    /// Fetch the user an access token belongs to.
    pub async fn get_user(&self, access_token: &str) -> Result<UserInfo> {
        let url = format!("{}/auth/v1/user", self.base_url);
        debug!(url = %url, "Fetching current user");

        let response = self
            .http
            .get(&url)
            .header("apikey", self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::ServiceUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let user: UserInfo = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user response: {}", e))
            })?;

            Ok(user)
        } else if status.as_u16() == 401 {
            Err(ClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                body: error_text,
            })
        }
    }

    /// Validate that an access token is still accepted by the service.
    pub async fn validate_token(&self, access_token: &str) -> Result<bool> {
        match self.get_user(access_token).await {
            Ok(_) => Ok(true),
            Err(ClientError::AuthRequired) => Ok(false),
            Err(ClientError::AuthFailed(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
