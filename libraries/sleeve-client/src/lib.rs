//! Sleeve Service Client
//!
//! HTTP client library for the hosted database service behind the Sleeve
//! site: the REST data API and the password-credential identity API.
//!
//! # Features
//!
//! - **Data access**: typed reads and writes against hosted tables,
//!   filtered through the service's query dialect
//! - **Query building**: `eq`, array-contains, multi-column `ilike`,
//!   ordering with null placement, pagination
//! - **Identity**: password sign-in, sign-out, session storage with
//!   expiry checks, auth-state change notifications
//!
//! # Example
//!
//! ```ignore
//! use sleeve_client::{Direction, Nulls, Query, ServiceConfig, SleeveClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServiceConfig::new("https://project.example.co", anon_key);
//!     let client = SleeveClient::new(config)?;
//!
//!     // Public catalog read
//!     let query = Query::new()
//!         .eq("visibility", "PUBLIC")
//!         .order("release_date", Direction::Desc, Some(Nulls::First));
//!     let albums: Vec<serde_json::Value> = client.rows("albums", &query).await?;
//!     println!("Found {} albums", albums.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod query;
mod types;

// Re-export main types
pub use client::SleeveClient;
pub use error::{ClientError, Result};
pub use query::{Direction, Nulls, Query};
pub use types::{
    AuthState, PasswordGrantRequest, PasswordGrantResponse, ServiceConfig, Session, UserInfo,
};

// Re-export the identity sub-client for direct use if needed
pub use auth::AuthClient;
