//! Public submission types
//!
//! Subscriptions and inquiries are written by the public forms and only
//! ever read back in the admin console, where both tables are read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hosted table holding mailing-list signups
pub const SUBSCRIPTIONS_TABLE: &str = "subscriptions";

/// Hosted table holding contact inquiries
pub const INQUIRIES_TABLE: &str = "inquiries";

/// A mailing-list signup row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub country: String,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Column list the admin console fetches
    pub const SELECT: &'static str = "first_name,last_name,email,country,created_at";

    /// First and last name joined, skipping whichever is empty
    pub fn display_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

/// A contact inquiry row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub messenger: String, // Preferred contact handle
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    /// Column list the admin console fetches
    pub const SELECT: &'static str = "first_name,last_name,email,messenger,created_at";

    /// First and last name joined, skipping whichever is empty
    pub fn display_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

/// Data the public subscribe form submits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
}

/// Data the public inquiry form submits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub messenger: String,
}

fn join_name(first: &str, last: &str) -> String {
    [first, last]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
