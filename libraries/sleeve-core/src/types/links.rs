//! Link-list columns
//!
//! Stream and purchase links live in a single text column holding a
//! JSON-encoded array of `{name, url}` objects. Parsing is lossy: any
//! malformed payload yields an empty list, never an error, so a bad row
//! can only ever hide its own links.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single labeled link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// An ordered list of links, stored JSON-encoded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkList(pub Vec<Link>);

impl LinkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the stored encoding; malformed input yields an empty list
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        serde_json::from_str::<Vec<Link>>(raw)
            .map(Self)
            .unwrap_or_default()
    }

    /// The stored encoding (compact JSON)
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| String::from("[]"))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.0.iter()
    }
}

impl From<Vec<Link>> for LinkList {
    fn from(links: Vec<Link>) -> Self {
        Self(links)
    }
}

impl Serialize for LinkList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_json())
    }
}

impl<'de> Deserialize<'de> for LinkList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Rows normally carry the encoded string; tolerate an in-place
        // array or null from rows written by other tools.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(raw) => Self::parse(&raw),
            serde_json::Value::Array(_) => serde_json::from_value::<Vec<Link>>(value)
                .map(Self)
                .unwrap_or_default(),
            _ => Self::default(),
        })
    }
}
