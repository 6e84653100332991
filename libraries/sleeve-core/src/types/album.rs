//! Album types

use super::{AlbumStatus, AlbumType, LinkList, Visibility};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type AlbumId = i64;

/// Hosted table holding albums
pub const ALBUMS_TABLE: &str = "albums";

/// An album row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub album_artist: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub album_name: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub album_type: AlbumType,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub catalog_no: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub catalog_roman: String, // Display variant of the catalog number
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub visibility: Visibility,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub physical_release_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub album_status: AlbumStatus,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub art_front: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub art_back: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub art_sleeve: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub art_sticker: String,
    #[serde(default)]
    pub stream_links: LinkList,
    #[serde(default)]
    pub purchase_links: LinkList,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub distributor: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub label: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub album_commentary: String, // Trusted markup, rendered verbatim
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Data for creating or updating an album
///
/// Carries no id; updates are scoped by id through the request query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumDraft {
    pub album_artist: String,
    pub album_name: String,
    pub album_type: AlbumType,
    pub catalog_no: String,
    pub catalog_roman: String,
    pub visibility: Visibility,
    pub release_date: Option<NaiveDate>,
    pub physical_release_date: Option<NaiveDate>,
    pub album_status: AlbumStatus,
    pub art_front: String,
    pub art_back: String,
    pub art_sleeve: String,
    pub art_sticker: String,
    pub stream_links: LinkList,
    pub purchase_links: LinkList,
    pub distributor: String,
    pub label: String,
    pub album_commentary: String,
}

/// Public catalog projection of an album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumCard {
    pub id: AlbumId,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub album_name: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub album_type: AlbumType,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub album_artist: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub catalog_roman: String,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub art_front: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub art_back: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub art_sleeve: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub art_sticker: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub distributor: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub label: String,
    #[serde(default)]
    pub stream_links: LinkList,
    #[serde(default)]
    pub purchase_links: LinkList,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub album_commentary: String,
}

impl AlbumCard {
    /// Column list the catalog page fetches
    pub const SELECT: &'static str = "id,album_name,album_type,album_artist,catalog_roman,\
         release_date,art_front,art_back,art_sleeve,art_sticker,distributor,label,\
         stream_links,purchase_links,album_commentary";

    /// Art URLs in display order, skipping empty slots
    pub fn art_urls(&self) -> impl Iterator<Item = &str> {
        [
            self.art_front.as_str(),
            self.art_back.as_str(),
            self.art_sleeve.as_str(),
            self.art_sticker.as_str(),
        ]
        .into_iter()
        .filter(|url| !url.is_empty())
    }
}
