//! Track types

use super::{AlbumId, Stage, TrackStatus, Visibility};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type TrackId = i64;

/// Hosted table holding tracks
pub const TRACKS_TABLE: &str = "tracks";

/// A track row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub album_id: AlbumId,
    #[serde(default)]
    pub track_no: Option<i32>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub track_name: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub track_status: TrackStatus,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub stage: Stage,
    #[serde(default)]
    pub stage_date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<String>, // Free-form, e.g. "3:45"
    #[serde(default)]
    pub stream_embed: Option<String>, // Trusted embed markup
    #[serde(default)]
    pub purchase_url: Option<String>,
    #[serde(default)]
    pub track_commentary: Option<String>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub visibility: Visibility,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub artist_names: Vec<String>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub composer_names: Vec<String>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub key_contributors: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Data for creating or updating a track
///
/// `album_id` stays optional so the editor can hold an unparented draft,
/// but inserts require it; the console rejects parentless creates before
/// any request is made.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackDraft {
    pub album_id: Option<AlbumId>,
    pub track_no: Option<i32>,
    pub track_name: String,
    pub track_status: TrackStatus,
    pub stage: Stage,
    pub duration: Option<String>,
    pub stream_embed: Option<String>,
    pub purchase_url: Option<String>,
    pub track_commentary: Option<String>,
}

/// Public track-modal projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackCard {
    pub id: TrackId,
    #[serde(default)]
    pub track_no: Option<i32>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub track_name: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub artist_names: Vec<String>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub composer_names: Vec<String>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub key_contributors: Vec<String>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub stage: Stage,
    #[serde(default)]
    pub stage_date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub stream_embed: Option<String>,
    #[serde(default)]
    pub purchase_url: Option<String>,
    #[serde(default)]
    pub track_commentary: Option<String>,
}

impl TrackCard {
    /// Column list the track modal fetches
    pub const SELECT: &'static str = "id,track_no,track_name,artist_names,composer_names,\
         key_contributors,stage,stage_date,duration,stream_embed,purchase_url,track_commentary";
}
