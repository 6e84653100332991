mod album;
mod enums;
mod links;
mod post;
mod submission;
mod track;

pub mod tags;
pub mod timestamp;

pub use album::{Album, AlbumCard, AlbumDraft, AlbumId, ALBUMS_TABLE};
pub use enums::{AlbumStatus, AlbumType, Stage, TrackStatus, Visibility};
pub use links::{Link, LinkList};
pub use post::{BlogPost, PostDetail, PostDraft, PostId, PostSummary, BLOG_POSTS_TABLE};
pub use submission::{
    Inquiry, InquiryDraft, Subscription, SubscriptionDraft, INQUIRIES_TABLE, SUBSCRIPTIONS_TABLE,
};
pub use track::{Track, TrackCard, TrackDraft, TrackId, TRACKS_TABLE};

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable column into its default value.
///
/// The hosted service returns explicit nulls for empty columns; views must
/// never see them, so text fields decode to `""`, lists to empty, and
/// vocabulary fields to their documented defaults.
pub(crate) fn de_null_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
