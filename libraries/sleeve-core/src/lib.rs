//! Sleeve Core
//!
//! Shared domain types and field codecs for the Sleeve catalog site and
//! its admin console.
//!
//! This crate defines:
//! - **Row Types**: `Album`, `Track`, `BlogPost`, `Subscription`, `Inquiry`,
//!   the narrowed projections the public pages fetch, and the `*Draft`
//!   payload types the forms submit
//! - **Field Codecs**: JSON-encoded link lists, comma-joined tag lists,
//!   local-input timestamps
//! - **Error Handling**: Unified `SleeveError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use sleeve_core::types::{Link, LinkList};
//!
//! let links = LinkList::from(vec![Link::new("Bandcamp", "https://example.com")]);
//! let stored = links.to_json();
//! assert_eq!(LinkList::parse(&stored), links);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod html;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SleeveError};
pub use types::{
    // Catalog
    Album, AlbumCard, AlbumDraft, AlbumId, Track, TrackCard, TrackDraft, TrackId,
    // Blog
    BlogPost, PostDetail, PostDraft, PostId, PostSummary,
    // Submissions
    Inquiry, InquiryDraft, Subscription, SubscriptionDraft,
    // Closed vocabularies
    AlbumStatus, AlbumType, Stage, TrackStatus, Visibility,
    // Field codecs
    Link, LinkList,
};
