//! Blog post types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PostId = i64;

/// Hosted table holding blog posts
pub const BLOG_POSTS_TABLE: &str = "blog_posts";

/// A blog post row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub author: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub category: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub draft: bool,
    #[serde(default)]
    pub publish_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub body_md: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub body_html: String, // Trusted markup, rendered verbatim
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Data for creating or updating a blog post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub draft: bool,
    pub publish_at: Option<DateTime<Utc>>,
    pub body_md: String,
    pub body_html: String,
}

/// Blog index projection of a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub author: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub category: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub publish_at: Option<DateTime<Utc>>,
}

impl PostSummary {
    /// Column list the blog index fetches
    pub const SELECT: &'static str = "id,slug,title,author,category,tags,publish_at";
}

/// Post page projection, bodies included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: PostId,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub author: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub category: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub publish_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub body_html: String,
    #[serde(default, deserialize_with = "super::de_null_default")]
    pub body_md: String,
}

impl PostDetail {
    /// Column list the post page fetches
    pub const SELECT: &'static str =
        "id,slug,title,author,category,tags,publish_at,body_html,body_md";
}
