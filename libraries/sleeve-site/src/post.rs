//! Single post page
//!
//! Fetches one post by slug and decides what the body element gets. The
//! Markdown conversion itself is the embedding page's job; this module
//! only says which source to use.

use crate::error::Result;
use chrono::TimeZone;
use sleeve_client::{Query, SleeveClient};
use sleeve_core::types::BLOG_POSTS_TABLE;
use sleeve_core::PostDetail;
use std::fmt;

/// Body source for the post page, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostBody<'a> {
    /// Pre-rendered markup, injected verbatim
    Html(&'a str),
    /// Markdown for the embedder's converter
    Markdown(&'a str),
    /// Nothing to show (missing post or blank bodies)
    Empty,
}

/// Post page state
#[derive(Debug, Default)]
pub struct PostPage {
    pub post: Option<PostDetail>,
}

impl PostPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the post with `slug`; a missing slug leaves the page empty.
    pub async fn load(&mut self, client: &SleeveClient, slug: &str) -> Result<()> {
        let query = Query::new().eq("slug", slug).select(PostDetail::SELECT);
        self.post = client.row(BLOG_POSTS_TABLE, &query).await?;
        Ok(())
    }

    pub fn title(&self) -> &str {
        self.post.as_ref().map(|post| post.title.as_str()).unwrap_or("")
    }

    /// Pick the body source: stored HTML when present, else Markdown.
    ///
    /// Whitespace-only columns count as absent.
    pub fn body(&self) -> PostBody<'_> {
        let Some(post) = &self.post else {
            return PostBody::Empty;
        };
        if !post.body_html.trim().is_empty() {
            PostBody::Html(&post.body_html)
        } else if !post.body_md.trim().is_empty() {
            PostBody::Markdown(&post.body_md)
        } else {
            PostBody::Empty
        }
    }

    /// Category, publish date, and author joined with " · ", blanks skipped.
    pub fn meta_line<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let Some(post) = &self.post else {
            return String::new();
        };
        let date = post
            .publish_at
            .map(|instant| crate::render::local_date(instant, tz))
            .unwrap_or_default();
        [post.category.as_str(), date.as_str(), post.author.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" · ")
    }
}
