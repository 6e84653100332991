//! Public page fragments
//!
//! Pure render functions: page state in, card markup out. Text cells go
//! through [`html::escape`]; embed codes and the commentary columns are
//! author-controlled markup and pass through verbatim.

use chrono::{DateTime, TimeZone, Utc};
use sleeve_core::{html, AlbumCard, LinkList, PostSummary, TrackCard};
use std::fmt;

/// Shown where a track has no embed code
const EMBED_PLACEHOLDER: &str = "<div class=\"overlay\" style=\"height:56px\"></div>";

pub(crate) fn local_date<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant.with_timezone(tz).format("%Y-%m-%d").to_string()
}

fn link_row(links: &LinkList, label: &str) -> String {
    if links.is_empty() {
        return String::new();
    }
    let items: Vec<String> = links
        .iter()
        .map(|link| {
            format!(
                "<a href=\"{url}\" target=\"_blank\" rel=\"noopener\">{name}</a>",
                url = html::escape(&link.url),
                name = html::escape(&link.name),
            )
        })
        .collect();
    format!("<div>{label}: {}</div>", items.join(" · "))
}

/// Cards for the catalog page
pub fn album_cards(albums: &[AlbumCard]) -> String {
    let mut out = String::new();
    for album in albums {
        let thumbs: String = album
            .art_urls()
            .map(|url| format!("<img src=\"{}\" alt=\"thumb\">", html::escape(url)))
            .collect();
        out.push_str(&format!(
            "<article class=\"card\"><div class=\"grid cols-2\"><div>\
             <img class=\"album-cover\" src=\"{cover}\" alt=\"{name} cover\">\
             <div class=\"thumbs\">{thumbs}</div></div><div>\
             <h2>{name}</h2>\
             <p class=\"muted\">{artist} · {kind} · {roman}</p>\
             <p class=\"muted\">Released: {released}</p>\
             <div class=\"mt-2\">{commentary}</div>\
             <div class=\"mt-4\">{stream}{purchase}</div>\
             <div class=\"mt-4\"><button class=\"btn outline\" data-album=\"{id}\">\
             View Tracks</button></div>\
             </div></div></article>",
            cover = html::escape(&album.art_front),
            name = html::escape(&album.album_name),
            thumbs = thumbs,
            artist = html::escape(&album.album_artist),
            kind = album.album_type.as_str(),
            roman = html::escape(&album.catalog_roman),
            released = album
                .release_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            commentary = album.album_commentary,
            stream = link_row(&album.stream_links, "Stream"),
            purchase = link_row(&album.purchase_links, "Purchase"),
            id = album.id,
        ));
    }
    out
}

/// Cards for the track modal
pub fn track_cards(tracks: &[TrackCard]) -> String {
    if tracks.is_empty() {
        return "<p class=\"muted\">No tracks yet.</p>".to_string();
    }
    let mut out = String::new();
    for track in tracks {
        let embed = match track.stream_embed.as_deref() {
            Some(code) if !code.trim().is_empty() => code,
            _ => EMBED_PLACEHOLDER,
        };
        let purchase = match track.purchase_url.as_deref() {
            Some(url) if !url.is_empty() => format!(
                "<div class=\"mt-2\"><a class=\"btn\" href=\"{}\" target=\"_blank\" \
                 rel=\"noopener\">Buy Download</a></div>",
                html::escape(url)
            ),
            _ => String::new(),
        };
        out.push_str(&format!(
            "<div class=\"card mb-2\"><strong>{no}. {name}</strong>\
             <div class=\"muted\">Duration: {duration} · Stage: {stage} ({date})</div>\
             <div class=\"mt-2\">{embed}</div>\
             <div class=\"mt-2\">{commentary}</div>{purchase}</div>",
            no = track.track_no.map(|n| n.to_string()).unwrap_or_default(),
            name = html::escape(&track.track_name),
            duration = html::escape(track.duration.as_deref().unwrap_or("")),
            stage = track.stage.as_str(),
            date = track
                .stage_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            embed = embed,
            commentary = track.track_commentary.as_deref().unwrap_or(""),
            purchase = purchase,
        ));
    }
    out
}

/// Cards for the blog index
pub fn post_cards<Tz>(posts: &[PostSummary], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if posts.is_empty() {
        return "<p class=\"muted\">No posts found.</p>".to_string();
    }
    let mut out = String::new();
    for post in posts {
        out.push_str(&format!(
            "<article class=\"card\">\
             <h3 style=\"margin-top:0\"><a href=\"/blog/post.html?slug={slug}\">{title}</a></h3>\
             <p class=\"muted\">{category} · {date}</p>\
             </article>",
            slug = html::escape(&post.slug),
            title = html::escape(&post.title),
            category = html::escape(&post.category),
            date = post
                .publish_at
                .map(|instant| local_date(instant, tz))
                .unwrap_or_default(),
        ));
    }
    out
}

/// Pager caption
pub fn page_label(page: u32) -> String {
    format!("Page {page}")
}
