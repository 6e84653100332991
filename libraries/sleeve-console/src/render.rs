//! Admin table bodies
//!
//! Pure render functions: list state in, `<tr>` markup out. Text cells are
//! escaped; each row carries an Edit button with the row id.

use chrono::{DateTime, Local, Utc};
use sleeve_core::types::timestamp;
use sleeve_core::{html, Album, BlogPost, Inquiry, Subscription, Track};

fn timestamp_cell(instant: Option<DateTime<Utc>>) -> String {
    instant
        .map(|value| timestamp::to_display(value, &Local))
        .unwrap_or_default()
}

/// Rows for the albums table
pub fn album_rows(albums: &[Album]) -> String {
    let mut out = String::new();
    for album in albums {
        out.push_str(&format!(
            "<tr><td>{id}</td><td>{artist}</td><td>{name}</td><td>{kind}</td>\
             <td>{status}</td><td>{visibility}</td><td>{released}</td>\
             <td><button class=\"mini\" data-edit=\"{id}\">Edit</button></td></tr>",
            id = album.id,
            artist = html::escape(&album.album_artist),
            name = html::escape(&album.album_name),
            kind = album.album_type.as_str(),
            status = album.album_status.as_str(),
            visibility = album.visibility.as_str(),
            released = album
                .release_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
        ));
    }
    out
}

/// Rows for the selected album's tracks table
pub fn track_rows(tracks: &[Track]) -> String {
    let mut out = String::new();
    for track in tracks {
        out.push_str(&format!(
            "<tr><td>{no}</td><td>{name}</td><td>{status}</td><td>{stage}</td>\
             <td>{visibility}</td>\
             <td><button class=\"mini\" data-edit=\"{id}\">Edit</button></td></tr>",
            no = track.track_no.map(|n| n.to_string()).unwrap_or_default(),
            name = html::escape(&track.track_name),
            status = track.track_status.as_str(),
            stage = track.stage.as_str(),
            visibility = track.visibility.as_str(),
            id = track.id,
        ));
    }
    out
}

/// Rows for the posts table
pub fn post_rows(posts: &[BlogPost]) -> String {
    let mut out = String::new();
    for post in posts {
        out.push_str(&format!(
            "<tr><td>{id}</td><td>{title}</td><td>{slug}</td><td>{category}</td>\
             <td>{draft}</td><td>{published}</td>\
             <td><button class=\"mini\" data-edit=\"{id}\">Edit</button></td></tr>",
            id = post.id,
            title = html::escape(&post.title),
            slug = html::escape(&post.slug),
            category = html::escape(&post.category),
            draft = if post.draft { "Yes" } else { "No" },
            published = timestamp_cell(post.publish_at),
        ));
    }
    out
}

/// Rows for the subscriptions table
pub fn subscription_rows(subscriptions: &[Subscription]) -> String {
    let mut out = String::new();
    for sub in subscriptions {
        out.push_str(&format!(
            "<tr><td>{name}</td><td>{email}</td><td>{country}</td><td>{when}</td></tr>",
            name = html::escape(&sub.display_name()),
            email = html::escape(&sub.email),
            country = html::escape(&sub.country),
            when = timestamp_cell(Some(sub.created_at)),
        ));
    }
    out
}

/// Rows for the inquiries table
pub fn inquiry_rows(inquiries: &[Inquiry]) -> String {
    let mut out = String::new();
    for inquiry in inquiries {
        out.push_str(&format!(
            "<tr><td>{name}</td><td>{email}</td><td>{messenger}</td><td>{when}</td></tr>",
            name = html::escape(&inquiry.display_name()),
            email = html::escape(&inquiry.email),
            messenger = html::escape(&inquiry.messenger),
            when = timestamp_cell(Some(inquiry.created_at)),
        ));
    }
    out
}
