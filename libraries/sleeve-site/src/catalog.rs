//! Public catalog page
//!
//! Shows the PUBLIC albums of the current tenant and, on request, one
//! album's PUBLIC tracks in a modal. Everything the service hides behind
//! row-level rules stays hidden; this controller only ever asks for
//! public rows.

use crate::config::SiteConfig;
use crate::error::Result;
use sleeve_client::{Direction, Query, SleeveClient};
use sleeve_core::types::{ALBUMS_TABLE, TRACKS_TABLE};
use sleeve_core::{AlbumCard, AlbumId, TrackCard, Visibility};
use tracing::debug;

/// Track list shown for one opened album
#[derive(Debug, Clone, PartialEq)]
pub struct TracksModal {
    pub album_id: AlbumId,
    pub album_name: String,
    pub tracks: Vec<TrackCard>,
}

/// Catalog page state
#[derive(Debug, Default)]
pub struct CatalogPage {
    artist: Option<String>,
    pub albums: Vec<AlbumCard>,
    pub modal: Option<TracksModal>,
}

impl CatalogPage {
    /// Catalog restricted to one artist, or the whole roster when `None`
    pub fn new(artist: Option<String>) -> Self {
        Self {
            artist,
            albums: Vec::new(),
            modal: None,
        }
    }

    /// Catalog for the tenant matching `hostname` per the config rules
    pub fn for_host(config: &SiteConfig, hostname: &str) -> Self {
        Self::new(config.resolve_tenant(hostname).map(String::from))
    }

    /// Artist filter in effect, if any
    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    /// Fetch the public albums for this page's tenant.
    pub async fn load(&mut self, client: &SleeveClient) -> Result<()> {
        let mut query = Query::new()
            .select(AlbumCard::SELECT)
            .eq("visibility", Visibility::Public)
            .order("release_date", Direction::Desc, None);
        if let Some(artist) = &self.artist {
            query = query.eq("album_artist", artist);
        }

        self.albums = client.rows(ALBUMS_TABLE, &query).await?;
        debug!(count = self.albums.len(), "Loaded public catalog");
        Ok(())
    }

    /// Fetch one album's public tracks into the modal.
    pub async fn open_tracks(&mut self, client: &SleeveClient, album_id: AlbumId) -> Result<()> {
        let query = Query::new()
            .select(TrackCard::SELECT)
            .eq("album_id", album_id)
            .eq("visibility", Visibility::Public)
            .order("track_no", Direction::Asc, None);
        let tracks: Vec<TrackCard> = client.rows(TRACKS_TABLE, &query).await?;

        let album_name = self
            .albums
            .iter()
            .find(|album| album.id == album_id)
            .map(|album| album.album_name.clone())
            .unwrap_or_default();

        debug!(album_id, count = tracks.len(), "Opened track modal");
        self.modal = Some(TracksModal {
            album_id,
            album_name,
            tracks,
        });
        Ok(())
    }

    /// Dismiss the track modal.
    pub fn close_tracks(&mut self) {
        self.modal = None;
    }
}
