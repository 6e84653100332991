//! Admin console orchestration
//!
//! One owner struct per signed-in session: the gate decides which view is
//! visible, the panels hold the lists and editors, and every operation here
//! maps to one button in the console markup.

use crate::error::{ConsoleError, Result};
use crate::forms::album::AlbumEditor;
use crate::forms::post::{PostDefaults, PostEditor};
use crate::forms::track::TrackEditor;
use crate::gate::{Panel, SessionGate};
use serde_json::Value;
use sleeve_client::{Direction, Nulls, Query, SleeveClient};
use sleeve_core::types::{
    ALBUMS_TABLE, BLOG_POSTS_TABLE, INQUIRIES_TABLE, SUBSCRIPTIONS_TABLE, TRACKS_TABLE,
};
use sleeve_core::{Album, AlbumId, BlogPost, Inquiry, PostId, Subscription, Track, TrackId};
use tracing::{debug, info};

/// Explicit confirmation for destructive operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Proceed,
    Cancel,
}

/// Outcome of a guarded delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Catalog tab state
#[derive(Debug, Default)]
pub struct CatalogPanel {
    pub albums: Vec<Album>,
    /// Tracks of the selected album
    pub tracks: Vec<Track>,
    pub selected_album: Option<AlbumId>,
    pub album_editor: AlbumEditor,
    pub track_editor: TrackEditor,
}

impl CatalogPanel {
    /// Label above the track editor
    pub fn selected_album_label(&self) -> String {
        let selected = self
            .selected_album
            .and_then(|id| self.albums.iter().find(|album| album.id == id));
        match selected {
            Some(album) => format!("{} (#{})", album.album_name, album.id),
            None => "[select an album]".to_string(),
        }
    }
}

/// Blog tab state
#[derive(Debug, Default)]
pub struct BlogPanel {
    pub posts: Vec<BlogPost>,
    pub post_editor: PostEditor,
}

/// Submissions tab state (read-only)
#[derive(Debug, Default)]
pub struct SubmissionsPanel {
    pub subscriptions: Vec<Subscription>,
    pub inquiries: Vec<Inquiry>,
}

/// The session-gated admin console
pub struct AdminConsole {
    client: SleeveClient,
    gate: SessionGate,
    post_defaults: PostDefaults,
    pub catalog: CatalogPanel,
    pub blog: BlogPanel,
    pub submissions: SubmissionsPanel,
}

impl AdminConsole {
    pub fn new(client: SleeveClient) -> Self {
        Self::with_post_defaults(client, PostDefaults::default())
    }

    /// Create a console with deployment-specific new-post prefills
    pub fn with_post_defaults(client: SleeveClient, post_defaults: PostDefaults) -> Self {
        let blog = BlogPanel {
            posts: Vec::new(),
            post_editor: PostEditor::with_defaults(post_defaults.clone()),
        };
        Self {
            client,
            gate: SessionGate::new(),
            post_defaults,
            catalog: CatalogPanel::default(),
            blog,
            submissions: SubmissionsPanel::default(),
        }
    }

    /// Run the gate against the held session, initializing on first entry
    pub async fn start(&mut self) -> Result<Panel> {
        let session = self.client.session().await;
        self.gate.observe(session.as_ref());

        if self.gate.needs_init() {
            self.init().await?;
        }
        Ok(self.gate.visible_panel())
    }

    /// Sign in and enter the admin view
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<Panel> {
        self.client.sign_in(email, password).await?;
        self.start().await
    }

    /// Sign out and reset every view to its signed-out state
    pub async fn sign_out(&mut self) -> Panel {
        self.client.sign_out().await;
        self.gate.reset();
        self.catalog = CatalogPanel::default();
        self.blog = BlogPanel {
            posts: Vec::new(),
            post_editor: PostEditor::with_defaults(self.post_defaults.clone()),
        };
        self.submissions = SubmissionsPanel::default();
        self.gate.visible_panel()
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    pub fn visible_panel(&self) -> Panel {
        self.gate.visible_panel()
    }

    /// One-time list loading after authentication
    async fn init(&mut self) -> Result<()> {
        debug!("Loading admin lists");
        self.load_albums().await?;
        self.catalog.album_editor.open(None);
        self.catalog.track_editor.open(None);
        self.load_posts().await?;
        self.blog.post_editor.open(None);
        self.load_subscriptions().await?;
        self.load_inquiries().await?;
        info!("Admin console initialized");
        Ok(())
    }

    // ===== Catalog =====

    /// Refresh the albums list
    pub async fn load_albums(&mut self) -> Result<()> {
        let query = Query::new().order("release_date", Direction::Desc, Some(Nulls::First));
        self.catalog.albums = self.client.rows(ALBUMS_TABLE, &query).await?;
        debug!(count = self.catalog.albums.len(), "Loaded albums");
        Ok(())
    }

    /// Refresh the track list for an album
    pub async fn load_tracks(&mut self, album_id: AlbumId) -> Result<()> {
        let query = Query::new()
            .eq("album_id", album_id)
            .order("track_no", Direction::Asc, Some(Nulls::First));
        self.catalog.tracks = self.client.rows(TRACKS_TABLE, &query).await?;
        debug!(album_id, count = self.catalog.tracks.len(), "Loaded tracks");
        Ok(())
    }

    /// Open an album in the editor and select it for track work
    pub async fn edit_album(&mut self, id: AlbumId) -> Result<()> {
        let row = self
            .client
            .row::<Value>(ALBUMS_TABLE, &Query::new().eq("id", id))
            .await?
            .ok_or(ConsoleError::NotFound)?;

        self.catalog.album_editor.open(Some(&row));
        self.catalog.selected_album = Some(id);
        self.load_tracks(id).await?;
        self.catalog.track_editor.open(None);
        Ok(())
    }

    /// Open a track in the editor
    pub async fn edit_track(&mut self, id: TrackId) -> Result<()> {
        let row = self
            .client
            .row::<Value>(TRACKS_TABLE, &Query::new().eq("id", id))
            .await?
            .ok_or(ConsoleError::NotFound)?;
        self.catalog.track_editor.open(Some(&row));
        Ok(())
    }

    /// Save the album form, refresh the list, and re-open the saved row
    pub async fn save_album(&mut self) -> Result<()> {
        let draft = self.catalog.album_editor.draft()?;

        let saved: Value = match self.catalog.album_editor.id() {
            Some(id) => {
                self.client
                    .update_one(ALBUMS_TABLE, &Query::new().eq("id", id), &draft)
                    .await?
            }
            None => self.client.insert_one(ALBUMS_TABLE, &draft).await?,
        };
        info!(album = %draft.album_name, "Saved album");

        self.load_albums().await?;
        self.catalog.album_editor.open(Some(&saved));
        Ok(())
    }

    /// Save the track form for the selected album, then reset it for the
    /// next track
    pub async fn save_track(&mut self) -> Result<()> {
        let album_id = self
            .catalog
            .selected_album
            .ok_or(ConsoleError::NoAlbumSelected)?;
        let mut draft = self.catalog.track_editor.draft()?;
        draft.album_id = Some(album_id);

        let saved: Value = match self.catalog.track_editor.id() {
            Some(id) => {
                self.client
                    .update_one(TRACKS_TABLE, &Query::new().eq("id", id), &draft)
                    .await?
            }
            None => self.client.insert_one(TRACKS_TABLE, &draft).await?,
        };
        info!(track = %draft.track_name, "Saved track");

        let owner = saved
            .get("album_id")
            .and_then(Value::as_i64)
            .unwrap_or(album_id);
        self.load_tracks(owner).await?;
        self.catalog.track_editor.open(None);
        Ok(())
    }

    /// Delete the album in the editor.
    ///
    /// The track list empties as soon as the delete lands; cascading row
    /// deletion is the database's job.
    pub async fn delete_album(&mut self, confirm: Confirm) -> Result<DeleteOutcome> {
        let id = self
            .catalog
            .album_editor
            .id()
            .ok_or(ConsoleError::NothingSelected)?;
        if confirm == Confirm::Cancel {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.client
            .delete(ALBUMS_TABLE, &Query::new().eq("id", id))
            .await?;
        info!(album_id = id, "Deleted album");

        self.catalog.tracks.clear();
        self.catalog.selected_album = None;
        self.catalog.track_editor.open(None);
        self.catalog.album_editor.open(None);

        self.load_albums().await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Delete the track in the editor, learning the owning album from the
    /// returned row
    pub async fn delete_track(&mut self, confirm: Confirm) -> Result<DeleteOutcome> {
        let id = self
            .catalog
            .track_editor
            .id()
            .ok_or(ConsoleError::NothingSelected)?;
        if confirm == Confirm::Cancel {
            return Ok(DeleteOutcome::Cancelled);
        }

        let deleted: Value = self
            .client
            .delete_one(TRACKS_TABLE, &Query::new().eq("id", id))
            .await?;
        info!(track_id = id, "Deleted track");

        self.catalog.track_editor.open(None);
        let owner = deleted
            .get("album_id")
            .and_then(Value::as_i64)
            .or(self.catalog.selected_album);
        if let Some(album_id) = owner {
            self.load_tracks(album_id).await?;
        }
        Ok(DeleteOutcome::Deleted)
    }

    // ===== Blog =====

    /// Refresh the posts list
    pub async fn load_posts(&mut self) -> Result<()> {
        let query = Query::new().order("publish_at", Direction::Desc, Some(Nulls::First));
        self.blog.posts = self.client.rows(BLOG_POSTS_TABLE, &query).await?;
        debug!(count = self.blog.posts.len(), "Loaded posts");
        Ok(())
    }

    /// Open a post in the editor
    pub async fn edit_post(&mut self, id: PostId) -> Result<()> {
        let row = self
            .client
            .row::<Value>(BLOG_POSTS_TABLE, &Query::new().eq("id", id))
            .await?
            .ok_or(ConsoleError::NotFound)?;
        self.blog.post_editor.open(Some(&row));
        Ok(())
    }

    /// Save the post form, refresh the list, and re-open the saved row
    pub async fn save_post(&mut self) -> Result<()> {
        let draft = self.blog.post_editor.draft()?;

        let saved: Value = match self.blog.post_editor.id() {
            Some(id) => {
                self.client
                    .update_one(BLOG_POSTS_TABLE, &Query::new().eq("id", id), &draft)
                    .await?
            }
            None => self.client.insert_one(BLOG_POSTS_TABLE, &draft).await?,
        };
        info!(slug = %draft.slug, "Saved post");

        self.load_posts().await?;
        self.blog.post_editor.open(Some(&saved));
        Ok(())
    }

    /// Delete the post in the editor
    pub async fn delete_post(&mut self, confirm: Confirm) -> Result<DeleteOutcome> {
        let id = self
            .blog
            .post_editor
            .id()
            .ok_or(ConsoleError::NothingSelected)?;
        if confirm == Confirm::Cancel {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.client
            .delete(BLOG_POSTS_TABLE, &Query::new().eq("id", id))
            .await?;
        info!(post_id = id, "Deleted post");

        self.blog.post_editor.open(None);
        self.load_posts().await?;
        Ok(DeleteOutcome::Deleted)
    }

    // ===== Submissions =====

    /// Refresh the subscriptions list
    pub async fn load_subscriptions(&mut self) -> Result<()> {
        let query = Query::new()
            .select(Subscription::SELECT)
            .order("created_at", Direction::Desc, None);
        self.submissions.subscriptions = self.client.rows(SUBSCRIPTIONS_TABLE, &query).await?;
        Ok(())
    }

    /// Refresh the inquiries list
    pub async fn load_inquiries(&mut self) -> Result<()> {
        let query = Query::new()
            .select(Inquiry::SELECT)
            .order("created_at", Direction::Desc, None);
        self.submissions.inquiries = self.client.rows(INQUIRIES_TABLE, &query).await?;
        Ok(())
    }
}
