//! Sleeve Console
//!
//! Session-gated admin console for the Sleeve catalog and blog: a login
//! view over per-tab panels for albums and tracks, posts, and reader
//! submissions.
//!
//! # Features
//!
//! - **Session Gate**: login/admin visibility with one-time list loading
//!   per authenticated session
//! - **Declarative Forms**: static field tables drive population and
//!   payload coercion for every editor
//! - **Panels**: explicit per-tab state with pure table renderers
//!
//! # Example
//!
//! ```rust,ignore
//! use sleeve_client::{ServiceConfig, SleeveClient};
//! use sleeve_console::{AdminConsole, Panel};
//!
//! let client = SleeveClient::new(ServiceConfig::new(url, anon_key))?;
//! let mut console = AdminConsole::new(client);
//! if console.start().await? == Panel::Login {
//!     console.sign_in("admin@example.com", password).await?;
//! }
//! ```

#![forbid(unsafe_code)]

mod console;
mod error;
mod forms;
mod gate;
pub mod render;

// Public exports
pub use console::{AdminConsole, BlogPanel, CatalogPanel, Confirm, DeleteOutcome, SubmissionsPanel};
pub use error::{ConsoleError, Result};
pub use forms::album::{AlbumEditor, ALBUM_FIELDS};
pub use forms::post::{PostDefaults, PostEditor, POST_FIELDS};
pub use forms::track::{TrackEditor, TRACK_FIELDS};
pub use forms::{Bind, FieldSpec, FormModel, Widget};
pub use gate::{GateState, Panel, SessionGate};
