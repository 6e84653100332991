//! Track form
//!
//! The owning album is not a widget; it comes from the catalog panel's
//! selection when the draft is submitted.

use super::{Bind, FieldSpec, FormModel, Widget};
use crate::error::Result;
use serde_json::Value;
use sleeve_core::{Stage, TrackDraft, TrackId, TrackStatus};

/// Editable track columns, in markup order
pub const TRACK_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "track_no",
        widget: Widget::Number,
        bind: Bind::Integer,
        default: "",
    },
    FieldSpec {
        name: "track_name",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "track_status",
        widget: Widget::Select(TrackStatus::VARIANTS),
        bind: Bind::Text,
        default: "WIP",
    },
    FieldSpec {
        name: "stage",
        widget: Widget::Select(Stage::VARIANTS),
        bind: Bind::Text,
        default: "CONCEPTION",
    },
    FieldSpec {
        name: "duration",
        widget: Widget::Text,
        bind: Bind::Nullable,
        default: "",
    },
    FieldSpec {
        name: "stream_embed",
        widget: Widget::TextArea,
        bind: Bind::Nullable,
        default: "",
    },
    FieldSpec {
        name: "purchase_url",
        widget: Widget::Text,
        bind: Bind::Nullable,
        default: "",
    },
    FieldSpec {
        name: "track_commentary",
        widget: Widget::TextArea,
        bind: Bind::Nullable,
        default: "",
    },
];

/// Track editor state
#[derive(Debug, Clone)]
pub struct TrackEditor {
    form: FormModel,
}

impl TrackEditor {
    pub fn new() -> Self {
        Self {
            form: FormModel::new(TRACK_FIELDS),
        }
    }

    /// Open a track row for editing, or reset to a new-track form
    pub fn open(&mut self, row: Option<&Value>) {
        self.form.populate(row);
    }

    /// Heading for the editor pane
    pub fn title(&self) -> String {
        match self.form.id() {
            Some(id) => format!("Edit Track #{id}"),
            None => "New Track".to_string(),
        }
    }

    pub fn id(&self) -> Option<TrackId> {
        self.form.id()
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn value(&self, field: &str) -> &str {
        self.form.value(field)
    }

    /// Coerce the widgets into a validated draft (no owning album yet)
    pub fn draft(&self) -> Result<TrackDraft> {
        self.form.draft()
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }
}

impl Default for TrackEditor {
    fn default() -> Self {
        Self::new()
    }
}
