//! Album form

use super::{Bind, FieldSpec, FormModel, Widget};
use crate::error::Result;
use serde_json::Value;
use sleeve_core::{AlbumDraft, AlbumId, AlbumStatus, AlbumType, Visibility};

/// Editable album columns, in markup order
pub const ALBUM_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "album_artist",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "album_name",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "album_type",
        widget: Widget::Select(AlbumType::VARIANTS),
        bind: Bind::Text,
        default: "LP",
    },
    FieldSpec {
        name: "catalog_no",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "catalog_roman",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "visibility",
        widget: Widget::Select(Visibility::VARIANTS),
        bind: Bind::Text,
        default: "PUBLIC",
    },
    FieldSpec {
        name: "release_date",
        widget: Widget::Date,
        bind: Bind::Nullable,
        default: "",
    },
    FieldSpec {
        name: "physical_release_date",
        widget: Widget::Date,
        bind: Bind::Nullable,
        default: "",
    },
    FieldSpec {
        name: "album_status",
        widget: Widget::Select(AlbumStatus::VARIANTS),
        bind: Bind::Text,
        default: "In Development",
    },
    FieldSpec {
        name: "art_front",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "art_back",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "art_sleeve",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "art_sticker",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "stream_links",
        widget: Widget::TextArea,
        bind: Bind::Links,
        default: "[]",
    },
    FieldSpec {
        name: "purchase_links",
        widget: Widget::TextArea,
        bind: Bind::Links,
        default: "[]",
    },
    FieldSpec {
        name: "distributor",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "label",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "album_commentary",
        widget: Widget::TextArea,
        bind: Bind::Text,
        default: "",
    },
];

/// Album editor state
#[derive(Debug, Clone)]
pub struct AlbumEditor {
    form: FormModel,
}

impl AlbumEditor {
    pub fn new() -> Self {
        Self {
            form: FormModel::new(ALBUM_FIELDS),
        }
    }

    /// Open an album row for editing, or reset to a new-album form
    pub fn open(&mut self, row: Option<&Value>) {
        self.form.populate(row);
    }

    /// Heading for the editor pane
    pub fn title(&self) -> String {
        match self.form.id() {
            Some(id) => format!("Edit Album #{id}"),
            None => "New Album".to_string(),
        }
    }

    pub fn id(&self) -> Option<AlbumId> {
        self.form.id()
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn value(&self, field: &str) -> &str {
        self.form.value(field)
    }

    /// Coerce the widgets into a validated draft
    pub fn draft(&self) -> Result<AlbumDraft> {
        self.form.draft()
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }
}

impl Default for AlbumEditor {
    fn default() -> Self {
        Self::new()
    }
}
