//! Blog post form

use super::{Bind, FieldSpec, FormModel, Widget};
use crate::error::Result;
use serde_json::Value;
use sleeve_core::{PostDraft, PostId};

/// Editable post columns, in markup order
pub const POST_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "slug",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "title",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "author",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "category",
        widget: Widget::Text,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "tags",
        widget: Widget::Text,
        bind: Bind::Tags,
        default: "",
    },
    FieldSpec {
        name: "draft",
        widget: Widget::Checkbox,
        bind: Bind::Flag,
        default: "true",
    },
    FieldSpec {
        name: "publish_at",
        widget: Widget::DateTimeLocal,
        bind: Bind::Timestamp,
        default: "",
    },
    FieldSpec {
        name: "body_md",
        widget: Widget::TextArea,
        bind: Bind::Text,
        default: "",
    },
    FieldSpec {
        name: "body_html",
        widget: Widget::TextArea,
        bind: Bind::Text,
        default: "",
    },
];

/// New-post prefills, set per deployment
#[derive(Debug, Clone, Default)]
pub struct PostDefaults {
    pub author: String,
    pub category: String,
}

/// Post editor state
#[derive(Debug, Clone)]
pub struct PostEditor {
    form: FormModel,
    defaults: PostDefaults,
}

impl PostEditor {
    pub fn new() -> Self {
        Self::with_defaults(PostDefaults::default())
    }

    pub fn with_defaults(defaults: PostDefaults) -> Self {
        let mut editor = Self {
            form: FormModel::new(POST_FIELDS),
            defaults,
        };
        editor.open(None);
        editor
    }

    /// Open a post row for editing, or reset to a new-post form
    pub fn open(&mut self, row: Option<&Value>) {
        self.form.populate(row);
        if row.is_none() {
            if !self.defaults.author.is_empty() {
                self.form.set("author", self.defaults.author.clone());
            }
            if !self.defaults.category.is_empty() {
                self.form.set("category", self.defaults.category.clone());
            }
        }
    }

    /// Heading for the editor pane
    pub fn title(&self) -> String {
        match self.form.id() {
            Some(id) => format!("Edit Post #{id}"),
            None => "New Post".to_string(),
        }
    }

    pub fn id(&self) -> Option<PostId> {
        self.form.id()
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn set_draft(&mut self, on: bool) {
        self.form.set_flag("draft", on);
    }

    pub fn value(&self, field: &str) -> &str {
        self.form.value(field)
    }

    /// Coerce the widgets into a validated draft
    pub fn draft(&self) -> Result<PostDraft> {
        self.form.draft()
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }
}

impl Default for PostEditor {
    fn default() -> Self {
        Self::new()
    }
}
