//! Declarative form binding
//!
//! Each editable entity declares a static field table mapping column names
//! to widget kinds and coercion rules. [`FormModel`] holds the widget values
//! and moves them between entity JSON and request payloads, so the save
//! handlers never read individual inputs.

pub mod album;
pub mod post;
pub mod track;

use crate::error::{ConsoleError, Result};
use chrono::{DateTime, Local, Utc};
use serde_json::{Map, Value};
use sleeve_core::types::{tags, timestamp};
use sleeve_core::LinkList;
use std::collections::HashMap;

/// How a field is edited in the console markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    /// Single-line text input
    Text,
    /// Multi-line text area
    TextArea,
    /// Number input
    Number,
    /// Date input (`YYYY-MM-DD`)
    Date,
    /// Local datetime input (`YYYY-MM-DDTHH:MM`)
    DateTimeLocal,
    /// Checkbox
    Checkbox,
    /// Fixed-option menu
    Select(&'static [&'static str]),
}

/// How a widget value maps into the row payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bind {
    /// Text column; empty string is stored as-is
    Text,
    /// Nullable column; empty string becomes JSON null
    Nullable,
    /// Integer column; empty or unparseable input becomes JSON null
    Integer,
    /// Text column holding a JSON-encoded link array
    Links,
    /// Text-array column edited as a comma-separated list
    Tags,
    /// Timestamp column edited as local wall time
    Timestamp,
    /// Boolean column
    Flag,
}

/// One editable column of an entity form
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Column name in the table, and key in the payload
    pub name: &'static str,
    pub widget: Widget,
    pub bind: Bind,
    /// Widget value in "new" mode
    pub default: &'static str,
}

/// Widget values for one entity form.
///
/// The row id is held separately and never enters the payload; it only
/// decides whether a save inserts or updates.
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: &'static [FieldSpec],
    values: HashMap<&'static str, String>,
    flags: HashMap<&'static str, bool>,
    id: Option<i64>,
}

impl FormModel {
    /// Create a form in "new" mode with the declared defaults
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        let mut form = Self {
            fields,
            values: HashMap::new(),
            flags: HashMap::new(),
            id: None,
        };
        form.populate(None);
        form
    }

    /// Fill the widgets from an entity row, or reset to defaults
    pub fn populate(&mut self, row: Option<&Value>) {
        self.id = row.and_then(|r| r.get("id")).and_then(Value::as_i64);
        self.values.clear();
        self.flags.clear();

        for spec in self.fields {
            let cell = row.and_then(|r| r.get(spec.name));
            match spec.bind {
                Bind::Flag => {
                    let on = match cell {
                        Some(value) => value.as_bool().unwrap_or(false),
                        None => spec.default == "true",
                    };
                    self.flags.insert(spec.name, on);
                }
                _ => {
                    let text = match cell {
                        Some(value) => widget_text(spec.bind, value),
                        None => spec.default.to_string(),
                    };
                    self.values.insert(spec.name, text);
                }
            }
        }
    }

    /// Set a text widget's value
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        if let Some(spec) = self.spec(field) {
            self.values.insert(spec.name, value.into());
        }
    }

    /// Set a checkbox widget's value
    pub fn set_flag(&mut self, field: &str, on: bool) {
        if let Some(spec) = self.spec(field) {
            self.flags.insert(spec.name, on);
        }
    }

    /// Current value of a text widget
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Current value of a checkbox widget
    pub fn flag(&self, field: &str) -> bool {
        self.flags.get(field).copied().unwrap_or(false)
    }

    /// Id of the row being edited, if any
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// The field table this form was declared with
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Coerce the widget values into a request payload.
    ///
    /// Malformed link-list JSON degrades to an empty list; a malformed
    /// timestamp is the one input rejected here, before any request is made.
    pub fn serialize(&self) -> Result<Map<String, Value>> {
        let mut payload = Map::new();

        for spec in self.fields {
            let value = match spec.bind {
                Bind::Flag => Value::Bool(self.flag(spec.name)),
                Bind::Text => Value::String(self.value(spec.name).to_string()),
                Bind::Nullable => {
                    let text = self.value(spec.name);
                    if text.is_empty() {
                        Value::Null
                    } else {
                        Value::String(text.to_string())
                    }
                }
                Bind::Integer => match self.value(spec.name).trim().parse::<i64>() {
                    Ok(n) => Value::Number(n.into()),
                    Err(_) => Value::Null,
                },
                Bind::Links => {
                    Value::String(LinkList::parse(self.value(spec.name)).to_json())
                }
                Bind::Tags => Value::from(tags::parse_tags(self.value(spec.name))),
                Bind::Timestamp => {
                    match timestamp::from_local_input(self.value(spec.name), &Local)? {
                        Some(instant) => Value::String(instant.to_rfc3339()),
                        None => Value::Null,
                    }
                }
            };
            payload.insert(spec.name.to_string(), value);
        }

        Ok(payload)
    }

    /// Serialize and decode into a typed draft
    pub fn draft<T>(&self) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let payload = self.serialize()?;
        serde_json::from_value(Value::Object(payload))
            .map_err(|error| ConsoleError::Form(error.to_string()))
    }

    fn spec(&self, field: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == field)
    }
}

/// Render one entity cell as widget text
fn widget_text(bind: Bind, cell: &Value) -> String {
    match bind {
        Bind::Links => serde_json::from_value::<LinkList>(cell.clone())
            .unwrap_or_default()
            .to_json(),
        Bind::Tags => {
            let list = serde_json::from_value::<Vec<String>>(cell.clone()).unwrap_or_default();
            tags::join_tags(&list)
        }
        Bind::Timestamp => cell
            .as_str()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|instant| timestamp::to_local_input(instant.with_timezone(&Utc), &Local))
            .unwrap_or_default(),
        Bind::Integer => cell.as_i64().map(|n| n.to_string()).unwrap_or_default(),
        Bind::Flag => String::new(),
        Bind::Text | Bind::Nullable => cell.as_str().unwrap_or("").to_string(),
    }
}
