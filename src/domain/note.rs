// src/domain/note.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A note record as returned by AnkiConnect's `notesInfo`.
///
/// Every key is optional on the wire; AnkiConnect answers unknown ids with `{}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default)]
    pub note_id: i64,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub fields: HashMap<String, NoteField>,
    /// Rendered question markup, only present on search-oriented responses
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NoteField {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub order: i64,
}

impl Note {
    /// Trimmed value of a field, `None` when the field is absent or blank.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|f| f.value.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn question(&self) -> &str {
        self.question.as_deref().unwrap_or("")
    }
}
