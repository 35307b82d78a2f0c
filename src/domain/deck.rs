// src/domain/deck.rs
use serde::{Deserialize, Serialize};

/// How the target word is stored in a deck's notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteLayout {
    /// Word is the first child of the `targetWordFront` element in the question markup
    FrontMarked,
    /// Word is the value of the `Word` field
    DirectField,
}

impl NoteLayout {
    pub fn style_name(&self) -> &'static str {
        match self {
            NoteLayout::FrontMarked => "JPK1-style",
            NoteLayout::DirectField => "Core6k-style",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeckConfig {
    pub name: String,
    pub layout: NoteLayout,
}

impl DeckConfig {
    pub fn new(name: impl Into<String>, layout: NoteLayout) -> Self {
        Self {
            name: name.into(),
            layout,
        }
    }
}

/// What processing a single deck produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckOutcome {
    NoReviewedNotes,
    NoNoteDetails,
    Words(Vec<String>),
}
