// src/application/word_extractor.rs
use crate::constants::{TARGET_WORD_CLASS, WORD_FIELD};
use crate::domain::{Note, NoteLayout};
use crate::util::markup::first_child_text_by_class;
use tracing::trace;

pub trait WordExtractor {
    /// Target word of a note, trimmed; `None` if the note doesn't carry one
    fn extract_word(&self, note: &Note) -> Option<String>;
}

/// Reads the first child of the marker element in the question markup
#[derive(Debug, Clone)]
pub struct FrontMarkedExtractor {
    marker_class: String,
}

impl FrontMarkedExtractor {
    pub fn new(marker_class: impl Into<String>) -> Self {
        Self {
            marker_class: marker_class.into(),
        }
    }
}

impl Default for FrontMarkedExtractor {
    fn default() -> Self {
        Self::new(TARGET_WORD_CLASS)
    }
}

impl WordExtractor for FrontMarkedExtractor {
    fn extract_word(&self, note: &Note) -> Option<String> {
        let text = first_child_text_by_class(note.question(), &self.marker_class)?;
        let word = text.trim();
        (!word.is_empty()).then(|| word.to_string())
    }
}

/// Reads a named field straight from the note
#[derive(Debug, Clone)]
pub struct DirectFieldExtractor {
    field: String,
}

impl DirectFieldExtractor {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Default for DirectFieldExtractor {
    fn default() -> Self {
        Self::new(WORD_FIELD)
    }
}

impl WordExtractor for DirectFieldExtractor {
    fn extract_word(&self, note: &Note) -> Option<String> {
        note.field_value(&self.field).map(str::to_string)
    }
}

pub fn extractor_for(layout: NoteLayout) -> Box<dyn WordExtractor> {
    match layout {
        NoteLayout::FrontMarked => Box::new(FrontMarkedExtractor::default()),
        NoteLayout::DirectField => Box::new(DirectFieldExtractor::default()),
    }
}

/// Words of all notes that carry one, in note order
pub fn extract_words(extractor: &dyn WordExtractor, notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .filter_map(|note| {
            let word = extractor.extract_word(note);
            if word.is_none() {
                trace!(note_id = note.note_id, "No target word in note");
            }
            word
        })
        .collect()
}
