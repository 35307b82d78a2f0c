// src/ports/report.rs
use crate::domain::{DeckConfig, NoteLayout};

/// Renders the plain-text lines printed for each deck
#[derive(Debug, Default)]
pub struct ReportPresenter;

impl ReportPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Leading blank line separates decks
    pub fn deck_header(&self, deck: &DeckConfig) -> String {
        format!(
            "\nProcessing {} deck: {}",
            deck.layout.style_name(),
            deck.name
        )
    }

    pub fn no_reviewed_notes(&self, deck: &DeckConfig) -> String {
        format!("No reviewed notes found in deck: {}", deck.name)
    }

    pub fn reviewed_count(&self, count: usize) -> String {
        format!("Found {count} reviewed notes.")
    }

    pub fn render_words(&self, layout: NoteLayout, words: &[String]) -> String {
        let style = layout.style_name();
        if words.is_empty() {
            format!("Parsing {style} deck...\nNo target words found in {style} deck.")
        } else {
            format!(
                "Parsing {style} deck...\nWords in comma-separated format:\n{}",
                words.join(",")
            )
        }
    }
}
