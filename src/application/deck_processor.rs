// src/application/deck_processor.rs
use crate::application::note_retriever::{AnkiConnect, NoteRetriever};
use crate::application::word_extractor::{extract_words, extractor_for};
use crate::domain::{DeckConfig, DeckOutcome};
use crate::ports::ReportPresenter;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs retrieval, extraction and reporting for each configured deck
pub struct DeckProcessor<C: AnkiConnect> {
    retriever: NoteRetriever<C>,
    presenter: ReportPresenter,
}

impl<C: AnkiConnect> DeckProcessor<C> {
    pub fn new(client: C) -> Self {
        Self {
            retriever: NoteRetriever::new(client),
            presenter: ReportPresenter::new(),
        }
    }

    /// Process decks in order; the first API failure aborts the run.
    pub fn process_decks<W: Write>(
        &mut self,
        decks: &[DeckConfig],
        out: &mut W,
    ) -> Result<Vec<DeckOutcome>> {
        decks
            .iter()
            .map(|deck| self.process_deck(deck, out))
            .collect()
    }

    #[instrument(level = "debug", skip(self, deck, out), fields(deck = %deck.name))]
    pub fn process_deck<W: Write>(&mut self, deck: &DeckConfig, out: &mut W) -> Result<DeckOutcome> {
        emit(out, &self.presenter.deck_header(deck))?;

        let ids = self
            .retriever
            .find_reviewed_note_ids(&deck.name)
            .with_context(|| format!("Failed to find reviewed notes in deck '{}'", deck.name))?;
        if ids.is_empty() {
            emit(out, &self.presenter.no_reviewed_notes(deck))?;
            return Ok(DeckOutcome::NoReviewedNotes);
        }
        emit(out, &self.presenter.reviewed_count(ids.len()))?;

        let notes = self
            .retriever
            .fetch_note_details(&ids)
            .with_context(|| format!("Failed to fetch notes of deck '{}'", deck.name))?;
        if notes.is_empty() {
            debug!("notesInfo returned no notes");
            return Ok(DeckOutcome::NoNoteDetails);
        }

        let extractor = extractor_for(deck.layout);
        let words = extract_words(extractor.as_ref(), &notes);
        info!(
            notes = notes.len(),
            words = words.len(),
            "Extracted target words"
        );
        emit(out, &self.presenter.render_words(deck.layout, &words))?;

        Ok(DeckOutcome::Words(words))
    }
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{text}").context("Failed to write report")
}
