// src/application/note_retriever.rs
use crate::constants::{FIND_NOTES_ACTION, NOTES_INFO_ACTION};
use crate::domain::{DomainError, Note};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, instrument};

pub trait AnkiConnect {
    /// Invoke an AnkiConnect action and return the unwrapped `result`.
    ///
    /// `params` defaults to an empty object; an absent `result` comes back as `Value::Null`.
    fn call(&mut self, action: &str, params: Option<Value>) -> Result<Value, DomainError>;
}

impl<C: AnkiConnect + ?Sized> AnkiConnect for &mut C {
    fn call(&mut self, action: &str, params: Option<Value>) -> Result<Value, DomainError> {
        (**self).call(action, params)
    }
}

/// Build the search predicate for reviewed notes of a deck.
///
/// Backslashes and double quotes in the deck name are escaped so the name
/// stays inside the quoted `deck:` term.
///
/// # Examples
///
/// ```
/// use ankiwords::application::note_retriever::search_query;
///
/// assert_eq!(search_query("Refold JP1K v3"), r#"deck:"Refold JP1K v3" is:review"#);
/// ```
pub fn search_query(deck_name: &str) -> String {
    let escaped = deck_name.replace('\\', r"\\").replace('"', r#"\""#);
    format!(r#"deck:"{escaped}" is:review"#)
}

fn decode_result<T: DeserializeOwned + Default>(action: &str, value: Value) -> Result<T, DomainError> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value)
        .map_err(|e| DomainError::InvalidResponse(format!("unexpected result for {action}: {e}")))
}

pub struct NoteRetriever<C: AnkiConnect> {
    client: C,
}

impl<C: AnkiConnect> NoteRetriever<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Ids of all notes in `deck_name` that have been reviewed at least once
    #[instrument(level = "debug", skip(self))]
    pub fn find_reviewed_note_ids(&mut self, deck_name: &str) -> Result<Vec<i64>, DomainError> {
        let query = search_query(deck_name);
        let result = self
            .client
            .call(FIND_NOTES_ACTION, Some(json!({ "query": query })))?;
        let ids: Vec<i64> = decode_result(FIND_NOTES_ACTION, result)?;

        debug!(count = ids.len(), "Found reviewed note ids");
        Ok(ids)
    }

    #[instrument(level = "debug", skip(self, ids), fields(count = ids.len()))]
    pub fn fetch_note_details(&mut self, ids: &[i64]) -> Result<Vec<Note>, DomainError> {
        let result = self
            .client
            .call(NOTES_INFO_ACTION, Some(json!({ "notes": ids })))?;
        let notes: Vec<Note> = decode_result(NOTES_INFO_ACTION, result)?;

        debug!(count = notes.len(), "Fetched note details");
        Ok(notes)
    }
}
