// src/constants.rs
//
// Application-wide constants for talking to AnkiConnect and reading the
// built-in deck layouts.

/// Default AnkiConnect endpoint.
///
/// AnkiConnect binds to localhost:8765 unless reconfigured inside Anki.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_ANKI_CONNECT_URL: &str = "http://localhost:8765";

/// AnkiConnect protocol version sent with every request.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_ANKI_CONNECT_VERSION: u8 = 6;

/// Action returning the ids of notes matching a search query.
///
/// Used in: `application/note_retriever.rs`
pub const FIND_NOTES_ACTION: &str = "findNotes";

/// Action returning full note records for a list of ids.
///
/// Used in: `application/note_retriever.rs`
pub const NOTES_INFO_ACTION: &str = "notesInfo";

/// Class of the element wrapping the target word on front-marked cards.
///
/// Used in: `application/word_extractor.rs`
pub const TARGET_WORD_CLASS: &str = "targetWordFront";

/// Field holding the target word on direct-field notes.
///
/// Used in: `application/word_extractor.rs`
pub const WORD_FIELD: &str = "Word";

/// Deck read with the front-marked layout by default.
pub const DEFAULT_FRONT_MARKED_DECK: &str = "Refold JP1K v3";

/// Deck read with the direct-field layout by default.
pub const DEFAULT_DIRECT_FIELD_DECK: &str = "Japanese Core 6000 Full";
