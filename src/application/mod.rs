// src/application/mod.rs
pub mod deck_processor;
pub mod note_retriever;
pub mod word_extractor;

pub use deck_processor::DeckProcessor;
pub use note_retriever::{AnkiConnect, NoteRetriever};
pub use word_extractor::{DirectFieldExtractor, FrontMarkedExtractor, WordExtractor};
