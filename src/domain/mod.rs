// src/domain/mod.rs
pub mod deck;
pub mod error;
pub mod note;

pub use deck::{DeckConfig, DeckOutcome, NoteLayout};
pub use error::DomainError;
pub use note::{Note, NoteField};
