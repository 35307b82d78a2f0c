// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("AnkiConnect request failed: {0}")]
    Transport(String),
    #[error("AnkiConnect action '{action}' returned an error: {message}")]
    Api { action: String, message: String },
    #[error("Invalid AnkiConnect response: {0}")]
    InvalidResponse(String),
}
