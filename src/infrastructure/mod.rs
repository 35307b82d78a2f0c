// src/infrastructure/mod.rs
pub mod anki_connect;
pub mod config;

pub use anki_connect::AnkiConnectClient;
pub use config::{AnkiConnectConfig, Config};
