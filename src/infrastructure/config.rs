// src/infrastructure/config.rs
use crate::constants::{
    DEFAULT_ANKI_CONNECT_URL, DEFAULT_ANKI_CONNECT_VERSION, DEFAULT_DIRECT_FIELD_DECK,
    DEFAULT_FRONT_MARKED_DECK,
};
use crate::domain::{DeckConfig, NoteLayout};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration for ankiwords
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub anki_connect: AnkiConnectConfig,
    #[serde(default = "default_decks")]
    pub decks: Vec<DeckConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AnkiConnectConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_version")]
    pub version: u8,
}

// Default value functions
fn default_url() -> String { DEFAULT_ANKI_CONNECT_URL.to_string() }
fn default_version() -> u8 { DEFAULT_ANKI_CONNECT_VERSION }
fn default_decks() -> Vec<DeckConfig> {
    vec![
        DeckConfig::new(DEFAULT_FRONT_MARKED_DECK, NoteLayout::FrontMarked),
        DeckConfig::new(DEFAULT_DIRECT_FIELD_DECK, NoteLayout::DirectField),
    ]
}

impl Default for AnkiConnectConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            version: default_version(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anki_connect: AnkiConnectConfig::default(),
            decks: default_decks(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }
}
