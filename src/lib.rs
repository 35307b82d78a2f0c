// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::cli::args::Args;
use anyhow::Result;
use application::DeckProcessor;
use infrastructure::{AnkiConnectClient, Config};
use std::io;
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting ankiwords with arguments");

    let mut config = match args.config {
        Some(ref path) => {
            debug!(?path, "Loading config file");
            Config::load(path)?
        }
        None => Config::default(),
    };
    if let Some(url) = args.url {
        debug!(%url, "Overriding AnkiConnect endpoint");
        config.anki_connect.url = url;
    }

    let client = AnkiConnectClient::from_config(&config.anki_connect)?;
    info!(url = client.url(), decks = config.decks.len(), "Extracting reviewed words");

    let mut processor = DeckProcessor::new(client);
    let stdout = io::stdout();
    let outcomes = processor.process_decks(&config.decks, &mut stdout.lock())?;
    debug!(?outcomes, "All decks processed");

    Ok(())
}
