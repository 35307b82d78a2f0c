// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Path to TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// AnkiConnect endpoint, overrides the config file
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
