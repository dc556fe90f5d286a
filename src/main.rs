//! pngpeek - hide files inside PNG pixels
//!
//! CLI front-end over the `pngpeek` library.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;

use commands::{CommandExecutor, DecodeCommand, EncodeCommand, InfoCommand};
use pngpeek::CodecConfig;

/// pngpeek - Secret message encoder/decoder
///
/// Hides a file in the low bits of a PNG's pixels and recovers it later.
#[derive(Parser)]
#[command(name = "pngpeek")]
#[command(version)]
#[command(about = "Hide files in the low bits of PNG pixels")]
#[command(long_about = None)]
struct Cli {
    /// Codec configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a file inside a carrier image
    Encode(EncodeCommand),

    /// Recover a hidden file from an image
    Decode(DecodeCommand),

    /// Show capacity and embedded header of an image
    Info(InfoCommand),
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => CodecConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CodecConfig::default(),
    };
    log::debug!("codec config: {:?}", config);

    match &cli.command {
        Commands::Encode(cmd) => cmd.execute(&config),
        Commands::Decode(cmd) => cmd.execute(&config),
        Commands::Info(cmd) => cmd.execute(&config),
    }
}
