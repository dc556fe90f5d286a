//! Decode command - recover a hidden file from a PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pngpeek::CodecConfig;

use super::{load_carrier, CommandExecutor};

/// Extract the file hidden in an image.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Image carrying the payload
    #[arg(short, long)]
    pub png: PathBuf,

    /// Where to write the extracted bytes
    pub output: PathBuf,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self, config: &CodecConfig) -> Result<()> {
        let carrier = load_carrier(&self.png)?;

        let header = carrier.inspect().context("Not a pngpeek image")?;
        println!("CRC {:08x}", header.checksum);

        let payload = carrier
            .extract_with_config(config)
            .context("Failed to extract payload")?;

        std::fs::write(&self.output, &payload)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;
        println!(
            "Extracted {} bytes to {}",
            payload.len(),
            self.output.display()
        );

        Ok(())
    }
}
