//! Encode command - hide a file inside a PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pngpeek::{CodecConfig, ImageStego};

use super::{load_carrier, CommandExecutor};

/// Hide a file in the pixels of a carrier image.
///
/// The carrier can be any lossless image; the output is always PNG.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Carrier image
    #[arg(short, long)]
    pub png: PathBuf,

    /// File to hide
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the resulting PNG
    pub output: PathBuf,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self, config: &CodecConfig) -> Result<()> {
        let carrier = load_carrier(&self.png)?;

        let payload = std::fs::read(&self.input)
            .with_context(|| format!("Failed to read input file {}", self.input.display()))?;
        log::debug!("payload {} bytes, capacity {}", payload.len(), carrier.capacity());

        let hidden = carrier
            .hide_with_config(&payload, config)
            .context("Failed to embed payload")?;
        let hidden = ImageStego::from_image(hidden);

        let header = hidden.inspect().context("Embedded header did not verify")?;
        println!("CRC {:08x}", header.checksum);

        hidden
            .save(&self.output)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;
        println!(
            "Hid {} bytes in {}",
            payload.len(),
            self.output.display()
        );

        Ok(())
    }
}
