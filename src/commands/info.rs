//! Info command - report capacity and any embedded header.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pngpeek::{CodecConfig, StegoError};

use super::{load_carrier, CommandExecutor};

/// Show how much an image can hold and whether it already carries a payload.
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// Image to inspect
    #[arg(short, long)]
    pub png: PathBuf,
}

impl CommandExecutor for InfoCommand {
    fn execute(&self, _config: &CodecConfig) -> Result<()> {
        let carrier = load_carrier(&self.png)?;
        println!("  Capacity: {} bytes", carrier.capacity());

        match carrier.inspect() {
            Ok(header) => {
                println!("  Embedded payload: {} bytes", header.payload_len);
                println!("  CRC: {:08x}", header.checksum);
            }
            Err(StegoError::ChecksumMismatch { .. }) | Err(StegoError::BufferTooSmall { .. }) => {
                println!("  Embedded payload: none");
            }
            Err(e) => println!("  Embedded payload: corrupt ({})", e),
        }

        Ok(())
    }
}
