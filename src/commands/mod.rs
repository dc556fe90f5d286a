//! Command module - one module per subcommand.
//!
//! Each command is a clap `Args` struct implementing `CommandExecutor`.

mod decode;
mod encode;
mod info;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use info::InfoCommand;

use std::path::Path;

use anyhow::{Context, Result};

use pngpeek::{CodecConfig, ImageStego};

/// Trait for command execution.
///
/// Each command struct holds its parsed arguments; the codec config is
/// shared by every subcommand.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self, config: &CodecConfig) -> Result<()>;
}

/// Loads a carrier image and reports its size.
fn load_carrier(path: &Path) -> Result<ImageStego> {
    let stego = ImageStego::from_file(path)
        .with_context(|| format!("Failed to load image {}", path.display()))?;
    let (width, height) = stego.dimensions();
    println!("Loaded image {} ({}x{})", path.display(), width, height);
    Ok(stego)
}
