//! Error types for the embedding codec.

use thiserror::Error;

/// Errors that can occur while hiding or extracting a payload.
#[derive(Error, Debug)]
pub enum StegoError {
    /// Payload does not fit in the carrier.
    #[error("Payload too large for carrier: need {needed} bytes of pixel data, have {capacity}")]
    CapacityExceeded {
        /// Buffer bytes required for header plus payload.
        needed: usize,
        /// Buffer bytes available.
        capacity: usize,
    },

    /// Buffer is smaller than the fixed header.
    #[error("Pixel buffer too small: {len} bytes, header needs {min}")]
    BufferTooSmall {
        /// Actual buffer length.
        len: usize,
        /// Minimum length required.
        min: usize,
    },

    /// Stored checksum does not match the carrier's first pixel.
    #[error("Checksum mismatch (stored {stored:08x}, computed {computed:08x}); image carries no embedded payload or is corrupted")]
    ChecksumMismatch {
        /// Checksum read from the header.
        stored: u32,
        /// Checksum recomputed from pixel 0.
        computed: u32,
    },

    /// Header declares more payload than the buffer can hold.
    #[error("Declared payload length {declared} exceeds buffer capacity of {available} bytes")]
    DeclaredLengthExceedsBuffer {
        /// Payload length read from the header.
        declared: usize,
        /// Maximum payload the buffer can hold.
        available: usize,
    },

    /// The image codec could not read the carrier.
    #[error("Image decode failed: {0}")]
    ImageDecodeFailed(String),

    /// The image codec could not write the result.
    #[error("Image encode failed: {0}")]
    ImageEncodeFailed(String),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, StegoError>;
