//! # pngpeek - hide files inside PNG pixels
//!
//! Stores an arbitrary byte payload in the low bits of an RGBA image and
//! recovers it later without any external key.
//!
//! ## How it works
//!
//! - The first 8 pixels hold a header: a CRC-32 of pixel 0 (low bits
//!   cleared) and the payload length.
//! - Each following pixel holds one payload byte spread over R, G and B:
//!   two channels take 3 bits, one takes 2.
//! - Which channel takes the 2-bit field changes per pixel, driven by an
//!   xorshift32 keystream seeded from the header checksum.
//! - Decoding recomputes the checksum and refuses images that don't match.
//!
//! This is obfuscation with tamper evidence, not encryption.
//!
//! ## Example
//!
//! ```rust
//! use pngpeek::{decode_payload, encode_payload};
//!
//! let mut pixels = vec![0x80u8; 16 * 4];
//! encode_payload(&mut pixels, b"hi").unwrap();
//! assert_eq!(decode_payload(&pixels).unwrap(), b"hi");
//! ```

pub mod config;
pub mod stego;

pub use config::{CodecConfig, ConfigError};
pub use stego::{
    decode_payload, decode_payload_with_config, encode_payload, encode_payload_with_config,
    inspect, payload_capacity, Header, ImageStego, Keystream, StegoError, HEADER_SIZE,
};
