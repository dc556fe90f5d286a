//! Payload embedding in RGBA pixel data.
//!
//! - [`keystream`]: xorshift32 byte generator
//! - [`pixel`]: one payload byte in one pixel's RGB low bits
//! - [`header`]: checksum and length in the first 8 pixels
//! - [`codec`]: header plus payload over a whole buffer
//! - [`image`]: PNG carrier on top of the `image` crate

pub mod codec;
pub mod error;
pub mod header;
pub mod image;
pub mod keystream;
pub mod pixel;

pub use codec::{
    decode_payload, decode_payload_with_config, encode_payload, encode_payload_with_config,
    inspect, payload_capacity,
};
pub use error::{Result, StegoError};
pub use header::{Header, HEADER_SIZE};
pub use self::image::ImageStego;
pub use keystream::Keystream;
