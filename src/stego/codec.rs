//! Header plus payload over a whole RGBA pixel buffer.
//!
//! Encode: capacity check, header write, keystream reseed, one payload byte
//! per pixel from pixel 8 onwards. Decode mirrors it and refuses to trust
//! anything before the checksum has been verified.

use super::error::{Result, StegoError};
use super::header::{self, Header, HEADER_SIZE};
use super::keystream::Keystream;
use super::pixel::{self, PIXEL_SIZE};
use crate::config::CodecConfig;

/// Largest payload a buffer of `buffer_len` bytes can carry.
pub fn payload_capacity(buffer_len: usize) -> usize {
    buffer_len.saturating_sub(HEADER_SIZE) / PIXEL_SIZE
}

/// Embeds `payload` into `pixels` with the default configuration.
pub fn encode_payload(pixels: &mut [u8], payload: &[u8]) -> Result<Header> {
    encode_payload_with_config(pixels, payload, &CodecConfig::default())
}

/// Embeds `payload` into `pixels`.
///
/// On error the buffer is left untouched.
pub fn encode_payload_with_config(
    pixels: &mut [u8],
    payload: &[u8],
    config: &CodecConfig,
) -> Result<Header> {
    let needed = payload
        .len()
        .checked_mul(PIXEL_SIZE)
        .and_then(|n| n.checked_add(HEADER_SIZE))
        .unwrap_or(usize::MAX);
    let payload_len = u32::try_from(payload.len()).ok();

    let payload_len = match payload_len {
        Some(len) if needed <= pixels.len() => len,
        _ => {
            return Err(StegoError::CapacityExceeded {
                needed,
                capacity: pixels.len(),
            })
        }
    };

    let header = header::write_header(pixels, payload_len)?;
    log::debug!(
        "header written: checksum {:08x}, {} payload bytes",
        header.checksum,
        header.payload_len
    );

    let mut keystream = Keystream::new(config.initial_seed);
    keystream.seed(config.payload_seed(header.checksum));

    for (px, &byte) in payload_pixels_mut(pixels).zip(payload) {
        let mut pixel = [0u8; PIXEL_SIZE];
        pixel.copy_from_slice(px);
        pixel::pack(&mut pixel, byte, keystream.next_byte());
        px.copy_from_slice(&pixel);
    }

    Ok(header)
}

/// Extracts the payload from `pixels` with the default configuration.
pub fn decode_payload(pixels: &[u8]) -> Result<Vec<u8>> {
    decode_payload_with_config(pixels, &CodecConfig::default())
}

/// Extracts the payload from `pixels`. The buffer is only read.
pub fn decode_payload_with_config(pixels: &[u8], config: &CodecConfig) -> Result<Vec<u8>> {
    let header = inspect(pixels)?;

    let mut keystream = Keystream::new(config.initial_seed);
    keystream.seed(config.payload_seed(header.checksum));

    let payload: Vec<u8> = pixels[HEADER_SIZE..]
        .chunks_exact(PIXEL_SIZE)
        .take(header.payload_len as usize)
        .map(|px| {
            let mut pixel = [0u8; PIXEL_SIZE];
            pixel.copy_from_slice(px);
            pixel::unpack(&pixel, keystream.next_byte())
        })
        .collect();

    log::debug!("extracted {} payload bytes", payload.len());
    Ok(payload)
}

/// Reads and validates the header without extracting the payload.
///
/// Fails if the buffer is too small, the checksum does not match pixel 0,
/// or the declared length runs past the end of the buffer.
pub fn inspect(pixels: &[u8]) -> Result<Header> {
    let header = header::read_header(pixels)?;
    log::debug!(
        "header read: checksum {:08x}, declared length {}",
        header.checksum,
        header.payload_len
    );

    header.ensure_authentic(pixels)?;

    let available = payload_capacity(pixels.len());
    let declared = header.payload_len as usize;
    if declared > available {
        return Err(StegoError::DeclaredLengthExceedsBuffer {
            declared,
            available,
        });
    }

    Ok(header)
}

fn payload_pixels_mut(pixels: &mut [u8]) -> impl Iterator<Item = &mut [u8]> {
    pixels[HEADER_SIZE..].chunks_exact_mut(PIXEL_SIZE)
}
