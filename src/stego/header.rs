//! Fixed 8-pixel header holding the carrier checksum and payload length.
//!
//! Layout (control byte 0 for every pixel):
//! - pixels 0..4: checksum, little-endian, one byte per pixel
//! - pixels 4..8: payload length, little-endian, one byte per pixel

use super::error::{Result, StegoError};
use super::pixel::{self, PIXEL_SIZE};

/// Size of the header in buffer bytes.
pub const HEADER_SIZE: usize = 8 * PIXEL_SIZE;

/// Control byte used for every header pixel.
const HEADER_CONTROL: u8 = 0;

/// Byte offset of the length field.
const LENGTH_OFFSET: usize = 4 * PIXEL_SIZE;

/// Decoded header contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// CRC-32 of pixel 0 with its low bits cleared.
    pub checksum: u32,
    /// Number of payload bytes following the header.
    pub payload_len: u32,
}

impl Header {
    /// Returns true if `checksum` matches the carrier's first pixel.
    pub fn verify(&self, pixels: &[u8]) -> Result<bool> {
        Ok(carrier_checksum(pixels)? == self.checksum)
    }

    /// Fails with [`StegoError::ChecksumMismatch`] unless [`Header::verify`] holds.
    pub fn ensure_authentic(&self, pixels: &[u8]) -> Result<()> {
        let computed = carrier_checksum(pixels)?;
        if computed != self.checksum {
            log::warn!(
                "checksum mismatch: stored {:08x}, computed {:08x}",
                self.checksum,
                computed
            );
            return Err(StegoError::ChecksumMismatch {
                stored: self.checksum,
                computed,
            });
        }
        Ok(())
    }
}

/// CRC-32 over pixel 0 with the low bits of all four bytes cleared.
pub fn carrier_checksum(pixels: &[u8]) -> Result<u32> {
    let first = first_pixel(pixels)?;
    Ok(crc32fast::hash(&pixel::clear_low_bits(&first)))
}

/// Writes the header for a payload of `payload_len` bytes.
///
/// Pixel 0 has its low bits cleared (alpha included) before the checksum is
/// taken, so the checksum only depends on bits the codec never changes.
pub fn write_header(pixels: &mut [u8], payload_len: u32) -> Result<Header> {
    let cleared = pixel::clear_low_bits(&first_pixel(pixels)?);
    pixels[..PIXEL_SIZE].copy_from_slice(&cleared);

    let checksum = crc32fast::hash(&cleared);
    write_word(&mut pixels[..LENGTH_OFFSET], checksum);
    write_word(&mut pixels[LENGTH_OFFSET..HEADER_SIZE], payload_len);

    Ok(Header {
        checksum,
        payload_len,
    })
}

/// Reads the header without verifying it.
pub fn read_header(pixels: &[u8]) -> Result<Header> {
    ensure_header_room(pixels.len())?;

    Ok(Header {
        checksum: read_word(&pixels[..LENGTH_OFFSET]),
        payload_len: read_word(&pixels[LENGTH_OFFSET..HEADER_SIZE]),
    })
}

fn ensure_header_room(len: usize) -> Result<()> {
    if len < HEADER_SIZE {
        return Err(StegoError::BufferTooSmall {
            len,
            min: HEADER_SIZE,
        });
    }
    Ok(())
}

fn first_pixel(pixels: &[u8]) -> Result<[u8; PIXEL_SIZE]> {
    ensure_header_room(pixels.len())?;
    let mut first = [0u8; PIXEL_SIZE];
    first.copy_from_slice(&pixels[..PIXEL_SIZE]);
    Ok(first)
}

/// Stores `word` one little-endian byte per pixel of `region`.
fn write_word(region: &mut [u8], word: u32) {
    for (px, byte) in region.chunks_exact_mut(PIXEL_SIZE).zip(word.to_le_bytes()) {
        let mut pixel = [0u8; PIXEL_SIZE];
        pixel.copy_from_slice(px);
        pixel::pack(&mut pixel, byte, HEADER_CONTROL);
        px.copy_from_slice(&pixel);
    }
}

fn read_word(region: &[u8]) -> u32 {
    let mut bytes = [0u8; 4];
    for (slot, px) in bytes.iter_mut().zip(region.chunks_exact(PIXEL_SIZE)) {
        let mut pixel = [0u8; PIXEL_SIZE];
        pixel.copy_from_slice(px);
        *slot = pixel::unpack(&pixel, HEADER_CONTROL);
    }
    u32::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carrier(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 37 % 251) as u8 | 0x80).collect()
    }

    #[test]
    fn test_checksum_of_black_pixel() {
        assert_eq!(carrier_checksum(&[0u8; HEADER_SIZE]).unwrap(), 0x2144_DF1C);
    }

    #[test]
    fn test_write_then_read() {
        let mut pixels = carrier(64);
        let written = write_header(&mut pixels, 0x0102_0304).unwrap();
        let read = read_header(&pixels).unwrap();

        assert_eq!(written, read);
        assert_eq!(read.payload_len, 0x0102_0304);
        assert!(read.verify(&pixels).unwrap());
    }

    #[test]
    fn test_header_occupies_first_eight_pixels() {
        let original = carrier(64);
        let mut pixels = original.clone();
        write_header(&mut pixels, 7).unwrap();

        assert_eq!(&pixels[HEADER_SIZE..], &original[HEADER_SIZE..]);
        // alpha of pixels 1..8 is untouched, only pixel 0's alpha is cleared
        for i in 1..8 {
            assert_eq!(pixels[i * 4 + 3], original[i * 4 + 3]);
        }
        assert_eq!(pixels[3], original[3] & 0xF8);
    }

    #[test]
    fn test_length_stored_in_pixels_four_to_seven() {
        let mut pixels = vec![0u8; HEADER_SIZE];
        write_header(&mut pixels, 0x0000_00C1).unwrap();

        // 0xC1 under control 0: R=0b11, G=0b000, B=0b001
        assert_eq!(&pixels[16..20], &[0b11, 0, 0b001, 0]);
        assert!(pixels[20..32].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_checksum_ignores_low_bits() {
        let mut a = carrier(HEADER_SIZE);
        let mut b = a.clone();
        b[0] ^= 0x07;
        b[3] ^= 0x05;

        let ha = write_header(&mut a, 1).unwrap();
        let hb = write_header(&mut b, 1).unwrap();
        assert_eq!(ha.checksum, hb.checksum);
    }

    #[test]
    fn test_tampered_high_bit_fails_verification() {
        let mut pixels = carrier(HEADER_SIZE);
        let header = write_header(&mut pixels, 3).unwrap();
        pixels[1] ^= 0x40;

        assert!(!header.verify(&pixels).unwrap());
        assert!(matches!(
            header.ensure_authentic(&pixels),
            Err(StegoError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_short_buffer_rejected() {
        let mut pixels = vec![0u8; HEADER_SIZE - 1];
        assert!(matches!(
            write_header(&mut pixels, 0),
            Err(StegoError::BufferTooSmall { len: 31, min: 32 })
        ));
        assert!(matches!(
            read_header(&pixels),
            Err(StegoError::BufferTooSmall { .. })
        ));
    }
}
