//! Image carrier backed by the `image` crate.
//!
//! Any lossless format `image` can read is accepted; pixels are converted to
//! 8-bit RGBA before embedding and results are always written as PNG.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;

use super::codec;
use super::error::{Result, StegoError};
use super::header::Header;
use crate::config::CodecConfig;

/// Image steganography handler.
pub struct ImageStego {
    image: DynamicImage,
}

impl ImageStego {
    /// Creates a new ImageStego from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Creates a new ImageStego from encoded image bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| StegoError::ImageDecodeFailed(e.to_string()))?;
        Ok(Self { image })
    }

    /// Creates a new ImageStego from a DynamicImage.
    pub fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Size of the RGBA pixel buffer in bytes.
    fn buffer_len(&self) -> usize {
        let (width, height) = self.dimensions();
        (width as usize) * (height as usize) * 4
    }

    /// Returns the number of payload bytes this image can hold.
    pub fn capacity(&self) -> usize {
        codec::payload_capacity(self.buffer_len())
    }

    /// Hides `data` in a copy of the image.
    pub fn hide(&self, data: &[u8]) -> Result<DynamicImage> {
        self.hide_with_config(data, &CodecConfig::default())
    }

    /// Hides `data` in a copy of the image using `config`.
    pub fn hide_with_config(&self, data: &[u8], config: &CodecConfig) -> Result<DynamicImage> {
        let mut rgba = self.image.to_rgba8();
        let header = codec::encode_payload_with_config(&mut rgba, data, config)?;
        log::debug!(
            "embedded {} bytes, checksum {:08x}",
            header.payload_len,
            header.checksum
        );
        Ok(DynamicImage::ImageRgba8(rgba))
    }

    /// Extracts the hidden payload.
    pub fn extract(&self) -> Result<Vec<u8>> {
        self.extract_with_config(&CodecConfig::default())
    }

    /// Extracts the hidden payload using `config`.
    pub fn extract_with_config(&self, config: &CodecConfig) -> Result<Vec<u8>> {
        let rgba = self.image.to_rgba8();
        codec::decode_payload_with_config(&rgba, config)
    }

    /// Reads and verifies the embedded header.
    pub fn inspect(&self) -> Result<Header> {
        codec::inspect(&self.image.to_rgba8())
    }

    /// Saves the image to a file as PNG.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_png_bytes()?)?;
        Ok(())
    }

    /// Returns the image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| StegoError::ImageEncodeFailed(e.to_string()))?;
        Ok(bytes)
    }

    /// Returns a reference to the underlying image.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Consumes self and returns the underlying image.
    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            Rgba([
                ((x * 17) % 256) as u8,
                ((y * 23) % 256) as u8,
                (((x + y) * 31) % 256) as u8,
                255,
            ])
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_capacity() {
        let stego = ImageStego::from_image(create_test_image(100, 100));
        // 10000 pixels, 8 reserved for the header
        assert_eq!(stego.capacity(), 9992);
    }

    #[test]
    fn test_hide_and_extract() {
        let stego = ImageStego::from_image(create_test_image(100, 100));
        let data = b"Hello, steganography!";

        let hidden = stego.hide(data).unwrap();
        let extracted = ImageStego::from_image(hidden).extract().unwrap();

        assert_eq!(extracted, data);
    }

    #[test]
    fn test_rgb_carrier_gets_alpha() {
        let img = ImageBuffer::from_fn(20, 20, |x, y| Rgb([x as u8 * 9, y as u8 * 7, 0x55]));
        let stego = ImageStego::from_image(DynamicImage::ImageRgb8(img));

        let hidden = stego.hide(b"rgb").unwrap();
        assert!(matches!(hidden, DynamicImage::ImageRgba8(_)));
        assert_eq!(ImageStego::from_image(hidden).extract().unwrap(), b"rgb");
    }

    #[test]
    fn test_image_too_small() {
        let stego = ImageStego::from_image(create_test_image(4, 4));
        let result = stego.hide(&[0u8; 9]);
        assert!(matches!(result, Err(StegoError::CapacityExceeded { .. })));
    }

    #[test]
    fn test_png_roundtrip() {
        let stego = ImageStego::from_image(create_test_image(64, 64));
        let hidden = stego.hide(b"Test PNG roundtrip").unwrap();

        let png_bytes = ImageStego::from_image(hidden).to_png_bytes().unwrap();
        let reloaded = ImageStego::from_bytes(&png_bytes).unwrap();

        assert_eq!(reloaded.inspect().unwrap().payload_len, 18);
        assert_eq!(reloaded.extract().unwrap(), b"Test PNG roundtrip");
    }

    #[test]
    fn test_garbage_bytes() {
        let result = ImageStego::from_bytes(b"definitely not a png");
        assert!(matches!(result, Err(StegoError::ImageDecodeFailed(_))));
    }
}
