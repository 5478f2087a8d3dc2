//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::error::Result;
use crate::framebuffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for pixel buffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a pixel buffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::encode(buffer, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode a pixel buffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(buffer: &PixelBuffer) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        Self::encode(buffer, &mut bytes)?;
        Ok(bytes)
    }

    fn encode<W: Write>(buffer: &PixelBuffer, sink: W) -> Result<()> {
        let mut encoder = png::Encoder::new(sink, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        // Storage is BGRA; PNG wants RGBA.
        writer.write_image_data(&buffer.to_rgba_pixels())?;
        Ok(())
    }
}
