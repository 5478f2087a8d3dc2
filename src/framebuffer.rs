//! Pixel buffer backing a canvas.
//!
//! Stores a fixed-size grid of BGRA pixels in row-major order with no row
//! padding. Every write is bounds-checked; the buffer never touches memory
//! outside its own allocation.

use crate::color::Color;
use crate::error::{Error, Result};
use log::debug;

/// Bytes per stored pixel (B, G, R, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Pattern width used by [`PixelBuffer::clear`] (16 pixels per copy).
const CLEAR_PATTERN_BYTES: usize = 64;

/// Flat BGRA pixel buffer with exclusive ownership of its storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Row length in bytes (`width * BYTES_PER_PIXEL`).
    stride: usize,
    /// BGRA pixels in row-major order.
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if either dimension is zero, the byte size
    /// overflows, a dimension cannot be addressed by `i32` coordinates, or the
    /// allocator refuses the request.
    ///
    /// # Example
    ///
    /// ```
    /// use softraster::framebuffer::PixelBuffer;
    ///
    /// let buffer = PixelBuffer::new(800, 600).unwrap();
    /// assert_eq!(buffer.stride(), 3200);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixels = allocate(width, height)?;
        debug!("allocated {width}x{height} pixel buffer ({} bytes)", pixels.len());

        Ok(Self {
            width,
            height,
            stride: (width as usize) * BYTES_PER_PIXEL,
            pixels,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the row length in bytes.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `(x, y)` addresses a pixel inside the buffer.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        u32::try_from(x).is_ok_and(|x| x < self.width)
            && u32::try_from(y).is_ok_and(|y| y < self.height)
    }

    /// Write one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` is outside
    /// `[0, width) x [0, height)`; nothing is written in that case.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_bgra());
        Ok(())
    }

    /// Read one pixel, or `None` if `(x, y)` is outside the buffer.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let idx = self.checked_index(x, y).ok()?;
        let mut bgra = [0u8; BYTES_PER_PIXEL];
        bgra.copy_from_slice(&self.pixels[idx..idx + BYTES_PER_PIXEL]);
        Some(Color::from_bgra(bgra))
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        Some(&self.pixels[start..start + self.stride])
    }

    /// Overwrite every pixel with `color`.
    ///
    /// Rows are independent, so with the `parallel` feature they are filled
    /// on the rayon thread pool.
    pub fn clear(&mut self, color: Color) {
        let bgra = color.to_bgra();

        // 64-byte pattern (16 pixels) for a chunked memcpy per row
        let mut pattern = [0u8; CLEAR_PATTERN_BYTES];
        for chunk in pattern.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&bgra);
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.pixels
                .par_chunks_exact_mut(self.stride)
                .for_each(|row| fill_row(row, &pattern, bgra));
        }

        #[cfg(not(feature = "parallel"))]
        for row in self.pixels.chunks_exact_mut(self.stride) {
            fill_row(row, &pattern, bgra);
        }
    }

    /// Replace the storage with a zeroed buffer of a new size.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PixelBuffer::new`]; on error the current storage
    /// is left untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    /// Read-only view of the raw BGRA storage for a presentation layer.
    ///
    /// The borrow guarantees no rasterization happens while the view is held.
    #[must_use]
    pub fn present(&self) -> &[u8] {
        &self.pixels
    }

    /// Copy the pixels out in RGBA order, as expected by image encoders.
    #[must_use]
    pub fn to_rgba_pixels(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len());
        for px in self.pixels.chunks_exact(BYTES_PER_PIXEL) {
            rgba.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
        }
        rgba
    }

    /// Byte index of `(x, y)` after bounds checking.
    #[inline]
    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize) * self.stride + (x as usize) * BYTES_PER_PIXEL)
    }
}

fn allocate(width: u32, height: u32) -> Result<Vec<u8>> {
    let refuse = || Error::Allocation { width, height };

    if width == 0 || height == 0 || i32::try_from(width.max(height)).is_err() {
        return Err(refuse());
    }

    let size = (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .and_then(|row| row.checked_mul(height as usize))
        .ok_or_else(refuse)?;

    let mut pixels = Vec::new();
    pixels.try_reserve_exact(size).map_err(|_| refuse())?;
    pixels.resize(size, 0);
    Ok(pixels)
}

#[inline]
fn fill_row(row: &mut [u8], pattern: &[u8; CLEAR_PATTERN_BYTES], bgra: [u8; BYTES_PER_PIXEL]) {
    let mut chunks = row.chunks_exact_mut(CLEAR_PATTERN_BYTES);
    for chunk in &mut chunks {
        chunk.copy_from_slice(pattern);
    }
    for px in chunks.into_remainder().chunks_exact_mut(BYTES_PER_PIXEL) {
        px.copy_from_slice(&bgra);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer() {
        let buffer = PixelBuffer::new(100, 50).unwrap();
        assert_eq!(buffer.width(), 100);
        assert_eq!(buffer.height(), 50);
        assert_eq!(buffer.pixel_count(), 5000);
        assert_eq!(buffer.stride(), 400);
        assert_eq!(buffer.present().len(), 100 * 50 * 4);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            PixelBuffer::new(0, 100),
            Err(Error::Allocation { width: 0, height: 100 })
        ));
        assert!(PixelBuffer::new(100, 0).is_err());
        assert!(PixelBuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_unaddressable_dimensions() {
        assert!(PixelBuffer::new(u32::MAX, 1).is_err());
    }

    #[test]
    fn test_storage_is_bgra() {
        let mut buffer = PixelBuffer::new(2, 1).unwrap();
        buffer.set_pixel(1, 0, Color::new(1, 2, 3, 4)).unwrap();
        assert_eq!(buffer.present(), &[0, 0, 0, 0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut buffer = PixelBuffer::new(10, 10).unwrap();
        buffer.set_pixel(5, 5, Color::BLUE).unwrap();
        assert_eq!(buffer.get_pixel(5, 5), Some(Color::BLUE));
        assert_eq!(buffer.get_pixel(100, 100), None);
        assert_eq!(buffer.get_pixel(-1, 0), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut buffer = PixelBuffer::new(10, 10).unwrap();
        let before = buffer.clone();

        for &(x, y) in &[(-1, 0), (0, -1), (10, 0), (0, 10), (i32::MIN, i32::MAX)] {
            let err = buffer.set_pixel(x, y, Color::RED).unwrap_err();
            assert!(err.is_out_of_bounds());
        }
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_edges_are_writable() {
        let mut buffer = PixelBuffer::new(10, 10).unwrap();
        for &(x, y) in &[(0, 0), (9, 0), (0, 9), (9, 9)] {
            buffer.set_pixel(x, y, Color::GREEN).unwrap();
            assert_eq!(buffer.get_pixel(x, y), Some(Color::GREEN));
        }
    }

    #[test]
    fn test_clear() {
        let mut buffer = PixelBuffer::new(10, 10).unwrap();
        buffer.clear(Color::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(buffer.get_pixel(x, y), Some(Color::RED));
            }
        }
    }

    #[test]
    fn test_clear_large() {
        // Wide enough to exercise the pattern copy and the remainder path
        let mut buffer = PixelBuffer::new(1921, 1080).unwrap();
        buffer.clear(Color::BLUE);

        assert_eq!(buffer.get_pixel(0, 0), Some(Color::BLUE));
        assert_eq!(buffer.get_pixel(960, 540), Some(Color::BLUE));
        assert_eq!(buffer.get_pixel(1920, 1079), Some(Color::BLUE));
    }

    #[test]
    fn test_row_access() {
        let mut buffer = PixelBuffer::new(10, 5).unwrap();
        buffer.set_pixel(3, 2, Color::WHITE).unwrap();

        let row = buffer.row(2).unwrap();
        assert_eq!(row.len(), 40);
        assert_eq!(&row[12..16], &[255, 255, 255, 255]);
        assert!(buffer.row(5).is_none());
    }

    #[test]
    fn test_resize_recreates_storage() {
        let mut buffer = PixelBuffer::new(10, 10).unwrap();
        buffer.clear(Color::WHITE);
        buffer.resize(20, 5).unwrap();

        assert_eq!(buffer.width(), 20);
        assert_eq!(buffer.height(), 5);
        assert_eq!(buffer.present().len(), 20 * 5 * 4);
        assert_eq!(buffer.get_pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_failed_resize_keeps_storage() {
        let mut buffer = PixelBuffer::new(4, 4).unwrap();
        buffer.clear(Color::RED);
        assert!(buffer.resize(0, 4).is_err());
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.get_pixel(3, 3), Some(Color::RED));
    }

    #[test]
    fn test_to_rgba_pixels() {
        let mut buffer = PixelBuffer::new(1, 1).unwrap();
        buffer.clear(Color::new(1, 2, 3, 4));
        assert_eq!(buffer.to_rgba_pixels(), vec![1, 2, 3, 4]);
    }
}
