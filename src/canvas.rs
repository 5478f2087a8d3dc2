//! Drawing surface in logical coordinates.
//!
//! A [`Canvas`] owns a [`PixelBuffer`] and a scan table, and routes every
//! primitive through the logical-to-buffer mapping before writing. Writes
//! that land outside the buffer are reported, never clipped silently.

use crate::color::Color;
use crate::coords::to_buffer_space;
use crate::error::Result;
use crate::framebuffer::PixelBuffer;
use crate::geometry::{Circle, LineSegment, Point};
use crate::render::{
    dda_line, midpoint_circle, midpoint_line, second_order_circle, CircleAlgorithm, LineAlgorithm,
    ScanSpanFiller, ScanTable,
};
use log::debug;

/// Default canvas width, matching an 800x600 window.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default canvas height.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Trait for primitives that can draw themselves onto a canvas.
pub trait Drawable {
    /// Draw this primitive in `color`.
    fn draw(&self, canvas: &mut Canvas, color: Color) -> Result<()>;
}

/// Builder for a [`Canvas`].
#[derive(Debug, Clone)]
pub struct CanvasBuilder {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Algorithm used by [`Canvas::draw_line`].
    line_algorithm: LineAlgorithm,
    /// Variant used by [`Canvas::draw_circle`].
    circle_algorithm: CircleAlgorithm,
    /// Color applied on creation and after a resize.
    clear_color: Color,
}

impl Default for CanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasBuilder {
    /// Create a builder with an 800x600 opaque-black canvas.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            line_algorithm: LineAlgorithm::default(),
            circle_algorithm: CircleAlgorithm::default(),
            clear_color: Color::BLACK,
        }
    }

    /// Set the buffer dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the algorithm used by [`Canvas::draw_line`].
    #[must_use]
    pub fn line_algorithm(mut self, algorithm: LineAlgorithm) -> Self {
        self.line_algorithm = algorithm;
        self
    }

    /// Set the variant used by [`Canvas::draw_circle`].
    #[must_use]
    pub fn circle_algorithm(mut self, algorithm: CircleAlgorithm) -> Self {
        self.circle_algorithm = algorithm;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Allocate the buffer and build the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Allocation`] if the buffer cannot be created.
    pub fn build(self) -> Result<Canvas> {
        let mut buffer = PixelBuffer::new(self.width, self.height)?;
        buffer.clear(self.clear_color);

        Ok(Canvas {
            buffer,
            spans: ScanSpanFiller::new(),
            line_algorithm: self.line_algorithm,
            circle_algorithm: self.circle_algorithm,
            clear_color: self.clear_color,
        })
    }
}

/// Logical-space drawing surface over a [`PixelBuffer`].
///
/// # Example
///
/// ```
/// use softraster::prelude::*;
///
/// let mut canvas = Canvas::new(64, 64).unwrap();
/// canvas.draw_line(LineSegment::new(-10, 0, 10, 0), Color::CYAN).unwrap();
/// canvas.draw_circle(Circle::new(0, 0, 20), Color::MAGENTA).unwrap();
/// assert_eq!(canvas.get_pixel(0, 0), Some(Color::CYAN));
/// ```
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: PixelBuffer,
    spans: ScanSpanFiller,
    line_algorithm: LineAlgorithm,
    circle_algorithm: CircleAlgorithm,
    clear_color: Color,
}

impl Canvas {
    /// Create a canvas with default settings and the given size.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Allocation`] if the buffer cannot be created.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        CanvasBuilder::new().dimensions(width, height).build()
    }

    /// Start building a canvas.
    #[must_use]
    pub fn builder() -> CanvasBuilder {
        CanvasBuilder::new()
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// The backing buffer.
    #[must_use]
    pub const fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Recorded scanline spans.
    #[must_use]
    pub fn scan_table(&self) -> &ScanTable {
        self.spans.table()
    }

    /// Algorithm used by [`Canvas::draw_line`].
    #[must_use]
    pub const fn line_algorithm(&self) -> LineAlgorithm {
        self.line_algorithm
    }

    /// Change the algorithm used by [`Canvas::draw_line`].
    pub fn set_line_algorithm(&mut self, algorithm: LineAlgorithm) {
        self.line_algorithm = algorithm;
    }

    /// Variant used by [`Canvas::draw_circle`].
    #[must_use]
    pub const fn circle_algorithm(&self) -> CircleAlgorithm {
        self.circle_algorithm
    }

    /// Change the variant used by [`Canvas::draw_circle`].
    pub fn set_circle_algorithm(&mut self, algorithm: CircleAlgorithm) {
        self.circle_algorithm = algorithm;
    }

    /// Background color applied after a resize.
    #[must_use]
    pub const fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Write one pixel at a logical coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] (in buffer coordinates) if the
    /// mapped pixel is outside the buffer.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        plot(&mut self.buffer, x, y, color)
    }

    /// Read the pixel at a logical coordinate.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (col, row) = to_buffer_space(x, y, self.buffer.width(), self.buffer.height());
        self.buffer.get_pixel(col, row)
    }

    /// Overwrite the whole buffer with `color`.
    pub fn clear(&mut self, color: Color) {
        self.buffer.clear(color);
    }

    /// Draw a line with the configured algorithm.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-bounds write; pixels plotted before it stay written.
    pub fn draw_line(&mut self, segment: LineSegment, color: Color) -> Result<()> {
        let buffer = &mut self.buffer;
        self.line_algorithm
            .rasterize(segment, |x, y| plot(buffer, x, y, color))
    }

    /// Draw a line with the DDA algorithm.
    pub fn draw_dda_line(&mut self, segment: LineSegment, color: Color) -> Result<()> {
        let buffer = &mut self.buffer;
        dda_line(segment, |x, y| plot(buffer, x, y, color))
    }

    /// Draw a line with the midpoint algorithm.
    pub fn draw_midpoint_line(&mut self, segment: LineSegment, color: Color) -> Result<()> {
        let buffer = &mut self.buffer;
        midpoint_line(segment, |x, y| plot(buffer, x, y, color))
    }

    /// Draw a circle outline with the configured variant.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DegenerateInput`] for a negative radius, or the
    /// first out-of-bounds write.
    pub fn draw_circle(&mut self, circle: Circle, color: Color) -> Result<()> {
        let buffer = &mut self.buffer;
        self.circle_algorithm
            .rasterize(circle, |x, y| plot(buffer, x, y, color))
    }

    /// Draw a circle outline with the direct midpoint variant.
    pub fn draw_midpoint_circle(&mut self, circle: Circle, color: Color) -> Result<()> {
        let buffer = &mut self.buffer;
        midpoint_circle(circle, |x, y| plot(buffer, x, y, color))
    }

    /// Draw a circle outline with the second-order variant.
    pub fn draw_second_order_circle(&mut self, circle: Circle, color: Color) -> Result<()> {
        let buffer = &mut self.buffer;
        second_order_circle(circle, |x, y| plot(buffer, x, y, color))
    }

    /// Record the span `[x_min, x_max)` for logical row `row`.
    pub fn set_span(&mut self, row: i32, x_min: i32, x_max: i32) {
        self.spans.set_span(row, x_min, x_max);
    }

    /// Forget all recorded spans.
    pub fn reset_spans(&mut self) {
        self.spans.reset();
    }

    /// Fill the recorded spans of rows `y_min..=y_max` with `color`.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-bounds write.
    pub fn fill_spans(&mut self, y_min: i32, y_max: i32, color: Color) -> Result<()> {
        let buffer = &mut self.buffer;
        self.spans.fill(y_min, y_max, |x, y| plot(buffer, x, y, color))
    }

    /// Recreate the buffer at a new size, cleared to the background color.
    ///
    /// Recorded spans are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Allocation`]; the canvas is unchanged on error.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.buffer.resize(width, height)?;
        self.buffer.clear(self.clear_color);
        self.spans.reset();
        debug!("canvas resized to {width}x{height}");
        Ok(())
    }

    /// Read-only BGRA view of the finished frame.
    #[must_use]
    pub fn present(&self) -> &[u8] {
        self.buffer.present()
    }
}

/// Map a logical point into the buffer and write it.
#[inline]
fn plot(buffer: &mut PixelBuffer, x: i32, y: i32, color: Color) -> Result<()> {
    let (col, row) = to_buffer_space(x, y, buffer.width(), buffer.height());
    buffer.set_pixel(col, row, color)
}

impl Drawable for Point {
    fn draw(&self, canvas: &mut Canvas, color: Color) -> Result<()> {
        canvas.set_pixel(self.x, self.y, color)
    }
}

impl Drawable for LineSegment {
    fn draw(&self, canvas: &mut Canvas, color: Color) -> Result<()> {
        canvas.draw_line(*self, color)
    }
}

impl Drawable for Circle {
    fn draw(&self, canvas: &mut Canvas, color: Color) -> Result<()> {
        canvas.draw_circle(*self, color)
    }
}
