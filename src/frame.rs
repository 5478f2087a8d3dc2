//! Per-frame draw lists and the frame driver.
//!
//! A [`Frame`] is an ordered list of draw commands. Later commands paint
//! over earlier ones. [`Canvas::render_frame`] runs the list to completion:
//! a command that fails (e.g. touches a pixel outside the buffer) is logged
//! and skipped, and the rest of the frame still renders.

use crate::canvas::{Canvas, Drawable};
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::{Circle, LineSegment, Point};
use crate::render::CircleAlgorithm;
use log::{debug, warn};

/// One drawing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    /// Single pixel.
    Pixel(Point, Color),
    /// Line with the canvas' configured algorithm.
    Line(LineSegment, Color),
    /// Circle outline with the canvas' configured variant.
    Circle(Circle, Color),
    /// Circle outline with the direct midpoint variant.
    MidpointCircle(Circle, Color),
    /// Circle outline with the second-order variant.
    SecondOrderCircle(Circle, Color),
    /// Record a scanline span (draws nothing by itself).
    Span {
        /// Logical row.
        row: i32,
        /// First column.
        x_min: i32,
        /// One past the last column.
        x_max: i32,
    },
    /// Fill the recorded spans of rows `y_min..=y_max`.
    Fill {
        /// First row (inclusive).
        y_min: i32,
        /// Last row (inclusive).
        y_max: i32,
        /// Fill color.
        color: Color,
    },
}

impl DrawCommand {
    /// Short name used in log messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Pixel(..) => "pixel",
            Self::Line(..) => "line",
            Self::Circle(..) => "circle",
            Self::MidpointCircle(..) => "midpoint circle",
            Self::SecondOrderCircle(..) => "second-order circle",
            Self::Span { .. } => "span",
            Self::Fill { .. } => "fill",
        }
    }

    /// Execute this command on `canvas`.
    pub fn apply(&self, canvas: &mut Canvas) -> Result<()> {
        match *self {
            Self::Pixel(point, color) => point.draw(canvas, color),
            Self::Line(segment, color) => segment.draw(canvas, color),
            Self::Circle(circle, color) => circle.draw(canvas, color),
            Self::MidpointCircle(circle, color) => canvas.draw_midpoint_circle(circle, color),
            Self::SecondOrderCircle(circle, color) => {
                canvas.draw_second_order_circle(circle, color)
            }
            Self::Span { row, x_min, x_max } => {
                canvas.set_span(row, x_min, x_max);
                Ok(())
            }
            Self::Fill { y_min, y_max, color } => canvas.fill_spans(y_min, y_max, color),
        }
    }
}

/// Ordered draw list for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Color to clear to before drawing; `None` keeps the previous contents.
    clear: Option<Color>,
    /// Commands in painter's order.
    commands: Vec<DrawCommand>,
}

impl Frame {
    /// Create an empty frame that does not clear.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear to `color` before drawing.
    #[must_use]
    pub fn clear(mut self, color: Color) -> Self {
        self.clear = Some(color);
        self
    }

    /// Append a command.
    #[must_use]
    pub fn command(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Append a pixel.
    #[must_use]
    pub fn pixel(self, x: i32, y: i32, color: Color) -> Self {
        self.command(DrawCommand::Pixel(Point::new(x, y), color))
    }

    /// Append a line.
    #[must_use]
    pub fn line(self, segment: LineSegment, color: Color) -> Self {
        self.command(DrawCommand::Line(segment, color))
    }

    /// Append a circle outline.
    #[must_use]
    pub fn circle(self, circle: Circle, color: Color) -> Self {
        self.command(DrawCommand::Circle(circle, color))
    }

    /// Append a circle outline drawn with `algorithm` regardless of the
    /// canvas setting.
    #[must_use]
    pub fn circle_with(self, circle: Circle, color: Color, algorithm: CircleAlgorithm) -> Self {
        self.command(match algorithm {
            CircleAlgorithm::Midpoint => DrawCommand::MidpointCircle(circle, color),
            CircleAlgorithm::SecondOrder => DrawCommand::SecondOrderCircle(circle, color),
        })
    }

    /// Append a span record.
    #[must_use]
    pub fn span(self, row: i32, x_min: i32, x_max: i32) -> Self {
        self.command(DrawCommand::Span { row, x_min, x_max })
    }

    /// Append a span fill.
    #[must_use]
    pub fn fill(self, y_min: i32, y_max: i32, color: Color) -> Self {
        self.command(DrawCommand::Fill {
            y_min,
            y_max,
            color,
        })
    }

    /// Clear color, if any.
    #[must_use]
    pub const fn clear_color(&self) -> Option<Color> {
        self.clear
    }

    /// Commands in execution order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

/// A command the frame driver had to skip.
#[derive(Debug)]
pub struct SkippedCommand {
    /// Position of the command in the frame.
    pub index: usize,
    /// Why it failed.
    pub error: Error,
}

/// Outcome of [`Canvas::render_frame`].
#[derive(Debug, Default)]
pub struct FrameReport {
    /// Commands that completed.
    pub completed: usize,
    /// Commands that failed, in order.
    pub skipped: Vec<SkippedCommand>,
}

impl FrameReport {
    /// Whether every command completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Indices of the skipped commands.
    #[must_use]
    pub fn skipped_indices(&self) -> Vec<usize> {
        self.skipped.iter().map(|s| s.index).collect()
    }
}

impl Canvas {
    /// Render `frame`, skipping commands that fail.
    ///
    /// A skipped command may already have written some of its pixels.
    pub fn render_frame(&mut self, frame: &Frame) -> FrameReport {
        if let Some(color) = frame.clear {
            self.clear(color);
        }

        let mut report = FrameReport::default();
        for (index, command) in frame.commands.iter().enumerate() {
            match command.apply(self) {
                Ok(()) => report.completed += 1,
                Err(error) => {
                    warn!("skipping {} command #{index}: {error}", command.kind());
                    report.skipped.push(SkippedCommand { index, error });
                }
            }
        }

        debug!(
            "frame rendered: {} completed, {} skipped",
            report.completed,
            report.skipped.len()
        );
        report
    }
}
