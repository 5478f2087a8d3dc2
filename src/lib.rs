//! # softraster
//!
//! Software rasterization of 2D primitives into an in-memory BGRA pixel buffer.
//!
//! Lines, circle outlines and scanline spans are converted into pixel writes
//! without any windowing or GPU dependency. A presentation layer receives the
//! finished buffer once per frame.
//!
//! ## Features
//!
//! - **Pure Rust**: no platform or windowing dependencies
//! - **Bounds-checked writes**: out-of-range pixels are reported, never written
//! - **Two algorithms per primitive**: DDA and midpoint lines, direct and
//!   second-order midpoint circles
//! - **PNG output** for headless presentation
//!
//! ## Quick Start
//!
//! ```rust
//! use softraster::prelude::*;
//!
//! # fn main() -> softraster::Result<()> {
//! let mut canvas = Canvas::builder()
//!     .dimensions(200, 200)
//!     .line_algorithm(LineAlgorithm::Midpoint)
//!     .clear_color(Color::BLACK)
//!     .build()?;
//!
//! canvas.draw_line(LineSegment::new(-50, -50, 50, 20), Color::CYAN)?;
//! canvas.draw_circle(Circle::new(0, 0, 40), Color::YELLOW)?;
//!
//! let bgra: &[u8] = canvas.present();
//! assert_eq!(bgra.len(), 200 * 200 * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! Drawing calls take logical coordinates: origin at the buffer center,
//! y pointing up. See [`coords`] for the mapping to buffer rows and columns.
//!
//! ## Feature Flags
//!
//! - `parallel`: row-parallel buffer clear with rayon
//! - `serde`: Serialize/Deserialize for value types and frames
//! - `cli`: the `softraster-demo` binary
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D., van Dam, A., Feiner, S. K., & Hughes, J. F. (1990).
//!   *Computer Graphics: Principles and Practice*, 2nd ed., §3.2-3.3.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color value type.
pub mod color;

/// Logical to buffer coordinate mapping.
pub mod coords;

/// BGRA pixel storage.
pub mod framebuffer;

/// Geometric primitives (points, segments, circles).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization algorithms.
pub mod render;

/// Drawing surface combining a buffer with the rasterizers.
pub mod canvas;

/// Per-frame draw lists.
pub mod frame;

/// Presentation collaborators and PNG output.
pub mod output;

// ============================================================================
// Utility Modules
// ============================================================================

/// Generic vector and matrix math.
pub mod math;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for rasterization.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use softraster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, CanvasBuilder, Drawable};
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::frame::{DrawCommand, Frame, FrameReport};
    pub use crate::framebuffer::PixelBuffer;
    pub use crate::geometry::{Circle, LineSegment, Point};
    pub use crate::math::{Mat4, Vec2, Vec3, Vec4};
    pub use crate::output::{PngEncoder, PngPresenter, Presenter, RedrawToggle};
    pub use crate::render::{CircleAlgorithm, LineAlgorithm, ScanSpanFiller, Span};
}
