//! Rasterization algorithms for geometric primitives.
//!
//! Every algorithm here is independent of the pixel buffer: it reports each
//! covered point in logical space through a `plot` callback and propagates
//! the first error that callback returns. [`crate::canvas::Canvas`] supplies
//! a callback that maps the point into buffer space and writes it.
//!
//! # Algorithms
//!
//! - **DDA line**: incremental slope along the driving axis
//! - **Midpoint line**: Bresenham's integer decision variable, all octants
//! - **Midpoint circle**: eight-way symmetric outline, direct and second-order forms
//! - **Scanline fill**: per-row half-open spans
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs." *Communications of the ACM*, 20(2), 100-106.

mod circle;
mod line;
mod span;

pub use circle::{
    circle_points, midpoint_circle, second_order_circle, CircleAlgorithm, MAX_RADIUS,
};
pub use line::{dda_line, midpoint_line, LineAlgorithm};
pub use span::{ScanSpanFiller, ScanTable, Span};
