//! Geometric primitives for rasterization.
//!
//! All coordinates are integers in logical space: origin at the buffer
//! center, y pointing up. See [`crate::coords`] for the mapping to buffer rows.

/// A discrete 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two integer endpoints.
///
/// Endpoints carry no ordering; rasterizers normalize direction internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    /// Start x.
    pub x0: i32,
    /// Start y.
    pub y0: i32,
    /// End x.
    pub x1: i32,
    /// End y.
    pub y1: i32,
}

impl LineSegment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a line segment from two points.
    #[must_use]
    pub const fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// First endpoint.
    #[must_use]
    pub const fn start(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// Second endpoint.
    #[must_use]
    pub const fn end(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// The same segment with its endpoints swapped.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.x1, self.y1, self.x0, self.y0)
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.x0 == self.x1 && self.y0 == self.y1
    }
}

/// A circle outline given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// Center x.
    pub center_x: i32,
    /// Center y.
    pub center_y: i32,
    /// Radius in pixels; must be non-negative to be drawn.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center_x: i32, center_y: i32, radius: i32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}
