//! Circle outline rasterization.
//!
//! Both variants walk the second octant (from `(0, r)` while `x < y`) and
//! mirror every step into the other seven octants.
//!
//! - **Midpoint**: `d = 1 - r`, East adds `2x + 3`, Southeast adds `2(x - y) + 5`.
//! - **Second order**: the same decisions with the East/Southeast increments
//!   themselves updated by constants, so the loop only adds.

use crate::error::{Error, Result};
use crate::geometry::Circle;

/// Largest radius whose decision terms cannot overflow `i32`.
pub const MAX_RADIUS: i32 = i32::MAX / 8;

/// Circle rasterization variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CircleAlgorithm {
    /// Direct midpoint formulation.
    #[default]
    Midpoint,
    /// Second-order differences (additions only).
    SecondOrder,
}

impl CircleAlgorithm {
    /// Rasterize `circle` with this variant.
    pub fn rasterize<F>(self, circle: Circle, plot: F) -> Result<()>
    where
        F: FnMut(i32, i32) -> Result<()>,
    {
        match self {
            Self::Midpoint => midpoint_circle(circle, plot),
            Self::SecondOrder => second_order_circle(circle, plot),
        }
    }
}

/// The eight points symmetric to offset `(x, y)` around `(cx, cy)`.
///
/// Order: `(x, y), (y, x), (y, -x), (x, -y), (-x, -y), (-y, -x), (-y, x), (-x, y)`.
/// Coordinates saturate at the `i32` range.
#[must_use]
pub fn circle_points(cx: i32, cy: i32, x: i32, y: i32) -> [(i32, i32); 8] {
    let add = i32::saturating_add;
    let sub = i32::saturating_sub;
    [
        (add(cx, x), add(cy, y)),
        (add(cx, y), add(cy, x)),
        (add(cx, y), sub(cy, x)),
        (add(cx, x), sub(cy, y)),
        (sub(cx, x), sub(cy, y)),
        (sub(cx, y), sub(cy, x)),
        (sub(cx, y), add(cy, x)),
        (sub(cx, x), add(cy, y)),
    ]
}

/// Plot the eight-way expansion of `(x, y)`, each distinct point once.
///
/// Points coincide on the axes (`x == 0`) and the diagonals (`x == y`).
fn plot_symmetric<F>(cx: i32, cy: i32, x: i32, y: i32, plot: &mut F) -> Result<()>
where
    F: FnMut(i32, i32) -> Result<()>,
{
    let points = circle_points(cx, cy, x, y);
    for (i, &(px, py)) in points.iter().enumerate() {
        if !points[..i].contains(&(px, py)) {
            plot(px, py)?;
        }
    }
    Ok(())
}

fn checked_radius(circle: Circle) -> Result<i32> {
    if circle.radius < 0 {
        return Err(Error::DegenerateInput(format!(
            "circle radius must be non-negative, got {}",
            circle.radius
        )));
    }
    if circle.radius > MAX_RADIUS {
        return Err(Error::DegenerateInput(format!(
            "circle radius {} exceeds {MAX_RADIUS}",
            circle.radius
        )));
    }
    Ok(circle.radius)
}

/// Rasterize a circle outline with the midpoint algorithm.
///
/// Radius 0 plots the center exactly once. A negative radius, or one above
/// [`MAX_RADIUS`], fails with [`Error::DegenerateInput`] before anything is
/// plotted.
pub fn midpoint_circle<F>(circle: Circle, mut plot: F) -> Result<()>
where
    F: FnMut(i32, i32) -> Result<()>,
{
    let radius = checked_radius(circle)?;
    let (cx, cy) = (circle.center_x, circle.center_y);

    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;
    plot_symmetric(cx, cy, x, y, &mut plot)?;

    while x < y {
        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;

        // Past the diagonal the point mirrors one already plotted
        if x <= y {
            plot_symmetric(cx, cy, x, y, &mut plot)?;
        }
    }

    Ok(())
}

/// Rasterize a circle outline with second-order differences.
///
/// Plots exactly the same pixels as [`midpoint_circle`].
pub fn second_order_circle<F>(circle: Circle, mut plot: F) -> Result<()>
where
    F: FnMut(i32, i32) -> Result<()>,
{
    let radius = checked_radius(circle)?;
    let (cx, cy) = (circle.center_x, circle.center_y);

    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;
    let mut delta_e = 3;
    let mut delta_se = 5 - 2 * radius;
    plot_symmetric(cx, cy, x, y, &mut plot)?;

    while x < y {
        if d < 0 {
            // East
            d += delta_e;
            delta_e += 2;
            delta_se += 2;
        } else {
            // Southeast
            d += delta_se;
            delta_e += 2;
            delta_se += 4;
            y -= 1;
        }
        x += 1;

        if x <= y {
            plot_symmetric(cx, cy, x, y, &mut plot)?;
        }
    }

    Ok(())
}
