//! Line rasterization.
//!
//! Two interchangeable algorithms, both gap-free in every octant and
//! independent of endpoint order:
//!
//! - **DDA**: floating-point slope accumulation along the driving axis,
//!   rounding the other coordinate with `floor(v + 0.5)`.
//! - **Midpoint**: Bresenham's integer decision variable, generalized from
//!   the shallow first octant by axis and sign normalization.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.

use crate::error::Result;
use crate::geometry::LineSegment;

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineAlgorithm {
    /// Incremental slope (digital differential analyzer).
    #[default]
    Dda,
    /// Integer midpoint / Bresenham.
    Midpoint,
}

impl LineAlgorithm {
    /// Rasterize `segment` with this algorithm.
    pub fn rasterize<F>(self, segment: LineSegment, plot: F) -> Result<()>
    where
        F: FnMut(i32, i32) -> Result<()>,
    {
        match self {
            Self::Dda => dda_line(segment, plot),
            Self::Midpoint => midpoint_line(segment, plot),
        }
    }
}

/// Rasterize a segment with the incremental-slope (DDA) algorithm.
///
/// If `|m| <= 1` x is the driving axis, otherwise y. The loop always runs
/// from the lower to the higher driving coordinate, so the set of plotted
/// points does not depend on which endpoint comes first. Equal endpoints
/// plot a single point.
///
/// Stops at, and returns, the first error raised by `plot`.
///
/// # Example
///
/// ```
/// use softraster::geometry::LineSegment;
/// use softraster::render::dda_line;
///
/// let mut ys = Vec::new();
/// dda_line(LineSegment::new(0, 0, 4, 2), |_, y| {
///     ys.push(y);
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(ys, [0, 1, 1, 2, 2]);
/// ```
pub fn dda_line<F>(segment: LineSegment, mut plot: F) -> Result<()>
where
    F: FnMut(i32, i32) -> Result<()>,
{
    let LineSegment { x0, y0, x1, y1 } = segment;
    let dx = i64::from(x1) - i64::from(x0);
    let dy = i64::from(y1) - i64::from(y0);

    if dx.abs() >= dy.abs() {
        // Shallow (or degenerate): step x
        let (x0, y0, x1) = if x0 <= x1 { (x0, y0, x1) } else { (x1, y1, x0) };
        let m = if dx == 0 { 0.0 } else { dy as f64 / dx as f64 };
        let mut y = f64::from(y0);
        for x in x0..=x1 {
            plot(x, round_half_up(y))?;
            y += m;
        }
    } else {
        // Steep: step y, dx == 0 is the vertical special case
        let (x0, y0, y1) = if y0 <= y1 { (x0, y0, y1) } else { (x1, y1, y0) };
        let m_inv = dx as f64 / dy as f64;
        let mut x = f64::from(x0);
        for y in y0..=y1 {
            plot(round_half_up(x), y)?;
            x += m_inv;
        }
    }

    Ok(())
}

/// Rasterize a segment with the midpoint (Bresenham) algorithm.
///
/// The decision variable starts at `d = 2*dy - dx` with increments
/// `incrE = 2*dy` and `incrNE = 2*(dy - dx)`. A tie (`d == 0`) stays on the
/// driving axis (East). The driving axis runs from its lower endpoint, the
/// minor axis steps towards the other endpoint, so every octant is covered
/// and endpoint order does not matter.
///
/// Stops at, and returns, the first error raised by `plot`.
pub fn midpoint_line<F>(segment: LineSegment, mut plot: F) -> Result<()>
where
    F: FnMut(i32, i32) -> Result<()>,
{
    let LineSegment { x0, y0, x1, y1 } = segment;
    let x_major =
        (i64::from(x1) - i64::from(x0)).abs() >= (i64::from(y1) - i64::from(y0)).abs();

    if x_major {
        let (x0, y0, x1, y1) = if x0 <= x1 { (x0, y0, x1, y1) } else { (x1, y1, x0, y0) };
        midpoint_octant(x0, y0, x1, y1, |major, minor| plot(major, minor))
    } else {
        let (x0, y0, x1, y1) = if y0 <= y1 { (x0, y0, x1, y1) } else { (x1, y1, x0, y0) };
        midpoint_octant(y0, x0, y1, x1, |major, minor| plot(minor, major))
    }
}

/// Walk from `(a0, b0)` to `(a1, b1)` with `a0 <= a1` and `|b1 - b0| <= a1 - a0`.
fn midpoint_octant<F>(a0: i32, b0: i32, a1: i32, b1: i32, mut plot: F) -> Result<()>
where
    F: FnMut(i32, i32) -> Result<()>,
{
    let da = i64::from(a1) - i64::from(a0);
    let db = (i64::from(b1) - i64::from(b0)).abs();
    let step = if b1 >= b0 { 1 } else { -1 };

    let incr_e = 2 * db;
    let incr_ne = 2 * (db - da);
    let mut d = 2 * db - da;

    let mut a = a0;
    let mut b = b0;
    plot(a, b)?;

    while a < a1 {
        if d <= 0 {
            d += incr_e;
        } else {
            d += incr_ne;
            b += step;
        }
        a += 1;
        plot(a, b)?;
    }

    Ok(())
}

/// `floor(v + 0.5)`: halves round towards positive infinity.
#[inline]
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn points(algorithm: LineAlgorithm, segment: LineSegment) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        algorithm
            .rasterize(segment, |x, y| {
                out.push((x, y));
                Ok(())
            })
            .unwrap();
        out
    }

    fn coord() -> impl Strategy<Value = i32> {
        -300i32..300
    }

    fn algorithm() -> impl Strategy<Value = LineAlgorithm> {
        prop_oneof![Just(LineAlgorithm::Dda), Just(LineAlgorithm::Midpoint)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Swapping endpoints yields the same pixel set.
        #[test]
        fn prop_endpoint_order_symmetry(
            alg in algorithm(), x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
        ) {
            let seg = LineSegment::new(x0, y0, x1, y1);
            let forward: BTreeSet<_> = points(alg, seg).into_iter().collect();
            let backward: BTreeSet<_> = points(alg, seg.reversed()).into_iter().collect();
            prop_assert_eq!(forward, backward);
        }

        /// Consecutive pixels are 8-connected and the driving axis advances by one.
        #[test]
        fn prop_connected(
            alg in algorithm(), x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
        ) {
            let pts = points(alg, LineSegment::new(x0, y0, x1, y1));
            let expected_len = (x1 - x0).abs().max((y1 - y0).abs()) + 1;
            prop_assert_eq!(pts.len() as i32, expected_len);

            for w in pts.windows(2) {
                let (ax, ay) = w[0];
                let (bx, by) = w[1];
                prop_assert!((bx - ax).abs() <= 1 && (by - ay).abs() <= 1);
                prop_assert!(w[0] != w[1]);
            }
        }

        /// Both endpoints are always plotted.
        #[test]
        fn prop_endpoints_included(
            alg in algorithm(), x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()
        ) {
            let pts = points(alg, LineSegment::new(x0, y0, x1, y1));
            prop_assert!(pts.contains(&(x0, y0)));
            prop_assert!(pts.contains(&(x1, y1)));
        }

        /// Horizontal lines have |dx| + 1 pixels on one row.
        #[test]
        fn prop_horizontal_count(alg in algorithm(), x0 in coord(), x1 in coord(), y in coord()) {
            let pts = points(alg, LineSegment::new(x0, y, x1, y));
            prop_assert_eq!(pts.len() as i32, (x1 - x0).abs() + 1);
            prop_assert!(pts.iter().all(|&(_, py)| py == y));
        }

        /// Vertical lines have |dy| + 1 pixels in one column.
        #[test]
        fn prop_vertical_count(alg in algorithm(), x in coord(), y0 in coord(), y1 in coord()) {
            let pts = points(alg, LineSegment::new(x, y0, x, y1));
            prop_assert_eq!(pts.len() as i32, (y1 - y0).abs() + 1);
            prop_assert!(pts.iter().all(|&(px, _)| px == x));
        }
    }
}
