//! Logical-to-buffer coordinate mapping.
//!
//! Logical space is centered on the buffer with y pointing up. Buffer space
//! has its origin at the top-left pixel with y pointing down.

/// Map a logical coordinate to a buffer `(column, row)`.
///
/// `col = x + width / 2`, `row = height / 2 - y`, using truncating integer
/// division. Arithmetic saturates, so extreme inputs land outside the buffer
/// instead of wrapping back into it.
#[must_use]
pub fn to_buffer_space(x: i32, y: i32, width: u32, height: u32) -> (i32, i32) {
    let half_w = half(width);
    let half_h = half(height);
    (x.saturating_add(half_w), half_h.saturating_sub(y))
}

/// Inverse of [`to_buffer_space`].
#[must_use]
pub fn to_logical_space(col: i32, row: i32, width: u32, height: u32) -> (i32, i32) {
    let half_w = half(width);
    let half_h = half(height);
    (col.saturating_sub(half_w), half_h.saturating_sub(row))
}

#[inline]
fn half(extent: u32) -> i32 {
    i32::try_from(extent / 2).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_center() {
        assert_eq!(to_buffer_space(0, 0, 800, 600), (400, 300));
    }

    #[test]
    fn test_y_axis_points_up() {
        assert_eq!(to_buffer_space(0, 100, 800, 600), (400, 200));
        assert_eq!(to_buffer_space(0, -100, 800, 600), (400, 400));
    }

    #[test]
    fn test_odd_dimensions_truncate() {
        assert_eq!(to_buffer_space(0, 0, 5, 3), (2, 1));
        assert_eq!(to_buffer_space(-2, 1, 5, 3), (0, 0));
    }

    #[test]
    fn test_top_left_corner() {
        assert_eq!(to_buffer_space(-400, 300, 800, 600), (0, 0));
    }

    #[test]
    fn test_extreme_input_saturates() {
        let (col, row) = to_buffer_space(i32::MAX, i32::MIN, 800, 600);
        assert_eq!(col, i32::MAX);
        assert_eq!(row, i32::MAX);
    }

    #[test]
    fn test_inverse() {
        for &(x, y) in &[(0, 0), (-400, 300), (17, -42), (399, -299)] {
            let (col, row) = to_buffer_space(x, y, 800, 600);
            assert_eq!(to_logical_space(col, row, 800, 600), (x, y));
        }
    }
}
