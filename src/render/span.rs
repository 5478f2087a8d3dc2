//! Scanline span filling.
//!
//! A [`ScanTable`] records one horizontal `[x_min, x_max)` run per row. Rows
//! that were never set read as the empty span, so filling a range that the
//! caller only partly populated writes nothing for the missing rows.

use crate::error::Result;
use std::collections::BTreeMap;

/// Half-open horizontal run `[x_min, x_max)` on one scanline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// First column covered.
    pub x_min: i32,
    /// One past the last column covered.
    pub x_max: i32,
}

impl Span {
    /// The span covering no pixels.
    pub const EMPTY: Self = Self::new(0, 0);

    /// Create a new span.
    #[must_use]
    pub const fn new(x_min: i32, x_max: i32) -> Self {
        Self { x_min, x_max }
    }

    /// Whether the span covers no pixels (`x_min >= x_max`).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x_min >= self.x_max
    }

    /// Number of pixels covered.
    #[must_use]
    pub fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.x_max.abs_diff(self.x_min)
        }
    }
}

/// Per-row span storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanTable {
    spans: BTreeMap<i32, Span>,
}

impl ScanTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the span for `row`, replacing any previous one.
    pub fn set(&mut self, row: i32, span: Span) {
        self.spans.insert(row, span);
    }

    /// Span recorded for `row`, or [`Span::EMPTY`].
    #[must_use]
    pub fn span(&self, row: i32) -> Span {
        self.spans.get(&row).copied().unwrap_or(Span::EMPTY)
    }

    /// Recorded rows within `y_min..=y_max`, in ascending order.
    ///
    /// Cost depends on the number of recorded rows, not on the width of the
    /// range. An inverted range yields nothing.
    pub fn rows(&self, y_min: i32, y_max: i32) -> impl Iterator<Item = (i32, Span)> + '_ {
        (y_min <= y_max)
            .then(|| self.spans.range(y_min..=y_max))
            .into_iter()
            .flatten()
            .map(|(&row, &span)| (row, span))
    }

    /// Number of rows with a recorded span.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether no row has a recorded span.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Forget every recorded span.
    pub fn clear(&mut self) {
        self.spans.clear();
    }
}

/// Fills horizontal spans from a [`ScanTable`].
#[derive(Debug, Clone, Default)]
pub struct ScanSpanFiller {
    table: ScanTable,
}

impl ScanSpanFiller {
    /// Create a filler with an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `[x_min, x_max)` for `row`, overwriting any previous span.
    pub fn set_span(&mut self, row: i32, x_min: i32, x_max: i32) {
        self.table.set(row, Span::new(x_min, x_max));
    }

    /// The underlying table.
    #[must_use]
    pub fn table(&self) -> &ScanTable {
        &self.table
    }

    /// Reset every row to the empty span.
    pub fn reset(&mut self) {
        self.table.clear();
    }

    /// Plot every pixel of every span for rows `y_min..=y_max`.
    ///
    /// Both row bounds are inclusive; columns are half-open. An inverted row
    /// range plots nothing. Stops at, and returns, the first error raised by
    /// `plot`.
    pub fn fill<F>(&self, y_min: i32, y_max: i32, mut plot: F) -> Result<()>
    where
        F: FnMut(i32, i32) -> Result<()>,
    {
        for (row, span) in self.table.rows(y_min, y_max) {
            for x in span.x_min..span.x_max {
                plot(x, row)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(filler: &ScanSpanFiller, y_min: i32, y_max: i32) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        filler
            .fill(y_min, y_max, |x, y| {
                points.push((x, y));
                Ok(())
            })
            .unwrap();
        points
    }

    #[test]
    fn test_fill_inclusive_rows_half_open_columns() {
        let mut filler = ScanSpanFiller::new();
        for row in 10..=12 {
            filler.set_span(row, 0, 5);
        }

        let points = collect(&filler, 10, 12);
        assert_eq!(points.len(), 15);
        for row in 10..=12 {
            for x in 0..5 {
                assert!(points.contains(&(x, row)));
            }
            assert!(!points.contains(&(5, row)));
        }
        assert!(points.iter().all(|&(_, y)| (10..=12).contains(&y)));
    }

    #[test]
    fn test_unset_rows_are_empty() {
        let mut filler = ScanSpanFiller::new();
        filler.set_span(3, -2, 2);

        let points = collect(&filler, 0, 6);
        assert_eq!(points, vec![(-2, 3), (-1, 3), (0, 3), (1, 3)]);
    }

    #[test]
    fn test_set_span_overwrites() {
        let mut filler = ScanSpanFiller::new();
        filler.set_span(0, 0, 10);
        filler.set_span(0, 4, 6);

        assert_eq!(filler.table().span(0), Span::new(4, 6));
        assert_eq!(collect(&filler, 0, 0), vec![(4, 0), (5, 0)]);
    }

    #[test]
    fn test_inverted_span_and_rows() {
        let mut filler = ScanSpanFiller::new();
        filler.set_span(0, 5, 2);
        assert!(collect(&filler, 0, 0).is_empty());

        filler.set_span(1, 0, 3);
        assert!(collect(&filler, 1, 0).is_empty());
    }

    #[test]
    fn test_reset() {
        let mut filler = ScanSpanFiller::new();
        filler.set_span(0, 0, 3);
        filler.reset();
        assert!(filler.table().is_empty());
        assert!(collect(&filler, 0, 0).is_empty());
    }

    #[test]
    fn test_fill_full_row_range_visits_recorded_rows_only() {
        let mut filler = ScanSpanFiller::new();
        filler.set_span(i32::MIN, 0, 1);
        filler.set_span(-7, 2, 4);
        filler.set_span(i32::MAX, -1, 0);

        let points = collect(&filler, i32::MIN, i32::MAX);
        assert_eq!(points, vec![(0, i32::MIN), (2, -7), (3, -7), (-1, i32::MAX)]);
    }

    #[test]
    fn test_table_rows_in_range() {
        let mut table = ScanTable::new();
        for row in [-2, 0, 5, 9] {
            table.set(row, Span::new(0, 1));
        }

        let rows: Vec<i32> = table.rows(0, 5).map(|(row, _)| row).collect();
        assert_eq!(rows, vec![0, 5]);
        assert_eq!(table.rows(5, 0).count(), 0);
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(-3, 4).len(), 7);
        assert_eq!(Span::new(4, -3).len(), 0);
        assert!(Span::EMPTY.is_empty());
    }
}
