//! 4x4 transform matrix.

use super::{Float, Vec3, Vec4};
use std::ops::Mul;

/// Row-major 4x4 matrix acting on column vectors.
///
/// Transform methods pre-multiply, so `Mat4::identity().scale(..).translate(..)`
/// scales first and translates second.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<T> {
    m: [[T; 4]; 4],
}

impl<T: Float> Default for Mat4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Float> Mat4<T> {
    /// Build from rows.
    #[must_use]
    pub const fn from_rows(m: [[T; 4]; 4]) -> Self {
        Self { m }
    }

    /// Diagonal matrix with `d` on the diagonal and zeros elsewhere.
    #[must_use]
    pub fn from_diagonal(d: T) -> Self {
        let mut m = [[T::ZERO; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = d;
        }
        Self { m }
    }

    /// Identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_diagonal(T::ONE)
    }

    /// Element at `row`, `col`. Panics if either index is 4 or more.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.m[row][col]
    }

    /// Rows of the matrix.
    #[must_use]
    pub const fn rows(&self) -> &[[T; 4]; 4] {
        &self.m
    }

    /// Transposed copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = *self;
        for r in 0..4 {
            for c in 0..4 {
                out.m[r][c] = self.m[c][r];
            }
        }
        out
    }

    /// Append a translation.
    #[must_use]
    pub fn translate(self, tx: T, ty: T, tz: T) -> Self {
        let mut t = Self::identity();
        t.m[0][3] = tx;
        t.m[1][3] = ty;
        t.m[2][3] = tz;
        t * self
    }

    /// Append a per-axis scale.
    #[must_use]
    pub fn scale(self, sx: T, sy: T, sz: T) -> Self {
        let mut s = Self::identity();
        s.m[0][0] = sx;
        s.m[1][1] = sy;
        s.m[2][2] = sz;
        s * self
    }

    /// Append a rotation of `radians` about the X axis.
    #[must_use]
    pub fn rotate_x(self, radians: T) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        let mut r = Self::identity();
        r.m[1][1] = c;
        r.m[1][2] = -s;
        r.m[2][1] = s;
        r.m[2][2] = c;
        r * self
    }

    /// Append a rotation of `radians` about the Y axis.
    #[must_use]
    pub fn rotate_y(self, radians: T) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        let mut r = Self::identity();
        r.m[0][0] = c;
        r.m[0][2] = s;
        r.m[2][0] = -s;
        r.m[2][2] = c;
        r * self
    }

    /// Append a rotation of `radians` about the Z axis.
    #[must_use]
    pub fn rotate_z(self, radians: T) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        let mut r = Self::identity();
        r.m[0][0] = c;
        r.m[0][1] = -s;
        r.m[1][0] = s;
        r.m[1][1] = c;
        r * self
    }
}

impl<T: Float> Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[T::ZERO; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let mut acc = T::ZERO;
                for k in 0..4 {
                    acc += self.m[r][k] * rhs.m[k][c];
                }
                *cell = acc;
            }
        }
        Self { m: out }
    }
}

impl<T: Float> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        let row = |r: usize| {
            self.m[r][0] * v.x + self.m[r][1] * v.y + self.m[r][2] * v.z + self.m[r][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

impl<T: Float> Mul<Vec3<T>> for Mat4<T> {
    type Output = Vec4<T>;

    /// Transform a point (`w = 1`).
    fn mul(self, v: Vec3<T>) -> Vec4<T> {
        self * Vec4::from(v)
    }
}
