//! Small generic vector and matrix math.
//!
//! General-purpose helpers parameterized over [`Float`] (`f32` or `f64`).
//! Nothing in the rasterizers depends on this module.

mod matrix;
mod vector;

pub use matrix::Mat4;
pub use vector::{Vec2, Vec3, Vec4};

use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point scalar usable by [`Vec2`], [`Vec3`], [`Vec4`] and [`Mat4`].
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Default
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine (radians).
    fn sin(self) -> Self;
    /// Cosine (radians).
    fn cos(self) -> Self;
    /// Degrees to radians.
    fn to_radians(self) -> Self;
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl Float for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }

                #[inline]
                fn sin(self) -> Self {
                    <$t>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    <$t>::cos(self)
                }

                #[inline]
                fn to_radians(self) -> Self {
                    <$t>::to_radians(self)
                }
            }
        )*
    };
}

impl_float!(f32, f64);
