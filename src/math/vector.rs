//! 2-, 3- and 4-component vectors.

use super::Float;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
}

/// 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

/// Homogeneous 4D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
    /// W component.
    pub w: T,
}

impl<T: Float> Vec2<T> {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> T {
        self.dot(self).sqrt()
    }
}

impl<T: Float> Vec3<T> {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction. The zero vector yields non-finite components.
    #[must_use]
    pub fn normalized(self) -> Self {
        self * (T::ONE / self.length())
    }

    /// Distance between two points.
    #[must_use]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Squared distance between two points.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> T {
        (self - other).length_squared()
    }

    /// Linear interpolation: `amount = 0` gives `self`, `1` gives `other`.
    #[must_use]
    pub fn lerp(self, other: Self, amount: T) -> Self {
        self * (T::ONE - amount) + other * amount
    }

    /// Rotate around a unit `axis` by `degrees` (Rodrigues' rotation formula).
    #[must_use]
    pub fn rotated(self, axis: Self, degrees: T) -> Self {
        let t = degrees.to_radians();
        let (sin_t, cos_t) = (t.sin(), t.cos());

        self * cos_t + axis.cross(self) * sin_t + axis * (axis.dot(self) * (T::ONE - cos_t))
    }
}

impl<T: Float> Vec4<T> {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Drop `w` without dividing.
    #[must_use]
    pub fn xyz(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<T: Float> From<Vec3<T>> for Vec4<T> {
    /// Promote a point to homogeneous coordinates (`w = 1`).
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::ONE)
    }
}

impl<T: Float> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

/// Component-wise arithmetic shared by every vector type.
macro_rules! impl_vector_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl<T: Float> Add for $name<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Float> Sub for $name<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Float> Neg for $name<T> {
            type Output = Self;
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Float> Mul<T> for $name<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Float> Div<T> for $name<T> {
            type Output = Self;
            fn div(self, rhs: T) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Float> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl<T: Float> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl<T: Float> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field *= rhs;)+
            }
        }

        impl<T: Float> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                $(self.$field /= rhs;)+
            }
        }

        impl Mul<$name<f32>> for f32 {
            type Output = $name<f32>;
            fn mul(self, rhs: $name<f32>) -> $name<f32> {
                rhs * self
            }
        }

        impl Mul<$name<f64>> for f64 {
            type Output = $name<f64>;
            fn mul(self, rhs: $name<f64>) -> $name<f64> {
                rhs * self
            }
        }
    };
}

impl_vector_ops!(Vec2 { x, y });
impl_vector_ops!(Vec3 { x, y, z });
impl_vector_ops!(Vec4 { x, y, z, w });
