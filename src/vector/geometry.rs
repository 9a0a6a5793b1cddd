use num_traits::Float;

use super::{Vec2, Vec3, Vec4};

// Metric and interpolation operations shared by all vector widths.
//
// `normalize` is deliberately unguarded: a zero vector divides by zero and
// the non-finite components propagate per IEEE-754. `min`/`max` resolve
// ties (and unordered NaN comparisons) toward `self`.

macro_rules! impl_vector_geometry {
    ($V:ident { $($f:ident),* }) => {
        impl $V {
            /// Sum of squared components.
            #[inline]
            pub fn length_squared(self) -> f32 {
                0.0 $(+ self.$f * self.$f)*
            }

            /// Euclidean length.
            #[inline]
            pub fn length(self) -> f32 {
                Float::sqrt(self.length_squared())
            }

            /// Squared distance between two points.
            #[inline]
            pub fn distance_squared(self, rhs: Self) -> f32 {
                (self - rhs).length_squared()
            }

            /// Distance between two points.
            #[inline]
            pub fn distance(self, rhs: Self) -> f32 {
                Float::sqrt(self.distance_squared(rhs))
            }

            /// Scale to unit length.
            ///
            /// The zero vector has no direction; the result divides by zero
            /// and is non-finite.
            #[inline]
            pub fn normalize(self) -> Self {
                self * (1.0 / self.length())
            }

            /// Componentwise minimum. Ties go to `self`.
            #[inline]
            pub fn min(self, rhs: Self) -> Self {
                Self { $($f: if rhs.$f < self.$f { rhs.$f } else { self.$f }),* }
            }

            /// Componentwise maximum. Ties go to `self`.
            #[inline]
            pub fn max(self, rhs: Self) -> Self {
                Self { $($f: if rhs.$f > self.$f { rhs.$f } else { self.$f }),* }
            }

            /// Linear interpolation `self + (rhs - self) * t`.
            ///
            /// `t` is not clamped.
            #[inline]
            pub fn lerp(self, rhs: Self, t: f32) -> Self {
                self + (rhs - self) * t
            }

            /// Horizontal add: the sum of all components.
            #[inline]
            pub fn hadd(self) -> f32 {
                0.0 $(+ self.$f)*
            }
        }
    };
}

impl_vector_geometry!(Vec2 { x, y });
impl_vector_geometry!(Vec3 { x, y, z });
impl_vector_geometry!(Vec4 { x, y, z, w });

impl Vec3 {
    /// Dot product.
    ///
    /// ```
    /// use vectoris::Vec3;
    /// let a = Vec3::new(1.0, 2.0, 3.0);
    /// let b = Vec3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(b), 32.0);
    /// ```
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }
}
