use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Vec2, Vec3, Vec4};

// Componentwise vector-vector and vector-scalar arithmetic. All operations
// are plain IEEE-754 componentwise arithmetic; nothing here is fused or
// reordered.

macro_rules! impl_vector_ops {
    ($V:ident { $($f:ident),* }) => {
        impl Add for $V {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),* }
            }
        }

        impl Sub for $V {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),* }
            }
        }

        impl Mul for $V {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($f: self.$f * rhs.$f),* }
            }
        }

        impl Div for $V {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($f: self.$f / rhs.$f),* }
            }
        }

        impl Add<f32> for $V {
            type Output = Self;

            #[inline]
            fn add(self, rhs: f32) -> Self {
                Self { $($f: self.$f + rhs),* }
            }
        }

        impl Sub<f32> for $V {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: f32) -> Self {
                Self { $($f: self.$f - rhs),* }
            }
        }

        impl Mul<f32> for $V {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($f: self.$f * rhs),* }
            }
        }

        impl Div<f32> for $V {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self { $($f: self.$f / rhs),* }
            }
        }

        impl Mul<$V> for f32 {
            type Output = $V;

            #[inline]
            fn mul(self, rhs: $V) -> $V {
                rhs * self
            }
        }

        impl Neg for $V {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),* }
            }
        }

        impl AddAssign for $V {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $V {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<f32> for $V {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl DivAssign<f32> for $V {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }
    };
}

impl_vector_ops!(Vec2 { x, y });
impl_vector_ops!(Vec3 { x, y, z });
impl_vector_ops!(Vec4 { x, y, z, w });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn componentwise_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 10.0, 0.5);

        assert_eq!(a + b, Vec3::new(5.0, 12.0, 3.5));
        assert_eq!(b - a, Vec3::new(3.0, 8.0, -2.5));
        assert_eq!(a * b, Vec3::new(4.0, 20.0, 1.5));
        assert_eq!(a / b, Vec3::new(0.25, 0.2, 6.0));
    }

    #[test]
    fn scalar_arithmetic() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(a + 1.0, Vec4::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(a - 1.0, Vec4::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a / 2.0, Vec4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(2.0 * a, a * 2.0);
    }

    #[test]
    fn negate() {
        let a = Vec2::new(1.0, -2.0);
        assert_eq!(-a, Vec2::new(-1.0, 2.0));
    }

    #[test]
    fn assign_ops() {
        let mut a = Vec3::new(1.0, 2.0, 3.0);
        a += Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(a, Vec3::new(2.0, 3.0, 4.0));
        a -= Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
        a *= 2.0;
        assert_eq!(a, Vec3::new(2.0, 4.0, 6.0));
        a /= 2.0;
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn additive_identities() {
        let v = Vec4::new(1.5, -2.25, 3.0, 0.125);
        assert_eq!(v + Vec4::zero(), v);
        assert_eq!(v * 1.0, v);
        assert_eq!(v - v, Vec4::zero());
    }

    #[test]
    fn division_by_zero_propagates() {
        let v = Vec2::new(1.0, -1.0);
        let q = v / 0.0;
        assert_eq!(q.x, f32::INFINITY);
        assert_eq!(q.y, f32::NEG_INFINITY);
    }
}
