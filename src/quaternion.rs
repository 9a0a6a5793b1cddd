use core::ops::Mul;

use num_traits::Float;

use crate::matrix::{Mat3, Mat4};
use crate::vector::Vec3;

/// Unit quaternion for 3D rotations.
///
/// Scalar-first convention: `[w, x, y, z]` where `w` is the scalar part
/// and `(x, y, z)` is the vector part.
///
/// # Examples
///
/// ```
/// use vectoris::{Quat, Vec3};
///
/// let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), core::f32::consts::PI / 2.0);
/// let m = q.to_mat3();
/// let v = m * Vec3::new(1.0, 0.0, 0.0);
/// assert!((v.y - 1.0).abs() < 1e-6);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

// ── Constructors ─────────────────────────────────────────────────────

impl Quat {
    /// Create a quaternion from components.
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Identity quaternion (no rotation).
    #[inline]
    pub const fn identity() -> Self {
        Self { w: 1.0, x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Create from an axis and angle in radians. The axis is normalized
    /// first.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let a = axis.normalize();
        let (s, c) = Float::sin_cos(angle * 0.5);
        Self { w: c, x: a.x * s, y: a.y * s, z: a.z * s }
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl Quat {
    /// Conjugate: `(w, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self { w: self.w, x: -self.x, y: -self.y, z: -self.z }
    }

    /// Squared norm: `w² + x² + y² + z²`.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Norm (magnitude).
    #[inline]
    pub fn norm(&self) -> f32 {
        Float::sqrt(self.norm_squared())
    }

    /// Normalize to unit length.
    #[inline]
    pub fn normalize(&self) -> Self {
        let inv = 1.0 / self.norm();
        Self {
            w: self.w * inv,
            x: self.x * inv,
            y: self.y * inv,
            z: self.z * inv,
        }
    }

    /// Inverse: `conjugate / norm²`.
    ///
    /// For unit quaternions this equals the conjugate.
    #[inline]
    pub fn inverse(&self) -> Self {
        let inv_n2 = 1.0 / self.norm_squared();
        Self {
            w: self.w * inv_n2,
            x: -self.x * inv_n2,
            y: -self.y * inv_n2,
            z: -self.z * inv_n2,
        }
    }

    /// Rotate a vector by this quaternion (must be unit length).
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        // q v q* expanded: v + w t + u x t, where u is the vector part
        // and t = 2 u x v
        let u = Vec3::new(self.x, self.y, self.z);
        let t = u.cross(v) * 2.0;
        v + t * self.w + u.cross(t)
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl Quat {
    /// Convert to a 3x3 rotation matrix (must be unit length).
    pub fn to_mat3(&self) -> Mat3 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat3::from_cols(
            Vec3::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy)),
            Vec3::new(2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx)),
            Vec3::new(2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy)),
        )
    }

    /// Convert to a 4x4 rotation matrix (must be unit length).
    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_mat3(&self.to_mat3())
    }
}

// ── Operators ────────────────────────────────────────────────────────

impl Mul for Quat {
    type Output = Self;

    /// Hamilton product: `a * b` applies `b` first, then `a`, matching
    /// matrix composition.
    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}
