use num_traits::Float;

use crate::vector::{Vec3, Vec4};
use super::{Mat3, Mat4};

// Transform constructors.
//
// Sign convention: right-handed, counter-clockwise rotation for a positive
// angle when viewed from the positive axis looking toward the origin. For
// example `rotation_z(PI/2)` maps +X to +Y.

impl Mat3 {
    /// The identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self {
            c0: Vec3::new(1.0, 0.0, 0.0),
            c1: Vec3::new(0.0, 1.0, 0.0),
            c2: Vec3::new(0.0, 0.0, 1.0),
        }
    }

    /// Diagonal scaling transform.
    #[inline]
    pub const fn scaling(x: f32, y: f32, z: f32) -> Self {
        Self {
            c0: Vec3::new(x, 0.0, 0.0),
            c1: Vec3::new(0.0, y, 0.0),
            c2: Vec3::new(0.0, 0.0, z),
        }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = Float::sin_cos(angle);
        Self {
            c0: Vec3::new(1.0, 0.0, 0.0),
            c1: Vec3::new(0.0, c, s),
            c2: Vec3::new(0.0, -s, c),
        }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = Float::sin_cos(angle);
        Self {
            c0: Vec3::new(c, 0.0, -s),
            c1: Vec3::new(0.0, 1.0, 0.0),
            c2: Vec3::new(s, 0.0, c),
        }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = Float::sin_cos(angle);
        Self {
            c0: Vec3::new(c, s, 0.0),
            c1: Vec3::new(-s, c, 0.0),
            c2: Vec3::new(0.0, 0.0, 1.0),
        }
    }

    /// Rotation about an arbitrary axis by `angle` radians (Rodrigues'
    /// formula). The axis is normalized first.
    pub fn rotation_axis(axis: Vec3, angle: f32) -> Self {
        let a = axis.normalize();
        let (s, c) = Float::sin_cos(angle);
        let t = 1.0 - c;
        let (x, y, z) = (a.x, a.y, a.z);

        Self {
            c0: Vec3::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y),
            c1: Vec3::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x),
            c2: Vec3::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c),
        }
    }
}

impl Mat4 {
    /// The identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self {
            c0: Vec4::new(1.0, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 1.0, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, 1.0, 0.0),
            c3: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Diagonal scaling transform.
    #[inline]
    pub const fn scaling(x: f32, y: f32, z: f32) -> Self {
        Self {
            c0: Vec4::new(x, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, y, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, z, 0.0),
            c3: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Translation transform: the offset lands in the last column.
    #[inline]
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        Self {
            c0: Vec4::new(1.0, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 1.0, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, 1.0, 0.0),
            c3: Vec4::new(x, y, z, 1.0),
        }
    }

    /// Rotation about the X axis by `angle` radians.
    #[inline]
    pub fn rotation_x(angle: f32) -> Self {
        Self::from_mat3(&Mat3::rotation_x(angle))
    }

    /// Rotation about the Y axis by `angle` radians.
    #[inline]
    pub fn rotation_y(angle: f32) -> Self {
        Self::from_mat3(&Mat3::rotation_y(angle))
    }

    /// Rotation about the Z axis by `angle` radians.
    #[inline]
    pub fn rotation_z(angle: f32) -> Self {
        Self::from_mat3(&Mat3::rotation_z(angle))
    }

    /// Rotation about an arbitrary axis by `angle` radians.
    #[inline]
    pub fn rotation_axis(axis: Vec3, angle: f32) -> Self {
        Self::from_mat3(&Mat3::rotation_axis(axis, angle))
    }
}
