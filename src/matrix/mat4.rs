use core::ops::{Mul, MulAssign};

use crate::simd;
use crate::vector::{Vec3, Vec4};
use super::{Mat3, Mat4};

impl Mat4 {
    /// Transpose: rows become columns.
    ///
    /// A pure permutation of the stored values, so
    /// `m.transpose().transpose() == m` exactly.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Transpose in place: six pairwise swaps across the diagonal.
    pub fn transpose_in_place(&mut self) {
        core::mem::swap(&mut self.c0.y, &mut self.c1.x);
        core::mem::swap(&mut self.c0.z, &mut self.c2.x);
        core::mem::swap(&mut self.c0.w, &mut self.c3.x);
        core::mem::swap(&mut self.c1.z, &mut self.c2.y);
        core::mem::swap(&mut self.c1.w, &mut self.c3.y);
        core::mem::swap(&mut self.c2.w, &mut self.c3.z);
    }

    /// The 3x3 minor obtained by deleting row 0 and column `col`.
    fn minor(&self, col: usize) -> Mat3 {
        let cols = [self.c0, self.c1, self.c2, self.c3];
        let mut picked = [Vec3::zero(); 3];
        let mut k = 0;
        for j in 0..4 {
            if j != col {
                picked[k] = Vec3::new(cols[j].y, cols[j].z, cols[j].w);
                k += 1;
            }
        }
        Mat3::from_cols(picked[0], picked[1], picked[2])
    }

    /// Determinant by cofactor expansion along the first row, reusing
    /// [`Mat3::determinant`] for the four signed 3x3 minors.
    pub fn determinant(&self) -> f32 {
        self.c0.x * self.minor(0).determinant()
            - self.c1.x * self.minor(1).determinant()
            + self.c2.x * self.minor(2).determinant()
            - self.c3.x * self.minor(3).determinant()
    }

    /// Inverse: closed-form adjugate over determinant, dispatched to the
    /// widest SIMD kernel available at compile time.
    ///
    /// Returns `None` when the determinant is exactly zero.
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        simd::mat4_inverse(&self.to_cols_array()).map(Self::from_cols_array)
    }
}

// ── Products ────────────────────────────────────────────────────────

impl Mul for Mat4 {
    type Output = Self;

    /// Matrix product, dispatched to the widest SIMD kernel available at
    /// compile time.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_cols_array(simd::mat4_mul(&self.to_cols_array(), &rhs.to_cols_array()))
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z + self.c3 * v.w
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, s: f32) -> Self {
        Self::from_cols(self.c0 * s, self.c1 * s, self.c2 * s, self.c3 * s)
    }
}

impl MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
