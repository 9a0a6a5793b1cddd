use core::ops::{Mul, MulAssign};

use crate::vector::Vec3;
use super::Mat3;

impl Mat3 {
    /// Transpose: rows become columns.
    ///
    /// A pure permutation of the stored values, so
    /// `m.transpose().transpose() == m` exactly.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    /// Transpose in place: three pairwise swaps across the diagonal.
    pub fn transpose_in_place(&mut self) {
        core::mem::swap(&mut self.c0.y, &mut self.c1.x);
        core::mem::swap(&mut self.c0.z, &mut self.c2.x);
        core::mem::swap(&mut self.c1.z, &mut self.c2.y);
    }

    /// Determinant by cofactor expansion along the first column.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.c0.x * (self.c1.y * self.c2.z - self.c2.y * self.c1.z)
            - self.c0.y * (self.c1.x * self.c2.z - self.c2.x * self.c1.z)
            + self.c0.z * (self.c1.x * self.c2.y - self.c2.x * self.c1.y)
    }

    /// Inverse: adjugate over determinant.
    ///
    /// The rows of the cofactor transpose are the pairwise cross products
    /// of the columns. Returns `None` when the determinant is exactly zero.
    pub fn inverse(&self) -> Option<Self> {
        let r0 = self.c1.cross(self.c2);
        let r1 = self.c2.cross(self.c0);
        let r2 = self.c0.cross(self.c1);

        // Triple product c0 . (c1 x c2): the same first-column expansion
        // as determinant()
        let det = self.c0.dot(r0);
        if det == 0.0 {
            return None;
        }

        Some(Self::from_cols(r0, r1, r2).transpose() * (1.0 / det))
    }
}

// ── Products ────────────────────────────────────────────────────────

impl Mul for Mat3 {
    type Output = Self;

    /// Matrix product. Column `j` of the result is the linear combination
    /// of `self`'s columns weighted by column `j` of `rhs` — the row/column
    /// transposition the product formula needs is folded into the
    /// column-major access pattern.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(self * rhs.c0, self * rhs.c1, self * rhs.c2)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z
    }
}

impl Mul<f32> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, s: f32) -> Self {
        Self::from_cols(self.c0 * s, self.c1 * s, self.c2 * s)
    }
}

impl MulAssign for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat3_eq(a: &Mat3, b: &Mat3, eps: f32) {
        let a = a.to_cols_array();
        let b = b.to_cols_array();
        for i in 0..9 {
            assert!(
                (a[i] - b[i]).abs() < eps,
                "element {i}: {} vs {}",
                a[i],
                b[i]
            );
        }
    }

    #[test]
    fn identity_multiply() {
        let m = Mat3::from_cols_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
        assert_eq!(m * Mat3::identity(), m);
        assert_eq!(Mat3::identity() * m, m);
    }

    #[test]
    fn multiply_known_values() {
        // Row-major A = [[1,2,0],[0,1,0],[0,0,1]], B = [[1,0,0],[3,1,0],[0,0,1]]
        let a = Mat3::from_cols_array([1.0, 0.0, 0.0, 2.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let b = Mat3::from_cols_array([1.0, 3.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        // A*B row-major = [[7,2,0],[3,1,0],[0,0,1]]
        let ab = a * b;
        assert_eq!(ab.to_cols_array(), [7.0, 3.0, 0.0, 2.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn transpose_involution() {
        let m = Mat3::from_cols_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose()[(0, 2)], m[(2, 0)]);
    }

    #[test]
    fn transpose_in_place_matches_copy() {
        let m = Mat3::from_cols_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let mut t = m;
        t.transpose_in_place();
        assert_eq!(t, m.transpose());
        t.transpose_in_place();
        assert_eq!(t, m);
    }

    #[test]
    fn determinant_known_values() {
        assert_eq!(Mat3::identity().determinant(), 1.0);
        assert_eq!(Mat3::scaling(2.0, 3.0, 4.0).determinant(), 24.0);

        // Row-major [[6,1,1],[4,-2,5],[2,8,7]] has determinant -306
        let m = Mat3::from_cols_array([6.0, 4.0, 2.0, 1.0, -2.0, 8.0, 1.0, 5.0, 7.0]);
        assert!((m.determinant() - (-306.0)).abs() < 1e-3);
    }

    #[test]
    fn determinant_multiplicative() {
        let a = Mat3::from_cols_array([2.0, 1.0, 0.5, -1.0, 3.0, 2.0, 0.0, 1.0, 4.0]);
        let b = Mat3::from_cols_array([1.0, 0.0, 2.0, 3.0, -2.0, 1.0, 0.5, 1.0, 1.0]);
        let lhs = (a * b).determinant();
        let rhs = a.determinant() * b.determinant();
        assert!((lhs - rhs).abs() < 1e-2 * rhs.abs().max(1.0));
    }

    #[test]
    fn inverse_roundtrip() {
        let m = Mat3::from_cols_array([2.0, 1.0, 0.5, -1.0, 3.0, 2.0, 0.0, 1.0, 4.0]);
        let inv = m.inverse().unwrap();
        assert_mat3_eq(&(m * inv), &Mat3::identity(), 1e-5);
        assert_mat3_eq(&(inv * m), &Mat3::identity(), 1e-5);
    }

    #[test]
    fn inverse_diagonal() {
        let inv = Mat3::scaling(2.0, 4.0, 8.0).inverse().unwrap();
        assert_mat3_eq(&inv, &Mat3::scaling(0.5, 0.25, 0.125), 1e-6);
    }

    #[test]
    fn inverse_singular_is_none() {
        // Two identical columns
        let c = Vec3::new(1.0, 2.0, 3.0);
        let m = Mat3::from_cols(c, c, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(m.inverse(), None);
        assert_eq!(Mat3::zeros().inverse(), None);
    }

    #[test]
    fn vector_product() {
        let m = Mat3::from_cols_array([1.0, 0.0, 0.0, 2.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        // Row-major [[1,2,0],[0,1,0],[0,0,1]] applied to (1,1,1)
        assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 1.0, 1.0));
        assert_eq!(Mat3::identity() * Vec3::new(4.0, 5.0, 6.0), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn scalar_product() {
        let m = Mat3::identity() * 3.0;
        assert_eq!(m.c0.x, 3.0);
        assert_eq!(m.c1.y, 3.0);
        assert_eq!(m.c0.y, 0.0);
    }
}
