//! AVX kernels for the 4x4 operations (256-bit registers, 8 f32 lanes).
//!
//! Two matrix columns (or two transposed rows) share one register, so each
//! pass produces two output columns. Only compiled when
//! `target_feature = "avx"` is enabled (e.g. via `-C target-cpu=native`).

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::sse2::{
    adjugate_terms, det_from_subfactors, factor_combos, subfactors, transpose4,
};

/// Checkerboard sign mask for one adjugate column pair: `(+,-,+,-)` in the
/// low half, `(-,+,-,+)` in the high half.
#[inline(always)]
unsafe fn checkerboard256() -> __m256 {
    const NEG: i32 = i32::MIN;
    unsafe { _mm256_castsi256_ps(_mm256_setr_epi32(0, NEG, 0, NEG, NEG, 0, NEG, 0)) }
}

/// 4x4 matrix product `A * B`.
///
/// Rows of `A` are packed in pairs; each iteration multiplies both packed
/// row registers against one pair of `B` columns, reduces with two
/// horizontal adds, and fixes the lane order the horizontal adds produce
/// with an unpack/permute interleave.
#[allow(dead_code)] // dispatch prefers the 512-bit kernels when they exist
pub fn mul(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    let mut out = [0.0_f32; 16];
    unsafe {
        let a0 = _mm_loadu_ps(a.as_ptr());
        let a1 = _mm_loadu_ps(a.as_ptr().add(4));
        let a2 = _mm_loadu_ps(a.as_ptr().add(8));
        let a3 = _mm_loadu_ps(a.as_ptr().add(12));
        let (r0, r1, r2, r3) = transpose4(a0, a1, a2, a3);

        let r01 = _mm256_set_m128(r1, r0);
        let r23 = _mm256_set_m128(r3, r2);

        for j in [0, 2] {
            // Both columns of the pair, then each broadcast to both lanes
            let bj = _mm256_loadu_ps(b.as_ptr().add(j * 4));
            let lo = _mm256_permute2f128_ps::<0x00>(bj, bj);
            let hi = _mm256_permute2f128_ps::<0x11>(bj, bj);

            // t1 lane0 = (r0.lo, r2.lo), lane1 = (r1.lo, r3.lo) pair sums
            let t1 = _mm256_hadd_ps(_mm256_mul_ps(r01, lo), _mm256_mul_ps(r23, lo));
            let t2 = _mm256_hadd_ps(_mm256_mul_ps(r01, hi), _mm256_mul_ps(r23, hi));

            // s lane0 = (d00, d20, d01, d21), lane1 = (d10, d30, d11, d31)
            // where dij = row i of A dot column j of the pair
            let s = _mm256_hadd_ps(t1, t2);
            let w = _mm256_permute2f128_ps::<0x01>(s, s);

            // Interleave even/odd rows back into column order
            let col_lo = _mm256_unpacklo_ps(s, w);
            let col_hi = _mm256_unpackhi_ps(s, w);
            let cols = _mm256_permute2f128_ps::<0x20>(col_lo, col_hi);

            _mm256_storeu_ps(out.as_mut_ptr().add(j * 4), cols);
        }
    }
    out
}

/// 4x4 inverse by adjugate over determinant, two adjugate columns per
/// vector operation.
#[allow(dead_code)] // dispatch prefers the 512-bit kernels when they exist
pub fn inverse(m: &[f32; 16]) -> Option<[f32; 16]> {
    unsafe {
        let c0 = _mm_loadu_ps(m.as_ptr());
        let c1 = _mm_loadu_ps(m.as_ptr().add(4));
        let c2 = _mm_loadu_ps(m.as_ptr().add(8));
        let c3 = _mm_loadu_ps(m.as_ptr().add(12));
        let (r0, r1, r2, r3) = transpose4(c0, c1, c2, c3);

        let (sa, sb) = subfactors(r0, r1);
        let (ca, cb) = subfactors(r2, r3);

        let det = det_from_subfactors(sa, sb, ca, cb);
        if det == 0.0 {
            return None;
        }
        let rcp = _mm256_set1_ps(1.0 / det);

        let (f1, f2, f3) = factor_combos(ca, cb);
        let (g1, g2, g3) = factor_combos(sa, sb);

        let signs = checkerboard256();

        let mut out = [0.0_f32; 16];
        for (half, (row_lo, row_hi, t1, t2, t3)) in [
            (r1, r0, f1, f2, f3),
            (r3, r2, g1, g2, g3),
        ]
        .into_iter()
        .enumerate()
        {
            let (x1l, x2l, x3l) = adjugate_terms(row_lo);
            let (x1h, x2h, x3h) = adjugate_terms(row_hi);

            let x1 = _mm256_set_m128(x1h, x1l);
            let x2 = _mm256_set_m128(x2h, x2l);
            let x3 = _mm256_set_m128(x3h, x3l);
            let t1 = _mm256_set_m128(t1, t1);
            let t2 = _mm256_set_m128(t2, t2);
            let t3 = _mm256_set_m128(t3, t3);

            let acc = _mm256_add_ps(
                _mm256_sub_ps(_mm256_mul_ps(x1, t1), _mm256_mul_ps(x2, t2)),
                _mm256_mul_ps(x3, t3),
            );
            let signed = _mm256_xor_ps(acc, signs);
            _mm256_storeu_ps(
                out.as_mut_ptr().add(half * 8),
                _mm256_mul_ps(signed, rcp),
            );
        }
        Some(out)
    }
}
