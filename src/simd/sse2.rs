//! SSE2 kernels for the 4x4 operations (128-bit registers, 4 f32 lanes).
//!
//! One register holds one matrix column. The multiply transposes the first
//! operand into rows once, then finishes each output column with pairwise
//! horizontal adds. The inverse computes the twelve 2x2 sub-factors in two
//! registers each and assembles four checkerboard-signed adjugate columns.
//!
//! The helpers here (`transpose4`, the sub-factor and adjugate-term
//! builders) are shared with the 256-bit kernels so the lane bookkeeping
//! lives in exactly one place.

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// `shuffle!(a, b, i0, i1, i2, i3)`: lanes 0..1 from `a[i0]`, `a[i1]`,
/// lanes 2..3 from `b[i2]`, `b[i3]`.
macro_rules! shuffle {
    ($a:expr, $b:expr, $i0:literal, $i1:literal, $i2:literal, $i3:literal) => {
        _mm_shuffle_ps::<{ (($i3 << 6) | ($i2 << 4) | ($i1 << 2) | $i0) as i32 }>($a, $b)
    };
}

/// `swizzle!(v, i0, i1, i2, i3)`: lane permutation of a single register.
macro_rules! swizzle {
    ($v:expr, $i0:literal, $i1:literal, $i2:literal, $i3:literal) => {
        shuffle!($v, $v, $i0, $i1, $i2, $i3)
    };
}

/// Sign-bit masks: lane is negated where the bit is set.
#[inline(always)]
pub(crate) unsafe fn sign_mask(m0: bool, m1: bool, m2: bool, m3: bool) -> __m128 {
    const NEG: i32 = i32::MIN;
    unsafe {
        _mm_castsi128_ps(_mm_setr_epi32(
            if m0 { NEG } else { 0 },
            if m1 { NEG } else { 0 },
            if m2 { NEG } else { 0 },
            if m3 { NEG } else { 0 },
        ))
    }
}

/// Four-register transpose: columns in, rows out.
#[inline(always)]
pub(crate) unsafe fn transpose4(
    c0: __m128,
    c1: __m128,
    c2: __m128,
    c3: __m128,
) -> (__m128, __m128, __m128, __m128) {
    unsafe {
        let t0 = _mm_unpacklo_ps(c0, c1);
        let t1 = _mm_unpackhi_ps(c0, c1);
        let t2 = _mm_unpacklo_ps(c2, c3);
        let t3 = _mm_unpackhi_ps(c2, c3);
        (
            _mm_movelh_ps(t0, t2),
            _mm_movehl_ps(t2, t0),
            _mm_movelh_ps(t1, t3),
            _mm_movehl_ps(t3, t1),
        )
    }
}

/// Pairwise horizontal add without SSE3:
/// `[a0+a1, a2+a3, b0+b1, b2+b3]`.
#[inline(always)]
pub(crate) unsafe fn hadd_ps(a: __m128, b: __m128) -> __m128 {
    unsafe {
        let even = shuffle!(a, b, 0, 2, 0, 2);
        let odd = shuffle!(a, b, 1, 3, 1, 3);
        _mm_add_ps(even, odd)
    }
}

/// The six 2x2 sub-factors of two rows, over column pairs
/// (01, 02, 03, 12) in the first register and (13, 23, 13, 23) in the
/// second.
#[inline(always)]
pub(crate) unsafe fn subfactors(ra: __m128, rb: __m128) -> (__m128, __m128) {
    unsafe {
        let fa = _mm_sub_ps(
            _mm_mul_ps(swizzle!(ra, 0, 0, 0, 1), swizzle!(rb, 1, 2, 3, 2)),
            _mm_mul_ps(swizzle!(ra, 1, 2, 3, 2), swizzle!(rb, 0, 0, 0, 1)),
        );
        let fb = _mm_sub_ps(
            _mm_mul_ps(swizzle!(ra, 1, 2, 1, 2), swizzle!(rb, 3, 3, 3, 3)),
            _mm_mul_ps(swizzle!(ra, 3, 3, 3, 3), swizzle!(rb, 1, 2, 1, 2)),
        );
        (fa, fb)
    }
}

/// The three factor registers one adjugate column pair consumes:
/// `(f5,f5,f4,f3)`, `(f4,f2,f2,f1)`, `(f3,f1,f0,f0)` drawn from
/// sub-factor registers `fa = (f0,f1,f2,f3)` and `fb = (f4,f5,..)`.
#[inline(always)]
pub(crate) unsafe fn factor_combos(fa: __m128, fb: __m128) -> (__m128, __m128, __m128) {
    unsafe {
        let h = shuffle!(fa, fb, 3, 3, 0, 0); // (f3, f3, f4, f4)
        let f1 = shuffle!(fb, h, 1, 1, 2, 0); // (f5, f5, f4, f3)
        let k = shuffle!(fb, fa, 0, 0, 2, 2); // (f4, f4, f2, f2)
        let f2 = shuffle!(k, fa, 0, 2, 2, 1); // (f4, f2, f2, f1)
        let f3 = swizzle!(fa, 3, 1, 0, 0); // (f3, f1, f0, f0)
        (f1, f2, f3)
    }
}

/// The three row-element registers one adjugate column consumes, drawn
/// from the complementary row `r = (e0, e1, e2, e3)`:
/// `(e1,e0,e0,e0)`, `(e2,e2,e1,e1)`, `(e3,e3,e3,e2)`.
#[inline(always)]
pub(crate) unsafe fn adjugate_terms(r: __m128) -> (__m128, __m128, __m128) {
    unsafe {
        (
            swizzle!(r, 1, 0, 0, 0),
            swizzle!(r, 2, 2, 1, 1),
            swizzle!(r, 3, 3, 3, 2),
        )
    }
}

/// Determinant from the sub-factor registers, reproducing the scalar
/// kernel's summation order exactly.
#[inline(always)]
pub(crate) unsafe fn det_from_subfactors(
    sa: __m128,
    sb: __m128,
    ca: __m128,
    cb: __m128,
) -> f32 {
    unsafe {
        // (s0*c5, s1*c4, s2*c3, s3*c2) and (s4*c1, s5*c0, ..)
        let p = _mm_mul_ps(sa, shuffle!(cb, ca, 1, 0, 3, 2));
        let q = _mm_mul_ps(sb, swizzle!(ca, 1, 0, 1, 0));

        let mut pp = [0.0_f32; 4];
        let mut qq = [0.0_f32; 4];
        _mm_storeu_ps(pp.as_mut_ptr(), p);
        _mm_storeu_ps(qq.as_mut_ptr(), q);
        pp[0] - pp[1] + pp[2] + pp[3] - qq[0] + qq[1]
    }
}

/// 4x4 matrix product `A * B`.
#[allow(dead_code)] // dispatch prefers the wider kernels when they exist
pub fn mul(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    let mut out = [0.0_f32; 16];
    unsafe {
        let a0 = _mm_loadu_ps(a.as_ptr());
        let a1 = _mm_loadu_ps(a.as_ptr().add(4));
        let a2 = _mm_loadu_ps(a.as_ptr().add(8));
        let a3 = _mm_loadu_ps(a.as_ptr().add(12));
        let (r0, r1, r2, r3) = transpose4(a0, a1, a2, a3);

        for j in 0..4 {
            let bj = _mm_loadu_ps(b.as_ptr().add(j * 4));
            let t0 = hadd_ps(_mm_mul_ps(r0, bj), _mm_mul_ps(r1, bj));
            let t1 = hadd_ps(_mm_mul_ps(r2, bj), _mm_mul_ps(r3, bj));
            _mm_storeu_ps(out.as_mut_ptr().add(j * 4), hadd_ps(t0, t1));
        }
    }
    out
}

/// 4x4 inverse by adjugate over determinant, four cofactors per vector
/// operation.
#[allow(dead_code)] // dispatch prefers the wider kernels when they exist
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
        let rcp = _mm_set1_ps(1.0 / det);

        let (f1, f2, f3) = factor_combos(ca, cb);
        let (g1, g2, g3) = factor_combos(sa, sb);

        // Alternating checkerboard signs down each output column
        let pmpm = sign_mask(false, true, false, true);
        let mpmp = sign_mask(true, false, true, false);

        let mut out = [0.0_f32; 16];
        for (j, (row, t1, t2, t3, signs)) in [
            (r1, f1, f2, f3, pmpm),
            (r0, f1, f2, f3, mpmp),
            (r3, g1, g2, g3, pmpm),
            (r2, g1, g2, g3, mpmp),
        ]
        .into_iter()
        .enumerate()
        {
            let (x1, x2, x3) = adjugate_terms(row);
            let acc = _mm_add_ps(
                _mm_sub_ps(_mm_mul_ps(x1, t1), _mm_mul_ps(x2, t2)),
                _mm_mul_ps(x3, t3),
            );
            let col = _mm_mul_ps(_mm_xor_ps(acc, signs), rcp);
            _mm_storeu_ps(out.as_mut_ptr().add(j * 4), col);
        }
        Some(out)
    }
}
