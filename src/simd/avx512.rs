//! AVX-512 kernels for the 4x4 operations (512-bit registers, 16 f32
//! lanes — one register holds an entire matrix).
//!
//! Both kernels work from precomputed permutation-index tables instead of
//! in-lane shuffles: `_mm512_permutexvar_ps` can gather any lane pattern
//! from the whole matrix in one instruction. Only compiled when
//! `target_feature = "avx512f"` is enabled (e.g. via
//! `-C target-cpu=native` on Skylake-X+ / Zen 4+).

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Lane `c*4 + r` holds matrix element (row `r`, column `c`); an index
/// table is the lane-gather pattern for one operand of one step.
#[inline(always)]
unsafe fn index16(t: [i32; 16]) -> __m512i {
    unsafe {
        _mm512_setr_epi32(
            t[0], t[1], t[2], t[3], t[4], t[5], t[6], t[7], t[8], t[9], t[10], t[11], t[12],
            t[13], t[14], t[15],
        )
    }
}

#[inline(always)]
unsafe fn gather(v: __m512, t: [i32; 16]) -> __m512 {
    unsafe { _mm512_permutexvar_ps(index16(t), v) }
}

/// 4x4 matrix product `A * B`.
///
/// One family of index masks tiles `A`'s column `k` across all four
/// column slots, the other broadcasts each `B[k][j]` entry across its
/// four-lane group; four multiply+accumulate steps then produce the whole
/// product with no horizontal adds, in the scalar kernel's summation
/// order.
pub fn mul(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    // Step k: lane c*4+r reads A(r, k) and B(k, c)
    const TILE_A: [[i32; 16]; 4] = [
        [0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3],
        [4, 5, 6, 7, 4, 5, 6, 7, 4, 5, 6, 7, 4, 5, 6, 7],
        [8, 9, 10, 11, 8, 9, 10, 11, 8, 9, 10, 11, 8, 9, 10, 11],
        [12, 13, 14, 15, 12, 13, 14, 15, 12, 13, 14, 15, 12, 13, 14, 15],
    ];
    const BCAST_B: [[i32; 16]; 4] = [
        [0, 0, 0, 0, 4, 4, 4, 4, 8, 8, 8, 8, 12, 12, 12, 12],
        [1, 1, 1, 1, 5, 5, 5, 5, 9, 9, 9, 9, 13, 13, 13, 13],
        [2, 2, 2, 2, 6, 6, 6, 6, 10, 10, 10, 10, 14, 14, 14, 14],
        [3, 3, 3, 3, 7, 7, 7, 7, 11, 11, 11, 11, 15, 15, 15, 15],
    ];

    let mut out = [0.0_f32; 16];
    unsafe {
        let va = _mm512_loadu_ps(a.as_ptr());
        let vb = _mm512_loadu_ps(b.as_ptr());

        let mut acc = _mm512_setzero_ps();
        for k in 0..4 {
            acc = _mm512_add_ps(
                acc,
                _mm512_mul_ps(gather(va, TILE_A[k]), gather(vb, BCAST_B[k])),
            );
        }
        _mm512_storeu_ps(out.as_mut_ptr(), acc);
    }
    out
}

/// 4x4 inverse by adjugate over determinant.
///
/// The twelve 2x2 sub-factors are computed for all lanes at once with four
/// indexed gathers; the adjugate needs three more gather pairs, one
/// checkerboard sign-bit XOR, and one reciprocal-determinant scale.
pub fn inverse(m: &[f32; 16]) -> Option<[f32; 16]> {
    // Sub-factor vector: lanes 0..6 are s0..s5 (rows 0..1), lanes 8..14
    // are c0..c5 (rows 2..3), both over column pairs
    // (01, 02, 03, 12, 13, 23). fac = m[I1]*m[I2] - m[I3]*m[I4].
    const I1: [i32; 16] = [0, 0, 0, 4, 4, 8, 0, 0, 2, 2, 2, 6, 6, 10, 0, 0];
    const I2: [i32; 16] = [5, 9, 13, 9, 13, 13, 0, 0, 7, 11, 15, 11, 15, 15, 0, 0];
    const I3: [i32; 16] = [1, 1, 1, 5, 5, 9, 0, 0, 3, 3, 3, 7, 7, 11, 0, 0];
    const I4: [i32; 16] = [4, 8, 12, 8, 12, 12, 0, 0, 6, 10, 14, 10, 14, 14, 0, 0];

    // Adjugate lane tables: lane c*4+r is the checkerboard-signed
    // combination x1*f1 - x2*f2 + x3*f3 of three matrix entries (XA*) and
    // three sub-factors (XF*, indices into the fac vector).
    const XA1: [i32; 16] = [5, 1, 1, 1, 4, 0, 0, 0, 7, 3, 3, 3, 6, 2, 2, 2];
    const XA2: [i32; 16] = [9, 9, 5, 5, 8, 8, 4, 4, 11, 11, 7, 7, 10, 10, 6, 6];
    const XA3: [i32; 16] = [13, 13, 13, 9, 12, 12, 12, 8, 15, 15, 15, 11, 14, 14, 14, 10];
    const XF1: [i32; 16] = [13, 13, 12, 11, 13, 13, 12, 11, 5, 5, 4, 3, 5, 5, 4, 3];
    const XF2: [i32; 16] = [12, 10, 10, 9, 12, 10, 10, 9, 4, 2, 2, 1, 4, 2, 2, 1];
    const XF3: [i32; 16] = [11, 9, 8, 8, 11, 9, 8, 8, 3, 1, 0, 0, 3, 1, 0, 0];

    const NEG: i32 = i32::MIN;
    const CHECKERBOARD: [i32; 16] = [
        0, NEG, 0, NEG, NEG, 0, NEG, 0, 0, NEG, 0, NEG, NEG, 0, NEG, 0,
    ];

    let mut out = [0.0_f32; 16];
    unsafe {
        let vm = _mm512_loadu_ps(m.as_ptr());

        let fac = _mm512_sub_ps(
            _mm512_mul_ps(gather(vm, I1), gather(vm, I2)),
            _mm512_mul_ps(gather(vm, I3), gather(vm, I4)),
        );

        let mut f = [0.0_f32; 16];
        _mm512_storeu_ps(f.as_mut_ptr(), fac);
        let det = f[0] * f[13] - f[1] * f[12] + f[2] * f[11] + f[3] * f[10] - f[4] * f[9]
            + f[5] * f[8];
        if det == 0.0 {
            return None;
        }

        let adj = _mm512_add_ps(
            _mm512_sub_ps(
                _mm512_mul_ps(gather(vm, XA1), gather(fac, XF1)),
                _mm512_mul_ps(gather(vm, XA2), gather(fac, XF2)),
            ),
            _mm512_mul_ps(gather(vm, XA3), gather(fac, XF3)),
        );
        let signed = _mm512_castsi512_ps(_mm512_xor_epi32(
            _mm512_castps_si512(adj),
            index16(CHECKERBOARD),
        ));
        _mm512_storeu_ps(
            out.as_mut_ptr(),
            _mm512_mul_ps(signed, _mm512_set1_ps(1.0 / det)),
        );
    }
    Some(out)
}
