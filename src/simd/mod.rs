//! SIMD-accelerated 4x4 kernels with compile-time architecture dispatch.
//!
//! This module is private — it provides internal acceleration for the
//! [`Mat4`](crate::Mat4) product and inverse. The public API is unchanged.
//!
//! ## Dispatch strategy
//!
//! On x86_64 the widest instruction set the build targets is selected at
//! compile time: AVX-512 > AVX > SSE2. Enable the wider tiers via
//! `-C target-cpu=native` or `-C target-feature=+avx` etc. Every other
//! architecture uses the scalar kernels. Selection happens once, at
//! monomorphization — never as a branch inside the operation.
//!
//! ## Numeric contract
//!
//! Every kernel agrees with [`scalar`] within 1 ULP per element for finite
//! inputs. The AVX-512 multiply and all inverse kernels reproduce the
//! scalar results exactly (same products, same summation order); the SSE2
//! and AVX multiplies reduce dot products pairwise, which may differ from
//! the scalar k-order sum in the last bit.
//!
//! All kernels take column-major `[f32; 16]` flat matrices: element
//! (row, col) at `col * 4 + row`.

pub(crate) mod scalar;

#[cfg(target_arch = "x86_64")]
pub(crate) mod sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub(crate) mod avx;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub(crate) mod avx512;

/// Dispatch the 4x4 matrix product to the widest compiled-in kernel.
#[inline]
pub(crate) fn mat4_mul(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
    return avx512::mul(a, b);
    #[cfg(all(target_arch = "x86_64", target_feature = "avx", not(target_feature = "avx512f")))]
    return avx::mul(a, b);
    #[cfg(all(target_arch = "x86_64", not(target_feature = "avx")))]
    return sse2::mul(a, b);
    #[cfg(not(target_arch = "x86_64"))]
    scalar::mul(a, b)
}

/// Dispatch the 4x4 inverse to the widest compiled-in kernel.
///
/// Returns `None` when the determinant is exactly zero.
#[inline]
pub(crate) fn mat4_inverse(m: &[f32; 16]) -> Option<[f32; 16]> {
    #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
    return avx512::inverse(m);
    #[cfg(all(target_arch = "x86_64", target_feature = "avx", not(target_feature = "avx512f")))]
    return avx::inverse(m);
    #[cfg(all(target_arch = "x86_64", not(target_feature = "avx")))]
    return sse2::inverse(m);
    #[cfg(not(target_arch = "x86_64"))]
    scalar::inverse(m)
}
