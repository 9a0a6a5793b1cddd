//! # vectoris
//!
//! Small 3D linear-algebra library for real-time graphics and physics,
//! no-std compatible. Fixed-size single-precision vectors (2/3/4
//! components) and column-major matrices (3x3/4x4) with SIMD-accelerated
//! 4x4 multiply and inverse.
//!
//! ## Quick start
//!
//! ```
//! use vectoris::{Mat4, Vec3, Vec4};
//!
//! // Compose a transform and apply it to a point
//! let m = Mat4::translation(1.0, 2.0, 3.0)
//!     * Mat4::rotation_axis(Vec3::new(0.0, 1.0, 0.0), 0.5);
//! let p = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
//!
//! // Invert it back (None for singular matrices)
//! let inv = m.inverse().unwrap();
//! let q = inv * p;
//! assert!((q.x - 1.0).abs() < 1e-5);
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — [`Vec2`] / [`Vec3`] / [`Vec4`]: componentwise and scalar
//!   arithmetic, length/distance, normalize, lerp, min/max, dot/cross.
//!   `Vec4` is 16-byte aligned for direct 128-bit register loads.
//!
//! - [`matrix`] — [`Mat3`] / [`Mat4`]: column-major storage (`c0..c3`
//!   column fields), multiply, transpose, determinant (cofactor
//!   expansion; `Mat4` reuses the 3x3 minors), inverse (adjugate over
//!   determinant, `Option` on singularity), and
//!   identity/scaling/translation/rotation constructors. `Mat4` is
//!   64-byte aligned so the whole matrix loads as one 512-bit register.
//!
//! - [`quaternion`] — [`Quat`]: unit quaternion, scalar-first
//!   `[w, x, y, z]`. Axis-angle construction, Hamilton product, vector
//!   rotation, conversion to matrices.
//!
//! The 4x4 multiply and inverse dispatch at compile time to the widest
//! SIMD tier the build targets — AVX-512, AVX, SSE2 on x86_64, a scalar
//! kernel elsewhere — and every tier agrees with the scalar kernel within
//! 1 ULP per element.
//!
//! ## Conventions
//!
//! - Column-major storage: `M * v` is the linear combination of columns
//!   weighted by `v`'s components.
//! - Rotations are right-handed, counter-clockwise for positive angles
//!   viewed from the positive axis toward the origin.
//! - Arithmetic is plain IEEE-754: `normalize` of a zero vector and
//!   division by zero propagate non-finite values silently; only matrix
//!   inversion guards (returns `None` on an exactly-zero determinant).
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via the system math library |
//! | `libm`  | no       | Pure-Rust software float fallback for no-std |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("vectoris requires either the `std` or the `libm` feature");

pub mod matrix;
pub mod quaternion;
mod simd;
pub mod vector;

pub use matrix::{Mat3, Mat4};
pub use quaternion::Quat;
pub use vector::{Vec2, Vec3, Vec4};
