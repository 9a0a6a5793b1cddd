//! Cross-validation against nalgebra as the reference implementation.
//!
//! Mirrors the structure of the upstream comparison suites: build the same
//! values in both libraries, run the same operation, assert near-equality.
//! Tolerances are relative, 1e-3..1e-5 depending on how much division and
//! cancellation the operation involves.

use nalgebra::{Matrix3, Matrix4, Rotation3, Unit, Vector3, Vector4};
use vectoris::{Mat3, Mat4, Vec2, Vec3, Vec4};

fn to_na3(m: &Mat3) -> Matrix3<f32> {
    Matrix3::from_column_slice(&m.to_cols_array())
}

fn to_na4(m: &Mat4) -> Matrix4<f32> {
    Matrix4::from_column_slice(&m.to_cols_array())
}

fn assert_mat3_close(ours: &Mat3, theirs: &Matrix3<f32>, eps: f32) {
    for r in 0..3 {
        for c in 0..3 {
            let (a, b) = (ours[(r, c)], theirs[(r, c)]);
            let scale = a.abs().max(b.abs()).max(1.0);
            assert!((a - b).abs() <= eps * scale, "({r},{c}): {a} vs {b}");
        }
    }
}

fn assert_mat4_close(ours: &Mat4, theirs: &Matrix4<f32>, eps: f32) {
    for r in 0..4 {
        for c in 0..4 {
            let (a, b) = (ours[(r, c)], theirs[(r, c)]);
            let scale = a.abs().max(b.abs()).max(1.0);
            assert!((a - b).abs() <= eps * scale, "({r},{c}): {a} vs {b}");
        }
    }
}

// Deterministic unstructured values; diagonal boosted so the inverse
// tests run on well-conditioned matrices.
fn sample_mat3(seed: f32) -> Mat3 {
    let mut a = [0.0_f32; 9];
    for c in 0..3 {
        for r in 0..3 {
            let i = c * 3 + r;
            a[i] = (seed + i as f32 * 0.91).sin() * 2.0;
            if r == c {
                a[i] += 4.0;
            }
        }
    }
    Mat3::from_cols_array(a)
}

fn sample_mat4(seed: f32) -> Mat4 {
    let mut a = [0.0_f32; 16];
    for c in 0..4 {
        for r in 0..4 {
            let i = c * 4 + r;
            a[i] = (seed + i as f32 * 0.91).sin() * 2.0;
            if r == c {
                a[i] += 5.0;
            }
        }
    }
    Mat4::from_cols_array(a)
}

// ── Vectors ─────────────────────────────────────────────────────────

#[test]
fn vec2_literal_fields() {
    let i = Vec2::new(14.0, 3.0);
    assert_eq!(i.x, 14.0);
    assert_eq!(i.y, 3.0);
}

#[test]
fn vec3_length_and_normalize_match() {
    let i = Vec3::new(3.5, -2.0, 1.25);
    let a = Vector3::new(3.5, -2.0_f32, 1.25);

    assert!((i.length() - a.norm()).abs() < 1e-6);

    let ni = i.normalize();
    let na = a.normalize();
    assert!((ni.x - na.x).abs() < 1e-6);
    assert!((ni.y - na.y).abs() < 1e-6);
    assert!((ni.z - na.z).abs() < 1e-6);
}

#[test]
fn vec3_cross_matches() {
    let i = Vec3::new(1.5, -2.0, 0.75);
    let j = Vec3::new(-3.0, 4.5, 2.0);
    let ours = i.cross(j);
    let theirs = Vector3::new(i.x, i.y, i.z).cross(&Vector3::new(j.x, j.y, j.z));
    assert!((ours.x - theirs.x).abs() < 1e-4);
    assert!((ours.y - theirs.y).abs() < 1e-4);
    assert!((ours.z - theirs.z).abs() < 1e-4);
}

#[test]
fn vec3_dot_matches() {
    let i = Vec3::new(1.5, -2.0, 0.75);
    let j = Vec3::new(-3.0, 4.5, 2.0);
    let theirs = Vector3::new(i.x, i.y, i.z).dot(&Vector3::new(j.x, j.y, j.z));
    assert!((i.dot(j) - theirs).abs() < 1e-5);
}

// ── Mat3 ────────────────────────────────────────────────────────────

#[test]
fn mat3_multiply_matches() {
    let a = sample_mat3(0.2);
    let b = sample_mat3(1.7);
    assert_mat3_close(&(a * b), &(to_na3(&a) * to_na3(&b)), 1e-5);
}

#[test]
fn mat3_determinant_matches() {
    let m = sample_mat3(0.9);
    let ours = m.determinant();
    let theirs = to_na3(&m).determinant();
    assert!((ours - theirs).abs() < 1e-3 * theirs.abs().max(1.0));
}

#[test]
fn mat3_inverse_matches() {
    let m = sample_mat3(2.3);
    let ours = m.inverse().expect("well-conditioned sample");
    let theirs = to_na3(&m).try_inverse().expect("well-conditioned sample");
    assert_mat3_close(&ours, &theirs, 1e-3);
}

#[test]
fn mat3_transpose_matches() {
    let m = sample_mat3(1.1);
    assert_mat3_close(&m.transpose(), &to_na3(&m).transpose(), 0.0);
}

#[test]
fn mat3_vector_product_matches() {
    let m = sample_mat3(0.4);
    let v = Vec3::new(1.0, -2.5, 0.5);
    let ours = m * v;
    let theirs = to_na3(&m) * Vector3::new(v.x, v.y, v.z);
    assert!((ours.x - theirs.x).abs() < 1e-4);
    assert!((ours.y - theirs.y).abs() < 1e-4);
    assert!((ours.z - theirs.z).abs() < 1e-4);
}

// ── Mat4 ────────────────────────────────────────────────────────────

#[test]
fn mat4_multiply_matches() {
    let a = sample_mat4(0.6);
    let b = sample_mat4(2.9);
    assert_mat4_close(&(a * b), &(to_na4(&a) * to_na4(&b)), 1e-5);
}

#[test]
fn mat4_determinant_matches() {
    let m = sample_mat4(1.4);
    let ours = m.determinant();
    let theirs = to_na4(&m).determinant();
    assert!((ours - theirs).abs() < 1e-3 * theirs.abs().max(1.0));
}

#[test]
fn mat4_inverse_matches() {
    let m = sample_mat4(0.8);
    let ours = m.inverse().expect("well-conditioned sample");
    let theirs = to_na4(&m).try_inverse().expect("well-conditioned sample");
    assert_mat4_close(&ours, &theirs, 1e-3);
}

#[test]
fn mat4_vector_product_matches() {
    let m = sample_mat4(2.0);
    let v = Vec4::new(1.0, -2.5, 0.5, 1.0);
    let ours = m * v;
    let theirs = to_na4(&m) * Vector4::new(v.x, v.y, v.z, v.w);
    for k in 0..4 {
        assert!((ours[k] - theirs[k]).abs() < 1e-4);
    }
}

// ── Transform constructors ──────────────────────────────────────────

#[test]
fn rotation_convention_matches() {
    for angle in [0.35_f32, -1.1, 2.4] {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), angle);
        assert_mat3_close(&Mat3::rotation_x(angle), rx.matrix(), 1e-6);

        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), angle);
        assert_mat3_close(&Mat3::rotation_y(angle), ry.matrix(), 1e-6);

        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), angle);
        assert_mat3_close(&Mat3::rotation_z(angle), rz.matrix(), 1e-6);
    }
}

#[test]
fn rotation_axis_matches() {
    let axis = Vector3::new(1.0_f32, -2.0, 0.5);
    let angle = 1.3_f32;
    let theirs = Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle);
    let ours = Mat3::rotation_axis(Vec3::new(axis.x, axis.y, axis.z), angle);
    assert_mat3_close(&ours, theirs.matrix(), 1e-5);
}

#[test]
fn mat4_translation_matches_homogeneous() {
    let t = Mat4::translation(1.0, -2.0, 3.0);
    let theirs = Matrix4::new_translation(&Vector3::new(1.0_f32, -2.0, 3.0));
    assert_mat4_close(&t, &theirs, 0.0);
}

#[test]
fn mat4_scaling_matches() {
    let s = Mat4::scaling(2.0, 3.0, 4.0);
    let theirs = Matrix4::new_nonuniform_scaling(&Vector3::new(2.0_f32, 3.0, 4.0));
    assert_mat4_close(&s, &theirs, 0.0);
}
