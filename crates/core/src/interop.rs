//! Conversions between the flat array vectors and `nalgebra`.
//!
//! Simulation code works in `nalgebra::Vector3<f32>`; these helpers move values
//! across without changing component order or bits.

use nalgebra::{Vector3, Vector4};

use crate::vector::{Vec3, Vec4};

/// `[x, y, z]` to `Vector3`.
#[inline]
pub fn to_vector3(v: &Vec3) -> Vector3<f32> {
    Vector3::new(v[0], v[1], v[2])
}

/// `Vector3` to `[x, y, z]`.
#[inline]
pub fn from_vector3(v: &Vector3<f32>) -> Vec3 {
    [v.x, v.y, v.z]
}

/// `[x, y, z, w]` to `Vector4`.
#[inline]
pub fn to_vector4(v: &Vec4) -> Vector4<f32> {
    Vector4::new(v[0], v[1], v[2], v[3])
}

/// `Vector4` to `[x, y, z, w]`.
#[inline]
pub fn from_vector4(v: &Vector4<f32>) -> Vec4 {
    [v.x, v.y, v.z, v.w]
}
