//! Component-wise operations on 3-component float vectors.
//!
//! The out-parameter functions mirror the engine's `float[3]` calling convention:
//! inputs are borrowed read-only and every component of `out` is written.
//! `vector_clear` and `vector_inverse` mutate their argument in place.
//!
//! Rust does not allow an input and the output to be the same borrow. Because
//! every operation is purely component-wise, copying the input first gives the
//! same result as passing one buffer twice:
//!
//! ```
//! use mathlib_core::vector::{vector_negate, Vec3};
//!
//! let mut v: Vec3 = [1.0, -2.0, 3.0];
//! let input = v;
//! vector_negate(&input, &mut v);
//! assert_eq!(v, [-1.0, 2.0, -3.0]);
//! ```

/// Single-precision scalar used by every vector type.
pub type VecT = f32;

/// 3-component vector, laid out as a contiguous `float[3]`.
pub type Vec3 = [VecT; 3];

/// 4-component vector, laid out as a contiguous `float[4]`.
///
/// Declared for layout compatibility only; no arithmetic is defined over it.
pub type Vec4 = [VecT; 4];

// ============================================================================
// OUT-PARAMETER FORM
// ============================================================================

/// `out = a + b`
#[inline(always)]
pub fn vector_add(a: &Vec3, b: &Vec3, out: &mut Vec3) {
    out[0] = a[0] + b[0];
    out[1] = a[1] + b[1];
    out[2] = a[2] + b[2];
}

/// `out = a - b`
#[inline(always)]
pub fn vector_subtract(a: &Vec3, b: &Vec3, out: &mut Vec3) {
    out[0] = a[0] - b[0];
    out[1] = a[1] - b[1];
    out[2] = a[2] - b[2];
}

/// Scale-and-accumulate: `out = scale * m + a`.
///
/// Evaluated as a separate multiply then add; no fused rounding is promised.
#[inline(always)]
pub fn vector_ma(a: &Vec3, scale: VecT, m: &Vec3, out: &mut Vec3) {
    out[0] = scale * m[0] + a[0];
    out[1] = scale * m[1] + a[1];
    out[2] = scale * m[2] + a[2];
}

/// `out = scale * input`
#[inline(always)]
pub fn vector_scale(input: &Vec3, scale: VecT, out: &mut Vec3) {
    out[0] = scale * input[0];
    out[1] = scale * input[1];
    out[2] = scale * input[2];
}

/// Set every component of `v` to `0.0`.
#[inline(always)]
pub fn vector_clear(v: &mut Vec3) {
    v[0] = 0.0;
    v[1] = 0.0;
    v[2] = 0.0;
}

/// `out = input`
#[inline(always)]
pub fn vector_copy(input: &Vec3, out: &mut Vec3) {
    out[0] = input[0];
    out[1] = input[1];
    out[2] = input[2];
}

/// `out = -input`
#[inline(always)]
pub fn vector_negate(input: &Vec3, out: &mut Vec3) {
    out[0] = -input[0];
    out[1] = -input[1];
    out[2] = -input[2];
}

/// Negate `v` in place.
#[inline(always)]
pub fn vector_inverse(v: &mut Vec3) {
    v[0] = -v[0];
    v[1] = -v[1];
    v[2] = -v[2];
}

/// Midpoint: `out = (a + b) * 0.5`
#[inline(always)]
pub fn vector_average(a: &Vec3, b: &Vec3, out: &mut Vec3) {
    out[0] = (a[0] + b[0]) * 0.5;
    out[1] = (a[1] + b[1]) * 0.5;
    out[2] = (a[2] + b[2]) * 0.5;
}

/// True when all three components compare equal to `0.0`.
///
/// Exact comparison with no epsilon. `-0.0` counts as zero, NaN never does.
#[inline(always)]
pub fn vector_is_zero(v: &Vec3) -> bool {
    v[0] == 0.0 && v[1] == 0.0 && v[2] == 0.0
}

// ============================================================================
// VALUE-RETURNING FORM
// ============================================================================

/// Value-returning [`vector_add`].
#[inline]
pub fn added(a: &Vec3, b: &Vec3) -> Vec3 {
    let mut out = [0.0; 3];
    vector_add(a, b, &mut out);
    out
}

/// Value-returning [`vector_subtract`].
#[inline]
pub fn subtracted(a: &Vec3, b: &Vec3) -> Vec3 {
    let mut out = [0.0; 3];
    vector_subtract(a, b, &mut out);
    out
}

/// Value-returning [`vector_ma`].
#[inline]
pub fn multiply_added(a: &Vec3, scale: VecT, m: &Vec3) -> Vec3 {
    let mut out = [0.0; 3];
    vector_ma(a, scale, m, &mut out);
    out
}

/// Value-returning [`vector_scale`].
#[inline]
pub fn scaled(input: &Vec3, scale: VecT) -> Vec3 {
    let mut out = [0.0; 3];
    vector_scale(input, scale, &mut out);
    out
}

/// Value-returning [`vector_negate`].
#[inline]
pub fn negated(input: &Vec3) -> Vec3 {
    let mut out = [0.0; 3];
    vector_negate(input, &mut out);
    out
}

/// Value-returning [`vector_average`].
#[inline]
pub fn averaged(a: &Vec3, b: &Vec3) -> Vec3 {
    let mut out = [0.0; 3];
    vector_average(a, b, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subtract() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, -4.0, 10.0];
        let mut out = [f32::NAN; 3];

        vector_add(&a, &b, &mut out);
        assert_eq!(out, [1.5, -2.0, 13.0]);

        vector_subtract(&a, &b, &mut out);
        assert_eq!(out, [0.5, 6.0, -7.0]);
    }

    #[test]
    fn test_add_is_commutative() {
        let a = [0.1, 0.2, 0.3];
        let b = [1e7, -3.0, 0.7];
        assert_eq!(added(&a, &b), added(&b, &a));
    }

    #[test]
    fn test_ma() {
        let origin = [1.0, 1.0, 1.0];
        let dir = [0.0, 2.0, -1.0];
        let mut out = [0.0; 3];

        vector_ma(&origin, 3.0, &dir, &mut out);
        assert_eq!(out, [1.0, 7.0, -2.0]);
    }

    #[test]
    fn test_ma_zero_scale_returns_base() {
        let base = [4.0, -5.0, 6.0];
        let m = [123.0, 456.0, -789.0];
        assert_eq!(multiply_added(&base, 0.0, &m), base);
    }

    #[test]
    fn test_scale() {
        let v = [2.0, -3.0, 0.5];
        assert_eq!(scaled(&v, 2.0), [4.0, -6.0, 1.0]);
        assert_eq!(scaled(&v, 1.0), v);
        assert_eq!(scaled(&v, 0.0), [0.0, -0.0, 0.0]);
    }

    #[test]
    fn test_clear_overwrites_all() {
        let mut v = [f32::NAN, f32::INFINITY, -7.0];
        vector_clear(&mut v);
        assert_eq!(v, [0.0; 3]);
        assert!(vector_is_zero(&v));
    }

    #[test]
    fn test_copy() {
        let src = [9.0, 8.0, 7.0];
        let mut dst = [0.0; 3];
        vector_copy(&src, &mut dst);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_negate_and_inverse_agree() {
        let v = [1.0, -0.0, 3.5];
        let mut negated_out = [0.0; 3];
        vector_negate(&v, &mut negated_out);

        let mut inverted = v;
        vector_inverse(&mut inverted);

        assert_eq!(negated_out, inverted);
        assert!(inverted[1].is_sign_positive());
    }

    #[test]
    fn test_in_place_through_copy() {
        let mut v = [1.0, 2.0, 3.0];
        let input = v;
        vector_scale(&input, -2.0, &mut v);
        assert_eq!(v, [-2.0, -4.0, -6.0]);
    }

    #[test]
    fn test_average() {
        let a = [0.0, 10.0, -4.0];
        let b = [2.0, 20.0, 4.0];
        assert_eq!(averaged(&a, &b), [1.0, 15.0, 0.0]);
        assert_eq!(averaged(&a, &a), a);
    }

    #[test]
    fn test_is_zero_exact() {
        assert!(vector_is_zero(&[0.0, 0.0, 0.0]));
        assert!(vector_is_zero(&[-0.0, 0.0, -0.0]));
        assert!(!vector_is_zero(&[0.0, 0.0, f32::MIN_POSITIVE]));
        assert!(!vector_is_zero(&[0.0, f32::from_bits(1), 0.0])); // smallest subnormal
        assert!(!vector_is_zero(&[f32::NAN, 0.0, 0.0]));
    }

    #[test]
    fn test_nan_propagates() {
        let a = [f32::NAN, 1.0, f32::INFINITY];
        let b = [1.0, 1.0, f32::NEG_INFINITY];
        let sum = added(&a, &b);
        assert!(sum[0].is_nan());
        assert_eq!(sum[1], 2.0);
        assert!(sum[2].is_nan()); // inf + -inf
    }
}
