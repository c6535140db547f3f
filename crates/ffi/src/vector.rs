//! `float[3]` vector operations over raw pointers.
//!
//! Unlike the Rust API, an output pointer may be the same buffer as any input:
//! every input is read in full before the output is written. Each function
//! returns `MathlibErrorCode_Ok` or `MathlibErrorCode_NullPointer`; on failure
//! nothing is written.

use mathlib_core::vector::{
    vector_add, vector_average, vector_clear, vector_copy, vector_inverse, vector_is_zero,
    vector_ma, vector_negate, vector_scale, vector_subtract,
};

use crate::error::{DefaultMathlibError, MathlibErrorCode};
use crate::helpers::{ffi_status, read_vec3, write_vec3};

/// `out = a + b`
///
/// # Safety
/// Each pointer must be null or address 3 valid `f32`; `out` may alias `a` or `b`.
#[no_mangle]
pub unsafe extern "C" fn mathlib_vector_add(
    a: *const f32,
    b: *const f32,
    out: *mut f32,
) -> MathlibErrorCode {
    ffi_status(|| {
        let a = unsafe { read_vec3(a, "a")? };
        let b = unsafe { read_vec3(b, "b")? };
        let mut result = [0.0; 3];
        vector_add(&a, &b, &mut result);
        unsafe { write_vec3(out, "out", &result) }
    })
}

/// `out = a - b`
///
/// # Safety
/// Each pointer must be null or address 3 valid `f32`; `out` may alias `a` or `b`.
#[no_mangle]
pub unsafe extern "C" fn mathlib_vector_subtract(
    a: *const f32,
    b: *const f32,
    out: *mut f32,
) -> MathlibErrorCode {
    ffi_status(|| {
        let a = unsafe { read_vec3(a, "a")? };
        let b = unsafe { read_vec3(b, "b")? };
        let mut result = [0.0; 3];
        vector_subtract(&a, &b, &mut result);
        unsafe { write_vec3(out, "out", &result) }
    })
}

/// `out = scale * m + a`
///
/// # Safety
/// Each pointer must be null or address 3 valid `f32`; `out` may alias `a` or `m`.
#[no_mangle]
pub unsafe extern "C" fn mathlib_vector_ma(
    a: *const f32,
    scale: f32,
    m: *const f32,
    out: *mut f32,
) -> MathlibErrorCode {
    ffi_status(|| {
        let a = unsafe { read_vec3(a, "a")? };
        let m = unsafe { read_vec3(m, "m")? };
        let mut result = [0.0; 3];
        vector_ma(&a, scale, &m, &mut result);
        unsafe { write_vec3(out, "out", &result) }
    })
}

/// `out = scale * input`
///
/// # Safety
/// Each pointer must be null or address 3 valid `f32`; `out` may alias `input`.
#[no_mangle]
pub unsafe extern "C" fn mathlib_vector_scale(
    input: *const f32,
    scale: f32,
    out: *mut f32,
) -> MathlibErrorCode {
    ffi_status(|| {
        let input = unsafe { read_vec3(input, "input")? };
        let mut result = [0.0; 3];
        vector_scale(&input, scale, &mut result);
        unsafe { write_vec3(out, "out", &result) }
    })
}

/// Zero all three components of `v`.
///
/// # Safety
/// `v` must be null or address 3 writable `f32`.
#[no_mangle]
pub unsafe extern "C" fn mathlib_vector_clear(v: *mut f32) -> MathlibErrorCode {
    ffi_status(|| {
        let mut result = [0.0; 3];
        vector_clear(&mut result);
        unsafe { write_vec3(v, "v", &result) }
    })
}

/// `out = input`
///
/// # Safety
/// Each pointer must be null or address 3 valid `f32`. Aliasing is a no-op.
#[no_mangle]
pub unsafe extern "C" fn mathlib_vector_copy(input: *const f32, out: *mut f32) -> MathlibErrorCode {
    ffi_status(|| {
        let input = unsafe { read_vec3(input, "input")? };
        let mut result = [0.0; 3];
        vector_copy(&input, &mut result);
        unsafe { write_vec3(out, "out", &result) }
    })
}

/// `out = -input`
///
/// # Safety
/// Each pointer must be null or address 3 valid `f32`; `out` may alias `input`.
#[no_mangle]
pub unsafe extern "C" fn mathlib_vector_negate(
    input: *const f32,
    out: *mut f32,
) -> MathlibErrorCode {
    ffi_status(|| {
        let input = unsafe { read_vec3(input, "input")? };
        let mut result = [0.0; 3];
        vector_negate(&input, &mut result);
        unsafe { write_vec3(out, "out", &result) }
    })
}

/// Negate `v` in place.
///
/// # Safety
/// `v` must be null or address 3 readable and writable `f32`.
#[no_mangle]
pub unsafe extern "C" fn mathlib_vector_inverse(v: *mut f32) -> MathlibErrorCode {
    ffi_status(|| {
        let mut result = unsafe { read_vec3(v, "v")? };
        vector_inverse(&mut result);
        unsafe { write_vec3(v, "v", &result) }
    })
}

/// `out = (a + b) * 0.5`
///
/// # Safety
/// Each pointer must be null or address 3 valid `f32`; `out` may alias `a` or `b`.
#[no_mangle]
pub unsafe extern "C" fn mathlib_vector_average(
    a: *const f32,
    b: *const f32,
    out: *mut f32,
) -> MathlibErrorCode {
    ffi_status(|| {
        let a = unsafe { read_vec3(a, "a")? };
        let b = unsafe { read_vec3(b, "b")? };
        let mut result = [0.0; 3];
        vector_average(&a, &b, &mut result);
        unsafe { write_vec3(out, "out", &result) }
    })
}

/// Store in `out_is_zero` whether every component of `v` equals `0.0` exactly.
///
/// # Safety
/// `v` must be null or address 3 readable `f32`; `out_is_zero` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn mathlib_vector_is_zero(
    v: *const f32,
    out_is_zero: *mut bool,
) -> MathlibErrorCode {
    ffi_status(|| {
        let v = unsafe { read_vec3(v, "v")? };
        if out_is_zero.is_null() {
            return Err(DefaultMathlibError::null_pointer("out_is_zero"));
        }
        unsafe { *out_is_zero = vector_is_zero(&v) };
        Ok(())
    })
}
