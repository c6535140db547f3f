//! Scalar helpers monomorphized for C callers.
//!
//! These are total and take values, so they return results directly instead
//! of an error code.

use mathlib_core::scalar::{byte_swap, clamp, max, min};

/// `a < b ? a : b` over `float`.
#[no_mangle]
pub extern "C" fn mathlib_minf(a: f32, b: f32) -> f32 {
    min(a, b)
}

/// `a < b ? b : a` over `float`.
#[no_mangle]
pub extern "C" fn mathlib_maxf(a: f32, b: f32) -> f32 {
    max(a, b)
}

/// Clamp a `float`; `high` is tested before `low` and bounds are not validated.
#[no_mangle]
pub extern "C" fn mathlib_clampf(value: f32, low: f32, high: f32) -> f32 {
    clamp(value, low, high)
}

/// `a < b ? a : b` over `int`.
#[no_mangle]
pub extern "C" fn mathlib_mini(a: i32, b: i32) -> i32 {
    min(a, b)
}

/// `a < b ? b : a` over `int`.
#[no_mangle]
pub extern "C" fn mathlib_maxi(a: i32, b: i32) -> i32 {
    max(a, b)
}

/// Clamp an `int`; `high` is tested before `low` and bounds are not validated.
#[no_mangle]
pub extern "C" fn mathlib_clampi(value: i32, low: i32, high: i32) -> i32 {
    clamp(value, low, high)
}

/// Reverse the 2 bytes of a 16-bit value.
#[no_mangle]
pub extern "C" fn mathlib_bswap16(value: u16) -> u16 {
    byte_swap(value)
}

/// Reverse the 4 bytes of a 32-bit value.
#[no_mangle]
pub extern "C" fn mathlib_bswap32(value: u32) -> u32 {
    byte_swap(value)
}

/// Reverse the 8 bytes of a 64-bit value.
#[no_mangle]
pub extern "C" fn mathlib_bswap64(value: u64) -> u64 {
    byte_swap(value)
}

/// Reverse the bytes of a `float` without numeric conversion.
#[no_mangle]
pub extern "C" fn mathlib_bswapf(value: f32) -> f32 {
    byte_swap(value)
}

/// Reverse the bytes of a `double` without numeric conversion.
#[no_mangle]
pub extern "C" fn mathlib_bswapd(value: f64) -> f64 {
    byte_swap(value)
}
