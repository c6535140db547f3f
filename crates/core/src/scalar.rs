//! Generic scalar helpers: ordering-based `min`/`max`/`clamp` and byte-order reversal.
//!
//! Unlike the `Ord`/`f32` methods in `std`, these only require `PartialOrd` and
//! resolve ties and NaN strictly through the comparison operators: `min` ties
//! return `b`, `max` ties return `a`, `clamp` checks `high` first.
//!
//! # Usage
//! ```
//! use mathlib_core::scalar::{byte_swap, clamp, max, min};
//!
//! assert_eq!(min(3, 7), 3);
//! assert_eq!(max(3.0_f32, 7.0), 7.0);
//! assert_eq!(clamp(15, 0, 10), 10);
//! assert_eq!(byte_swap(0x1234_u16), 0x3412);
//! ```

use bytemuck::Pod;

/// Return `a` if `a < b`, otherwise `b`.
///
/// Ties (and any comparison involving NaN) return `b`.
#[inline(always)]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Return `b` if `a < b`, otherwise `a`.
///
/// Ties (and any comparison involving NaN) return `a`.
#[inline(always)]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

/// Clamp `value` into `[low, high]`.
///
/// The upper bound is tested first, so when the caller passes `low > high`
/// any `value > high` resolves to `high`. Bounds are not validated.
#[inline(always)]
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value > high {
        high
    } else if value < low {
        low
    } else {
        value
    }
}

/// Reverse the byte order of a plain fixed-width value.
///
/// Widths of 2, 4 and 8 bytes are swapped; every other width is returned
/// unchanged. The type never changes, so floats are swapped bit-for-bit
/// rather than converted through an integer value.
#[inline]
pub fn byte_swap<T: Pod>(value: T) -> T {
    let mut swapped = value;
    let bytes = bytemuck::bytes_of_mut(&mut swapped);
    if matches!(bytes.len(), 2 | 4 | 8) {
        bytes.reverse();
    }
    swapped
}
