//! C ABI for the math library core.
//!
//! Exposes the `float[3]` vector operations, scalar helpers and the `DLong` cell to
//! native callers. The header `MathlibFFI.h` is generated by `build.rs` via cbindgen.

pub mod dlong;
pub mod error;
pub(crate) mod helpers;
pub mod scalar;
pub mod vector;

pub use dlong::MathlibDLong;
pub use error::{mathlib_get_last_error, mathlib_get_last_error_code, MathlibErrorCode};

/// Pi as a double.
// Spelled as a literal so cbindgen can emit it into the header.
#[expect(clippy::approx_constant)]
pub const MATHLIB_M_PI: f64 = 3.141592653589793;
