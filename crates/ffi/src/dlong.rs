//! C view of the 8-byte `DLong` reinterpretation cell.

use mathlib_core::scalar::byte_swap;
use mathlib_core::DLong;

/// `union { int i[2]; double d; float f; }` with C layout.
///
/// All eight bytes are always initialized by the constructors below, so every
/// field may be read regardless of which one was written last.
#[repr(C)]
#[derive(Clone, Copy)]
pub union MathlibDLong {
    /// Two 32-bit integers.
    pub i: [i32; 2],
    /// One 64-bit float over all eight bytes.
    pub d: f64,
    /// One 32-bit float over the first four bytes.
    pub f: f32,
}

impl From<DLong> for MathlibDLong {
    fn from(cell: DLong) -> Self {
        MathlibDLong { i: cell.ints() }
    }
}

impl From<MathlibDLong> for DLong {
    fn from(raw: MathlibDLong) -> Self {
        // SAFETY: the integer view covers all 8 bytes and every bit pattern is valid.
        DLong::from_ints(unsafe { raw.i })
    }
}

/// Build a cell through the `double` view.
#[no_mangle]
pub extern "C" fn mathlib_dlong_from_double(value: f64) -> MathlibDLong {
    DLong::from_double(value).into()
}

/// Build a cell through the `float` view; the upper four bytes are zero.
#[no_mangle]
pub extern "C" fn mathlib_dlong_from_float(value: f32) -> MathlibDLong {
    DLong::from_float(value).into()
}

/// Build a cell through the integer-pair view.
#[no_mangle]
pub extern "C" fn mathlib_dlong_from_ints(lo: i32, hi: i32) -> MathlibDLong {
    DLong::from_ints([lo, hi]).into()
}

/// Reverse all eight bytes of the cell, as for an 8-byte `double`.
#[no_mangle]
pub extern "C" fn mathlib_dlong_bswap(cell: MathlibDLong) -> MathlibDLong {
    let cell = DLong::from(cell);
    DLong::from_bytes(byte_swap(cell.to_bytes())).into()
}
