use mathlib_core::Vec3;
use std::ffi::CString;

use crate::error::{with_last_error_mut, DefaultMathlibError, MathlibError, MathlibErrorCode};

/// Set the thread-local error message and code.
/// Accepts any type implementing `MathlibError` trait.
pub(crate) fn set_last_error(error: &impl MathlibError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl MathlibError) -> MathlibErrorCode {
    tracing::warn!(target: "mathlib_ffi", code = ?error.code(), "{}", error.msg());
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = MathlibErrorCode::Ok;
    });
}

/// Run an FFI body and translate its result into an error code,
/// recording or clearing the thread-local error accordingly.
pub(crate) fn ffi_status<F>(func: F) -> MathlibErrorCode
where
    F: FnOnce() -> Result<(), DefaultMathlibError>,
{
    match func() {
        Ok(()) => {
            clear_last_error();
            MathlibErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Copy three floats out of a caller buffer.
///
/// # Safety
/// `ptr` must be null or point to at least 3 readable, aligned `f32`.
pub(crate) unsafe fn read_vec3(ptr: *const f32, name: &str) -> Result<Vec3, DefaultMathlibError> {
    if ptr.is_null() {
        return Err(DefaultMathlibError::null_pointer(name));
    }
    Ok(unsafe { ptr.cast::<Vec3>().read() })
}

/// Write three floats into a caller buffer.
///
/// # Safety
/// `ptr` must be null or point to at least 3 writable, aligned `f32`.
pub(crate) unsafe fn write_vec3(
    ptr: *mut f32,
    name: &str,
    value: &Vec3,
) -> Result<(), DefaultMathlibError> {
    if ptr.is_null() {
        return Err(DefaultMathlibError::null_pointer(name));
    }
    unsafe { ptr.cast::<Vec3>().write(*value) };
    Ok(())
}
