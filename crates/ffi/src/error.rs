use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code passed across the FFI boundary
/// - `msg()` - Returns the error message for diagnostics
pub(crate) trait MathlibError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> MathlibErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `MathlibError`.
///
/// The numeric core never fails, so the only failures at this layer come from
/// validating the raw pointers handed in by native callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultMathlibError {
    code: MathlibErrorCode,
    msg: String,
}

impl DefaultMathlibError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"a"`, `"out"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: MathlibErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl MathlibError for DefaultMathlibError {
    fn code(&self) -> MathlibErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by the vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathlibErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where a `float[3]` or out-parameter was required.
    NullPointer = 1,
}

impl From<DefaultMathlibError> for MathlibErrorCode {
    fn from(error: DefaultMathlibError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is kept here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, MathlibErrorCode)> = const { RefCell::new((None, MathlibErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, MathlibErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, MathlibErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made.
///
/// # Lifetime
/// The returned pointer is valid until the next `mathlib_vector_*` call on this
/// thread. **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// float out[3];
/// if (mathlib_vector_add(a, b, out) != MathlibErrorCode_Ok) {
///     const char* error = mathlib_get_last_error();
///     if (error) {
///         printf("vector add failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn mathlib_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `MathlibErrorCode::Ok` (0) if the last call on this thread succeeded.
/// Error state is per-thread.
#[no_mangle]
pub extern "C" fn mathlib_get_last_error_code() -> MathlibErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
