use std::ffi::CStr;

use ferrotorch_sys::{SysError, TorchApi};
use thiserror::Error;

/// Error type for every fallible operation in the binding.
#[derive(Error, Debug)]
pub enum TorchError {
    /// The native library reported a failure. `op` names the entry point the
    /// shim was forwarding to; `message` is the text fetched from the native
    /// error queue.
    #[error("native operation {op} failed: {message}")]
    Native { op: &'static str, message: String },

    /// The native function table could not be obtained.
    #[error("native bindings unavailable: {0}")]
    LibraryUnavailable(#[from] SysError),

    /// Marshalling-level misuse detected before crossing the boundary.
    #[error("invalid argument for {op}: {message}")]
    InvalidArgument { op: &'static str, message: String },

    /// A device specification could not be parsed or mapped.
    #[error("invalid device: {spec}")]
    InvalidDevice { spec: String },

    /// The native side reported an element type this binding does not map.
    #[error("unsupported scalar type code {code}")]
    UnsupportedKind { code: i8 },
}

pub(crate) fn invalid_argument(op: &'static str, message: impl Into<String>) -> TorchError {
    TorchError::InvalidArgument {
        op,
        message: message.into(),
    }
}

/// Fetch and clear the pending native error message, if any.
///
/// The shim hands over a heap string it never reclaims, so the text is copied
/// out and the pointer left alone, mirroring how the managed marshaller of
/// the original surface treats it.
fn pending_message(api: &'static TorchApi) -> Option<String> {
    // SAFETY: entry point takes no arguments and returns either null or a
    // NUL-terminated string that stays valid after the queue is cleared.
    let msg = unsafe { (api.get_and_reset_last_err)() };
    if msg.is_null() {
        return None;
    }
    // SAFETY: non-null pointers from the error queue are NUL-terminated.
    Some(unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned())
}

/// Build the error for an entry point that returned the null sentinel.
///
/// When the native side left no message (the sentinel can fire without one),
/// a generic message is used; an invalid handle is never wrapped.
pub(crate) fn take_last(api: &'static TorchApi, op: &'static str) -> TorchError {
    let message = pending_message(api)
        .unwrap_or_else(|| String::from("operation returned a null handle without detail"));
    TorchError::Native { op, message }
}

/// Check the error queue after a void-returning entry point.
pub(crate) fn check(api: &'static TorchApi, op: &'static str) -> Result<(), TorchError> {
    match pending_message(api) {
        None => Ok(()),
        Some(message) => Err(TorchError::Native { op, message }),
    }
}
