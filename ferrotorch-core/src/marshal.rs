//! Marshalling support shared by the binding shims.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::CString;
use std::sync::{Mutex, OnceLock};

use ferrotorch_sys::{c_void, AllocResultsFn, RawTensor, TorchApi};

use crate::error::{self, TorchError};
use crate::tensor::Tensor;

/// Converts a Rust string for a `const char*` parameter.
pub(crate) fn c_string(op: &'static str, value: &str) -> Result<CString, TorchError> {
    CString::new(value)
        .map_err(|_| error::invalid_argument(op, "string contains an interior NUL byte"))
}

// ---------------------------------------------------------------------------
// Output arrays for multi-result entry points.
//
// The native side asks for storage through a callback taking only a length,
// so the buffer under construction is parked in a thread-local slot for the
// duration of the call. Calls are synchronous and never reenter the
// allocator, which keeps one slot per thread sufficient.
// ---------------------------------------------------------------------------

thread_local! {
    static OUTPUT: RefCell<Vec<RawTensor>> = RefCell::new(Vec::new());
}

unsafe extern "C" fn alloc_results(len: usize) -> *mut RawTensor {
    OUTPUT.with(|slot| {
        let mut buf = slot.borrow_mut();
        *buf = vec![std::ptr::null_mut(); len];
        buf.as_mut_ptr()
    })
}

/// Runs a void-returning multi-output entry point and adopts every handle it
/// produced. A null slot fails the whole call; handles adopted before the
/// failure are released by their wrappers when the partial vector drops.
pub(crate) fn run_multi(
    api: &'static TorchApi,
    op: &'static str,
    call: impl FnOnce(AllocResultsFn),
) -> Result<Vec<Tensor>, TorchError> {
    OUTPUT.with(|slot| slot.borrow_mut().clear());
    call(alloc_results);
    error::check(api, op)?;
    let raw = OUTPUT.with(|slot| std::mem::take(&mut *slot.borrow_mut()));
    let mut adopted = Vec::with_capacity(raw.len());
    for handle in raw {
        adopted.push(Tensor::wrap(handle, api, op)?);
    }
    Ok(adopted)
}

/// Splits a two-result call into its pair.
pub(crate) fn into_pair(
    results: Vec<Tensor>,
    op: &'static str,
) -> Result<(Tensor, Tensor), TorchError> {
    let mut results = results.into_iter();
    match (results.next(), results.next(), results.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(error::invalid_argument(
            op,
            "native side did not produce exactly 2 results",
        )),
    }
}

// ---------------------------------------------------------------------------
// Host buffers lent to the native side.
//
// `THSTensor_new` borrows the caller's buffer and signals through a deleter
// callback when the storage is released. The deleter only receives the data
// pointer, so live buffers are keyed by address until the callback fires.
// ---------------------------------------------------------------------------

static HOST_BUFFERS: OnceLock<Mutex<HashMap<usize, Vec<u8>>>> = OnceLock::new();

fn host_buffers() -> &'static Mutex<HashMap<usize, Vec<u8>>> {
    HOST_BUFFERS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Parks `buf` until the native deleter releases it; returns the pointer to
/// hand across the boundary.
pub(crate) fn lend_host_buffer(buf: Vec<u8>) -> *mut c_void {
    let ptr = buf.as_ptr() as usize;
    let mut buffers = host_buffers()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    buffers.insert(ptr, buf);
    ptr as *mut c_void
}

/// Deleter passed to `THSTensor_new`. The native side may invoke it from any
/// thread when the tensor storage goes away.
pub(crate) unsafe extern "C" fn release_host_buffer(data: *mut c_void) {
    let mut buffers = host_buffers()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if buffers.remove(&(data as usize)).is_none() {
        log::warn!("native deleter released an unknown host buffer {data:p}");
    }
}
