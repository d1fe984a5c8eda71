//! Raw surface of the LibTorchSharp C ABI.
//!
//! This crate knows nothing about tensors. It declares the shape of every
//! native entry point the binding uses ([`TorchApi`]), resolves them once per
//! process from a shared library ([`bindings`]), and hands the table to the
//! safe layer in `ferrotorch-core`. All semantics (what an entry point does,
//! which arguments are valid) live on the native side.

pub use std::os::raw::{c_char, c_double, c_float, c_int, c_schar, c_void};

mod api;
mod loader;

pub use api::TorchApi;
pub use loader::{bindings, install, is_available, SysError, TorchBindings};

/// Opaque handle to a native tensor (`torch::Tensor*` behind the shim).
pub type RawTensor = *mut c_void;
/// Opaque handle to a native scalar (`torch::Scalar*` behind the shim).
pub type RawScalar = *mut c_void;
/// Opaque handle to a native `torch::nn` module.
pub type RawModule = *mut c_void;

/// Callback through which a multi-result entry point obtains storage for its
/// output handles. The native side calls it once with the result count and
/// writes one handle per slot.
pub type AllocResultsFn = unsafe extern "C" fn(len: usize) -> *mut RawTensor;

/// Callback through which the native side releases a host buffer it borrowed
/// at tensor-construction time.
pub type DataDeleterFn = unsafe extern "C" fn(data: *mut c_void);

/// `Tensor -> Tensor` entry point.
pub type UnaryFn = unsafe extern "C" fn(tensor: RawTensor) -> RawTensor;
/// `(Tensor, Tensor) -> Tensor` entry point.
pub type BinaryFn = unsafe extern "C" fn(tensor: RawTensor, other: RawTensor) -> RawTensor;
/// `(Tensor, Scalar) -> Tensor` entry point.
pub type TensorScalarFn = unsafe extern "C" fn(tensor: RawTensor, scalar: RawScalar) -> RawTensor;
