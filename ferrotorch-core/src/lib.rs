//! Safe bindings to the LibTorch tensor engine.
//!
//! Every operation in this crate is a binding shim: it marshals arguments
//! into the representations the native C surface expects, invokes the entry
//! point resolved by `ferrotorch-sys`, checks the null-pointer failure
//! sentinel, and wraps the returned handle in an owning Rust type. The tensor
//! math, autograd, device management and memory allocation all happen on the
//! native side.
//!
//! Handles ([`Tensor`], [`Scalar`], the `nn` modules) own their native object
//! exclusively and release it exactly once on drop.

pub mod device;
pub mod error;
pub mod kind;
pub mod nn;
pub mod scalar;
pub mod tensor;
pub mod torch;

mod marshal;
mod ops;

pub use device::{Cuda, Device};
pub use error::TorchError;
pub use kind::{Element, Kind};
pub use scalar::Scalar;
pub use tensor::Tensor;

use ferrotorch_sys::TorchApi;

/// Shared accessor for the resolved native table.
pub(crate) fn api() -> Result<&'static TorchApi, TorchError> {
    Ok(&ferrotorch_sys::bindings()?.api)
}
