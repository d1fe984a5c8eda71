//! Shape and layout operations.

use ferrotorch_sys::c_int;

use crate::error::{self, TorchError};
use crate::marshal;
use crate::tensor::Tensor;

macro_rules! shape_arg_ops {
    ($($(#[$meta:meta])* $name:ident($arg:ident)),+ $(,)?) => {
        impl Tensor {
            $(
                $(#[$meta])*
                pub fn $name(&self, $arg: &[i64]) -> Result<Tensor, TorchError> {
                    // SAFETY: pointer/length pair describes the slice.
                    let raw = unsafe {
                        (self.api().$name)(self.as_raw(), $arg.as_ptr(), $arg.len() as c_int)
                    };
                    self.result_of(raw, stringify!($name))
                }
            )+
        }
    };
}

shape_arg_ops!(
    /// Reshapes to `shape`, copying when the layout requires it.
    reshape(shape),
    /// Reinterprets the tensor with `shape`; fails natively when the
    /// storage is not contiguous enough.
    view(shape),
    /// Reorders dimensions by `dims`.
    permute(dims),
    /// Reverses the content along each dimension in `dims`.
    flip(dims),
);

impl Tensor {
    /// Expands singleton dimensions to `sizes` without copying.
    pub fn expand(&self, sizes: &[i64], implicit: bool) -> Result<Tensor, TorchError> {
        // SAFETY: pointer/length pair describes `sizes`.
        let raw = unsafe {
            (self.api().expand)(self.as_raw(), sizes.as_ptr(), sizes.len() as c_int, implicit)
        };
        self.result_of(raw, "expand")
    }

    /// Swaps two dimensions.
    pub fn transpose(&self, dim1: i64, dim2: i64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().transpose)(self.as_raw(), dim1, dim2) };
        self.result_of(raw, "transpose")
    }

    /// In-place dimension swap; the result aliases `self`'s storage.
    pub fn transpose_(&self, dim1: i64, dim2: i64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().transpose_)(self.as_raw(), dim1, dim2) };
        self.result_of(raw, "transpose_")
    }

    /// 2-D transpose.
    pub fn t(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().t)(self.as_raw()) };
        self.result_of(raw, "t")
    }

    /// Removes dimension `dim` when its extent is 1.
    pub fn squeeze(&self, dim: i64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().squeeze)(self.as_raw(), dim) };
        self.result_of(raw, "squeeze")
    }

    /// Inserts a size-1 dimension at `dim`.
    pub fn unsqueeze(&self, dim: i64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().unsqueeze)(self.as_raw(), dim) };
        self.result_of(raw, "unsqueeze")
    }

    /// A view of `length` elements of dimension `dim` starting at `start`.
    pub fn narrow(&self, dim: i64, start: i64, length: i64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().narrow)(self.as_raw(), dim, start, length) };
        self.result_of(raw, "narrow")
    }

    /// A strided view of dimension `dim` over `[start, finish)`.
    pub fn slice(
        &self,
        dim: i64,
        start: i64,
        finish: i64,
        step: i64,
    ) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().slice)(self.as_raw(), dim, start, finish, step) };
        self.result_of(raw, "slice")
    }

    /// Splits into one tensor per extent of dimension `dim`.
    pub fn unbind(&self, dim: i64) -> Result<Vec<Tensor>, TorchError> {
        marshal::run_multi(self.api(), "unbind", |alloc| {
            // SAFETY: handle is valid; results arrive through `alloc`.
            unsafe { (self.api().unbind)(self.as_raw(), alloc, dim) }
        })
    }

    /// Splits into chunks of `size` along `dim`; the final chunk may be
    /// smaller.
    pub fn split_with_size(&self, size: i64, dim: i64) -> Result<Vec<Tensor>, TorchError> {
        marshal::run_multi(self.api(), "split_with_size", |alloc| {
            // SAFETY: handle is valid; results arrive through `alloc`.
            unsafe { (self.api().split_with_size)(self.as_raw(), alloc, size, dim) }
        })
    }

    /// Splits along `dim` into chunks of the given sizes.
    pub fn split_with_sizes(&self, sizes: &[i64], dim: i64) -> Result<Vec<Tensor>, TorchError> {
        marshal::run_multi(self.api(), "split_with_sizes", |alloc| {
            // SAFETY: handle is valid; pointer/length pair describes `sizes`;
            // results arrive through `alloc`.
            unsafe {
                (self.api().split_with_sizes)(
                    self.as_raw(),
                    alloc,
                    sizes.as_ptr(),
                    sizes.len() as c_int,
                    dim,
                )
            }
        })
    }

    /// Concatenates `tensors` along `dim`.
    pub fn cat(tensors: &[Tensor], dim: i64) -> Result<Tensor, TorchError> {
        let api = crate::api()?;
        if tensors.is_empty() {
            return Err(error::invalid_argument("cat", "empty tensor list"));
        }
        let handles: Vec<_> = tensors.iter().map(Tensor::as_raw).collect();
        // SAFETY: pointer/length pair describes `handles`, all valid.
        let raw = unsafe { (api.cat)(handles.as_ptr(), handles.len() as c_int, dim) };
        Tensor::wrap(raw, api, "cat")
    }

    /// Stacks `tensors` along a new dimension `dim`.
    pub fn stack(tensors: &[Tensor], dim: i64) -> Result<Tensor, TorchError> {
        let api = crate::api()?;
        if tensors.is_empty() {
            return Err(error::invalid_argument("stack", "empty tensor list"));
        }
        let handles: Vec<_> = tensors.iter().map(Tensor::as_raw).collect();
        // SAFETY: pointer/length pair describes `handles`, all valid.
        let raw = unsafe { (api.stack)(handles.as_ptr(), handles.len() as c_int, dim) };
        Tensor::wrap(raw, api, "stack")
    }
}
