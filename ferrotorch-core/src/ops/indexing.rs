//! Index-driven selection and scatter.

use crate::error::TorchError;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

impl Tensor {
    /// Selects rows of dimension `dim` by an index tensor.
    pub fn index_select(&self, dim: i64, index: &Tensor) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { (self.api().index_select)(self.as_raw(), dim, index.as_raw()) };
        self.result_of(raw, "index_select")
    }

    /// Fills the indexed positions of dimension `dim` with `value`.
    pub fn index_fill(
        &self,
        dim: i64,
        index: &Tensor,
        value: &Scalar,
    ) -> Result<Tensor, TorchError> {
        // SAFETY: all handles are valid for the call.
        let raw = unsafe {
            (self.api().index_fill)(self.as_raw(), dim, index.as_raw(), value.as_raw())
        };
        self.result_of(raw, "index_fill")
    }

    /// Gathers values along `dim` at the positions in `index`.
    pub fn gather(&self, dim: i64, index: &Tensor) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { (self.api().gather)(self.as_raw(), dim, index.as_raw()) };
        self.result_of(raw, "gather")
    }

    /// Writes values from `source` along `dim` at the positions in `index`.
    pub fn scatter(
        &self,
        dim: i64,
        index: &Tensor,
        source: &Tensor,
    ) -> Result<Tensor, TorchError> {
        // SAFETY: all handles are valid for the call.
        let raw = unsafe {
            (self.api().scatter)(self.as_raw(), dim, index.as_raw(), source.as_raw())
        };
        self.result_of(raw, "scatter")
    }
}
