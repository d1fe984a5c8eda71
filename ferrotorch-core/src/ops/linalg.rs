//! Matrix products.

use ferrotorch_sys::c_int;

use crate::error::{self, TorchError};
use crate::marshal;
use crate::tensor::Tensor;

impl Tensor {
    /// Matrix product of two 2-D tensors.
    pub fn mm(&self, other: &Tensor) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { (self.api().mm)(self.as_raw(), other.as_raw()) };
        self.result_of(raw, "mm")
    }

    /// Batched matrix product.
    pub fn bmm(&self, other: &Tensor) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { (self.api().bmm)(self.as_raw(), other.as_raw()) };
        self.result_of(raw, "bmm")
    }

    /// General matrix product with broadcasting, following the native
    /// `matmul` dispatch rules.
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { (self.api().matmul)(self.as_raw(), other.as_raw()) };
        self.result_of(raw, "matmul")
    }

    /// `beta * self + alpha * mat1 @ mat2`.
    pub fn addmm(
        &self,
        mat1: &Tensor,
        mat2: &Tensor,
        beta: f32,
        alpha: f32,
    ) -> Result<Tensor, TorchError> {
        // SAFETY: all handles are valid for the call.
        let raw = unsafe {
            (self.api().addmm)(self.as_raw(), mat1.as_raw(), mat2.as_raw(), beta, alpha)
        };
        self.result_of(raw, "addmm")
    }

    /// Evaluates an Einstein-summation expression over `tensors`.
    pub fn einsum(equation: &str, tensors: &[Tensor]) -> Result<Tensor, TorchError> {
        if tensors.is_empty() {
            return Err(error::invalid_argument("einsum", "empty tensor list"));
        }
        let api = crate::api()?;
        let equation = marshal::c_string("einsum", equation)?;
        let handles: Vec<_> = tensors.iter().map(Tensor::as_raw).collect();
        // SAFETY: the equation string and every handle are valid for the
        // call; pointer/length pair describes `handles`.
        let raw = unsafe {
            (api.einsum)(equation.as_ptr(), handles.as_ptr(), handles.len() as c_int)
        };
        Tensor::wrap(raw, api, "einsum")
    }
}
