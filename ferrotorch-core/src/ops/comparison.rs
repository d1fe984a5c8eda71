//! Elementwise comparison, boolean and bitwise logic, clamping.

use crate::error::TorchError;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

macro_rules! binary_ops {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        impl Tensor {
            $(
                $(#[$meta])*
                pub fn $name(&self, other: &Tensor) -> Result<Tensor, TorchError> {
                    // SAFETY: both handles are valid for the call.
                    let raw = unsafe { (self.api().$name)(self.as_raw(), other.as_raw()) };
                    self.result_of(raw, stringify!($name))
                }
            )+
        }
    };
}

macro_rules! tensor_scalar_ops {
    ($($name:ident),+ $(,)?) => {
        impl Tensor {
            $(
                pub fn $name(&self, other: &Scalar) -> Result<Tensor, TorchError> {
                    // SAFETY: both handles are valid for the call.
                    let raw = unsafe { (self.api().$name)(self.as_raw(), other.as_raw()) };
                    self.result_of(raw, stringify!($name))
                }
            )+
        }
    };
}

binary_ops!(
    /// Elementwise equality, producing a boolean tensor.
    eq, ne, lt, le, gt, ge,
    logical_and, logical_or, logical_xor,
    bitwise_and, bitwise_or, bitwise_xor,
);

tensor_scalar_ops!(eq_scalar, ne_scalar, lt_scalar, le_scalar, gt_scalar, ge_scalar);

impl Tensor {
    pub fn logical_not(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().logical_not)(self.as_raw()) };
        self.result_of(raw, "logical_not")
    }

    pub fn bitwise_not(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().bitwise_not)(self.as_raw()) };
        self.result_of(raw, "bitwise_not")
    }

    /// Limits every element to `[min, max]`.
    pub fn clamp(&self, min: &Scalar, max: &Scalar) -> Result<Tensor, TorchError> {
        // SAFETY: all handles are valid for the call.
        let raw = unsafe { (self.api().clamp)(self.as_raw(), min.as_raw(), max.as_raw()) };
        self.result_of(raw, "clamp")
    }

    pub fn clamp_min(&self, min: &Scalar) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { (self.api().clamp_min)(self.as_raw(), min.as_raw()) };
        self.result_of(raw, "clamp_min")
    }

    pub fn clamp_max(&self, max: &Scalar) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { (self.api().clamp_max)(self.as_raw(), max.as_raw()) };
        self.result_of(raw, "clamp_max")
    }
}
