//! Elementwise and scalar arithmetic.
//!
//! The `add` family forwards the native `alpha` scaling argument as 1, which
//! is the plain-addition contract of the original surface.

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
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        impl Tensor {
            $(
                $(#[$meta])*
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
    sub, sub_, mul, mul_, div, div_,
    /// Elementwise remainder with the sign of `self` (C `fmod` semantics).
    fmod,
    /// Elementwise remainder with the sign of `other`.
    remainder,
    pow, pow_, atan2,
    /// Elementwise maximum.
    max_elementwise,
    /// Elementwise minimum.
    min_elementwise,
);

tensor_scalar_ops!(
    sub_scalar, sub_scalar_, mul_scalar, mul_scalar_, div_scalar, div_scalar_,
    fmod_scalar, remainder_scalar, pow_scalar, pow_scalar_,
);

macro_rules! add_ops {
    ($($name:ident($other:ty, $raw_other:ident)),+ $(,)?) => {
        impl Tensor {
            $(
                pub fn $name(&self, other: $other) -> Result<Tensor, TorchError> {
                    let alpha = Scalar::from_i64(1)?;
                    // SAFETY: all handles are valid for the call.
                    let raw = unsafe {
                        (self.api().$name)(self.as_raw(), other.$raw_other(), alpha.as_raw())
                    };
                    self.result_of(raw, stringify!($name))
                }
            )+
        }
    };
}

add_ops!(
    add(&Tensor, as_raw),
    add_(&Tensor, as_raw),
    add_scalar(&Scalar, as_raw),
    add_scalar_(&Scalar, as_raw),
);

impl Tensor {
    pub fn neg(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().neg)(self.as_raw()) };
        self.result_of(raw, "neg")
    }

    pub fn neg_(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().neg_)(self.as_raw()) };
        self.result_of(raw, "neg_")
    }

    pub fn abs(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().abs)(self.as_raw()) };
        self.result_of(raw, "abs")
    }

    pub fn abs_(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().abs_)(self.as_raw()) };
        self.result_of(raw, "abs_")
    }

    /// `self + value * tensor1 * tensor2`, elementwise.
    pub fn addcmul(
        &self,
        tensor1: &Tensor,
        tensor2: &Tensor,
        value: &Scalar,
    ) -> Result<Tensor, TorchError> {
        // SAFETY: all handles are valid for the call.
        let raw = unsafe {
            (self.api().addcmul)(
                self.as_raw(),
                tensor1.as_raw(),
                tensor2.as_raw(),
                value.as_raw(),
            )
        };
        self.result_of(raw, "addcmul")
    }

    /// `self + value * tensor1 / tensor2`, elementwise.
    pub fn addcdiv(
        &self,
        tensor1: &Tensor,
        tensor2: &Tensor,
        value: &Scalar,
    ) -> Result<Tensor, TorchError> {
        // SAFETY: all handles are valid for the call.
        let raw = unsafe {
            (self.api().addcdiv)(
                self.as_raw(),
                tensor1.as_raw(),
                tensor2.as_raw(),
                value.as_raw(),
            )
        };
        self.result_of(raw, "addcdiv")
    }
}
