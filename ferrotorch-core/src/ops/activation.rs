//! Activation functions on tensors.
//!
//! These are the tensor-level entry points; `nn` holds the module-object
//! counterparts.

use crate::error::TorchError;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

macro_rules! unary_activations {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        impl Tensor {
            $(
                $(#[$meta])*
                pub fn $name(&self) -> Result<Tensor, TorchError> {
                    // SAFETY: handle is valid for self's lifetime.
                    let raw = unsafe { (self.api().$name)(self.as_raw()) };
                    self.result_of(raw, stringify!($name))
                }
            )+
        }
    };
}

unary_activations!(
    /// Rectified linear unit.
    relu, relu_,
    /// ReLU capped at 6.
    relu6, relu6_,
    celu, celu_, selu, selu_,
    /// Gaussian error linear unit.
    gelu,
    sigmoid, sigmoid_,
    /// Sigmoid-weighted linear unit (swish).
    silu, silu_,
    softplus,
    hardsigmoid, hardsigmoid_, hardswish, hardswish_,
    log_sigmoid,
);

impl Tensor {
    /// Exponential linear unit with explicit `alpha`, `scale` and
    /// `input_scale` factors.
    pub fn elu(
        &self,
        alpha: &Scalar,
        scale: &Scalar,
        input_scale: &Scalar,
    ) -> Result<Tensor, TorchError> {
        // SAFETY: all handles are valid for the call.
        let raw = unsafe {
            (self.api().elu)(
                self.as_raw(),
                alpha.as_raw(),
                scale.as_raw(),
                input_scale.as_raw(),
            )
        };
        self.result_of(raw, "elu")
    }

    pub fn elu_(
        &self,
        alpha: &Scalar,
        scale: &Scalar,
        input_scale: &Scalar,
    ) -> Result<Tensor, TorchError> {
        // SAFETY: all handles are valid for the call.
        let raw = unsafe {
            (self.api().elu_)(
                self.as_raw(),
                alpha.as_raw(),
                scale.as_raw(),
                input_scale.as_raw(),
            )
        };
        self.result_of(raw, "elu_")
    }

    pub fn leaky_relu(&self, negative_slope: &Scalar) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { (self.api().leaky_relu)(self.as_raw(), negative_slope.as_raw()) };
        self.result_of(raw, "leaky_relu")
    }

    pub fn leaky_relu_(&self, negative_slope: &Scalar) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { (self.api().leaky_relu_)(self.as_raw(), negative_slope.as_raw()) };
        self.result_of(raw, "leaky_relu_")
    }

    pub fn hardtanh(&self, min: &Scalar, max: &Scalar) -> Result<Tensor, TorchError> {
        // SAFETY: all handles are valid for the call.
        let raw = unsafe { (self.api().hardtanh)(self.as_raw(), min.as_raw(), max.as_raw()) };
        self.result_of(raw, "hardtanh")
    }

    pub fn hardtanh_(&self, min: &Scalar, max: &Scalar) -> Result<Tensor, TorchError> {
        // SAFETY: all handles are valid for the call.
        let raw = unsafe { (self.api().hardtanh_)(self.as_raw(), min.as_raw(), max.as_raw()) };
        self.result_of(raw, "hardtanh_")
    }

    /// Parametric ReLU; `weight` carries the learned slope(s).
    pub fn prelu(&self, weight: &Tensor) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { (self.api().prelu)(self.as_raw(), weight.as_raw()) };
        self.result_of(raw, "prelu")
    }
}
