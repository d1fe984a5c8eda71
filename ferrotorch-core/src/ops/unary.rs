//! Elementwise unary math.

use crate::error::TorchError;
use crate::tensor::Tensor;

macro_rules! unary_ops {
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

unary_ops!(
    exp,
    /// In-place variant of [`Tensor::exp`]; the result aliases `self`'s
    /// storage through a fresh handle.
    exp_,
    expm1,
    log,
    log_,
    log10,
    log1p,
    sqrt,
    sqrt_,
    /// Reciprocal of the square root.
    rsqrt,
    sin,
    sin_,
    cos,
    cos_,
    tan,
    tan_,
    asin,
    acos,
    atan,
    sinh,
    cosh,
    tanh,
    tanh_,
    ceil,
    ceil_,
    floor,
    floor_,
    round,
    round_,
    /// Fractional part of each element.
    frac,
    sign,
    sign_,
    erf,
    erfc,
    /// Inverse of the error function.
    erfinv,
    /// Log of the absolute value of the gamma function.
    lgamma,
);
