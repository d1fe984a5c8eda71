//! Convolutions. `self` is the input; a missing bias crosses the boundary as
//! a null handle.

use ferrotorch_sys::c_int;

use crate::error::TorchError;
use crate::tensor::Tensor;

macro_rules! conv_ops {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        impl Tensor {
            $(
                $(#[$meta])*
                pub fn $name(
                    &self,
                    weight: &Tensor,
                    bias: Option<&Tensor>,
                    stride: &[i64],
                    padding: &[i64],
                    dilation: &[i64],
                    groups: i64,
                ) -> Result<Tensor, TorchError> {
                    let bias_raw = bias.map_or(std::ptr::null_mut(), Tensor::as_raw);
                    // SAFETY: handles are valid; each pointer/length pair
                    // describes its slice.
                    let raw = unsafe {
                        (self.api().$name)(
                            self.as_raw(),
                            weight.as_raw(),
                            bias_raw,
                            stride.as_ptr(),
                            stride.len() as c_int,
                            padding.as_ptr(),
                            padding.len() as c_int,
                            dilation.as_ptr(),
                            dilation.len() as c_int,
                            groups,
                        )
                    };
                    self.result_of(raw, stringify!($name))
                }
            )+
        }
    };
}

conv_ops!(
    /// 1-D convolution over an `(N, C, L)` input.
    conv1d,
    /// 2-D convolution over an `(N, C, H, W)` input.
    conv2d,
    /// 3-D convolution over an `(N, C, D, H, W)` input.
    conv3d,
);

macro_rules! conv_transpose_ops {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        impl Tensor {
            $(
                $(#[$meta])*
                pub fn $name(
                    &self,
                    weight: &Tensor,
                    bias: Option<&Tensor>,
                    stride: &[i64],
                    padding: &[i64],
                    output_padding: &[i64],
                    dilation: &[i64],
                    groups: i64,
                ) -> Result<Tensor, TorchError> {
                    let bias_raw = bias.map_or(std::ptr::null_mut(), Tensor::as_raw);
                    // SAFETY: handles are valid; each pointer/length pair
                    // describes its slice.
                    let raw = unsafe {
                        (self.api().$name)(
                            self.as_raw(),
                            weight.as_raw(),
                            bias_raw,
                            stride.as_ptr(),
                            stride.len() as c_int,
                            padding.as_ptr(),
                            padding.len() as c_int,
                            output_padding.as_ptr(),
                            output_padding.len() as c_int,
                            dilation.as_ptr(),
                            dilation.len() as c_int,
                            groups,
                        )
                    };
                    self.result_of(raw, stringify!($name))
                }
            )+
        }
    };
}

conv_transpose_ops!(conv_transpose1d, conv_transpose2d, conv_transpose3d);
