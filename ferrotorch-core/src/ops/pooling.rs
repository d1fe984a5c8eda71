//! Pooling and nearest-neighbor upsampling.

use ferrotorch_sys::c_int;

use crate::error::TorchError;
use crate::marshal;
use crate::tensor::Tensor;

macro_rules! max_pool_ops {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        impl Tensor {
            $(
                $(#[$meta])*
                pub fn $name(
                    &self,
                    kernel: &[i64],
                    stride: &[i64],
                    padding: &[i64],
                    dilation: &[i64],
                    ceil_mode: bool,
                ) -> Result<Tensor, TorchError> {
                    // SAFETY: each pointer/length pair describes its slice.
                    let raw = unsafe {
                        (self.api().$name)(
                            self.as_raw(),
                            kernel.as_ptr(),
                            kernel.len() as c_int,
                            stride.as_ptr(),
                            stride.len() as c_int,
                            padding.as_ptr(),
                            padding.len() as c_int,
                            dilation.as_ptr(),
                            dilation.len() as c_int,
                            ceil_mode,
                        )
                    };
                    self.result_of(raw, stringify!($name))
                }
            )+
        }
    };
}

max_pool_ops!(max_pool1d, max_pool2d, max_pool3d);

macro_rules! max_pool_with_indices_ops {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        impl Tensor {
            $(
                $(#[$meta])*
                pub fn $name(
                    &self,
                    kernel: &[i64],
                    stride: &[i64],
                    padding: &[i64],
                    dilation: &[i64],
                    ceil_mode: bool,
                ) -> Result<(Tensor, Tensor), TorchError> {
                    let results = marshal::run_multi(self.api(), stringify!($name), |alloc| {
                        // SAFETY: each pointer/length pair describes its
                        // slice; results arrive through `alloc`.
                        unsafe {
                            (self.api().$name)(
                                self.as_raw(),
                                alloc,
                                kernel.as_ptr(),
                                kernel.len() as c_int,
                                stride.as_ptr(),
                                stride.len() as c_int,
                                padding.as_ptr(),
                                padding.len() as c_int,
                                dilation.as_ptr(),
                                dilation.len() as c_int,
                                ceil_mode,
                            )
                        }
                    })?;
                    marshal::into_pair(results, stringify!($name))
                }
            )+
        }
    };
}

max_pool_with_indices_ops!(
    /// Max pooling that also returns the argmax indices, as
    /// `(output, indices)`.
    max_pool1d_with_indices,
    max_pool2d_with_indices,
    max_pool3d_with_indices,
);

macro_rules! avg_pool_ops {
    ($($name:ident),+ $(,)?) => {
        impl Tensor {
            $(
                pub fn $name(
                    &self,
                    kernel: &[i64],
                    stride: &[i64],
                    padding: &[i64],
                    ceil_mode: bool,
                    count_include_pad: bool,
                ) -> Result<Tensor, TorchError> {
                    // SAFETY: each pointer/length pair describes its slice.
                    let raw = unsafe {
                        (self.api().$name)(
                            self.as_raw(),
                            kernel.as_ptr(),
                            kernel.len() as c_int,
                            stride.as_ptr(),
                            stride.len() as c_int,
                            padding.as_ptr(),
                            padding.len() as c_int,
                            ceil_mode,
                            count_include_pad,
                        )
                    };
                    self.result_of(raw, stringify!($name))
                }
            )+
        }
    };
}

avg_pool_ops!(avg_pool1d, avg_pool2d, avg_pool3d);

macro_rules! adaptive_avg_pool_ops {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        impl Tensor {
            $(
                $(#[$meta])*
                pub fn $name(&self, output_size: &[i64]) -> Result<Tensor, TorchError> {
                    // SAFETY: pointer/length pair describes `output_size`.
                    let raw = unsafe {
                        (self.api().$name)(
                            self.as_raw(),
                            output_size.as_ptr(),
                            output_size.len() as c_int,
                        )
                    };
                    self.result_of(raw, stringify!($name))
                }
            )+
        }
    };
}

adaptive_avg_pool_ops!(
    /// Average pooling that targets a fixed output extent.
    adaptive_avg_pool1d,
    adaptive_avg_pool2d,
    adaptive_avg_pool3d,
);

impl Tensor {
    /// Partial inverse of [`Tensor::max_pool2d_with_indices`].
    pub fn maxunpool2d(&self, indices: &Tensor, output_size: &[i64]) -> Result<Tensor, TorchError> {
        // SAFETY: handles are valid; pointer/length pair describes
        // `output_size`.
        let raw = unsafe {
            (self.api().maxunpool2d)(
                self.as_raw(),
                indices.as_raw(),
                output_size.as_ptr(),
                output_size.len() as c_int,
            )
        };
        self.result_of(raw, "maxunpool2d")
    }

    /// Partial inverse of [`Tensor::max_pool3d_with_indices`].
    pub fn maxunpool3d(
        &self,
        indices: &Tensor,
        output_size: &[i64],
        stride: &[i64],
        padding: &[i64],
    ) -> Result<Tensor, TorchError> {
        // SAFETY: handles are valid; each pointer/length pair describes its
        // slice.
        let raw = unsafe {
            (self.api().maxunpool3d)(
                self.as_raw(),
                indices.as_raw(),
                output_size.as_ptr(),
                output_size.len() as c_int,
                stride.as_ptr(),
                stride.len() as c_int,
                padding.as_ptr(),
                padding.len() as c_int,
            )
        };
        self.result_of(raw, "maxunpool3d")
    }
}

macro_rules! upsample_nearest_ops {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        impl Tensor {
            $(
                $(#[$meta])*
                pub fn $name(
                    &self,
                    output_size: &[i64],
                    scale_factors: &[f64],
                ) -> Result<Tensor, TorchError> {
                    // SAFETY: each pointer/length pair describes its slice;
                    // an empty slice crosses as length 0, which the native
                    // side reads as "not provided".
                    let raw = unsafe {
                        (self.api().$name)(
                            self.as_raw(),
                            output_size.as_ptr(),
                            output_size.len() as c_int,
                            scale_factors.as_ptr(),
                            scale_factors.len() as c_int,
                        )
                    };
                    self.result_of(raw, stringify!($name))
                }
            )+
        }
    };
}

upsample_nearest_ops!(
    /// Nearest-neighbor upsampling; pass either a target size or scale
    /// factors and leave the other slice empty.
    upsample_nearest1d,
    upsample_nearest2d,
    upsample_nearest3d,
);
