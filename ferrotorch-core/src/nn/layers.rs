//! Activation layers backed by native module objects.

use std::ptr;

use ferrotorch_sys::RawModule;

use crate::error::TorchError;
use crate::nn::module::{Forward, ModuleHandles};
use crate::tensor::Tensor;

macro_rules! simple_layer {
    ($(#[$meta:meta])* $layer:ident, $ctor:ident, $forward:ident) => {
        $(#[$meta])*
        pub struct $layer {
            inner: ModuleHandles,
        }

        impl $layer {
            pub fn new() -> Result<$layer, TorchError> {
                let api = crate::api()?;
                let mut boxed: RawModule = ptr::null_mut();
                // SAFETY: `boxed` is a valid out pointer for the ctor.
                let handle = unsafe { (api.$ctor)(&mut boxed) };
                let inner = ModuleHandles::wrap(handle, boxed, api, stringify!($ctor))?;
                log::debug!("constructed {} module", stringify!($layer));
                Ok($layer { inner })
            }
        }

        impl Forward for $layer {
            fn forward(&self, input: &Tensor) -> Result<Tensor, TorchError> {
                self.inner
                    .forward_with(self.inner.api().$forward, input, stringify!($forward))
            }
        }
    };
}

simple_layer!(
    /// Exponential linear unit module.
    Elu, nn_elu_ctor, nn_elu_forward
);
impl std::fmt::Debug for Elu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Elu").finish_non_exhaustive()
    }
}

simple_layer!(
    /// Sigmoid module.
    Sigmoid, nn_sigmoid_ctor, nn_sigmoid_forward
);
simple_layer!(
    /// Tanh module.
    Tanh, nn_tanh_ctor, nn_tanh_forward
);

/// Softmax module over a fixed dimension.
pub struct Softmax {
    inner: ModuleHandles,
}

impl Softmax {
    pub fn new(dim: i64) -> Result<Softmax, TorchError> {
        let api = crate::api()?;
        let mut boxed: RawModule = ptr::null_mut();
        // SAFETY: `boxed` is a valid out pointer for the ctor.
        let handle = unsafe { (api.nn_softmax_ctor)(dim, &mut boxed) };
        let inner = ModuleHandles::wrap(handle, boxed, api, "nn_softmax_ctor")?;
        log::debug!("constructed Softmax module over dim {dim}");
        Ok(Softmax { inner })
    }
}

impl Forward for Softmax {
    fn forward(&self, input: &Tensor) -> Result<Tensor, TorchError> {
        self.inner
            .forward_with(self.inner.api().nn_softmax_forward, input, "nn_softmax_forward")
    }
}
