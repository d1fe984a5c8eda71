use std::ptr::NonNull;

use ferrotorch_sys::{c_void, RawModule, RawTensor, TorchApi};

use crate::error::{self, TorchError};
use crate::tensor::Tensor;

/// Anything that can run a forward pass over a tensor.
pub trait Forward {
    fn forward(&self, input: &Tensor) -> Result<Tensor, TorchError>;
}

/// The module handle plus its boxed counterpart, owned together.
pub(crate) struct ModuleHandles {
    handle: NonNull<c_void>,
    boxed: NonNull<c_void>,
    api: &'static TorchApi,
}

impl ModuleHandles {
    /// Adopts the pair a module constructor produced. A null module handle
    /// surfaces the pending native error; a null boxed handle (with a live
    /// module) is a broken contract and releases the module before failing.
    pub(crate) fn wrap(
        handle: RawModule,
        boxed: RawModule,
        api: &'static TorchApi,
        op: &'static str,
    ) -> Result<ModuleHandles, TorchError> {
        let handle = match NonNull::new(handle) {
            Some(handle) => handle,
            None => return Err(error::take_last(api, op)),
        };
        match NonNull::new(boxed) {
            Some(boxed) => Ok(ModuleHandles { handle, boxed, api }),
            None => {
                // SAFETY: the module handle was just adopted and is released
                // exactly once here.
                unsafe { (api.nn_module_dispose)(handle.as_ptr()) };
                Err(error::invalid_argument(
                    op,
                    "constructor returned no boxed module",
                ))
            }
        }
    }

    pub(crate) fn api(&self) -> &'static TorchApi {
        self.api
    }

    pub(crate) fn as_raw(&self) -> RawModule {
        self.handle.as_ptr()
    }

    /// Runs one of the `*_forward` entry points against this module.
    pub(crate) fn forward_with(
        &self,
        entry: unsafe extern "C" fn(RawModule, RawTensor) -> RawTensor,
        input: &Tensor,
        op: &'static str,
    ) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { entry(self.as_raw(), input.as_raw()) };
        Tensor::wrap(raw, self.api, op)
    }
}

impl Drop for ModuleHandles {
    fn drop(&mut self) {
        // SAFETY: both handles were adopted from one successful constructor
        // call and are released exactly once, module before its box.
        unsafe {
            (self.api.nn_module_dispose)(self.handle.as_ptr());
            (self.api.nn_boxed_module_dispose)(self.boxed.as_ptr());
        }
    }
}
