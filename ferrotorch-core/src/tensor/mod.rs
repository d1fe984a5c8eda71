use std::ffi::CStr;
use std::fmt;
use std::path::Path;
use std::ptr::NonNull;

use ferrotorch_sys::{c_void, RawTensor, TorchApi};

use crate::device::Device;
use crate::error::{self, TorchError};
use crate::kind::{Element, Kind};
use crate::marshal;
use crate::scalar::Scalar;

mod create;

pub use create::{
    arange, empty, from_slice, full, ones, rand, randint, randn, randperm, zeros,
};

/// An owned handle to a native tensor.
///
/// The wrapper holds the only reference to its native object and releases it
/// exactly once when dropped. All operations borrow the handle; consuming
/// ownership of the native side is only possible through [`Tensor::into_raw`].
pub struct Tensor {
    handle: NonNull<c_void>,
    api: &'static TorchApi,
}

// Native tensor handles are not thread-affine; the engine synchronizes its
// own storage. Calls stay synchronous pass-throughs.
unsafe impl Send for Tensor {}

impl Tensor {
    /// Adopts `raw`, or surfaces the pending native error when the entry
    /// point signalled failure through the null sentinel.
    pub(crate) fn wrap(
        raw: RawTensor,
        api: &'static TorchApi,
        op: &'static str,
    ) -> Result<Tensor, TorchError> {
        match NonNull::new(raw) {
            Some(handle) => Ok(Tensor { handle, api }),
            None => Err(error::take_last(api, op)),
        }
    }

    pub(crate) fn as_raw(&self) -> RawTensor {
        self.handle.as_ptr()
    }

    pub(crate) fn api(&self) -> &'static TorchApi {
        self.api
    }

    /// Wraps a handle produced by an operation on `self`.
    pub(crate) fn result_of(&self, raw: RawTensor, op: &'static str) -> Result<Tensor, TorchError> {
        Tensor::wrap(raw, self.api, op)
    }

    pub(crate) fn check(&self, op: &'static str) -> Result<(), TorchError> {
        error::check(self.api, op)
    }

    /// Releases ownership of the native handle without disposing it. The
    /// caller takes over the obligation to release it exactly once.
    pub fn into_raw(self) -> RawTensor {
        let raw = self.handle.as_ptr();
        std::mem::forget(self);
        raw
    }

    /// Adopts a handle obtained from [`Tensor::into_raw`] (or from native
    /// code that transfers ownership).
    ///
    /// # Safety
    /// `raw` must be a live native tensor handle that no other wrapper owns.
    pub unsafe fn from_raw(raw: RawTensor) -> Result<Tensor, TorchError> {
        let api = crate::api()?;
        NonNull::new(raw)
            .map(|handle| Tensor { handle, api })
            .ok_or_else(|| error::invalid_argument("from_raw", "handle is null"))
    }

    // -- properties ----------------------------------------------------------

    /// Number of dimensions.
    pub fn dim(&self) -> i64 {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.ndimension)(self.as_raw()) }
    }

    /// Total number of elements.
    pub fn numel(&self) -> i64 {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.numel)(self.as_raw()) }
    }

    /// Width of one element in bytes, as reported by the native side.
    pub fn element_size(&self) -> i64 {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.element_size)(self.as_raw()) }
    }

    /// Extent of dimension `dim`.
    pub fn size(&self, dim: i64) -> Result<i64, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let extent = unsafe { (self.api.size)(self.as_raw(), dim) };
        self.check("size")?;
        Ok(extent)
    }

    /// Stride of dimension `dim`.
    pub fn stride(&self, dim: i64) -> Result<i64, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let stride = unsafe { (self.api.stride)(self.as_raw(), dim) };
        self.check("stride")?;
        Ok(stride)
    }

    /// The full shape, one extent per dimension.
    pub fn shape(&self) -> Result<Vec<i64>, TorchError> {
        let mut dims = Vec::with_capacity(self.dim() as usize);
        for i in 0..self.dim() {
            dims.push(self.size(i)?);
        }
        Ok(dims)
    }

    /// Element type.
    pub fn kind(&self) -> Result<Kind, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let code = unsafe { (self.api.scalar_type)(self.as_raw()) };
        Kind::from_code(code as i8)
    }

    /// Storage device.
    pub fn device(&self) -> Result<Device, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let device_type = unsafe { (self.api.device_type)(self.as_raw()) };
        self.check("device_type")?;
        // SAFETY: handle is valid for self's lifetime.
        let device_index = unsafe { (self.api.device_index)(self.as_raw()) };
        self.check("device_index")?;
        Device::from_codes(device_type, device_index)
    }

    /// Device notation as the native library prints it (`cpu`, `cuda:0`, …).
    pub fn device_str(&self) -> Result<String, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api.device_str)(self.as_raw()) };
        if raw.is_null() {
            return Err(error::take_last(self.api, "device_str"));
        }
        // SAFETY: non-null result is a NUL-terminated string allocated by the
        // native side; ownership transfers to the caller.
        let text = unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned();
        // SAFETY: the buffer came from the shim's allocator and is released
        // exactly once here.
        unsafe { libc::free(raw as *mut libc::c_void) };
        Ok(text)
    }

    pub fn is_sparse(&self) -> bool {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.is_sparse)(self.as_raw()) }
    }

    // -- autograd ------------------------------------------------------------

    pub fn requires_grad(&self) -> bool {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.requires_grad)(self.as_raw()) }
    }

    /// Returns a new handle to this tensor with its gradient tracking flag
    /// changed.
    pub fn set_requires_grad(&self, requires_grad: bool) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api.set_requires_grad)(self.as_raw(), requires_grad) };
        self.result_of(raw, "set_requires_grad")
    }

    /// Runs the native backward pass from this tensor.
    pub fn backward(&self) -> Result<(), TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.backward)(self.as_raw()) };
        self.check("backward")
    }

    /// The accumulated gradient, or `None` when the native side has none.
    pub fn grad(&self) -> Result<Option<Tensor>, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api.grad)(self.as_raw()) };
        if raw.is_null() {
            // Null is also the "no gradient yet" answer; only a queued
            // message makes it an error.
            self.check("grad")?;
            return Ok(None);
        }
        Ok(Some(self.result_of(raw, "grad")?))
    }

    // -- host data access ----------------------------------------------------

    /// Borrows the tensor's storage as a typed slice.
    ///
    /// The tensor must live on the CPU and its element type must match `T`;
    /// both are verified before the memory is reinterpreted.
    pub fn data_slice<T: Element>(&self) -> Result<&[T], TorchError> {
        let device = self.device()?;
        if device != Device::Cpu {
            return Err(error::invalid_argument(
                "data",
                format!("tensor lives on {device}, host access needs cpu"),
            ));
        }
        let kind = self.kind()?;
        if kind != T::KIND {
            return Err(error::invalid_argument(
                "data",
                format!("tensor holds {kind}, requested {}", T::KIND),
            ));
        }
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api.data)(self.as_raw()) };
        if raw.is_null() {
            return Err(error::take_last(self.api, "data"));
        }
        // SAFETY: the pointer addresses numel() elements of the verified
        // type and stays valid while `self` is borrowed.
        Ok(unsafe { std::slice::from_raw_parts(raw as *const T, self.numel() as usize) })
    }

    /// Reads one element by linear index from CPU storage.
    pub fn read<T: Element>(&self, i: i64) -> Result<T, TorchError> {
        let data = self.data_slice::<T>()?;
        data.get(i as usize).copied().ok_or_else(|| {
            error::invalid_argument("data", format!("index {i} out of range for {}", data.len()))
        })
    }

    /// Reads one half-precision element, widened to f32 by the native side.
    pub fn read_half(&self, i: i64) -> Result<f32, TorchError> {
        self.check_narrow_read("data_idx_float16", Kind::Half, i)?;
        // SAFETY: handle is valid; kind and index were verified.
        Ok(unsafe { (self.api.data_idx_float16)(self.as_raw(), i) })
    }

    /// Reads one bfloat16 element, widened to f32 by the native side.
    pub fn read_bfloat16(&self, i: i64) -> Result<f32, TorchError> {
        self.check_narrow_read("data_idx_bfloat16", Kind::BFloat16, i)?;
        // SAFETY: handle is valid; kind and index were verified.
        Ok(unsafe { (self.api.data_idx_bfloat16)(self.as_raw(), i) })
    }

    fn check_narrow_read(
        &self,
        op: &'static str,
        expected: Kind,
        i: i64,
    ) -> Result<(), TorchError> {
        let kind = self.kind()?;
        if kind != expected {
            return Err(error::invalid_argument(
                op,
                format!("tensor holds {kind}, requested {expected}"),
            ));
        }
        if i < 0 || i >= self.numel() {
            return Err(error::invalid_argument(
                op,
                format!("index {i} out of range for {}", self.numel()),
            ));
        }
        Ok(())
    }

    /// Extracts the value of a single-element tensor.
    pub fn item(&self) -> Result<Scalar, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api.item)(self.as_raw()) };
        Scalar::wrap(raw, self.api, "item")
    }

    /// Fills the tensor in place; the returned handle aliases the same
    /// storage.
    pub fn fill_(&self, value: &Scalar) -> Result<Tensor, TorchError> {
        // SAFETY: both handles are valid for the call.
        let raw = unsafe { (self.api.fill_)(self.as_raw(), value.as_raw()) };
        self.result_of(raw, "fill_")
    }

    // -- element indexing ----------------------------------------------------

    /// Selects the element (or sub-tensor) at up to six fixed indices,
    /// mirroring the rank-specific indexer entry points.
    pub fn at(&self, indices: &[i64]) -> Result<Tensor, TorchError> {
        let h = self.as_raw();
        // SAFETY: handle is valid; each arm matches the native arity.
        let raw = unsafe {
            match *indices {
                [i1] => (self.api.get1)(h, i1),
                [i1, i2] => (self.api.get2)(h, i1, i2),
                [i1, i2, i3] => (self.api.get3)(h, i1, i2, i3),
                [i1, i2, i3, i4] => (self.api.get4)(h, i1, i2, i3, i4),
                [i1, i2, i3, i4, i5] => (self.api.get5)(h, i1, i2, i3, i4, i5),
                [i1, i2, i3, i4, i5, i6] => (self.api.get6)(h, i1, i2, i3, i4, i5, i6),
                _ => {
                    return Err(error::invalid_argument(
                        "get",
                        format!("element indexing takes 1..=6 indices, got {}", indices.len()),
                    ))
                }
            }
        };
        self.result_of(raw, "get")
    }

    /// Writes a scalar at up to six fixed indices.
    pub fn put(&self, indices: &[i64], value: &Scalar) -> Result<(), TorchError> {
        let h = self.as_raw();
        let v = value.as_raw();
        // SAFETY: handles are valid; each arm matches the native arity.
        unsafe {
            match *indices {
                [i1] => (self.api.set1)(h, i1, v),
                [i1, i2] => (self.api.set2)(h, i1, i2, v),
                [i1, i2, i3] => (self.api.set3)(h, i1, i2, i3, v),
                [i1, i2, i3, i4] => (self.api.set4)(h, i1, i2, i3, i4, v),
                [i1, i2, i3, i4, i5] => (self.api.set5)(h, i1, i2, i3, i4, i5, v),
                [i1, i2, i3, i4, i5, i6] => (self.api.set6)(h, i1, i2, i3, i4, i5, i6, v),
                _ => {
                    return Err(error::invalid_argument(
                        "set",
                        format!("element indexing takes 1..=6 indices, got {}", indices.len()),
                    ))
                }
            }
        }
        self.check("set")
    }

    // -- conversion ----------------------------------------------------------

    /// Copies (or aliases, per native semantics) this tensor onto `device`.
    pub fn to_device(&self, device: Device) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe {
            (self.api.to_device)(self.as_raw(), device.type_code(), device.index_code())
        };
        self.result_of(raw, "to_device")
    }

    pub fn cpu(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api.cpu)(self.as_raw()) };
        self.result_of(raw, "cpu")
    }

    pub fn cuda(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api.cuda)(self.as_raw()) };
        self.result_of(raw, "cuda")
    }

    /// Converts to another element type.
    pub fn to_kind(&self, kind: Kind) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api.to_type)(self.as_raw(), kind.to_code()) };
        self.result_of(raw, "to_type")
    }

    /// Deep copy with its own native storage.
    pub fn try_clone(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api.clone)(self.as_raw()) };
        self.result_of(raw, "clone")
    }

    /// A contiguous tensor with the same content.
    pub fn contiguous(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api.contiguous)(self.as_raw()) };
        self.result_of(raw, "contiguous")
    }

    // -- persistence ---------------------------------------------------------

    /// Serializes the tensor to `path` in the native format.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TorchError> {
        let location = marshal::c_string("save", &path.as_ref().to_string_lossy())?;
        // SAFETY: handle and string are valid for the call.
        unsafe { (self.api.save)(self.as_raw(), location.as_ptr()) };
        self.check("save")
    }

    /// Loads a tensor previously written by [`Tensor::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Tensor, TorchError> {
        let api = crate::api()?;
        let location = marshal::c_string("load", &path.as_ref().to_string_lossy())?;
        // SAFETY: string is valid for the call.
        let raw = unsafe { (api.load)(location.as_ptr()) };
        Tensor::wrap(raw, api, "load")
    }

    /// Loads serialized data into this tensor's storage.
    pub fn load_into<P: AsRef<Path>>(&self, path: P) -> Result<(), TorchError> {
        let location = marshal::c_string("load_into", &path.as_ref().to_string_lossy())?;
        // SAFETY: handle and string are valid for the call.
        unsafe { (self.api.load_into)(self.as_raw(), location.as_ptr()) };
        self.check("load_into")
    }

    // -- whole-tensor comparison ---------------------------------------------

    /// Exact equality of shape and content, evaluated natively.
    pub fn equal(&self, other: &Tensor) -> Result<bool, TorchError> {
        // SAFETY: both handles are valid for the call.
        let eq = unsafe { (self.api.equal)(self.as_raw(), other.as_raw()) };
        self.check("equal")?;
        Ok(eq)
    }

    /// Approximate equality with the given tolerances.
    pub fn allclose(
        &self,
        other: &Tensor,
        rtol: f64,
        atol: f64,
        equal_nan: bool,
    ) -> Result<bool, TorchError> {
        // SAFETY: both handles are valid for the call.
        let close =
            unsafe { (self.api.allclose)(self.as_raw(), other.as_raw(), rtol, atol, equal_nan) };
        self.check("allclose")?;
        Ok(close)
    }
}

impl Drop for Tensor {
    fn drop(&mut self) {
        // SAFETY: the handle was adopted from a successful native call and is
        // released exactly once here.
        unsafe { (self.api.dispose)(self.handle.as_ptr()) };
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("handle", &self.handle.as_ptr())
            .field("dim", &self.dim())
            .field("numel", &self.numel())
            .finish()
    }
}
