//! Tensor factories. Each forwards shape, element type and placement to the
//! corresponding native constructor.

use ferrotorch_sys::c_int;

use crate::device::Device;
use crate::error::{self, TorchError};
use crate::kind::{Element, Kind};
use crate::marshal;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

macro_rules! sized_factory {
    ($(#[$meta:meta])* $name:ident, $field:ident) => {
        $(#[$meta])*
        pub fn $name(
            shape: &[i64],
            kind: Kind,
            device: Device,
            requires_grad: bool,
        ) -> Result<Tensor, TorchError> {
            let api = crate::api()?;
            // SAFETY: pointer/length pair describes `shape` for the call.
            let raw = unsafe {
                (api.$field)(
                    shape.as_ptr(),
                    shape.len() as c_int,
                    kind.to_code(),
                    device.type_code(),
                    device.index_code(),
                    requires_grad,
                )
            };
            Tensor::wrap(raw, api, stringify!($field))
        }
    };
}

sized_factory!(
    /// A tensor filled with zeros.
    zeros, zeros
);
sized_factory!(
    /// A tensor filled with ones.
    ones, ones
);
sized_factory!(
    /// A tensor with uninitialized content.
    empty, empty
);
sized_factory!(
    /// A tensor of samples drawn uniformly from `[0, 1)`.
    rand, rand
);
sized_factory!(
    /// A tensor of samples drawn from the standard normal distribution.
    randn, randn
);

/// A tensor filled with `value`.
pub fn full(
    shape: &[i64],
    value: &Scalar,
    kind: Kind,
    device: Device,
    requires_grad: bool,
) -> Result<Tensor, TorchError> {
    let api = crate::api()?;
    // SAFETY: pointer/length pair describes `shape`; the scalar handle is
    // valid for the call.
    let raw = unsafe {
        (api.full)(
            shape.as_ptr(),
            shape.len() as c_int,
            value.as_raw(),
            kind.to_code(),
            device.type_code(),
            device.index_code(),
            requires_grad,
        )
    };
    Tensor::wrap(raw, api, "full")
}

/// Values from `start` (inclusive) to `end` (exclusive), advancing by `step`.
pub fn arange(
    start: &Scalar,
    end: &Scalar,
    step: &Scalar,
    kind: Kind,
    device: Device,
    requires_grad: bool,
) -> Result<Tensor, TorchError> {
    let api = crate::api()?;
    // SAFETY: all three scalar handles are valid for the call.
    let raw = unsafe {
        (api.arange)(
            start.as_raw(),
            end.as_raw(),
            step.as_raw(),
            kind.to_code(),
            device.type_code(),
            device.index_code(),
            requires_grad,
        )
    };
    Tensor::wrap(raw, api, "arange")
}

/// Integers sampled uniformly from `[0, high)`.
pub fn randint(
    high: i64,
    shape: &[i64],
    kind: Kind,
    device: Device,
    requires_grad: bool,
) -> Result<Tensor, TorchError> {
    let api = crate::api()?;
    // SAFETY: pointer/length pair describes `shape` for the call.
    let raw = unsafe {
        (api.randint)(
            high,
            shape.as_ptr(),
            shape.len() as c_int,
            kind.to_code(),
            device.type_code(),
            device.index_code(),
            requires_grad,
        )
    };
    Tensor::wrap(raw, api, "randint")
}

/// A random permutation of the integers `0..n`.
pub fn randperm(
    n: i64,
    kind: Kind,
    device: Device,
    requires_grad: bool,
) -> Result<Tensor, TorchError> {
    let api = crate::api()?;
    // SAFETY: plain value arguments.
    let raw = unsafe {
        (api.randperm)(
            n,
            kind.to_code(),
            device.type_code(),
            device.index_code(),
            requires_grad,
        )
    };
    Tensor::wrap(raw, api, "randperm")
}

/// Builds a CPU tensor from host data.
///
/// The data is copied into a buffer that is lent to the native side; the
/// buffer is reclaimed when the native storage releases it through the
/// deleter callback.
pub fn from_slice<T: Element>(data: &[T], shape: &[i64]) -> Result<Tensor, TorchError> {
    let expected: i64 = shape.iter().product();
    if expected != data.len() as i64 {
        return Err(error::invalid_argument(
            "new",
            format!(
                "data length {} does not match shape {:?}",
                data.len(),
                shape
            ),
        ));
    }
    let api = crate::api()?;

    // SAFETY: `data` is a valid slice of plain-old-data elements; viewing it
    // as bytes copies it into the lent buffer.
    let bytes = unsafe {
        std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data))
    }
    .to_vec();
    let buffer = marshal::lend_host_buffer(bytes);

    // SAFETY: the buffer stays parked until the deleter fires; pointer/length
    // pair describes `shape`.
    let raw = unsafe {
        (api.new)(
            buffer,
            marshal::release_host_buffer,
            shape.as_ptr(),
            shape.len() as c_int,
            T::KIND.to_code(),
            false,
        )
    };
    match Tensor::wrap(raw, api, "new") {
        Ok(tensor) => Ok(tensor),
        Err(err) => {
            // The native side never adopted the buffer; reclaim it here.
            // SAFETY: `buffer` is the address lend_host_buffer returned.
            unsafe { marshal::release_host_buffer(buffer) };
            Err(err)
        }
    }
}
