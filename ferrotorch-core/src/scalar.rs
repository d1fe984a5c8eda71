use std::ptr::NonNull;

use ferrotorch_sys::{c_void, RawScalar, TorchApi};

use crate::error::{self, TorchError};

/// An owned native scalar value.
///
/// Scalars cross the boundary as heap objects the native library allocates;
/// the wrapper releases its handle exactly once on drop.
pub struct Scalar {
    handle: NonNull<c_void>,
    api: &'static TorchApi,
}

// Native scalars are immutable value boxes with no thread affinity.
unsafe impl Send for Scalar {}

impl std::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scalar").finish_non_exhaustive()
    }
}

macro_rules! scalar_ctor {
    ($(#[$meta:meta])* $name:ident, $field:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $name(value: $ty) -> Result<Scalar, TorchError> {
            let api = crate::api()?;
            // SAFETY: plain value argument; the result is an owned handle.
            let raw = unsafe { (api.$field)(value) };
            Scalar::wrap(raw, api, stringify!($field))
        }
    };
}

impl Scalar {
    pub(crate) fn wrap(
        raw: RawScalar,
        api: &'static TorchApi,
        op: &'static str,
    ) -> Result<Scalar, TorchError> {
        match NonNull::new(raw) {
            Some(handle) => Ok(Scalar { handle, api }),
            None => Err(error::take_last(api, op)),
        }
    }

    pub(crate) fn as_raw(&self) -> RawScalar {
        self.handle.as_ptr()
    }

    scalar_ctor!(from_i8, int8_to_scalar, i8);
    scalar_ctor!(from_u8, uint8_to_scalar, u8);
    scalar_ctor!(from_i16, int16_to_scalar, i16);
    scalar_ctor!(from_i32, int32_to_scalar, i32);
    scalar_ctor!(from_i64, int64_to_scalar, i64);
    scalar_ctor!(from_f32, float32_to_scalar, f32);
    scalar_ctor!(from_f64, float64_to_scalar, f64);
    scalar_ctor!(from_bool, bool_to_scalar, bool);
    scalar_ctor!(
        /// Builds a half-precision scalar from an f32 payload.
        from_half, float16_to_scalar, f32
    );
    scalar_ctor!(
        /// Builds a bfloat16 scalar from an f32 payload.
        from_bfloat16, bfloat16_to_scalar, f32
    );

    pub fn to_i8(&self) -> i8 {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.scalar_to_int8)(self.as_raw()) }
    }

    pub fn to_u8(&self) -> u8 {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.scalar_to_uint8)(self.as_raw()) }
    }

    pub fn to_i16(&self) -> i16 {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.scalar_to_int16)(self.as_raw()) }
    }

    pub fn to_i32(&self) -> i32 {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.scalar_to_int32)(self.as_raw()) }
    }

    pub fn to_i64(&self) -> i64 {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.scalar_to_int64)(self.as_raw()) }
    }

    pub fn to_f32(&self) -> f32 {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.scalar_to_float32)(self.as_raw()) }
    }

    pub fn to_f64(&self) -> f64 {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.scalar_to_float64)(self.as_raw()) }
    }

    pub fn to_bool(&self) -> bool {
        // SAFETY: handle is valid for self's lifetime.
        unsafe { (self.api.scalar_to_bool)(self.as_raw()) }
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        // SAFETY: the handle was produced by a scalar constructor and is
        // released exactly once here.
        unsafe { (self.api.dispose_scalar)(self.handle.as_ptr()) };
    }
}
