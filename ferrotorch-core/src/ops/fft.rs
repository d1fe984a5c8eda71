//! Fourier transforms.

use ferrotorch_sys::c_int;

use crate::error::TorchError;
use crate::tensor::Tensor;

impl Tensor {
    /// Complex-to-complex discrete Fourier transform over the last
    /// `signal_ndim` dimensions.
    pub fn fft(&self, signal_ndim: i64, normalized: bool) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().fft)(self.as_raw(), signal_ndim, normalized) };
        self.result_of(raw, "fft")
    }

    /// Inverse of [`Tensor::fft`].
    pub fn ifft(&self, signal_ndim: i64, normalized: bool) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().ifft)(self.as_raw(), signal_ndim, normalized) };
        self.result_of(raw, "ifft")
    }

    /// Real-to-complex transform.
    pub fn rfft(
        &self,
        signal_ndim: i64,
        normalized: bool,
        onesided: bool,
    ) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().rfft)(self.as_raw(), signal_ndim, normalized, onesided) };
        self.result_of(raw, "rfft")
    }

    /// Complex-to-real inverse transform. `signal_sizes` pins the output
    /// extents when the one-sided spectrum is ambiguous; empty means "let the
    /// native side infer".
    pub fn irfft(
        &self,
        signal_ndim: i64,
        normalized: bool,
        onesided: bool,
        signal_sizes: &[i64],
    ) -> Result<Tensor, TorchError> {
        // SAFETY: pointer/length pair describes `signal_sizes`.
        let raw = unsafe {
            (self.api().irfft)(
                self.as_raw(),
                signal_ndim,
                normalized,
                onesided,
                signal_sizes.as_ptr(),
                signal_sizes.len() as c_int,
            )
        };
        self.result_of(raw, "irfft")
    }
}
