//! Random sampling and in-place distribution fills.
//!
//! All randomness comes from the native generator; [`crate::torch::manual_seed`]
//! controls it.

use crate::error::TorchError;
use crate::tensor::Tensor;

impl Tensor {
    /// Draws Bernoulli samples with probability `p` into a new tensor shaped
    /// like `self`.
    pub fn bernoulli(&self, p: f64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().bernoulli)(self.as_raw(), p) };
        self.result_of(raw, "bernoulli")
    }

    pub fn bernoulli_(&self, p: f64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().bernoulli_)(self.as_raw(), p) };
        self.result_of(raw, "bernoulli_")
    }

    /// Samples `num_samples` category indices per row, treating `self` as
    /// (unnormalized) probabilities.
    pub fn multinomial(&self, num_samples: i64, replacement: bool) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime. The entry point takes
        // the sample count as a double.
        let raw =
            unsafe { (self.api().multinomial)(self.as_raw(), num_samples as f64, replacement) };
        self.result_of(raw, "multinomial")
    }

    /// Fills in place with samples uniform over `[from, to)`.
    pub fn uniform_(&self, from: f64, to: f64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().uniform_)(self.as_raw(), from, to) };
        self.result_of(raw, "uniform_")
    }

    /// Fills in place with normal samples.
    pub fn normal_(&self, mean: f64, std: f64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().normal_)(self.as_raw(), mean, std) };
        self.result_of(raw, "normal_")
    }

    /// Fills in place with log-normal samples.
    pub fn log_normal_(&self, mean: f64, std: f64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().log_normal_)(self.as_raw(), mean, std) };
        self.result_of(raw, "log_normal_")
    }

    /// Fills in place with exponential samples of rate `lambd`.
    pub fn exponential_(&self, lambd: f64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().exponential_)(self.as_raw(), lambd) };
        self.result_of(raw, "exponential_")
    }

    /// Fills in place with geometric samples of success probability `p`.
    pub fn geometric_(&self, p: f64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().geometric_)(self.as_raw(), p) };
        self.result_of(raw, "geometric_")
    }

    /// Fills in place with Cauchy samples.
    pub fn cauchy_(&self, median: f64, sigma: f64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().cauchy_)(self.as_raw(), median, sigma) };
        self.result_of(raw, "cauchy_")
    }
}
