//! Reductions and cumulative operations.

use ferrotorch_sys::{c_int, c_schar};

use crate::error::TorchError;
use crate::kind::Kind;
use crate::marshal;
use crate::tensor::Tensor;

/// Marshals the optional output element type the reduction entry points
/// accept as a (flag, code) pair.
fn kind_arg(kind: Option<Kind>) -> (bool, c_schar) {
    match kind {
        Some(kind) => (true, kind.to_code()),
        None => (false, 0),
    }
}

impl Tensor {
    /// Sum over all elements, optionally accumulating in `kind`.
    pub fn sum(&self, kind: Option<Kind>) -> Result<Tensor, TorchError> {
        let (has_kind, code) = kind_arg(kind);
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().sum)(self.as_raw(), has_kind, code) };
        self.result_of(raw, "sum")
    }

    /// Sum along `dims`.
    pub fn sum_along(
        &self,
        dims: &[i64],
        keepdim: bool,
        kind: Option<Kind>,
    ) -> Result<Tensor, TorchError> {
        let (has_kind, code) = kind_arg(kind);
        // SAFETY: pointer/length pair describes `dims`.
        let raw = unsafe {
            (self.api().sum_along_dimensions)(
                self.as_raw(),
                dims.as_ptr(),
                dims.len() as c_int,
                keepdim,
                has_kind,
                code,
            )
        };
        self.result_of(raw, "sum_along_dimensions")
    }

    /// Mean over all elements.
    pub fn mean(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().mean)(self.as_raw()) };
        self.result_of(raw, "mean")
    }

    /// Mean along `dims`.
    pub fn mean_along(
        &self,
        dims: &[i64],
        keepdim: bool,
        kind: Option<Kind>,
    ) -> Result<Tensor, TorchError> {
        let (has_kind, code) = kind_arg(kind);
        // SAFETY: pointer/length pair describes `dims`.
        let raw = unsafe {
            (self.api().mean_along_dimensions)(
                self.as_raw(),
                dims.as_ptr(),
                dims.len() as c_int,
                keepdim,
                has_kind,
                code,
            )
        };
        self.result_of(raw, "mean_along_dimensions")
    }

    /// Largest element.
    pub fn max(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().max)(self.as_raw()) };
        self.result_of(raw, "max")
    }

    /// Smallest element.
    pub fn min(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().min)(self.as_raw()) };
        self.result_of(raw, "min")
    }

    /// Median element.
    pub fn median(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().median)(self.as_raw()) };
        self.result_of(raw, "median")
    }

    /// Maximum along `dim`, returning `(values, indices)`.
    pub fn max_along(&self, dim: i64, keepdim: bool) -> Result<(Tensor, Tensor), TorchError> {
        let results = marshal::run_multi(self.api(), "max_along_dimension", |alloc| {
            // SAFETY: handle is valid; results arrive through `alloc`.
            unsafe { (self.api().max_along_dimension)(self.as_raw(), alloc, dim, keepdim) }
        })?;
        marshal::into_pair(results, "max_along_dimension")
    }

    /// Minimum along `dim`, returning `(values, indices)`.
    pub fn min_along(&self, dim: i64, keepdim: bool) -> Result<(Tensor, Tensor), TorchError> {
        let results = marshal::run_multi(self.api(), "min_along_dimension", |alloc| {
            // SAFETY: handle is valid; results arrive through `alloc`.
            unsafe { (self.api().min_along_dimension)(self.as_raw(), alloc, dim, keepdim) }
        })?;
        marshal::into_pair(results, "min_along_dimension")
    }

    pub fn argmax(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().argmax)(self.as_raw()) };
        self.result_of(raw, "argmax")
    }

    pub fn argmax_along(&self, dim: i64, keepdim: bool) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().argmax_along_dimension)(self.as_raw(), dim, keepdim) };
        self.result_of(raw, "argmax_along_dimension")
    }

    pub fn argmin(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().argmin)(self.as_raw()) };
        self.result_of(raw, "argmin")
    }

    pub fn argmin_along(&self, dim: i64, keepdim: bool) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().argmin_along_dimension)(self.as_raw(), dim, keepdim) };
        self.result_of(raw, "argmin_along_dimension")
    }

    /// True when every element is nonzero.
    pub fn all(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().all)(self.as_raw()) };
        self.result_of(raw, "all")
    }

    pub fn all_along(&self, dim: i64, keepdim: bool) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().all_along_dimension)(self.as_raw(), dim, keepdim) };
        self.result_of(raw, "all_along_dimension")
    }

    /// True when any element is nonzero.
    pub fn any(&self) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().any)(self.as_raw()) };
        self.result_of(raw, "any")
    }

    pub fn any_along(&self, dim: i64, keepdim: bool) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().any_along_dimension)(self.as_raw(), dim, keepdim) };
        self.result_of(raw, "any_along_dimension")
    }

    /// p-norm over all elements.
    pub fn norm(&self, p: f32) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().norm)(self.as_raw(), p) };
        self.result_of(raw, "norm")
    }

    /// p-norm along `dim`.
    pub fn norm_along(&self, dim: i32, keepdim: bool, p: f32) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().norm_along_dimension)(self.as_raw(), dim, keepdim, p) };
        self.result_of(raw, "norm_along_dimension")
    }

    /// Cumulative sum along `dim`.
    pub fn cumsum(&self, dim: i64, kind: Option<Kind>) -> Result<Tensor, TorchError> {
        let (has_kind, code) = kind_arg(kind);
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().cumsum)(self.as_raw(), dim, has_kind, code) };
        self.result_of(raw, "cumsum")
    }

    /// Cumulative product along `dim`.
    pub fn cumprod(&self, dim: i64, kind: Option<Kind>) -> Result<Tensor, TorchError> {
        let (has_kind, code) = kind_arg(kind);
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().cumprod)(self.as_raw(), dim, has_kind, code) };
        self.result_of(raw, "cumprod")
    }

    /// Cumulative maximum along `dim`, returning `(values, indices)`.
    pub fn cummax(&self, dim: i64) -> Result<(Tensor, Tensor), TorchError> {
        let results = marshal::run_multi(self.api(), "cummax", |alloc| {
            // SAFETY: handle is valid; results arrive through `alloc`.
            unsafe { (self.api().cummax)(self.as_raw(), alloc, dim) }
        })?;
        marshal::into_pair(results, "cummax")
    }

    /// Cumulative minimum along `dim`, returning `(values, indices)`.
    pub fn cummin(&self, dim: i64) -> Result<(Tensor, Tensor), TorchError> {
        let results = marshal::run_multi(self.api(), "cummin", |alloc| {
            // SAFETY: handle is valid; results arrive through `alloc`.
            unsafe { (self.api().cummin)(self.as_raw(), alloc, dim) }
        })?;
        marshal::into_pair(results, "cummin")
    }

    /// Log of the cumulative sum of exponentials along `dim`.
    pub fn logcumsumexp(&self, dim: i64) -> Result<Tensor, TorchError> {
        // SAFETY: handle is valid for self's lifetime.
        let raw = unsafe { (self.api().logcumsumexp)(self.as_raw(), dim) };
        self.result_of(raw, "logcumsumexp")
    }

    /// Counts occurrences of each value in an integer tensor.
    pub fn bincount(
        &self,
        weights: Option<&Tensor>,
        minlength: i64,
    ) -> Result<Tensor, TorchError> {
        let weights_raw = weights.map_or(std::ptr::null_mut(), Tensor::as_raw);
        // SAFETY: handle is valid; a null weights handle means "unweighted"
        // on the native side.
        let raw = unsafe { (self.api().bincount)(self.as_raw(), weights_raw, minlength) };
        self.result_of(raw, "bincount")
    }

    /// The `k` largest (or smallest) elements along `dim`, returning
    /// `(values, indices)`.
    pub fn topk(
        &self,
        k: i32,
        dim: i64,
        largest: bool,
        sorted: bool,
    ) -> Result<(Tensor, Tensor), TorchError> {
        let results = marshal::run_multi(self.api(), "topk", |alloc| {
            // SAFETY: handle is valid; results arrive through `alloc`.
            unsafe { (self.api().topk)(self.as_raw(), alloc, k, dim, largest, sorted) }
        })?;
        marshal::into_pair(results, "topk")
    }
}
