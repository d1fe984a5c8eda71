//! Function-style entry points that build a transient module, run one
//! forward pass, and release it.

use crate::error::TorchError;
use crate::nn::layers::{Elu, Sigmoid, Softmax, Tanh};
use crate::nn::module::Forward;
use crate::tensor::Tensor;

pub fn elu(input: &Tensor) -> Result<Tensor, TorchError> {
    Elu::new()?.forward(input)
}

pub fn sigmoid(input: &Tensor) -> Result<Tensor, TorchError> {
    Sigmoid::new()?.forward(input)
}

pub fn tanh(input: &Tensor) -> Result<Tensor, TorchError> {
    Tanh::new()?.forward(input)
}

pub fn softmax(input: &Tensor, dim: i64) -> Result<Tensor, TorchError> {
    Softmax::new(dim)?.forward(input)
}
