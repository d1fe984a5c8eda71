//! The operator catalogue, one family per module.
//!
//! Every method here is a binding shim with the same contract: marshal
//! arguments, invoke the native entry point, check the failure sentinel,
//! wrap the returned handle. No numeric logic lives at this layer.

mod activation;
mod arithmetic;
mod comparison;
mod conv;
mod fft;
mod indexing;
mod linalg;
mod pooling;
mod random;
mod reduction;
mod unary;
mod view;
