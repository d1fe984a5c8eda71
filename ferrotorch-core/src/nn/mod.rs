//! Native neural-network module handles.
//!
//! Each layer wraps a pair of native objects: the module proper and the
//! "boxed" counterpart the native side keeps for callback registration. Both
//! are released exactly once when the wrapper drops.

pub mod functional;
mod layers;
mod module;

pub use layers::{Elu, Sigmoid, Softmax, Tanh};
pub use module::Forward;
