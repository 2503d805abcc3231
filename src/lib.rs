//! # Nonlin - Elementwise Activation Functions for Neural Networks
//!
//! Nonlin is a small Rust library collecting the standard neural-network
//! activation functions and their derivatives as pure mappings over
//! [`ndarray`] arrays. Every transform is a leaf with no dependency on any
//! other: construct one, then call `apply` for the forward pass and
//! `gradient` for backpropagation.
//!
//! ## Key Features
//!
//! - **Eight Transforms**: Sigmoid, Softmax, Tanh, ReLU, LeakyReLU, ELU, SELU, SoftPlus
//! - **Pure Operations**: inputs are read-only views, outputs are fresh arrays of the same shape
//! - **Single and Batch**: 1-D sample and 2-D row-wise batch variants of every operation
//! - **Config Friendly**: serde derives and name-based lookup for the activation enum
//! - **Permissive Numerics**: NaN/Inf propagate by IEEE-754 rules instead of being rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use nonlin::activations::Activation;
//! use ndarray::array;
//!
//! let relu = Activation::Relu;
//! let pre = array![-1.0_f32, 0.0, 2.5];
//!
//! let post = relu.apply(pre.view());
//! assert_eq!(post, array![0.0, 0.0, 2.5]);
//!
//! let grad = relu.gradient(pre.view());
//! assert_eq!(grad, array![0.0, 1.0, 1.0]);
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - The activation enum and the per-function formulas
//! - [`error`] - Error types and result handling for the config surface

pub mod activations;
pub mod error;

#[cfg(test)]
mod tests;
