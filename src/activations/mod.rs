//! # Activation Functions Module
//!
//! This module provides a collection of activation functions commonly used in neural networks.
//! Activation functions introduce non-linearity into the network, enabling it to learn complex patterns.
//!
//! ## Available Activations
//!
//! - **Sigmoid**: `1 / (1 + e^(-x))` - Outputs between 0 and 1
//! - **Softmax**: `e^x / sum(e^x)` - Normalizes inputs into a probability distribution
//! - **Tanh**: Hyperbolic tangent - Outputs between -1 and 1
//! - **ReLU** (Rectified Linear Unit): `max(0, x)` - The most popular activation
//! - **LeakyReLU**: ReLU with small negative slope (default 0.2) - Prevents dead neurons
//! - **ELU** (Exponential Linear Unit): Smooth alternative to ReLU (default alpha 0.1)
//! - **SELU** (Scaled ELU): Self-normalizing variant with fixed published constants
//! - **SoftPlus**: `ln(1 + e^x)` - Smooth version of ReLU
//!
//! ## Usage Example
//!
//! ```rust
//! use nonlin::activations::Activation;
//! use ndarray::array;
//!
//! // Create different activation functions
//! let relu = Activation::Relu;
//! let leaky_relu = Activation::LeakyRelu { alpha: 0.2 };
//!
//! // Apply to data; the input is left untouched
//! let data = array![1.0_f32, -0.5, 0.0, 2.0];
//! let out = relu.apply(data.view());
//! assert_eq!(out, array![1.0, 0.0, 0.0, 2.0]);
//!
//! // Derivative with respect to the same pre-activations
//! let grad = leaky_relu.gradient(data.view());
//! assert_eq!(grad, array![1.0, 0.2, 1.0, 1.0]);
//! ```
//!
//! ## Choosing an Activation Function
//!
//! - **Hidden Layers**: ReLU is usually the best default choice
//! - **Output Layer**:
//!   - Binary classification: Sigmoid
//!   - Multi-class classification: Softmax
//! - **Deep Networks**: Consider LeakyReLU, ELU or SELU to avoid vanishing gradients
//!
//! ## Numerical Behavior
//!
//! All functions are pure and total over finite input: extreme values
//! saturate through standard floating-point arithmetic (e.g. `exp`
//! overflowing to infinity) instead of being rejected, and NaN/Inf entries
//! propagate by the usual IEEE-754 rules. Softmax performs no
//! max-subtraction rescaling; see [`softmax::Softmax`].

pub mod functions;
pub mod softmax;

pub use functions::Activation;
