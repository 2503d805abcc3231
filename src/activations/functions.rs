use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Serialize, Deserialize};

use crate::error::{NonlinError, Result};
use super::softmax::Softmax;

/// Negative slope used by [`Activation::leaky_relu`].
pub const DEFAULT_LEAKY_ALPHA: f32 = 0.2;

/// Saturation coefficient used by [`Activation::elu`].
pub const DEFAULT_ELU_ALPHA: f32 = 0.1;

/// Fixed SELU coefficient from Klambauer et al., <https://arxiv.org/abs/1706.02515>.
pub const SELU_ALPHA: f32 = 1.6732632423543772848170429916717;

/// Fixed SELU output scale from the same paper.
pub const SELU_SCALE: f32 = 1.0507009873554804934193349852946;

/// An enumeration of the elementwise activation functions and their derivatives.
///
/// Each variant is immutable once constructed; `LeakyRelu` and `Elu` carry
/// their negative-branch coefficient, `Selu` uses the fixed published
/// constants. All branches treat zero as part of the non-negative side, so
/// e.g. `Relu.gradient` is 1 at exactly 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub enum Activation {
    Sigmoid,
    Softmax,
    Tanh,
    #[default]
    Relu,
    LeakyRelu { alpha: f32 },
    Elu { alpha: f32 },
    Selu,
    SoftPlus,
}

/// Logistic function; shared by the sigmoid arms and the softplus gradient.
#[inline]
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

impl Activation {
    /// A `LeakyRelu` with the default negative slope of 0.2.
    pub fn leaky_relu() -> Self {
        Activation::LeakyRelu { alpha: DEFAULT_LEAKY_ALPHA }
    }

    /// An `Elu` with the default saturation coefficient of 0.1.
    pub fn elu() -> Self {
        Activation::Elu { alpha: DEFAULT_ELU_ALPHA }
    }

    /// Apply the activation function to an input array, returning a new array
    /// of the same shape. The input is never mutated.
    pub fn apply(&self, input: ArrayView1<f32>) -> Array1<f32> {
        match self {
            Activation::Sigmoid => input.mapv(sigmoid),
            Activation::Softmax => Softmax::apply(input),
            Activation::Tanh => input.mapv(f32::tanh),
            Activation::Relu => {
                input.mapv(|v| if v >= 0.0 { v } else { 0.0 })
            }
            Activation::LeakyRelu { alpha } => {
                let a = *alpha;
                input.mapv(|v| if v >= 0.0 { v } else { a * v })
            }
            Activation::Elu { alpha } => {
                let a = *alpha;
                input.mapv(|v| if v >= 0.0 { v } else { a * (v.exp() - 1.0) })
            }
            Activation::Selu => {
                input.mapv(|v| {
                    SELU_SCALE * if v >= 0.0 { v } else { SELU_ALPHA * (v.exp() - 1.0) }
                })
            }
            Activation::SoftPlus => {
                input.mapv(|v| v.exp().ln_1p())
            }
        }
    }

    /// Apply the activation function to a batch of inputs (rows = samples).
    /// Softmax normalizes each row independently.
    pub fn apply_batch(&self, inputs: ArrayView2<f32>) -> Array2<f32> {
        match self {
            Activation::Sigmoid => inputs.mapv(sigmoid),
            Activation::Softmax => Softmax::apply_batch(inputs),
            Activation::Tanh => inputs.mapv(f32::tanh),
            Activation::Relu => {
                inputs.mapv(|v| if v >= 0.0 { v } else { 0.0 })
            }
            Activation::LeakyRelu { alpha } => {
                let a = *alpha;
                inputs.mapv(|v| if v >= 0.0 { v } else { a * v })
            }
            Activation::Elu { alpha } => {
                let a = *alpha;
                inputs.mapv(|v| if v >= 0.0 { v } else { a * (v.exp() - 1.0) })
            }
            Activation::Selu => {
                inputs.mapv(|v| {
                    SELU_SCALE * if v >= 0.0 { v } else { SELU_ALPHA * (v.exp() - 1.0) }
                })
            }
            Activation::SoftPlus => {
                inputs.mapv(|v| v.exp().ln_1p())
            }
        }
    }

    /// Compute the elementwise derivative of the activation with respect to
    /// the pre-activation input, as used in backpropagation.
    pub fn gradient(&self, input: ArrayView1<f32>) -> Array1<f32> {
        match self {
            Activation::Sigmoid => {
                input.mapv(|v| {
                    let s = sigmoid(v);
                    s * (1.0 - s)
                })
            }
            Activation::Softmax => Softmax::gradient(input),
            Activation::Tanh => {
                input.mapv(|v| {
                    let t = v.tanh();
                    1.0 - t * t
                })
            }
            Activation::Relu => {
                input.mapv(|v| if v >= 0.0 { 1.0 } else { 0.0 })
            }
            Activation::LeakyRelu { alpha } => {
                let a = *alpha;
                input.mapv(|v| if v >= 0.0 { 1.0 } else { a })
            }
            Activation::Elu { alpha } => {
                let a = *alpha;
                input.mapv(|v| if v >= 0.0 { 1.0 } else { a * v.exp() })
            }
            Activation::Selu => {
                input.mapv(|v| {
                    SELU_SCALE * if v >= 0.0 { 1.0 } else { SELU_ALPHA * v.exp() }
                })
            }
            Activation::SoftPlus => input.mapv(sigmoid),
        }
    }

    /// Compute the derivative for a batch of inputs (rows = samples).
    pub fn gradient_batch(&self, inputs: ArrayView2<f32>) -> Array2<f32> {
        match self {
            Activation::Sigmoid => {
                inputs.mapv(|v| {
                    let s = sigmoid(v);
                    s * (1.0 - s)
                })
            }
            Activation::Softmax => Softmax::gradient_batch(inputs),
            Activation::Tanh => {
                inputs.mapv(|v| {
                    let t = v.tanh();
                    1.0 - t * t
                })
            }
            Activation::Relu => {
                inputs.mapv(|v| if v >= 0.0 { 1.0 } else { 0.0 })
            }
            Activation::LeakyRelu { alpha } => {
                let a = *alpha;
                inputs.mapv(|v| if v >= 0.0 { 1.0 } else { a })
            }
            Activation::Elu { alpha } => {
                let a = *alpha;
                inputs.mapv(|v| if v >= 0.0 { 1.0 } else { a * v.exp() })
            }
            Activation::Selu => {
                inputs.mapv(|v| {
                    SELU_SCALE * if v >= 0.0 { 1.0 } else { SELU_ALPHA * v.exp() }
                })
            }
            Activation::SoftPlus => inputs.mapv(sigmoid),
        }
    }
}

/// Name-based construction for configuration-driven setups.
impl Activation {
    /// Look up an activation by its configuration name.
    ///
    /// Accepts the canonical names returned by [`Activation::name`] plus a
    /// few common aliases, case-insensitively. `alpha` overrides the default
    /// coefficient for `leaky_relu` (0.2) and `elu` (0.1); passing it for any
    /// other activation is an error.
    ///
    /// ```
    /// use nonlin::activations::Activation;
    ///
    /// let act = Activation::from_name("leaky_relu", Some(0.3)).unwrap();
    /// assert_eq!(act, Activation::LeakyRelu { alpha: 0.3 });
    /// assert!(Activation::from_name("step", None).is_err());
    /// ```
    pub fn from_name(name: &str, alpha: Option<f32>) -> Result<Activation> {
        let activation = match name.to_lowercase().as_str() {
            "sigmoid" | "logistic" => Activation::Sigmoid,
            "softmax" => Activation::Softmax,
            "tanh" => Activation::Tanh,
            "relu" => Activation::Relu,
            "leaky_relu" | "leakyrelu" => Activation::LeakyRelu {
                alpha: alpha.unwrap_or(DEFAULT_LEAKY_ALPHA),
            },
            "elu" => Activation::Elu {
                alpha: alpha.unwrap_or(DEFAULT_ELU_ALPHA),
            },
            "selu" => Activation::Selu,
            "softplus" | "soft_plus" => Activation::SoftPlus,
            _ => return Err(NonlinError::unknown_activation(name)),
        };

        if alpha.is_some()
            && !matches!(
                activation,
                Activation::LeakyRelu { .. } | Activation::Elu { .. }
            )
        {
            return Err(NonlinError::invalid_parameter(
                "alpha",
                format!("'{}' takes no alpha parameter", name),
            ));
        }

        Ok(activation)
    }

    /// Canonical configuration name of this activation.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Sigmoid => "sigmoid",
            Activation::Softmax => "softmax",
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::LeakyRelu { .. } => "leaky_relu",
            Activation::Elu { .. } => "elu",
            Activation::Selu => "selu",
            Activation::SoftPlus => "softplus",
        }
    }
}
