use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Softmax activation function
///
/// The only transform in this crate whose output couples array entries: the
/// exponential of every entry is divided by the sum of exponentials over the
/// normalization axis. Exponentials are taken directly, without rescaling by
/// the row maximum, so inputs of large magnitude overflow to infinity and the
/// result degrades per IEEE-754 rules (known limitation).
pub struct Softmax;

impl Softmax {
    /// exp(x) / sum(exp(x)), normalized over the whole input.
    pub fn apply(input: ArrayView1<f32>) -> Array1<f32> {
        let exp = input.mapv(f32::exp);
        let sum = exp.sum();
        exp / sum
    }

    /// Row-wise softmax: each row is normalized independently along
    /// `Axis(1)`, the last axis.
    pub fn apply_batch(inputs: ArrayView2<f32>) -> Array2<f32> {
        let mut out = inputs.mapv(f32::exp);
        for mut row in out.axis_iter_mut(Axis(0)) {
            let sum = row.sum();
            row.mapv_inplace(|v| v / sum);
        }
        out
    }

    /// Elementwise derivative `p * (1 - p)` with `p = apply(x)`.
    ///
    /// This is the diagonal of the softmax Jacobian only; the cross terms
    /// `-p_i * p_j` are not included.
    pub fn gradient(input: ArrayView1<f32>) -> Array1<f32> {
        let p = Self::apply(input);
        p.mapv(|p| p * (1.0 - p))
    }

    /// Row-wise version of [`Softmax::gradient`].
    pub fn gradient_batch(inputs: ArrayView2<f32>) -> Array2<f32> {
        let p = Self::apply_batch(inputs);
        p.mapv(|p| p * (1.0 - p))
    }
}
