use ndarray::{array, Axis};
use crate::activations::Activation;
use crate::activations::softmax::Softmax;

#[test]
fn test_softmax_sums_to_one() {
    let softmax = Activation::Softmax;
    let out = softmax.apply(array![1.0, 2.0, 3.0].view());
    assert!((out.sum() - 1.0).abs() < 1e-6);
}

#[test]
fn test_softmax_known_values() {
    let out = Softmax::apply(array![1.0, 2.0, 3.0].view());
    assert!((out[0] - 0.090031).abs() < 1e-6);
    assert!((out[1] - 0.244728).abs() < 1e-6);
    assert!((out[2] - 0.665241).abs() < 1e-6);
}

#[test]
fn test_softmax_preserves_ordering() {
    let out = Softmax::apply(array![0.5, -1.0, 3.0, 0.0].view());
    // largest input gets the largest probability
    assert!(out[2] > out[0]);
    assert!(out[0] > out[3]);
    assert!(out[3] > out[1]);
}

#[test]
fn test_softmax_uniform_input() {
    let out = Softmax::apply(array![2.0, 2.0, 2.0, 2.0].view());
    for &p in out.iter() {
        assert!((p - 0.25).abs() < 1e-6);
    }
}

#[test]
fn test_softmax_batch_normalizes_rows() {
    let inputs = array![[1.0, 2.0, 3.0], [0.0, 0.0, 0.0]];
    let out = Softmax::apply_batch(inputs.view());
    assert_eq!(out.dim(), (2, 3));
    for row in out.axis_iter(Axis(0)) {
        assert!((row.sum() - 1.0).abs() < 1e-6);
    }
    // a constant row becomes uniform
    assert!((out[[1, 0]] - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_softmax_batch_matches_single_rows() {
    let inputs = array![[1.0, -0.5, 2.0], [-3.0, 0.0, 0.25]];
    let batch = Activation::Softmax.apply_batch(inputs.view());
    for (row_out, row_in) in batch.axis_iter(Axis(0)).zip(inputs.axis_iter(Axis(0))) {
        let single = Activation::Softmax.apply(row_in);
        assert_eq!(row_out.to_owned(), single);
    }
}

#[test]
fn test_softmax_gradient_is_diagonal_form() {
    // p * (1 - p), not the full Jacobian
    let input = array![1.0, 2.0, 3.0];
    let p = Softmax::apply(input.view());
    let grad = Softmax::gradient(input.view());
    for (g, q) in grad.iter().zip(p.iter()) {
        assert!((g - q * (1.0 - q)).abs() < 1e-7);
    }
    // the diagonal form does not sum to zero like a true Jacobian row would
    assert!(grad.sum() > 0.0);
}

#[test]
fn test_softmax_gradient_batch_shape() {
    let inputs = array![[1.0, 2.0], [3.0, 4.0], [0.0, 0.0]];
    let grad = Activation::Softmax.gradient_batch(inputs.view());
    assert_eq!(grad.dim(), (3, 2));
}

#[test]
fn test_softmax_overflows_without_rescaling() {
    // No max-subtraction guard: exp saturates to infinity and the
    // normalization degenerates to NaN.
    let out = Softmax::apply(array![1000.0, 1000.0].view());
    assert!(out.iter().all(|p| p.is_nan()));
}
