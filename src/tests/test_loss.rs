use ndarray::arr2;

use crate::loss::{Loss, LossFunction, MeanSquaredError, SoftmaxCrossEntropy};

#[test]
fn test_cross_entropy_known_value() {
    let y_true = arr2(&[[1.0, 0.0]]);
    let y_pred = arr2(&[[0.5, 0.5]]);
    let loss = SoftmaxCrossEntropy.loss(y_true.view(), y_pred.view());
    assert!((loss - 0.5_f32.ln().abs()).abs() < 1e-6);
}

#[test]
fn test_cross_entropy_non_negative() {
    let y_true = arr2(&[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
    let y_pred = arr2(&[[0.2, 0.5, 0.3], [0.9, 0.05, 0.05]]);
    let loss = SoftmaxCrossEntropy.loss(y_true.view(), y_pred.view());
    assert!(loss >= 0.0);
}

#[test]
fn test_cross_entropy_approaches_zero_for_confident_correct_predictions() {
    let y_true = arr2(&[[1.0, 0.0]]);
    let y_pred = arr2(&[[0.999999, 0.000001]]);
    let loss = SoftmaxCrossEntropy.loss(y_true.view(), y_pred.view());
    assert!(loss < 1e-4);
}

#[test]
fn test_cross_entropy_clamps_log_of_zero() {
    let y_true = arr2(&[[1.0, 0.0]]);
    let y_pred = arr2(&[[0.0, 1.0]]);
    let loss = SoftmaxCrossEntropy.loss(y_true.view(), y_pred.view());
    assert!(loss.is_finite());
    assert!(loss > 0.0);
}

#[test]
fn test_cross_entropy_fused_gradient() {
    let y_true = arr2(&[[1.0, 0.0], [0.0, 1.0]]);
    let y_pred = arr2(&[[0.7, 0.3], [0.4, 0.6]]);
    let gradient = SoftmaxCrossEntropy.gradient(y_true.view(), y_pred.view());

    // (y_pred − y_true) / batch_size
    let expected = arr2(&[[-0.15, 0.15], [0.2, -0.2]]);
    for (g, e) in gradient.iter().zip(expected.iter()) {
        assert!((g - e).abs() < 1e-6);
    }
}

#[test]
fn test_mse_known_value() {
    let y_true = arr2(&[[0.0, 0.0]]);
    let y_pred = arr2(&[[1.0, 2.0]]);
    let loss = MeanSquaredError.loss(y_true.view(), y_pred.view());
    assert!((loss - 2.5).abs() < 1e-6);
}

#[test]
fn test_mse_gradient() {
    let y_true = arr2(&[[0.0, 0.0]]);
    let y_pred = arr2(&[[1.0, 2.0]]);
    let gradient = MeanSquaredError.gradient(y_true.view(), y_pred.view());
    assert_eq!(gradient, arr2(&[[2.0, 4.0]]));
}

#[test]
fn test_mse_zero_for_perfect_predictions() {
    let y = arr2(&[[0.25, 0.75], [1.0, 0.0]]);
    assert_eq!(MeanSquaredError.loss(y.view(), y.view()), 0.0);
}

#[test]
fn test_loss_function_delegation() {
    let y_true = arr2(&[[1.0, 0.0]]);
    let y_pred = arr2(&[[0.5, 0.5]]);

    let ce = LossFunction::cross_entropy();
    let mse = LossFunction::mse();

    assert_eq!(ce.name(), "SoftmaxCrossEntropy");
    assert_eq!(mse.name(), "MeanSquaredError");
    assert!((ce.loss(y_true.view(), y_pred.view())
        - SoftmaxCrossEntropy.loss(y_true.view(), y_pred.view()))
    .abs()
        < 1e-7);
    assert!((mse.loss(y_true.view(), y_pred.view())
        - MeanSquaredError.loss(y_true.view(), y_pred.view()))
    .abs()
        < 1e-7);
}
