use ndarray::{arr2, Array2};

use crate::builders::NetworkBuilder;
use crate::error::MinervaError;
use crate::layers::{DenseLayer, LayerTrait, LayerWrapper, WeightInit};
use crate::loss::{Loss, LossFunction, MeanSquaredError};
use crate::network::Network;
use crate::optimizer::Sgd;

#[test]
fn test_from_architecture_layout() {
    let network = Network::from_architecture(&[4, 3, 2]).unwrap();

    let kinds: Vec<&str> = network.layers.iter().map(|l| l.kind()).collect();
    assert_eq!(kinds, ["Dense", "ReLU", "Dense", "Softmax"]);

    let dense_shapes: Vec<(usize, usize)> = network
        .layers
        .iter()
        .filter_map(|l| l.as_dense())
        .map(|d| (d.input_size(), d.output_size()))
        .collect();
    assert_eq!(dense_shapes, [(4, 3), (3, 2)]);
}

#[test]
fn test_from_architecture_rejects_single_width() {
    let result = Network::from_architecture(&[4]);
    assert!(matches!(result, Err(MinervaError::InvalidParameter { .. })));
}

#[test]
fn test_builder_rejects_mismatched_dense_chain() {
    let result = NetworkBuilder::new()
        .dense(4, 3, WeightInit::HeNormal)
        .relu()
        .dense(5, 2, WeightInit::XavierUniform)
        .build();
    assert!(matches!(result, Err(MinervaError::DimensionMismatch { .. })));
}

#[test]
fn test_builder_rejects_empty_network() {
    assert!(NetworkBuilder::new().build().is_err());
}

#[test]
fn test_forward_batch_shape() {
    let mut network = Network::from_architecture(&[3, 5, 2]).unwrap();
    let inputs = Array2::<f32>::zeros((7, 3));
    let outputs = network.forward_batch(inputs.view());
    assert_eq!(outputs.shape(), [7, 2]);
}

#[test]
fn test_forward_is_idempotent() {
    let mut network = Network::from_architecture(&[3, 4, 2]).unwrap();
    let inputs = arr2(&[[0.1, -0.5, 2.0], [1.0, 0.0, -1.0]]);

    let first = network.forward_batch(inputs.view());
    let second = network.forward_batch(inputs.view());
    assert_eq!(first, second);
}

#[test]
fn test_backward_batch_reaches_input() {
    let mut network = Network::from_architecture(&[3, 4, 2]).unwrap();
    let inputs = arr2(&[[0.5, 0.5, 0.5], [1.0, -1.0, 0.0]]);
    network.forward_batch(inputs.view());

    let gradient = Array2::<f32>::ones((2, 2));
    let input_gradient = network.backward_batch(gradient.view());
    assert_eq!(input_gradient.shape(), [2, 3]);
}

#[test]
fn test_train_step_rejects_cross_entropy_without_softmax() {
    let mut network = NetworkBuilder::new()
        .dense(2, 2, WeightInit::Zeros)
        .build()
        .unwrap();
    let loss = LossFunction::cross_entropy();
    let mut sgd = Sgd::new(0.1, 0.0);

    let x = arr2(&[[1.0, 0.0]]);
    let y = arr2(&[[1.0, 0.0]]);
    let result = network.train_step(x.view(), y.view(), &loss, &mut sgd);
    assert!(matches!(result, Err(MinervaError::UnsupportedPairing { .. })));
}

#[test]
fn test_train_step_mse_routes_through_softmax_jacobian() {
    let mut network = NetworkBuilder::new()
        .dense(2, 2, WeightInit::Zeros)
        .softmax()
        .build()
        .unwrap();
    let loss = LossFunction::mse();
    let mut sgd = Sgd::new(0.1, 0.0);

    let x = arr2(&[[1.0, 0.0]]);
    let y = arr2(&[[1.0, 0.0]]);
    let (loss_value, predictions) = network
        .train_step(x.view(), y.view(), &loss, &mut sgd)
        .unwrap();

    assert!(loss_value.is_finite());
    assert_eq!(predictions.shape(), [1, 2]);
}

#[test]
fn test_train_step_decreases_loss() {
    // Hidden features are hand-placed so each class activates its own ReLU
    // unit; the zeroed output projection has to be learned from scratch.
    let hidden = DenseLayer::new(4, 3, WeightInit::Zeros).with_weights(arr2(&[
        [0.5, -0.5, 0.3],
        [0.5, -0.5, 0.2],
        [-0.5, 0.5, 0.2],
        [-0.5, 0.5, 0.3],
    ]));
    let output = DenseLayer::new(3, 2, WeightInit::Zeros);
    let mut network = NetworkBuilder::new()
        .layer(LayerWrapper::Dense(hidden))
        .relu()
        .layer(LayerWrapper::Dense(output))
        .softmax()
        .build()
        .unwrap();

    let x = arr2(&[
        [1.0, 0.9, 0.1, 0.0],
        [0.9, 1.0, 0.0, 0.1],
        [0.1, 0.0, 1.0, 0.9],
        [0.0, 0.1, 0.9, 1.0],
    ]);
    let y = arr2(&[
        [1.0, 0.0],
        [1.0, 0.0],
        [0.0, 1.0],
        [0.0, 1.0],
    ]);

    let loss = LossFunction::cross_entropy();
    let mut sgd = Sgd::new(0.1, 0.0);

    let (first_loss, _) = network.train_step(x.view(), y.view(), &loss, &mut sgd).unwrap();
    let mut last_loss = first_loss;
    for _ in 0..30 {
        let (value, _) = network.train_step(x.view(), y.view(), &loss, &mut sgd).unwrap();
        last_loss = value;
    }

    assert!(last_loss < first_loss);
}

#[test]
fn test_dense_gradient_matches_central_difference() {
    let weights = arr2(&[[0.1, -0.2], [0.3, 0.4], [-0.5, 0.6]]);
    let inputs = arr2(&[
        [0.5, -1.0, 1.5],
        [1.0, 2.0, -0.5],
        [0.2, 0.1, 0.3],
        [-1.2, 0.7, 0.9],
    ]);
    let targets = arr2(&[[1.0, 0.0], [0.0, 1.0], [0.5, 0.5], [0.2, 0.8]]);
    let batch_size = inputs.shape()[0] as f32;

    // Scalar objective whose exact gradient w.r.t. predictions is
    // 2·(pred − target)/batch_size, matching MeanSquaredError::gradient.
    let objective = |w: &Array2<f32>| -> f32 {
        let mut layer = DenseLayer::new(3, 2, WeightInit::Zeros).with_weights(w.clone());
        let predictions = layer.forward_batch(inputs.view());
        (&predictions - &targets).mapv(|d| d * d).sum() / batch_size
    };

    // Analytic gradient via backward
    let mut layer = DenseLayer::new(3, 2, WeightInit::Zeros).with_weights(weights.clone());
    let predictions = layer.forward_batch(inputs.view());
    let gradient = MeanSquaredError.gradient(targets.view(), predictions.view());
    layer.backward_batch(gradient.view());
    let analytic = layer.weight_gradients.unwrap();

    // Central difference over every weight
    let h = 1e-2;
    for i in 0..3 {
        for j in 0..2 {
            let mut plus = weights.clone();
            plus[[i, j]] += h;
            let mut minus = weights.clone();
            minus[[i, j]] -= h;
            let numerical = (objective(&plus) - objective(&minus)) / (2.0 * h);

            let a = analytic[[i, j]];
            let relative = (a - numerical).abs() / a.abs().max(numerical.abs()).max(1e-8);
            assert!(
                relative < 1e-3,
                "weight ({}, {}): analytic {} vs numerical {}",
                i,
                j,
                a,
                numerical
            );
        }
    }
}
