use ndarray::{Array1, Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use super::initialization::WeightInit;
use super::traits::Layer;

/// A fully connected (dense) layer: `y = x · W + b`.
///
/// The layer owns its parameters, the momentum velocity buffers the optimizer
/// accumulates into, and the gradient slots filled by the most recent
/// backward pass. Velocity buffers always have the same shape as their
/// parameter; gradient slots are set together by `backward_batch` and taken
/// (consumed once) by the optimizer.
#[derive(Serialize, Deserialize, Clone)]
pub struct DenseLayer {
    pub weights: Array2<f32>,
    pub biases: Array1<f32>,
    pub weight_gradients: Option<Array2<f32>>,
    pub bias_gradients: Option<Array1<f32>>,
    pub weight_velocity: Array2<f32>,
    pub bias_velocity: Array1<f32>,
    inputs: Option<Array2<f32>>,
    outputs: Option<Array2<f32>>,
}

impl DenseLayer {
    /// Create a new dense layer with the given input size, output size, and
    /// weight initialization. Biases start at zero.
    pub fn new(input_size: usize, output_size: usize, init: WeightInit) -> Self {
        let weights = init.initialize_weights((input_size, output_size));
        let biases = init.initialize_biases(output_size);
        DenseLayer {
            weight_velocity: Array2::zeros(weights.dim()),
            bias_velocity: Array1::zeros(biases.dim()),
            weights,
            biases,
            weight_gradients: None,
            bias_gradients: None,
            inputs: None,
            outputs: None,
        }
    }

    pub fn with_weights(mut self, weights: Array2<f32>) -> Self {
        assert_eq!(weights.dim(), self.weights.dim());
        self.weights = weights;
        self
    }

    pub fn with_biases(mut self, biases: Array1<f32>) -> Self {
        assert_eq!(biases.dim(), self.biases.dim());
        self.biases = biases;
        self
    }

    pub fn input_size(&self) -> usize {
        self.weights.shape()[0]
    }

    pub fn output_size(&self) -> usize {
        self.weights.shape()[1]
    }
}

impl Layer for DenseLayer {
    fn forward_batch(&mut self, inputs: ArrayView2<f32>) -> Array2<f32> {
        assert_eq!(
            inputs.shape()[1],
            self.input_size(),
            "batch feature width {} does not match layer input size {}",
            inputs.shape()[1],
            self.input_size(),
        );
        self.inputs = Some(inputs.to_owned());
        let outputs = inputs.dot(&self.weights) + &self.biases.view().insert_axis(Axis(0));
        self.outputs = Some(outputs.clone());
        outputs
    }

    fn backward_batch(&mut self, output_gradients: ArrayView2<f32>) -> Array2<f32> {
        let inputs = self
            .inputs
            .as_ref()
            .expect("No inputs stored. forward_batch() must be called before backward_batch()");
        assert_eq!(
            output_gradients.shape()[0],
            inputs.shape()[0],
            "gradient batch size {} does not match the most recent forward batch size {}",
            output_gradients.shape()[0],
            inputs.shape()[0],
        );

        // dL/dW = Xᵀ · dL/dY, dL/db = column sums of dL/dY, dL/dX = dL/dY · Wᵀ
        self.weight_gradients = Some(inputs.t().dot(&output_gradients));
        self.bias_gradients = Some(output_gradients.sum_axis(Axis(0)));
        output_gradients.dot(&self.weights.t())
    }

    fn cached_output(&self) -> Option<&Array2<f32>> {
        self.outputs.as_ref()
    }
}
