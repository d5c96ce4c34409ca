use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::activations::Activation;

use super::traits::Layer;

/// An elementwise activation layer (ReLU or Sigmoid).
///
/// No parameters; only the input and output of the most recent forward call
/// are cached, the input for the derivative in backward, the output for
/// read-only introspection.
#[derive(Serialize, Deserialize, Clone)]
pub struct ActivationLayer {
    pub activation: Activation,
    inputs: Option<Array2<f32>>,
    outputs: Option<Array2<f32>>,
}

impl ActivationLayer {
    pub fn new(activation: Activation) -> Self {
        ActivationLayer {
            activation,
            inputs: None,
            outputs: None,
        }
    }

    pub fn relu() -> Self {
        Self::new(Activation::Relu)
    }

    pub fn sigmoid() -> Self {
        Self::new(Activation::Sigmoid)
    }
}

impl Layer for ActivationLayer {
    fn forward_batch(&mut self, inputs: ArrayView2<f32>) -> Array2<f32> {
        self.inputs = Some(inputs.to_owned());
        let mut outputs = inputs.to_owned();
        self.activation.apply_batch(&mut outputs);
        self.outputs = Some(outputs.clone());
        outputs
    }

    fn backward_batch(&mut self, output_gradients: ArrayView2<f32>) -> Array2<f32> {
        let inputs = self
            .inputs
            .as_ref()
            .expect("No inputs stored. forward_batch() must be called before backward_batch()");
        // dL/dX = dL/dY ⊙ f'(X)
        output_gradients.to_owned() * &self.activation.derivative_batch(inputs.view())
    }

    fn cached_output(&self) -> Option<&Array2<f32>> {
        self.outputs.as_ref()
    }
}
