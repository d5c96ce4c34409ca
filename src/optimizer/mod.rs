use serde::{Deserialize, Serialize};

use crate::layers::LayerWrapper;

/// Trait for parameter-update algorithms.
///
/// An optimizer consumes the gradients left on trainable layers by the most
/// recent backward pass and mutates their parameters in place. Layers
/// without parameters are never visited.
pub trait Optimizer {
    fn update(&mut self, layers: &mut [LayerWrapper]);
}

/// Stochastic gradient descent with momentum.
///
/// Both fields may be adjusted externally between steps; the values are read
/// at call time. Velocity buffers live on the dense layers themselves and
/// persist across calls.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Sgd {
    pub learning_rate: f32,
    pub momentum: f32,
}

impl Sgd {
    pub fn new(learning_rate: f32, momentum: f32) -> Self {
        Sgd {
            learning_rate,
            momentum,
        }
    }
}

impl Default for Sgd {
    fn default() -> Self {
        Sgd::new(0.01, 0.0)
    }
}

impl Optimizer for Sgd {
    fn update(&mut self, layers: &mut [LayerWrapper]) {
        let lr = self.learning_rate;
        let momentum = self.momentum;

        for layer in layers.iter_mut().filter_map(LayerWrapper::dense_mut) {
            // v = momentum·v − lr·g, then parameter += v. Gradients are
            // taken: stale values can never be applied twice.
            if let Some(gradients) = layer.weight_gradients.take() {
                layer
                    .weight_velocity
                    .zip_mut_with(&gradients, |v, &g| *v = momentum * *v - lr * g);
                layer
                    .weights
                    .zip_mut_with(&layer.weight_velocity, |w, &v| *w += v);
            }

            if let Some(gradients) = layer.bias_gradients.take() {
                layer
                    .bias_velocity
                    .zip_mut_with(&gradients, |v, &g| *v = momentum * *v - lr * g);
                layer
                    .biases
                    .zip_mut_with(&layer.bias_velocity, |b, &v| *b += v);
            }
        }
    }
}
