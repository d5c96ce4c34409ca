use ndarray::{Array1, Array2};
use ndarray_rand::rand_distr::{Normal, Uniform};
use ndarray_rand::RandomExt;

use crate::activations::Activation;

/// Weight initialization strategies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightInit {
    /// Xavier/Glorot uniform initialization
    XavierUniform,

    /// He/Kaiming normal initialization (for ReLU)
    HeNormal,

    /// Uniform distribution with custom range
    Uniform { min: f32, max: f32 },

    /// Normal distribution with custom mean and std
    Normal { mean: f32, std: f32 },

    /// All zeros
    Zeros,
}

impl WeightInit {
    /// Initialize weights for a layer
    pub fn initialize_weights(&self, shape: (usize, usize)) -> Array2<f32> {
        let (fan_in, fan_out) = shape;

        match self {
            WeightInit::XavierUniform => {
                let limit = (6.0 / (fan_in + fan_out) as f32).sqrt();
                Array2::random(shape, Uniform::new(-limit, limit))
            }

            WeightInit::HeNormal => {
                let std = (2.0 / fan_in as f32).sqrt();
                Array2::random(shape, Normal::new(0.0, std).unwrap())
            }

            WeightInit::Uniform { min, max } => {
                Array2::random(shape, Uniform::new(*min, *max))
            }

            WeightInit::Normal { mean, std } => {
                Array2::random(shape, Normal::new(*mean, *std).unwrap())
            }

            WeightInit::Zeros => Array2::zeros(shape),
        }
    }

    /// Initialize biases for a layer
    pub fn initialize_biases(&self, size: usize) -> Array1<f32> {
        match self {
            WeightInit::Zeros | WeightInit::XavierUniform | WeightInit::HeNormal => {
                Array1::zeros(size)
            }

            WeightInit::Uniform { min, max } => {
                Array1::random(size, Uniform::new(*min, *max))
            }

            WeightInit::Normal { mean, std } => {
                Array1::random(size, Normal::new(*mean, *std).unwrap())
            }
        }
    }

    /// Get the recommended initialization for the activation that follows
    /// the layer.
    pub fn for_activation(activation: &Activation) -> Self {
        match activation {
            Activation::Relu => WeightInit::HeNormal,
            Activation::Sigmoid => WeightInit::XavierUniform,
        }
    }
}
