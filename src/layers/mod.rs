pub mod activation;
pub mod dense;
pub mod initialization;
pub mod softmax;
pub mod traits;

pub use activation::ActivationLayer;
pub use dense::DenseLayer;
pub use initialization::WeightInit;
pub use softmax::SoftmaxLayer;
pub use traits::Layer as LayerTrait;

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::activations::Activation;

/// Closed set of layer variants a network is composed of.
///
/// Dispatch is an explicit match rather than trait objects so that the set
/// stays closed: the optimizer reaches trainable parameters through
/// [`LayerWrapper::dense_mut`] and every other variant is excluded by
/// construction.
#[derive(Serialize, Deserialize, Clone)]
pub enum LayerWrapper {
    Dense(DenseLayer),
    Activation(ActivationLayer),
    Softmax(SoftmaxLayer),
}

impl LayerWrapper {
    /// A dense layer with the given sizes and weight initialization.
    pub fn dense(input_size: usize, output_size: usize, init: WeightInit) -> Self {
        LayerWrapper::Dense(DenseLayer::new(input_size, output_size, init))
    }

    pub fn relu() -> Self {
        LayerWrapper::Activation(ActivationLayer::relu())
    }

    pub fn sigmoid() -> Self {
        LayerWrapper::Activation(ActivationLayer::sigmoid())
    }

    pub fn softmax() -> Self {
        LayerWrapper::Softmax(SoftmaxLayer::new())
    }

    /// The trainable-parameter capability: `Some` only for dense layers.
    pub fn dense_mut(&mut self) -> Option<&mut DenseLayer> {
        match self {
            LayerWrapper::Dense(layer) => Some(layer),
            _ => None,
        }
    }

    /// Read-only access to the dense variant, if this is one.
    pub fn as_dense(&self) -> Option<&DenseLayer> {
        match self {
            LayerWrapper::Dense(layer) => Some(layer),
            _ => None,
        }
    }

    pub fn is_softmax(&self) -> bool {
        matches!(self, LayerWrapper::Softmax(_))
    }

    /// Type tag used in error messages and the visualization snapshot.
    pub fn kind(&self) -> &'static str {
        match self {
            LayerWrapper::Dense(_) => "Dense",
            LayerWrapper::Activation(layer) => match layer.activation {
                Activation::Relu => "ReLU",
                Activation::Sigmoid => "Sigmoid",
            },
            LayerWrapper::Softmax(_) => "Softmax",
        }
    }
}

impl LayerTrait for LayerWrapper {
    fn forward_batch(&mut self, inputs: ArrayView2<f32>) -> Array2<f32> {
        match self {
            LayerWrapper::Dense(layer) => layer.forward_batch(inputs),
            LayerWrapper::Activation(layer) => layer.forward_batch(inputs),
            LayerWrapper::Softmax(layer) => layer.forward_batch(inputs),
        }
    }

    fn backward_batch(&mut self, output_gradients: ArrayView2<f32>) -> Array2<f32> {
        match self {
            LayerWrapper::Dense(layer) => layer.backward_batch(output_gradients),
            LayerWrapper::Activation(layer) => layer.backward_batch(output_gradients),
            LayerWrapper::Softmax(layer) => layer.backward_batch(output_gradients),
        }
    }

    fn cached_output(&self) -> Option<&Array2<f32>> {
        match self {
            LayerWrapper::Dense(layer) => layer.cached_output(),
            LayerWrapper::Activation(layer) => layer.cached_output(),
            LayerWrapper::Softmax(layer) => layer.cached_output(),
        }
    }
}
