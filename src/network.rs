use std::fs;
use std::io::{Read, Write};

use bincode::{deserialize, serialize};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{MinervaError, Result};
use crate::layers::{LayerTrait, LayerWrapper, WeightInit};
use crate::loss::{Loss, LossFunction};
use crate::optimizer::Optimizer;

/// A feed-forward network: an ordered, exclusively owned sequence of layers.
///
/// The composition is fixed at construction/append time. Forward threads a
/// batch through the layers in order; backward threads a gradient through
/// them in reverse. A single instance must not be driven from two threads at
/// once — the layers' cached activations and velocity buffers are mutated in
/// place without synchronization.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct Network {
    pub layers: Vec<LayerWrapper>,
}

impl Network {
    pub fn new(layers: Vec<LayerWrapper>) -> Self {
        Network { layers }
    }

    /// Append a layer. Not intended for use mid-training.
    pub fn add(&mut self, layer: LayerWrapper) {
        self.layers.push(layer);
    }

    /// Build a classifier from an ordered list of layer widths: the first
    /// entry is the input feature count, the last the class count. Hidden
    /// projections get He initialization and ReLU; the final projection gets
    /// Xavier initialization and softmax. The pairing is a convention of
    /// this constructor, not something the layers enforce.
    pub fn from_architecture(widths: &[usize]) -> Result<Self> {
        if widths.len() < 2 {
            return Err(MinervaError::invalid_parameter(
                "widths",
                "architecture needs at least an input and an output width",
            ));
        }

        let mut layers = Vec::new();
        let last = widths.len() - 2;
        for (i, window) in widths.windows(2).enumerate() {
            if i < last {
                layers.push(LayerWrapper::dense(window[0], window[1], WeightInit::HeNormal));
                layers.push(LayerWrapper::relu());
            } else {
                layers.push(LayerWrapper::dense(
                    window[0],
                    window[1],
                    WeightInit::XavierUniform,
                ));
                layers.push(LayerWrapper::softmax());
            }
        }

        Ok(Network { layers })
    }

    /// Perform a forward pass for a batch of inputs, one sample per row.
    pub fn forward_batch(&mut self, inputs: ArrayView2<f32>) -> Array2<f32> {
        let mut current = inputs.to_owned();
        for layer in &mut self.layers {
            current = layer.forward_batch(current.view());
        }
        current
    }

    /// Forward-only inference.
    pub fn predict(&mut self, inputs: ArrayView2<f32>) -> Array2<f32> {
        self.forward_batch(inputs)
    }

    /// Propagate a loss gradient through every layer in reverse order,
    /// returning the gradient reaching the network input.
    pub fn backward_batch(&mut self, output_gradients: ArrayView2<f32>) -> Array2<f32> {
        self.backward_through(output_gradients.to_owned(), self.layers.len())
    }

    fn backward_through(&mut self, gradient: Array2<f32>, end: usize) -> Array2<f32> {
        let mut current = gradient;
        for layer in self.layers[..end].iter_mut().rev() {
            current = layer.backward_batch(current.view());
        }
        current
    }

    /// One mini-batch training step: forward, scalar loss, loss gradient,
    /// backward, parameter update. Returns the loss and the predictions.
    ///
    /// With [`LossFunction::SoftmaxCrossEntropy`] the loss gradient is
    /// already the gradient with respect to the pre-softmax logits, so the
    /// final softmax layer's backward is skipped; any other final layer is
    /// rejected. [`LossFunction::MeanSquaredError`] routes through every
    /// layer's own backward.
    pub fn train_step<O: Optimizer>(
        &mut self,
        x_batch: ArrayView2<f32>,
        y_batch: ArrayView2<f32>,
        loss: &LossFunction,
        optimizer: &mut O,
    ) -> Result<(f32, Array2<f32>)> {
        let predictions = self.forward_batch(x_batch);
        let loss_value = loss.loss(y_batch, predictions.view());
        let gradient = loss.gradient(y_batch, predictions.view());

        match loss {
            LossFunction::SoftmaxCrossEntropy(_) => {
                if !self.layers.last().map(LayerWrapper::is_softmax).unwrap_or(false) {
                    return Err(MinervaError::UnsupportedPairing {
                        loss: loss.name().to_string(),
                        layer: self
                            .layers
                            .last()
                            .map(LayerWrapper::kind)
                            .unwrap_or("none")
                            .to_string(),
                    });
                }
                let end = self.layers.len() - 1;
                self.backward_through(gradient, end);
            }
            LossFunction::MeanSquaredError(_) => {
                self.backward_batch(gradient.view());
            }
        }

        optimizer.update(&mut self.layers);

        Ok((loss_value, predictions))
    }

    /// Save the network's state to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let serialized = serialize(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(&serialized)?;
        Ok(())
    }

    /// Load a network from a file.
    pub fn load(path: &str) -> Result<Self> {
        let mut file = fs::File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        let deserialized: Self = deserialize(&buffer)?;
        Ok(deserialized)
    }
}
