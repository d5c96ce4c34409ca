use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::activations::Activation;
use crate::error::{MinervaError, Result};
use crate::layers::{DenseLayer, LayerTrait, LayerWrapper, WeightInit};
use crate::network::Network;

/// One layer's serialized state, tagged by layer type.
///
/// Dense layers carry everything a client-side renderer needs to run
/// forward-only inference; non-parametric layers are just their tag. Field
/// names match the JSON the browser visualizer consumes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum LayerSnapshot {
    Dense {
        weights: Vec<Vec<f32>>,
        bias: Vec<f32>,
        #[serde(rename = "inputSize")]
        input_size: usize,
        #[serde(rename = "outputSize")]
        output_size: usize,
    },
    #[serde(rename = "ReLU")]
    Relu,
    Sigmoid,
    Softmax,
}

/// A forward-only capture of a network's layers, in network order.
///
/// Gradients and momentum state are deliberately absent: a snapshot holds
/// exactly what reconstructing inference elsewhere requires.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NetworkSnapshot {
    pub layers: Vec<LayerSnapshot>,
}

impl NetworkSnapshot {
    /// Capture the current parameters of every layer, in order.
    pub fn capture(network: &Network) -> Self {
        let layers = network
            .layers
            .iter()
            .map(|layer| match layer {
                LayerWrapper::Dense(dense) => LayerSnapshot::Dense {
                    weights: dense
                        .weights
                        .outer_iter()
                        .map(|row| row.to_vec())
                        .collect(),
                    bias: dense.biases.to_vec(),
                    input_size: dense.input_size(),
                    output_size: dense.output_size(),
                },
                LayerWrapper::Activation(act) => match act.activation {
                    Activation::Relu => LayerSnapshot::Relu,
                    Activation::Sigmoid => LayerSnapshot::Sigmoid,
                },
                LayerWrapper::Softmax(_) => LayerSnapshot::Softmax,
            })
            .collect();

        NetworkSnapshot { layers }
    }

    /// Serialize to the JSON wire format consumed by the visualizer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a snapshot back from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuild a forward-only network from the captured parameters.
    ///
    /// The result reproduces the original network's forward output exactly;
    /// velocity buffers start at zero and no gradients are restored.
    pub fn restore(&self) -> Result<Network> {
        let mut layers = Vec::with_capacity(self.layers.len());
        for layer in &self.layers {
            match layer {
                LayerSnapshot::Dense {
                    weights,
                    bias,
                    input_size,
                    output_size,
                } => {
                    if weights.len() != *input_size
                        || weights.iter().any(|row| row.len() != *output_size)
                        || bias.len() != *output_size
                    {
                        return Err(MinervaError::dimension_mismatch(
                            format!("{}x{} weights with {} biases", input_size, output_size, output_size),
                            format!(
                                "{} weight rows with {} biases",
                                weights.len(),
                                bias.len()
                            ),
                        ));
                    }

                    let flat: Vec<f32> = weights.iter().flatten().copied().collect();
                    let weights = Array2::from_shape_vec((*input_size, *output_size), flat)
                        .map_err(|e| MinervaError::SerializationError(e.to_string()))?;
                    let biases = Array1::from_vec(bias.clone());
                    let dense = DenseLayer::new(*input_size, *output_size, WeightInit::Zeros)
                        .with_weights(weights)
                        .with_biases(biases);
                    layers.push(LayerWrapper::Dense(dense));
                }
                LayerSnapshot::Relu => layers.push(LayerWrapper::relu()),
                LayerSnapshot::Sigmoid => layers.push(LayerWrapper::sigmoid()),
                LayerSnapshot::Softmax => layers.push(LayerWrapper::softmax()),
            }
        }

        Ok(Network::new(layers))
    }
}

/// Mean activation per unit for each layer's most recent output, truncated
/// to `limit` units per layer. Layers that have not run forward yet yield an
/// empty vector.
pub fn layer_activations(network: &Network, limit: usize) -> Vec<Vec<f32>> {
    network
        .layers
        .iter()
        .map(|layer| match layer.cached_output() {
            Some(outputs) => outputs
                .mean_axis(Axis(0))
                .map(|means| means.iter().copied().take(limit).collect())
                .unwrap_or_default(),
            None => Vec::new(),
        })
        .collect()
}
