use crate::error::{MinervaError, Result};
use crate::layers::{LayerWrapper, WeightInit};
use crate::network::Network;

/// Builder for constructing networks with a fluent API.
///
/// ```rust,no_run
/// use minerva::builders::NetworkBuilder;
/// use minerva::layers::WeightInit;
///
/// let network = NetworkBuilder::new()
///     .dense(784, 128, WeightInit::HeNormal)
///     .relu()
///     .dense(128, 10, WeightInit::XavierUniform)
///     .softmax()
///     .build()
///     .unwrap();
/// ```
pub struct NetworkBuilder {
    layers: Vec<LayerWrapper>,
}

impl NetworkBuilder {
    /// Create a new network builder
    pub fn new() -> Self {
        NetworkBuilder { layers: Vec::new() }
    }

    /// Add a dense layer with the given sizes and weight initialization
    pub fn dense(mut self, input_size: usize, output_size: usize, init: WeightInit) -> Self {
        self.layers.push(LayerWrapper::dense(input_size, output_size, init));
        self
    }

    /// Add a ReLU activation layer
    pub fn relu(mut self) -> Self {
        self.layers.push(LayerWrapper::relu());
        self
    }

    /// Add a sigmoid activation layer
    pub fn sigmoid(mut self) -> Self {
        self.layers.push(LayerWrapper::sigmoid());
        self
    }

    /// Add a softmax layer
    pub fn softmax(mut self) -> Self {
        self.layers.push(LayerWrapper::softmax());
        self
    }

    /// Add a custom layer
    pub fn layer(mut self, layer: LayerWrapper) -> Self {
        self.layers.push(layer);
        self
    }

    /// Build the network, validating that consecutive dense layers chain:
    /// each dense layer's input size must equal the previous dense layer's
    /// output size.
    pub fn build(self) -> Result<Network> {
        if self.layers.is_empty() {
            return Err(MinervaError::invalid_parameter(
                "layers",
                "network must have at least one layer",
            ));
        }

        let mut expected_width: Option<usize> = None;
        for layer in &self.layers {
            if let Some(dense) = layer.as_dense() {
                if let Some(width) = expected_width {
                    if dense.input_size() != width {
                        return Err(MinervaError::DimensionMismatch {
                            expected: format!("dense input size {}", width),
                            actual: format!("dense input size {}", dense.input_size()),
                        });
                    }
                }
                expected_width = Some(dense.output_size());
            }
        }

        Ok(Network::new(self.layers))
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
