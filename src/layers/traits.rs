use ndarray::{Array2, ArrayView2};

/// Trait defining the interface for neural network layers.
///
/// Forward caches whatever the layer needs for its backward pass; backward
/// must be invoked with the gradient corresponding to the most recent
/// forward call. Calling out of that sequence is a programmer error and the
/// layers do not re-check it.
pub trait Layer: Send + Sync {
    /// Perform forward propagation for a batch of inputs, one sample per row.
    fn forward_batch(&mut self, inputs: ArrayView2<f32>) -> Array2<f32>;

    /// Perform backward propagation for a batch of output gradients,
    /// returning the gradient with respect to the layer's input.
    fn backward_batch(&mut self, output_gradients: ArrayView2<f32>) -> Array2<f32>;

    /// The output of the most recent forward call, if one has happened.
    /// Read-only introspection for visualization; never mutated externally.
    fn cached_output(&self) -> Option<&Array2<f32>>;
}
