use ndarray::{Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::activations::softmax;

use super::traits::Layer;

/// A row-normalizing softmax layer.
///
/// Backward applies the full per-sample Jacobian `diag(s) − s·sᵀ` to each
/// gradient row. When the loss is the fused softmax/cross-entropy head the
/// network bypasses this backward entirely; the Jacobian path exists for
/// every other loss placed after a softmax.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct SoftmaxLayer {
    inputs: Option<Array2<f32>>,
    outputs: Option<Array2<f32>>,
}

impl SoftmaxLayer {
    pub fn new() -> Self {
        SoftmaxLayer {
            inputs: None,
            outputs: None,
        }
    }
}

impl Layer for SoftmaxLayer {
    fn forward_batch(&mut self, inputs: ArrayView2<f32>) -> Array2<f32> {
        self.inputs = Some(inputs.to_owned());
        let outputs = softmax(inputs);
        self.outputs = Some(outputs.clone());
        outputs
    }

    fn backward_batch(&mut self, output_gradients: ArrayView2<f32>) -> Array2<f32> {
        let outputs = self
            .outputs
            .as_ref()
            .expect("No outputs stored. forward_batch() must be called before backward_batch()");

        // Per row: (diag(s) − s·sᵀ) · g = s ⊙ (g − (s · g))
        let mut input_gradients = Array2::zeros(output_gradients.raw_dim());
        for ((s_row, g_row), mut out_row) in outputs
            .axis_iter(Axis(0))
            .zip(output_gradients.axis_iter(Axis(0)))
            .zip(input_gradients.axis_iter_mut(Axis(0)))
        {
            let projected = s_row.dot(&g_row);
            for (out, (&s, &g)) in out_row.iter_mut().zip(s_row.iter().zip(g_row.iter())) {
                *out = s * (g - projected);
            }
        }
        input_gradients
    }

    fn cached_output(&self) -> Option<&Array2<f32>> {
        self.outputs.as_ref()
    }
}
