use ndarray::{Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

/// Largest magnitude fed to `exp` in the sigmoid. Inputs are clamped to this
/// range first; values beyond it saturate to 0 or 1 anyway.
const SIGMOID_CLIP: f32 = 500.0;

/// An enumeration of the elementwise activation functions usable in a
/// network's activation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Activation {
    #[default]
    Relu,
    Sigmoid,
}

impl Activation {
    /// Apply the activation function to a batch of inputs in-place.
    pub fn apply_batch(&self, inputs: &mut Array2<f32>) {
        match self {
            Activation::Relu => {
                inputs.mapv_inplace(|v| v.max(0.0));
            }
            Activation::Sigmoid => {
                inputs.mapv_inplace(sigmoid_scalar);
            }
        }
    }

    /// Compute the derivative of the activation function for a batch of
    /// inputs. The derivative is evaluated at the raw (pre-activation)
    /// input values.
    pub fn derivative_batch(&self, inputs: ArrayView2<f32>) -> Array2<f32> {
        match self {
            // Subgradient at exactly 0 is defined as 0.
            Activation::Relu => inputs.mapv(|v| if v > 0.0 { 1.0 } else { 0.0 }),
            Activation::Sigmoid => inputs.mapv(|v| {
                let s = sigmoid_scalar(v);
                s * (1.0 - s)
            }),
        }
    }
}

fn sigmoid_scalar(v: f32) -> f32 {
    let v = v.clamp(-SIGMOID_CLIP, SIGMOID_CLIP);
    1.0 / (1.0 + (-v).exp())
}

/// Row-wise softmax over a batch of logits.
///
/// Each row has its maximum subtracted before exponentiation, so rows of any
/// finite magnitude normalize without overflow. Every output row is a valid
/// probability distribution: non-negative entries summing to 1.
pub fn softmax(inputs: ArrayView2<f32>) -> Array2<f32> {
    let mut outputs = inputs.to_owned();
    for mut row in outputs.axis_iter_mut(Axis(0)) {
        let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        row.mapv_inplace(|v| v / sum);
    }
    outputs
}
