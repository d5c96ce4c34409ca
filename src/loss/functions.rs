use ndarray::{Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

/// Predictions are clamped into [EPSILON, 1 − EPSILON] before taking logs.
const EPSILON: f32 = 1e-7;

/// Trait defining the interface for loss functions.
///
/// Both methods take one-hot targets and predictions as (batch, classes)
/// matrices; `gradient` returns the gradient of the scalar loss with respect
/// to the predictions (or, for a fused head, to the pre-softmax logits).
pub trait Loss: Send + Sync {
    /// Compute the scalar loss for a batch of predictions and targets.
    fn loss(&self, y_true: ArrayView2<f32>, y_pred: ArrayView2<f32>) -> f32;

    /// Compute the gradient of the loss for a batch.
    fn gradient(&self, y_true: ArrayView2<f32>, y_pred: ArrayView2<f32>) -> Array2<f32>;
}

/// Cross-entropy over softmax probabilities, fused with the softmax backward.
///
/// The gradient is `(y_pred − y_true) / batch_size`, the combined derivative
/// of cross-entropy *through* the final softmax. It is only meaningful when
/// the network's last layer is a softmax whose own backward is skipped; the
/// network enforces that pairing and rejects any other final layer. The
/// coupling is carried in this type's name rather than detected by
/// inspecting layer types downstream.
#[derive(Serialize, Deserialize, Clone, Copy, Default)]
pub struct SoftmaxCrossEntropy;

impl Loss for SoftmaxCrossEntropy {
    fn loss(&self, y_true: ArrayView2<f32>, y_pred: ArrayView2<f32>) -> f32 {
        let batch_size = y_pred.shape()[0] as f32;
        let mut total = 0.0;
        for (pred_row, true_row) in y_pred.axis_iter(Axis(0)).zip(y_true.axis_iter(Axis(0))) {
            total -= true_row
                .iter()
                .zip(pred_row.iter())
                .map(|(&t, &p)| t * p.clamp(EPSILON, 1.0 - EPSILON).ln())
                .sum::<f32>();
        }
        total / batch_size
    }

    fn gradient(&self, y_true: ArrayView2<f32>, y_pred: ArrayView2<f32>) -> Array2<f32> {
        let batch_size = y_true.shape()[0] as f32;
        (&y_pred - &y_true) / batch_size
    }
}

/// Mean squared error, usable after any final layer.
#[derive(Serialize, Deserialize, Clone, Copy, Default)]
pub struct MeanSquaredError;

impl Loss for MeanSquaredError {
    fn loss(&self, y_true: ArrayView2<f32>, y_pred: ArrayView2<f32>) -> f32 {
        let diff = &y_pred - &y_true;
        (&diff * &diff).mean().unwrap_or(0.0)
    }

    fn gradient(&self, y_true: ArrayView2<f32>, y_pred: ArrayView2<f32>) -> Array2<f32> {
        let batch_size = y_true.shape()[0] as f32;
        (&y_pred - &y_true) * (2.0 / batch_size)
    }
}

/// The loss functions a network can train against.
///
/// `SoftmaxCrossEntropy` is routed past the final softmax layer by
/// `Network::train_step`; `MeanSquaredError` backpropagates through every
/// layer's own backward, including a softmax's full Jacobian.
#[derive(Serialize, Deserialize, Clone, Copy)]
pub enum LossFunction {
    SoftmaxCrossEntropy(SoftmaxCrossEntropy),
    MeanSquaredError(MeanSquaredError),
}

impl LossFunction {
    pub fn cross_entropy() -> Self {
        LossFunction::SoftmaxCrossEntropy(SoftmaxCrossEntropy)
    }

    pub fn mse() -> Self {
        LossFunction::MeanSquaredError(MeanSquaredError)
    }

    /// Name used in pairing error messages.
    pub fn name(&self) -> &'static str {
        match self {
            LossFunction::SoftmaxCrossEntropy(_) => "SoftmaxCrossEntropy",
            LossFunction::MeanSquaredError(_) => "MeanSquaredError",
        }
    }
}

impl Loss for LossFunction {
    fn loss(&self, y_true: ArrayView2<f32>, y_pred: ArrayView2<f32>) -> f32 {
        match self {
            LossFunction::SoftmaxCrossEntropy(loss) => loss.loss(y_true, y_pred),
            LossFunction::MeanSquaredError(loss) => loss.loss(y_true, y_pred),
        }
    }

    fn gradient(&self, y_true: ArrayView2<f32>, y_pred: ArrayView2<f32>) -> Array2<f32> {
        match self {
            LossFunction::SoftmaxCrossEntropy(loss) => loss.gradient(y_true, y_pred),
            LossFunction::MeanSquaredError(loss) => loss.gradient(y_true, y_pred),
        }
    }
}
