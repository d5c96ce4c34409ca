pub mod tracker;

pub use tracker::{MetricsTracker, TrainingMetrics};

use ndarray::{ArrayView2, Axis};

/// Fraction of rows where the predicted class (argmax of the prediction row)
/// matches the labeled class (argmax of the one-hot row).
pub fn accuracy(y_true: ArrayView2<f32>, y_pred: ArrayView2<f32>) -> f32 {
    let batch_size = y_true.shape()[0];
    if batch_size == 0 {
        return 0.0;
    }

    let correct = y_true
        .axis_iter(Axis(0))
        .zip(y_pred.axis_iter(Axis(0)))
        .filter(|(true_row, pred_row)| argmax(true_row.iter()) == argmax(pred_row.iter()))
        .count();

    correct as f32 / batch_size as f32
}

fn argmax<'a, I: Iterator<Item = &'a f32>>(values: I) -> usize {
    let mut best = 0;
    let mut best_value = f32::NEG_INFINITY;
    for (i, &v) in values.enumerate() {
        if v > best_value {
            best_value = v;
            best = i;
        }
    }
    best
}
