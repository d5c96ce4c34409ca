use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Stores training metrics over a bounded window of recent steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingMetrics {
    /// Loss values over time
    pub losses: VecDeque<f32>,

    /// Training accuracy per step
    pub accuracies: VecDeque<f32>,

    /// Learning rate over time
    pub learning_rates: VecDeque<f32>,
}

impl TrainingMetrics {
    pub fn new(history_size: usize) -> Self {
        TrainingMetrics {
            losses: VecDeque::with_capacity(history_size),
            accuracies: VecDeque::with_capacity(history_size),
            learning_rates: VecDeque::with_capacity(history_size),
        }
    }
}

/// Tracks metrics during training for the orchestration layer to broadcast
pub struct MetricsTracker {
    metrics: TrainingMetrics,
    history_size: usize,
    total_steps: usize,
}

impl MetricsTracker {
    pub fn new(history_size: usize) -> Self {
        MetricsTracker {
            metrics: TrainingMetrics::new(history_size),
            history_size,
            total_steps: 0,
        }
    }

    /// Record the results of one training step
    pub fn record_step(&mut self, loss: f32, accuracy: f32, learning_rate: f32) {
        push_bounded(&mut self.metrics.losses, loss, self.history_size);
        push_bounded(&mut self.metrics.accuracies, accuracy, self.history_size);
        push_bounded(&mut self.metrics.learning_rates, learning_rate, self.history_size);
        self.total_steps += 1;
    }

    /// Mean loss over the retained window
    pub fn mean_loss(&self) -> Option<f32> {
        mean(&self.metrics.losses)
    }

    /// Mean accuracy over the retained window
    pub fn mean_accuracy(&self) -> Option<f32> {
        mean(&self.metrics.accuracies)
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn metrics(&self) -> &TrainingMetrics {
        &self.metrics
    }
}

fn push_bounded(values: &mut VecDeque<f32>, value: f32, capacity: usize) {
    if values.len() >= capacity {
        values.pop_front();
    }
    values.push_back(value);
}

fn mean(values: &VecDeque<f32>) -> Option<f32> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f32>() / values.len() as f32)
    }
}
