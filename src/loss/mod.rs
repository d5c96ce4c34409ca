pub mod functions;

pub use functions::{Loss, LossFunction, MeanSquaredError, SoftmaxCrossEntropy};
