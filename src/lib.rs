//! # Minerva - Feed-Forward Neural Network Engine
//!
//! Minerva is a small, from-scratch neural network engine built for training
//! digit classifiers and streaming their internal state to a visualizer. It
//! provides dense layers, elementwise activations, a softmax head, fused
//! softmax/cross-entropy and mean-squared-error losses, and SGD with
//! momentum — a fixed composition of sequential layers trained with
//! mini-batch gradient descent.
//!
//! ## Key Properties
//!
//! - **Explicit backpropagation**: every layer implements forward/backward
//!   with hand-derived gradients; no autodiff, no computation graphs
//! - **Closed layer set**: a tagged enum of layer variants keeps dispatch
//!   flat and lets the optimizer address trainable parameters directly
//! - **Inspectable**: each layer's most recent output is readable after a
//!   forward pass, and a network's parameters can be captured as a JSON
//!   snapshot sufficient for forward-only inference elsewhere
//! - **Synchronous**: every operation runs to completion; serializing access
//!   to a network across threads is the caller's concern
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use minerva::network::Network;
//! use minerva::loss::LossFunction;
//! use minerva::optimizer::Sgd;
//! use ndarray::Array2;
//!
//! // 784 input features, one hidden layer, 10 classes
//! let mut network = Network::from_architecture(&[784, 128, 10]).unwrap();
//! let loss = LossFunction::cross_entropy();
//! let mut optimizer = Sgd::new(0.1, 0.9);
//!
//! let x_batch = Array2::<f32>::zeros((64, 784));
//! let y_batch = Array2::<f32>::zeros((64, 10));
//! let (loss_value, predictions) = network
//!     .train_step(x_batch.view(), y_batch.view(), &loss, &mut optimizer)
//!     .unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Elementwise activation functions and row-wise softmax
//! - [`builders`] - Builder pattern for network construction
//! - [`error`] - Error types and result handling
//! - [`export`] - Parameter snapshots for client-side rendering
//! - [`layers`] - Layer variants (Dense, ReLU/Sigmoid, Softmax)
//! - [`loss`] - Loss functions and the fused classification head
//! - [`metrics`] - Accuracy and training-metric tracking
//! - [`network`] - Network composition and the train-step protocol
//! - [`optimizer`] - SGD with momentum

pub mod activations;
pub mod builders;
pub mod error;
pub mod export;
pub mod layers;
pub mod loss;
pub mod metrics;
pub mod network;
pub mod optimizer;

#[cfg(test)]
mod tests;
