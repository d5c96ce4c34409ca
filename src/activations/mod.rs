//! # Activation Functions Module
//!
//! Pure numeric transforms applied between dense layers. Elementwise
//! activations (ReLU, Sigmoid) are modeled by the [`Activation`] enum with
//! in-place application and derivative computation; the row-normalizing
//! softmax lives in [`functions::softmax`] because it is consumed by its own
//! layer type rather than a generic elementwise one.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use minerva::activations::Activation;
//! use ndarray::array;
//!
//! let relu = Activation::Relu;
//! let mut data = array![[1.0, -0.5, 0.0, 2.0]];
//! relu.apply_batch(&mut data);
//! ```
//!
//! ## Choosing an Activation Function
//!
//! - **Hidden layers**: ReLU (pair with He initialization)
//! - **Output layer**: softmax for multi-class probabilities (pair with
//!   Xavier initialization on the final projection)
//! - Sigmoid is kept for shallow nets and binary outputs

pub mod functions;

pub use functions::{softmax, Activation};
