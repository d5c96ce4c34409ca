//! Benchmark of the engine's hot paths:
//! - forward inference on an MNIST-sized classifier
//! - a full train step (forward, loss, backward, update)

use std::time::Instant;

use minerva::loss::LossFunction;
use minerva::network::Network;
use minerva::optimizer::Sgd;
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

const BATCH_SIZE: usize = 64;
const ITERATIONS: usize = 200;

fn main() {
    let widths = [784, 128, 64, 10];
    let mut network = Network::from_architecture(&widths).expect("valid architecture");

    let x_batch = Array2::<f32>::random((BATCH_SIZE, widths[0]), Uniform::new(0.0, 1.0));
    let mut y_batch = Array2::<f32>::zeros((BATCH_SIZE, widths[widths.len() - 1]));
    for (i, mut row) in y_batch.outer_iter_mut().enumerate() {
        row[i % 10] = 1.0;
    }

    // Warm up caches and allocator
    for _ in 0..10 {
        network.forward_batch(x_batch.view());
    }

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        network.forward_batch(x_batch.view());
    }
    let forward_elapsed = start.elapsed();
    println!(
        "forward_batch:   {:>8.3} ms/iter ({} iterations, batch {})",
        forward_elapsed.as_secs_f64() * 1000.0 / ITERATIONS as f64,
        ITERATIONS,
        BATCH_SIZE
    );

    let loss = LossFunction::cross_entropy();
    let mut sgd = Sgd::new(0.1, 0.9);

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        network
            .train_step(x_batch.view(), y_batch.view(), &loss, &mut sgd)
            .expect("train step");
    }
    let train_elapsed = start.elapsed();
    println!(
        "train_step:      {:>8.3} ms/iter ({} iterations, batch {})",
        train_elapsed.as_secs_f64() * 1000.0 / ITERATIONS as f64,
        ITERATIONS,
        BATCH_SIZE
    );
}
