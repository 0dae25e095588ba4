pub mod error;
pub mod math;
pub mod activation;
pub mod network;
pub mod train;

// Convenience re-exports
pub use error::{NnError, Result};
pub use math::matrix::Matrix;
pub use math::init::{initialize_weights, entropy_rng, seeded_rng};
pub use activation::sigmoid::{sigmoid, sigmoid_derivative};
pub use network::{Network, NetworkConfig, WeightReport, MatrixDisplay};
pub use train::backprop::train;

/// Builds a network with entropy-seeded weights.
///
/// Equivalent to [`Network::new`].
pub fn initialize_network(
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    learning_rate: f64,
) -> Result<Network> {
    Network::new(input_size, hidden_size, output_size, learning_rate)
}

/// Runs a forward pass. Equivalent to [`Network::forward`].
pub fn forward(network: &Network, input: &[f64]) -> Result<Vec<f64>> {
    network.forward(input)
}
