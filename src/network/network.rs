use rand::Rng;
use tracing::debug;

use crate::activation::sigmoid::sigmoid;
use crate::error::{NnError, Result};
use crate::math::init::{entropy_rng, initialize_weights, seeded_rng};
use crate::math::matrix::Matrix;
use crate::network::config::NetworkConfig;

/// Three-layer feedforward network without bias terms.
///
/// `hidden_weights` is `hidden_size x input_size` and `output_weights` is
/// `output_size x hidden_size`. Only a training step replaces the weights,
/// and it replaces both together.
#[derive(Debug, Clone)]
pub struct Network {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    hidden_weights: Matrix,
    output_weights: Matrix,
    learning_rate: f64,
}

/// Activations retained from one forward pass, as column vectors.
#[derive(Debug, Clone)]
pub(crate) struct Activations {
    pub input: Matrix,
    pub hidden: Matrix,
    pub output: Matrix,
}

impl Network {
    /// Builds a network with weights drawn from an entropy-seeded generator.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize, learning_rate: f64) -> Result<Network> {
        Network::with_rng(input_size, hidden_size, output_size, learning_rate, &mut entropy_rng())
    }

    /// Builds a network drawing its initial weights from `rng`.
    pub fn with_rng<R>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Network>
    where
        R: Rng + ?Sized,
    {
        NetworkConfig::new(input_size, hidden_size, output_size, learning_rate).validate()?;

        let hidden_weights = initialize_weights(hidden_size, input_size, input_size, rng)?;
        let output_weights = initialize_weights(output_size, hidden_size, hidden_size, rng)?;

        debug!(input_size, hidden_size, output_size, learning_rate, "initialized network");

        Ok(Network {
            input_size,
            hidden_size,
            output_size,
            hidden_weights,
            output_weights,
            learning_rate,
        })
    }

    /// Builds a network from a config, seeding the generator when the config carries a seed.
    pub fn from_config(config: &NetworkConfig) -> Result<Network> {
        let NetworkConfig { input_size, hidden_size, output_size, learning_rate, seed } = *config;
        match seed {
            Some(seed) => Network::with_rng(input_size, hidden_size, output_size, learning_rate, &mut seeded_rng(seed)),
            None => Network::new(input_size, hidden_size, output_size, learning_rate),
        }
    }

    /// Builds a network from explicit weight matrices. Layer sizes are taken
    /// from the matrix shapes, which must chain: `output_weights.cols == hidden_weights.rows`.
    pub fn from_weights(hidden_weights: Matrix, output_weights: Matrix, learning_rate: f64) -> Result<Network> {
        if output_weights.cols() != hidden_weights.rows() {
            return Err(NnError::mismatch("from_weights", output_weights.shape(), hidden_weights.shape()));
        }

        let (hidden_size, input_size) = hidden_weights.shape();
        let output_size = output_weights.rows();
        NetworkConfig::new(input_size, hidden_size, output_size, learning_rate).validate()?;

        Ok(Network {
            input_size,
            hidden_size,
            output_size,
            hidden_weights,
            output_weights,
            learning_rate,
        })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Input → hidden weights, `hidden_size x input_size`.
    pub fn hidden_weights(&self) -> &Matrix {
        &self.hidden_weights
    }

    /// Hidden → output weights, `output_size x hidden_size`.
    pub fn output_weights(&self) -> &Matrix {
        &self.output_weights
    }

    /// Forward pass: σ(W_out · σ(W_hid · x)). Does not touch the weights.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        Ok(self.feed(input)?.output.to_vec())
    }

    /// Forward pass keeping every intermediate activation for backprop.
    pub(crate) fn feed(&self, input: &[f64]) -> Result<Activations> {
        let input = Matrix::column(input);

        let hidden = self.hidden_weights.dot(&input)?.map(sigmoid);
        let output = self.output_weights.dot(&hidden)?.map(sigmoid);

        Ok(Activations { input, hidden, output })
    }

    /// Replaces both weight matrices at once. Callers compute both from the
    /// same pre-update snapshot.
    pub(crate) fn commit_weights(&mut self, hidden_weights: Matrix, output_weights: Matrix) {
        debug_assert_eq!(hidden_weights.shape(), self.hidden_weights.shape());
        debug_assert_eq!(output_weights.shape(), self.output_weights.shape());
        self.hidden_weights = hidden_weights;
        self.output_weights = output_weights;
    }
}
