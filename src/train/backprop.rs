use tracing::trace;

use crate::activation::sigmoid::sigmoid_derivative;
use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// One online gradient step on a single `(input, target)` pair.
///
/// Both new weight matrices are computed from the pre-update weights and
/// committed together, so the hidden update never sees the new output weights.
pub fn train(network: &mut Network, input: &[f64], target: &[f64]) -> Result<()> {
    let acts = network.feed(input)?;
    let lr = network.learning_rate();

    // Error in output space, then back-projected through the current output weights.
    let output_error = Matrix::column(target).sub(&acts.output)?;
    let hidden_error = network.output_weights().transpose().dot(&output_error)?;

    let output_delta = output_error.hadamard(&sigmoid_derivative(&acts.output)?)?;
    let output_step = output_delta.dot(&acts.hidden.transpose())?.scale(lr);

    let hidden_delta = hidden_error.hadamard(&sigmoid_derivative(&acts.hidden)?)?;
    let hidden_step = hidden_delta.dot(&acts.input.transpose())?.scale(lr);

    let new_output = network.output_weights().add(&output_step)?;
    let new_hidden = network.hidden_weights().add(&hidden_step)?;

    trace!(error = l2_norm(&output_error), "train step");

    network.commit_weights(new_hidden, new_output);
    Ok(())
}

fn l2_norm(m: &Matrix) -> f64 {
    m.iter().map(|x| x * x).sum::<f64>().sqrt()
}

impl Network {
    /// See [`train`].
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<()> {
        train(self, input, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NnError;
    use crate::math::init::seeded_rng;

    fn m(data: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_data(data).unwrap()
    }

    #[test]
    fn single_step_matches_hand_computation() {
        // Zero weights: every activation is 0.5 and σ' = 0.25.
        let mut net = Network::from_weights(Matrix::zeros(2, 2), Matrix::zeros(1, 2), 1.0).unwrap();

        net.train(&[1.0, 2.0], &[1.0]).unwrap();

        // output: err 0.5 * 0.25 = 0.125, times hidden 0.5 each.
        assert_eq!(net.output_weights(), &m(vec![vec![0.0625, 0.0625]]));
        // hidden error uses the old (zero) output weights, so no hidden change.
        assert_eq!(net.hidden_weights(), &Matrix::zeros(2, 2));
    }

    #[test]
    fn hidden_step_uses_pre_update_output_weights() {
        let hidden = m(vec![vec![0.0, 0.0]]);
        let output = m(vec![vec![2.0]]);
        let mut net = Network::from_weights(hidden, output, 0.5).unwrap();

        net.train(&[1.0, -1.0], &[0.0]).unwrap();

        // a_h = 0.5, a_o = σ(1.0); e_o = -a_o; e_h = 2.0 * e_o.
        let a_o = crate::activation::sigmoid(1.0);
        let e_o = -a_o;
        let e_h = 2.0 * e_o;
        let dh = 0.5 * e_h * 0.25;

        let got = net.hidden_weights().to_vec();
        assert!((got[0] - dh).abs() < 1e-12);
        assert!((got[1] + dh).abs() < 1e-12);

        let d_o = 0.5 * e_o * a_o * (1.0 - a_o) * 0.5;
        assert!((net.output_weights().to_vec()[0] - (2.0 + d_o)).abs() < 1e-12);
    }

    #[test]
    fn wrong_target_length_leaves_weights_unchanged() {
        let mut net = Network::with_rng(2, 3, 2, 0.1, &mut seeded_rng(4)).unwrap();
        let before = net.clone();

        let err = net.train(&[0.1, 0.2], &[1.0]).unwrap_err();

        assert!(matches!(err, NnError::DimensionMismatch { op: "sub", .. }));
        assert_eq!(net.hidden_weights(), before.hidden_weights());
        assert_eq!(net.output_weights(), before.output_weights());
    }

    #[test]
    fn repeated_steps_reduce_error() {
        let mut net = Network::with_rng(3, 4, 1, 0.5, &mut seeded_rng(21)).unwrap();
        let input = [0.3, -0.6, 0.9];
        let target = [0.1];

        let error = |net: &Network| {
            let out = net.forward(&input).unwrap();
            l2_norm(&Matrix::column(&target).sub(&Matrix::column(&out)).unwrap())
        };

        let mut last = error(&net);
        for _ in 0..10 {
            net.train(&input, &target).unwrap();
            let now = error(&net);
            assert!(now < last, "error went from {last} to {now}");
            last = now;
        }
    }
}
