use minnet::{
    forward, initialize_network, initialize_weights, seeded_rng, sigmoid, Matrix, Network,
    NnError,
};
use proptest::prelude::*;

fn error_norm(net: &Network, input: &[f64], target: &[f64]) -> f64 {
    let out = net.forward(input).unwrap();
    target.iter().zip(&out).map(|(t, o)| (t - o).powi(2)).sum::<f64>().sqrt()
}

#[test]
fn fresh_network_gives_bounded_single_output() {
    let net = initialize_network(2, 3, 1, 0.1).unwrap();
    let out = forward(&net, &[0.0, 0.0]).unwrap();

    assert_eq!(out.len(), 1);
    assert!(out[0] > 0.0 && out[0] < 1.0);
}

#[test]
fn zero_weights_output_half_everywhere() {
    let net = Network::from_weights(Matrix::zeros(4, 3), Matrix::zeros(5, 4), 0.1).unwrap();

    for input in [[0.0, 0.0, 0.0], [1.0, -2.0, 3.0], [100.0, 50.0, -75.0]] {
        assert_eq!(net.forward(&input).unwrap(), vec![0.5; 5]);
    }
}

#[test]
fn dot_with_disagreeing_inner_dimensions_fails() {
    let err = Matrix::zeros(2, 3).dot(&Matrix::zeros(4, 2)).unwrap_err();
    assert!(matches!(err, NnError::DimensionMismatch { .. }));
}

#[test]
fn zero_input_size_is_invalid() {
    let err = initialize_network(0, 3, 1, 0.1).unwrap_err();
    assert!(matches!(err, NnError::InvalidConfiguration(_)));
}

#[test]
fn non_positive_learning_rate_is_invalid() {
    assert!(matches!(initialize_network(2, 3, 1, 0.0), Err(NnError::InvalidConfiguration(_))));
    assert!(matches!(initialize_network(2, 3, 1, -0.5), Err(NnError::InvalidConfiguration(_))));
}

#[test]
fn forward_does_not_mutate_weights() {
    let net = Network::with_rng(3, 4, 2, 0.1, &mut seeded_rng(8)).unwrap();
    let before = net.clone();
    let _ = net.forward(&[0.2, 0.4, 0.6]).unwrap();

    assert_eq!(net.hidden_weights(), before.hidden_weights());
    assert_eq!(net.output_weights(), before.output_weights());
}

#[test]
fn training_moves_output_towards_target() {
    for lr in [0.01, 0.1, 0.5] {
        let mut net = Network::with_rng(4, 6, 1, lr, &mut seeded_rng(99)).unwrap();
        let input = [0.5, -0.25, 0.75, 1.0];
        let target = [0.9];

        let mut last = error_norm(&net, &input, &target);
        for _ in 0..8 {
            net.train(&input, &target).unwrap();
            let now = error_norm(&net, &input, &target);
            assert!(now < last, "lr {lr}: error went from {last} to {now}");
            last = now;
        }
    }
}

#[test]
fn train_rejects_wrong_input_length() {
    let mut net = Network::with_rng(2, 3, 1, 0.1, &mut seeded_rng(1)).unwrap();
    let err = net.train(&[1.0], &[0.5]).unwrap_err();
    assert!(matches!(err, NnError::DimensionMismatch { .. }));
}

proptest! {
    #[test]
    fn forward_shape_and_bounds(
        (i, h, o) in (1usize..8, 1usize..8, 1usize..8),
        seed in any::<u64>(),
        scale in -5.0..5.0f64,
    ) {
        let net = Network::with_rng(i, h, o, 0.1, &mut seeded_rng(seed)).unwrap();
        let input: Vec<f64> = (0..i).map(|k| scale * (k as f64 + 1.0) / i as f64).collect();

        let out = net.forward(&input).unwrap();

        prop_assert_eq!(out.len(), o);
        prop_assert!(out.iter().all(|&y| y > 0.0 && y < 1.0));
    }

    #[test]
    fn forward_rejects_any_other_input_length(i in 1usize..8, extra in 1usize..4, seed in any::<u64>()) {
        let net = Network::with_rng(i, 3, 2, 0.1, &mut seeded_rng(seed)).unwrap();
        let input = vec![0.0; i + extra];
        let is_mismatch = matches!(net.forward(&input), Err(NnError::DimensionMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    #[test]
    fn sigmoid_is_monotonic(a in -20.0..20.0f64, d in 1e-3..10.0f64) {
        prop_assert!(sigmoid(a) < sigmoid(a + d));
    }

    #[test]
    fn initializer_respects_bounds(
        rows in 1usize..12,
        cols in 1usize..12,
        fan_in in 1usize..200,
        seed in any::<u64>(),
    ) {
        let w = initialize_weights(rows, cols, fan_in, &mut seeded_rng(seed)).unwrap();
        let bound = 1.0 / (fan_in as f64).sqrt();

        prop_assert_eq!(w.shape(), (rows, cols));
        prop_assert!(w.iter().all(|x| x >= -bound && x <= bound));

        let again = initialize_weights(rows, cols, fan_in, &mut seeded_rng(seed)).unwrap();
        prop_assert_eq!(w, again);
    }
}
