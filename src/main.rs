// Demo driver: builds a network, prints its weights and a guess for a random
// input, then nudges it towards a fixed target with a few online steps.
//
//   cargo run                      # default 10-20-5 network
//   cargo run -- net.json          # shape / learning rate / seed from a JSON config
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use minnet::{
    entropy_rng, initialize_weights, seeded_rng, Matrix, MatrixDisplay, Network, NetworkConfig,
    Result, WeightReport,
};

const DEMO_STEPS: usize = 100;
const DEMO_TARGET: f64 = 0.9;

fn install_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().compact().with_env_filter(filter).init();
}

fn run(config_path: Option<String>) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            info!(%path, "loading network config");
            NetworkConfig::load_json(&path)?
        }
        None => NetworkConfig::default(),
    };

    let mut net = Network::from_config(&config)?;

    // Fan-in 1 gives inputs in [-1, 1].
    let input = match config.seed {
        Some(seed) => initialize_weights(config.input_size, 1, 1, &mut seeded_rng(seed.wrapping_add(1)))?,
        None => initialize_weights(config.input_size, 1, 1, &mut entropy_rng())?,
    };
    let input = input.to_vec();

    println!("{}", WeightReport(&net));

    let guess = net.forward(&input)?;
    println!("[Guess Matrix]");
    println!("{}", MatrixDisplay(&Matrix::column(&guess)));

    let target = vec![DEMO_TARGET; config.output_size];
    for _ in 0..DEMO_STEPS {
        net.train(&input, &target)?;
    }
    info!(steps = DEMO_STEPS, target = DEMO_TARGET, "trained on demo pair");

    let guess = net.forward(&input)?;
    println!("[Guess Matrix after training]");
    println!("{}", MatrixDisplay(&Matrix::column(&guess)));

    Ok(())
}

fn main() -> ExitCode {
    install_logger();

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
