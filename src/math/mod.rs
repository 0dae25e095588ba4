pub mod matrix;
pub mod init;

pub use matrix::Matrix;
pub use init::{initialize_weights, entropy_rng, seeded_rng};
