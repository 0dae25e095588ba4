pub mod config;
pub mod network;
pub mod report;

pub use config::NetworkConfig;
pub use network::Network;
pub use report::{MatrixDisplay, WeightReport};
