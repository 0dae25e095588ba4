use serde::{Serialize, Deserialize};

use crate::error::{NnError, Result};

/// Construction parameters for a `Network`.
///
/// Fields:
/// - `input_size`    — length of every input vector
/// - `hidden_size`   — neurons in the single hidden layer
/// - `output_size`   — length of every output / target vector
/// - `learning_rate` — gradient step scale; positive and finite
/// - `seed`          — fixed initialization seed; `None` draws from OS entropy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkConfig {
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize, learning_rate: f64) -> Self {
        NetworkConfig {
            input_size,
            hidden_size,
            output_size,
            learning_rate,
            seed: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("output_size", self.output_size),
        ];
        if let Some((name, _)) = sizes.iter().find(|(_, size)| *size == 0) {
            return Err(NnError::InvalidConfiguration(format!("{name} must be positive")));
        }

        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(NnError::InvalidConfiguration(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }

        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads a config from a JSON file and validates it.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig::new(10, 20, 5, 0.01)
    }
}
