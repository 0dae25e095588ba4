use std::fmt;

use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// Human-readable dump of a network's learning rate and weights.
///
/// Each weight is labelled by the connection it carries, e.g. `i2.h4` is
/// input neuron 2 to hidden neuron 4.
pub struct WeightReport<'a>(pub &'a Network);

/// Plain grid view of a matrix, four decimals, positive values padded to
/// line up with negatives.
pub struct MatrixDisplay<'a>(pub &'a Matrix);

fn write_weight(f: &mut fmt::Formatter<'_>, w: f64) -> fmt::Result {
    if w > 0.0 {
        write!(f, " ")?;
    }
    write!(f, "{w:.4}")
}

impl fmt::Display for WeightReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let net = self.0;

        writeln!(f, "{{Key: i2.h4 reads as \"Input Neuron 2 to Hidden Neuron 4\"}}")?;
        writeln!(f)?;
        writeln!(f, "Learn Rate: {}", net.learning_rate())?;

        // Weights are stored (to x from); print grouped by source neuron.
        writeln!(f, "[Input -> Hidden]")?;
        let hidden = net.hidden_weights();
        for i in 0..net.input_size() {
            write!(f, "Input {i}: ")?;
            for h in 0..net.hidden_size() {
                write!(f, " i{i}.h{h}:")?;
                write_weight(f, hidden.get(h, i).unwrap_or_default())?;
                write!(f, "  ")?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "[Hidden -> Output]")?;
        let output = net.output_weights();
        for h in 0..net.hidden_size() {
            write!(f, "Hidden {h}: ")?;
            for o in 0..net.output_size() {
                write!(f, " h{h}.o{o}:")?;
                write_weight(f, output.get(o, h).unwrap_or_default())?;
                write!(f, "  ")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.row_data() {
            for &w in row {
                write_weight(f, w)?;
                write!(f, " ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
