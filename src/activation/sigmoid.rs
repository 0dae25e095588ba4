use crate::error::Result;
use crate::math::matrix::Matrix;

/// Logistic function, squashes any real into (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative expressed through the activation itself: `a ⊙ (1 - a)`.
///
/// `activated` must already hold sigmoid outputs, not pre-activations.
pub fn sigmoid_derivative(activated: &Matrix) -> Result<Matrix> {
    let ones = Matrix::ones_like(activated);
    activated.hadamard(&ones.sub(activated)?)
}
