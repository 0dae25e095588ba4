/// Result type alias using `NnError`.
pub type Result<T> = std::result::Result<T, NnError>;

/// Errors raised by the matrix primitives, network construction and config loading.
#[derive(Debug, thiserror::Error)]
pub enum NnError {
    /// Operand shapes violate an operation's precondition.
    /// Shapes are reported as `(rows, cols)`.
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A layer size is zero or the learning rate is not a positive finite number.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NnError {
    pub(crate) fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        NnError::DimensionMismatch { op, left, right }
    }
}
