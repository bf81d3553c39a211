use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// The mathematical precondition of an operation does not hold for its operand values.
    #[error("Domain error in operation '{operation}': {reason}")]
    DomainError { operation: String, reason: String },

    /// A value handed to an operation cannot be interpreted as a finite real number.
    #[error("Invalid operand for operation '{operation}': {value} is not a finite real number")]
    InvalidOperand { operation: String, value: f64 },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("Input size mismatch in {context}: expected {expected}, got {actual}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ScalarGradError {
    pub(crate) fn domain(operation: &str, reason: impl Into<String>) -> Self {
        ScalarGradError::DomainError {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
