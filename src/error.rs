/// Reasons untyped input is rejected before the pair scan runs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Expected an array of integers, found {0}")]
    NotASequence(&'static str),

    #[error("Element at index {index} is not a 32-bit integer: {value}")]
    InvalidElement { index: usize, value: String },

    #[error("Target is not a 32-bit integer: {0}")]
    InvalidTarget(String),
}

/// Result type alias for input validation
pub type Result<T> = std::result::Result<T, InputError>;
