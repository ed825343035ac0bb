//! Form Errors
//!
//! Errors raised while bootstrapping the form from the host page.

/// Common result type for bootstrap operations
pub type FormResult<T> = Result<T, FormError>;

/// Bootstrap-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// An expected DOM node or global is missing
    NotFound(String),
    /// Hydration data or config could not be decoded
    InvalidInput(String),
    Internal(String),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::NotFound(msg) => write!(f, "Not found: {}", msg),
            FormError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            FormError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for FormError {}

impl From<serde_json::Error> for FormError {
    fn from(e: serde_json::Error) -> Self {
        FormError::InvalidInput(e.to_string())
    }
}
