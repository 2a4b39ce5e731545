use crate::errors::PlaceError;

/// Rejected command-line input. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(
        "All arguments must be specified. Usage: winplace x y width height windowName"
    )]
    WrongArgumentCount { count: usize },

    #[error("Invalid numerical arguments for x, y, width, or height.")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Width and height can't be 0.")]
    NonPositiveSize { width: i32, height: i32 },
}

impl PlaceError for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            ValidationError::WrongArgumentCount { .. } => "WRONG_ARGUMENT_COUNT",
            ValidationError::InvalidNumber { .. } => "INVALID_NUMBER",
            ValidationError::NonPositiveSize { .. } => "NON_POSITIVE_SIZE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
