use std::error::Error;

/// Base trait for all winplace errors
pub trait PlaceError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by user input rather than the system
    fn is_user_error(&self) -> bool {
        false
    }
}
