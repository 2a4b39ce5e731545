pub mod backend;
pub mod errors;
pub mod handler;
pub mod types;
pub mod validation;

#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod win32;

pub use backend::{PlatformBackend, WindowBackend, default_backend};
pub use errors::ValidationError;
pub use handler::move_and_resize;
pub use types::{ActionOutcome, WindowActionStatus, WindowQuery, WindowRect};
pub use validation::validate_arguments;
