//! winplace-core: find a window by its exact title, bring it to the
//! foreground and move/resize it.
//!
//! The run is a straight pipeline:
//!
//! - [`window::validate_arguments`] - turn the five CLI arguments into a [`WindowQuery`]
//! - [`window::move_and_resize`] - drive a [`WindowBackend`] through find, focus, bounds, move
//! - [`report`] - render the [`WindowActionStatus`] for the user

pub mod errors;
pub mod events;
pub mod logging;
pub mod report;
pub mod window;

pub use errors::PlaceError;
pub use report::{ActionReport, RejectionReport};
pub use window::{
    ActionOutcome, PlatformBackend, ValidationError, WindowActionStatus, WindowBackend,
    WindowQuery, WindowRect, default_backend,
};

// Re-export handler module as the primary API
pub use window::handler as window_ops;

// Re-export logging initialization
pub use logging::init_logging;
