use serde::Serialize;

use crate::errors::PlaceError;
use crate::window::{ActionOutcome, WindowActionStatus, WindowRect};

/// One-line user message for a run outcome.
///
/// `ActionFailed` covers both a refused foreground and a failed resize; the
/// wording does not tell them apart.
pub fn status_message(status: WindowActionStatus, title: &str) -> String {
    match status {
        WindowActionStatus::Success => {
            format!("Successfully moved and resized window '{}'", title)
        }
        WindowActionStatus::WindowNotFound => format!("Window '{}' not found", title),
        WindowActionStatus::ActionFailed => {
            format!("Failed to bring window '{}' to foreground", title)
        }
        // Validation failures never reach the executor.
        WindowActionStatus::InvalidInput => "Unknown error".to_string(),
    }
}

/// Diagnostic line for the bounds read just before resizing.
pub fn bounds_message(rect: &WindowRect) -> String {
    format!("Current window position: {}", rect)
}

/// Print the status line for `status` to stdout.
pub fn report(status: WindowActionStatus, title: &str) {
    println!("{}", status_message(status, title));
}

/// JSON form of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionReport {
    status: WindowActionStatus,
    title: String,
    message: String,
    previous_bounds: Option<WindowRect>,
}

impl ActionReport {
    pub fn new(outcome: &ActionOutcome, title: &str) -> Self {
        Self {
            status: outcome.status(),
            title: title.to_string(),
            message: status_message(outcome.status(), title),
            previous_bounds: outcome.previous_bounds(),
        }
    }
}

/// JSON form of rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectionReport {
    status: WindowActionStatus,
    error_code: &'static str,
    message: String,
}

impl RejectionReport {
    pub fn new(error: &dyn PlaceError) -> Self {
        Self {
            status: WindowActionStatus::InvalidInput,
            error_code: error.error_code(),
            message: error.to_string(),
        }
    }
}
