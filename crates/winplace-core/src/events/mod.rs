use tracing::{error, info};

use crate::errors::PlaceError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        os = std::env::consts::OS
    );
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// Rejected input is the user's mistake, so it is logged below error level.
pub fn log_input_rejected(error: &dyn PlaceError) {
    info!(
        event = "core.app.input_rejected",
        error = %error,
        error_code = error.error_code(),
        user_error = error.is_user_error()
    );
}
