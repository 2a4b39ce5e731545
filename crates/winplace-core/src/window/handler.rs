use tracing::{debug, info, warn};

use super::backend::WindowBackend;
use super::types::{ActionOutcome, WindowActionStatus, WindowQuery};

/// Find the window titled `query.title()`, bring it to the foreground and
/// move/resize it to the query geometry.
///
/// Stops at the first failing step. The bounds query in between is
/// best-effort: its failure is logged and otherwise ignored. Nothing is rolled
/// back, so a failed resize leaves the window foregrounded at its old geometry.
pub fn move_and_resize<B: WindowBackend>(backend: &B, query: &WindowQuery) -> ActionOutcome {
    info!(
        event = "core.window.place_started",
        title = query.title(),
        x = query.x(),
        y = query.y(),
        width = query.width(),
        height = query.height()
    );

    let Some(handle) = backend.find_window_by_title(query.title()) else {
        info!(event = "core.window.not_found", title = query.title());
        return ActionOutcome::new(WindowActionStatus::WindowNotFound, None);
    };

    debug!(event = "core.window.resolved", handle = ?handle);

    if !backend.bring_to_foreground(handle) {
        warn!(
            event = "core.window.foreground_failed",
            title = query.title(),
            handle = ?handle
        );
        return ActionOutcome::new(WindowActionStatus::ActionFailed, None);
    }

    let previous_bounds = backend.get_bounds(handle);
    match previous_bounds {
        Some(rect) => debug!(
            event = "core.window.bounds_read",
            left = rect.left,
            top = rect.top,
            right = rect.right,
            bottom = rect.bottom,
            width = rect.width(),
            height = rect.height()
        ),
        None => debug!(event = "core.window.bounds_unavailable", handle = ?handle),
    }

    if !backend.move_resize(
        handle,
        query.x(),
        query.y(),
        query.width(),
        query.height(),
        true,
    ) {
        warn!(
            event = "core.window.move_resize_failed",
            title = query.title(),
            handle = ?handle
        );
        return ActionOutcome::new(WindowActionStatus::ActionFailed, previous_bounds);
    }

    info!(event = "core.window.place_completed", title = query.title());
    ActionOutcome::new(WindowActionStatus::Success, previous_bounds)
}
