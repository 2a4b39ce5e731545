use tracing::{debug, warn};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    FindWindowW, GetWindowRect, MoveWindow, SetForegroundWindow,
};
use windows::core::PCWSTR;

use super::backend::WindowBackend;
use super::types::WindowRect;

/// user32-backed implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Backend;

impl Win32Backend {
    pub fn new() -> Self {
        Self
    }
}

/// NUL-terminated UTF-16 copy of `s` for wide-string Win32 parameters.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

impl WindowBackend for Win32Backend {
    type Handle = HWND;

    fn find_window_by_title(&self, title: &str) -> Option<HWND> {
        let wide_title = to_wide(title);

        // SAFETY: `wide_title` is NUL-terminated and outlives the call; a null
        // class name matches windows of any class.
        let result = unsafe { FindWindowW(PCWSTR::null(), PCWSTR(wide_title.as_ptr())) };

        match result {
            Ok(hwnd) if !hwnd.is_invalid() => Some(hwnd),
            Ok(_) => None,
            Err(e) => {
                debug!(
                    event = "core.window.win32_find_failed",
                    title = title,
                    error = %e
                );
                None
            }
        }
    }

    fn bring_to_foreground(&self, handle: HWND) -> bool {
        // SAFETY: the handle came from FindWindowW; a stale handle makes the
        // call fail rather than misbehave.
        let ok = unsafe { SetForegroundWindow(handle) }.as_bool();
        if !ok {
            warn!(
                event = "core.window.win32_foreground_refused",
                hwnd = ?handle
            );
        }
        ok
    }

    fn get_bounds(&self, handle: HWND) -> Option<WindowRect> {
        let mut rect = RECT::default();

        // SAFETY: `rect` is a valid, writable RECT for the duration of the call.
        match unsafe { GetWindowRect(handle, &mut rect) } {
            Ok(()) => Some(WindowRect::new(rect.left, rect.top, rect.right, rect.bottom)),
            Err(e) => {
                debug!(
                    event = "core.window.win32_rect_failed",
                    hwnd = ?handle,
                    error = %e
                );
                None
            }
        }
    }

    fn move_resize(
        &self,
        handle: HWND,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        repaint: bool,
    ) -> bool {
        // SAFETY: plain by-value arguments; failure is reported via the Result.
        match unsafe { MoveWindow(handle, x, y, width, height, repaint) } {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    event = "core.window.win32_move_failed",
                    hwnd = ?handle,
                    error = %e
                );
                false
            }
        }
    }
}
