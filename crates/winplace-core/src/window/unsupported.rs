use tracing::warn;

use super::backend::WindowBackend;
use super::types::WindowRect;

/// Backend for targets without a supported windowing API. No window is ever found.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedBackend;

impl UnsupportedBackend {
    pub fn new() -> Self {
        Self
    }
}

impl WindowBackend for UnsupportedBackend {
    type Handle = ();

    fn find_window_by_title(&self, title: &str) -> Option<()> {
        warn!(
            event = "core.window.platform_unsupported",
            os = std::env::consts::OS,
            title = title
        );
        None
    }

    fn bring_to_foreground(&self, _handle: ()) -> bool {
        false
    }

    fn get_bounds(&self, _handle: ()) -> Option<WindowRect> {
        None
    }

    fn move_resize(
        &self,
        _handle: (),
        _x: i32,
        _y: i32,
        _width: i32,
        _height: i32,
        _repaint: bool,
    ) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_backend_finds_nothing() {
        let backend = UnsupportedBackend::new();
        assert!(backend.find_window_by_title("Notepad").is_none());
        assert!(!backend.bring_to_foreground(()));
        assert!(backend.get_bounds(()).is_none());
        assert!(!backend.move_resize((), 0, 0, 10, 10, true));
    }
}
