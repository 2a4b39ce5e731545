use std::fmt;

use serde::Serialize;

use super::errors::ValidationError;

/// Validated request to place a window: target title plus the new geometry.
///
/// `x` and `y` may be negative (monitors left of or above the primary one).
/// `width` and `height` are always strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowQuery {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    title: String,
}

impl WindowQuery {
    pub fn new(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if width <= 0 || height <= 0 {
            return Err(ValidationError::NonPositiveSize { width, height });
        }

        Ok(Self {
            x,
            y,
            width,
            height,
            title: title.into(),
        })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Window bounds in screen coordinates, as reported by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl WindowRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

impl fmt::Display for WindowRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={}, top={}, right={}, bottom={}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Outcome of a single placement run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowActionStatus {
    Success,
    WindowNotFound,
    InvalidInput,
    ActionFailed,
}

impl WindowActionStatus {
    /// Process exit code used when the CLI runs with `--exit-code`.
    pub fn exit_code(&self) -> i32 {
        match self {
            WindowActionStatus::Success => 0,
            WindowActionStatus::InvalidInput => 2,
            WindowActionStatus::WindowNotFound => 3,
            WindowActionStatus::ActionFailed => 4,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WindowActionStatus::Success)
    }
}

impl fmt::Display for WindowActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindowActionStatus::Success => "success",
            WindowActionStatus::WindowNotFound => "window_not_found",
            WindowActionStatus::InvalidInput => "invalid_input",
            WindowActionStatus::ActionFailed => "action_failed",
        };
        write!(f, "{}", name)
    }
}

/// What the executor produced: the status plus the bounds read before resizing.
///
/// `previous_bounds` is `None` when the window was never resolved or the
/// bounds query failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    status: WindowActionStatus,
    previous_bounds: Option<WindowRect>,
}

impl ActionOutcome {
    pub fn new(status: WindowActionStatus, previous_bounds: Option<WindowRect>) -> Self {
        Self {
            status,
            previous_bounds,
        }
    }

    pub fn status(&self) -> WindowActionStatus {
        self.status
    }

    pub fn previous_bounds(&self) -> Option<WindowRect> {
        self.previous_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_query_getters() {
        let query = WindowQuery::new(-1920, 50, 800, 600, "Notepad").unwrap();

        assert_eq!(query.x(), -1920);
        assert_eq!(query.y(), 50);
        assert_eq!(query.width(), 800);
        assert_eq!(query.height(), 600);
        assert_eq!(query.title(), "Notepad");
    }

    #[test]
    fn test_window_query_rejects_non_positive_size() {
        assert!(WindowQuery::new(0, 0, 0, 600, "a").is_err());
        assert!(WindowQuery::new(0, 0, 800, -1, "a").is_err());
        assert!(WindowQuery::new(0, 0, 1, 1, "a").is_ok());
    }

    #[test]
    fn test_window_query_keeps_title_verbatim() {
        let query = WindowQuery::new(0, 0, 10, 10, "  Untitled - Notepad ").unwrap();
        assert_eq!(query.title(), "  Untitled - Notepad ");
    }

    #[test]
    fn test_window_rect_dimensions() {
        let rect = WindowRect::new(100, 50, 900, 650);
        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
    }

    #[test]
    fn test_window_rect_display() {
        let rect = WindowRect::new(-8, 0, 1288, 728);
        assert_eq!(rect.to_string(), "left=-8, top=0, right=1288, bottom=728");
    }

    #[test]
    fn test_status_exit_codes() {
        assert_eq!(WindowActionStatus::Success.exit_code(), 0);
        assert_eq!(WindowActionStatus::InvalidInput.exit_code(), 2);
        assert_eq!(WindowActionStatus::WindowNotFound.exit_code(), 3);
        assert_eq!(WindowActionStatus::ActionFailed.exit_code(), 4);
    }

    #[test]
    fn test_status_display_matches_serialized_name() {
        let statuses = [
            WindowActionStatus::Success,
            WindowActionStatus::WindowNotFound,
            WindowActionStatus::InvalidInput,
            WindowActionStatus::ActionFailed,
        ];
        for status in statuses {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_action_outcome_getters() {
        let rect = WindowRect::new(0, 0, 10, 10);
        let outcome = ActionOutcome::new(WindowActionStatus::Success, Some(rect));
        assert_eq!(outcome.status(), WindowActionStatus::Success);
        assert_eq!(outcome.previous_bounds(), Some(rect));
        assert!(outcome.status().is_success());
    }
}
