use std::fmt;

use super::types::WindowRect;

/// The four host windowing operations the executor depends on.
///
/// Every method is a single blocking call into the OS. Implementations never
/// retry; failures are reported through the return value.
pub trait WindowBackend {
    /// Opaque OS window identifier.
    type Handle: Copy + fmt::Debug;

    /// Exact title lookup among top-level windows, using the OS's matching rules.
    fn find_window_by_title(&self, title: &str) -> Option<Self::Handle>;

    fn bring_to_foreground(&self, handle: Self::Handle) -> bool;

    fn get_bounds(&self, handle: Self::Handle) -> Option<WindowRect>;

    fn move_resize(
        &self,
        handle: Self::Handle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        repaint: bool,
    ) -> bool;
}

#[cfg(windows)]
pub use super::win32::Win32Backend as PlatformBackend;

#[cfg(not(windows))]
pub use super::unsupported::UnsupportedBackend as PlatformBackend;

/// Backend for the platform this binary was compiled for.
pub fn default_backend() -> PlatformBackend {
    PlatformBackend::new()
}
