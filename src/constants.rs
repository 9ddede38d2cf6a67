//! Shared crate-wide constants.

/// Default width for a window created without an explicit size.
pub const DEFAULT_WINDOW_WIDTH: u16 = 48;

/// Default height for a window created without an explicit size.
pub const DEFAULT_WINDOW_HEIGHT: u16 = 14;

/// Smallest width a window may be resized to unless the caller asks for a
/// stricter minimum.
pub const MIN_WINDOW_WIDTH: u16 = 6;

/// Smallest height a window may be resized to unless the caller asks for a
/// stricter minimum.
pub const MIN_WINDOW_HEIGHT: u16 = 3;

/// Margin kept between a freshly spawned window and the work-area edges so
/// the window is fully visible and its chrome stays grabbable.
pub const SPAWN_MARGIN: u16 = 2;

/// Height of the taskbar strip reserved at the bottom of the viewport.
pub const TASKBAR_HEIGHT: u16 = 1;
