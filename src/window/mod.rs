pub mod decorator;

mod gesture;
mod manager;
mod registry;
mod zorder;

use std::fmt;

use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::geometry::WinRect;

pub use gesture::{ActiveGesture, DragGesture, PointerPos, ResizeGesture};
pub use manager::{WindowManager, WindowEvent, WmError};
pub use registry::WindowRegistry;
pub use zorder::ZOrder;

/// Opaque window identifier. Assigned at creation, stable for the window's
/// lifetime, never reused after close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "win#{}", self.0)
    }
}

/// Per-window limits and capabilities, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConstraints {
    pub min_width: u16,
    pub min_height: u16,
    pub resizable: bool,
    pub movable: bool,
    pub closable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
}

impl Default for WindowConstraints {
    fn default() -> Self {
        Self {
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            resizable: true,
            movable: true,
            closable: true,
            minimizable: true,
            maximizable: true,
        }
    }
}

/// Callback consulted before a window closes; returning `false` vetoes the
/// close with no state change.
pub type CloseGuard = Box<dyn FnMut() -> bool + Send>;

/// Options for [`WindowManager::create_window`]. Geometry fields left unset
/// fall back to fixed default sizes and a randomized on-screen origin.
#[derive(Default)]
pub struct WindowOptions {
    pub title: String,
    pub icon: Option<String>,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub constraints: WindowConstraints,
    pub on_close: Option<CloseGuard>,
}

impl WindowOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn min_size(mut self, min_width: u16, min_height: u16) -> Self {
        self.constraints.min_width = min_width;
        self.constraints.min_height = min_height;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.constraints.resizable = resizable;
        self
    }

    pub fn movable(mut self, movable: bool) -> Self {
        self.constraints.movable = movable;
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.constraints.closable = closable;
        self
    }

    pub fn minimizable(mut self, minimizable: bool) -> Self {
        self.constraints.minimizable = minimizable;
        self
    }

    pub fn maximizable(mut self, maximizable: bool) -> Self {
        self.constraints.maximizable = maximizable;
        self
    }

    pub fn on_close(mut self, guard: CloseGuard) -> Self {
        self.on_close = Some(guard);
        self
    }
}

impl fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowOptions")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("constraints", &self.constraints)
            .field("on_close", &self.on_close.as_ref().map(|_| "<guard>"))
            .finish()
    }
}

/// Registry entry for one open window.
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub icon: Option<String>,
    pub geometry: WinRect,
    /// Geometry captured immediately before a maximize; present exactly
    /// while maximized.
    pub saved_geometry: Option<WinRect>,
    pub constraints: WindowConstraints,
    pub minimized: bool,
    pub maximized: bool,
    pub z_index: u64,
    pub(crate) on_close: Option<CloseGuard>,
}

impl WindowRecord {
    pub(crate) fn new(
        id: WindowId,
        geometry: WinRect,
        z_index: u64,
        options: WindowOptions,
    ) -> Self {
        Self {
            id,
            title: options.title,
            icon: options.icon,
            geometry,
            saved_geometry: None,
            constraints: options.constraints,
            minimized: false,
            maximized: false,
            z_index,
            on_close: options.on_close,
        }
    }

    /// A minimized window keeps its record but has no on-screen presence.
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}

impl fmt::Debug for WindowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowRecord")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("geometry", &self.geometry)
            .field("saved_geometry", &self.saved_geometry)
            .field("minimized", &self.minimized)
            .field("maximized", &self.maximized)
            .field("z_index", &self.z_index)
            .finish()
    }
}

pub(crate) fn default_geometry(options: &WindowOptions) -> (u16, u16) {
    let width = options
        .width
        .unwrap_or(DEFAULT_WINDOW_WIDTH)
        .max(options.constraints.min_width);
    let height = options
        .height
        .unwrap_or(DEFAULT_WINDOW_HEIGHT)
        .max(options.constraints.min_height);
    (width, height)
}
