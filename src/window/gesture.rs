//! Pointer gesture state machines for drag and resize.
//!
//! Both gestures share the same shape: capture the pointer and the window
//! geometry at pointer-down, then on every move recompute from the captured
//! start plus the total delta. Computing from the start state (never
//! incrementally) makes the final geometry independent of how many move
//! events were delivered in between.

use super::WindowId;
use crate::geometry::WinRect;

/// Abstract pointer position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPos {
    pub x: i32,
    pub y: i32,
}

impl PointerPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// State captured when a gesture leaves `Idle`.
#[derive(Debug, Clone, Copy)]
struct GestureStart {
    pointer: PointerPos,
    geometry: WinRect,
}

impl GestureStart {
    fn delta(&self, pointer: PointerPos) -> (i32, i32) {
        (pointer.x - self.pointer.x, pointer.y - self.pointer.y)
    }
}

/// `Idle -> Dragging -> Idle`. Projects the pointer delta onto the window
/// origin; the position is deliberately unclamped so windows can leave the
/// viewport, matching desktop convention.
#[derive(Debug, Clone, Copy)]
pub struct DragGesture {
    pub id: WindowId,
    start: GestureStart,
}

impl DragGesture {
    pub(crate) fn begin(id: WindowId, pointer: PointerPos, geometry: WinRect) -> Self {
        Self {
            id,
            start: GestureStart { pointer, geometry },
        }
    }

    /// Origin for the current pointer: start origin plus total delta.
    pub fn origin_at(&self, pointer: PointerPos) -> (i32, i32) {
        let (dx, dy) = self.start.delta(pointer);
        (self.start.geometry.x + dx, self.start.geometry.y + dy)
    }
}

/// `Idle -> Resizing -> Idle`, acting on the bottom-right corner. Projects
/// the pointer delta onto the window size, floored at the window's minimum
/// dimensions. There is no upper clamp.
#[derive(Debug, Clone, Copy)]
pub struct ResizeGesture {
    pub id: WindowId,
    start: GestureStart,
}

impl ResizeGesture {
    pub(crate) fn begin(id: WindowId, pointer: PointerPos, geometry: WinRect) -> Self {
        Self {
            id,
            start: GestureStart { pointer, geometry },
        }
    }

    /// Size for the current pointer, floored at the minimum dimensions.
    pub fn size_at(&self, pointer: PointerPos, min_width: u16, min_height: u16) -> (u16, u16) {
        let (dx, dy) = self.start.delta(pointer);
        let max = i32::from(u16::MAX);
        let width = (i32::from(self.start.geometry.width) + dx)
            .max(i32::from(min_width))
            .min(max);
        let height = (i32::from(self.start.geometry.height) + dy)
            .max(i32::from(min_height))
            .min(max);
        (width as u16, height as u16)
    }
}

/// The single global gesture slot. Holding drag and resize in one `Option`
/// is what enforces "one pointer interaction at a time" across all windows.
#[derive(Debug, Clone, Copy)]
pub enum ActiveGesture {
    Drag(DragGesture),
    Resize(ResizeGesture),
}

impl ActiveGesture {
    pub fn window(&self) -> WindowId {
        match self {
            ActiveGesture::Drag(gesture) => gesture.id,
            ActiveGesture::Resize(gesture) => gesture.id,
        }
    }
}
