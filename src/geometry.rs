//! Screen-space geometry for the window manager.
//!
//! Window origins are signed so a window can be dragged partially off-screen
//! while keeping an unsigned size. All gesture math happens in `i32` and is
//! converted back at the edges.

use rand::Rng;

use crate::constants::SPAWN_MARGIN;

/// Signed rectangle origin with unsigned size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl WinRect {
    pub fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + i32::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + i32::from(self.height)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Grow the rectangle up to the given minimum dimensions, keeping the
    /// origin fixed.
    pub fn clamp_min(self, min_width: u16, min_height: u16) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
            ..self
        }
    }
}

/// The screen the manager places windows on, with a strip at the bottom
/// reserved for the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub taskbar_height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            taskbar_height: 0,
        }
    }

    pub fn with_taskbar(mut self, height: u16) -> Self {
        self.taskbar_height = height;
        self
    }

    pub fn work_height(&self) -> u16 {
        self.height.saturating_sub(self.taskbar_height)
    }

    /// Area available to windows: the viewport minus the taskbar strip.
    pub fn work_area(&self) -> WinRect {
        WinRect::new(0, 0, self.width, self.work_height())
    }

    /// True when there is no surface to mount windows on.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.work_height() == 0
    }
}

/// Pick a randomized spawn origin that keeps a `width` x `height` window
/// fully inside the work area, leaving [`SPAWN_MARGIN`] around it. Degrades
/// to the top-left corner when the work area is too small for the margin.
pub fn spawn_origin(viewport: Viewport, width: u16, height: u16) -> (i32, i32) {
    let work = viewport.work_area();
    let mut rng = rand::thread_rng();
    let mut axis = |total: u16, size: u16| -> i32 {
        let max = i32::from(total) - i32::from(size) - i32::from(SPAWN_MARGIN);
        let min = i32::from(SPAWN_MARGIN).min(max.max(0));
        if max > min {
            rng.gen_range(min..=max)
        } else {
            min.max(0)
        }
    };
    (axis(work.width, width), axis(work.height, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges() {
        let r = WinRect::new(-2, 1, 4, 3);
        assert!(r.contains(-2, 1));
        assert!(r.contains(1, 3));
        assert!(!r.contains(2, 1));
        assert!(!r.contains(-3, 1));
        assert!(!WinRect::new(0, 0, 0, 5).contains(0, 0));
    }

    #[test]
    fn clamp_min_grows_only() {
        let r = WinRect::new(3, 3, 10, 2).clamp_min(6, 4);
        assert_eq!((r.width, r.height), (10, 4));
        assert_eq!((r.x, r.y), (3, 3));
    }

    #[test]
    fn work_area_excludes_taskbar() {
        let vp = Viewport::new(80, 24).with_taskbar(1);
        assert_eq!(vp.work_area(), WinRect::new(0, 0, 80, 23));
        assert!(!vp.is_empty());
        assert!(Viewport::new(80, 1).with_taskbar(1).is_empty());
    }

    #[test]
    fn spawn_origin_keeps_window_visible() {
        let vp = Viewport::new(120, 40).with_taskbar(1);
        let work = vp.work_area();
        for _ in 0..50 {
            let (x, y) = spawn_origin(vp, 30, 10);
            assert!(x >= 0 && y >= 0);
            assert!(x + 30 <= work.right());
            assert!(y + 10 <= work.bottom());
        }
    }

    #[test]
    fn spawn_origin_degrades_on_tiny_viewport() {
        let vp = Viewport::new(10, 4);
        let (x, y) = spawn_origin(vp, 30, 10);
        assert_eq!((x, y), (0, 0));
    }
}
