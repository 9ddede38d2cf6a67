//! Window chrome: borders, title bar with minimize/maximize/close buttons
//! and the bottom-right resize handle, plus hit-testing of those regions.
//!
//! The decorator is shell-side glue; the engine in `manager.rs` knows
//! nothing about it and is driven purely through its pointer API.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use super::{PointerPos, WindowRecord};
use crate::geometry::WinRect;
use crate::ui::UiFrame;

/// What a pointer-down on a window's chrome means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// Title-bar area outside the buttons: start a move gesture.
    Drag,
    Minimize,
    Maximize,
    Close,
    /// Bottom-right handle: start a resize gesture.
    Resize,
    /// Window body.
    None,
}

// Title-row button cells, measured from the right border corner.
const BTN_CLOSE_OFFSET: i32 = 2;
const BTN_MAX_OFFSET: i32 = 3;
const BTN_MIN_OFFSET: i32 = 4;

/// Classify a pointer position against a window's chrome regions. Buttons
/// for disabled capabilities fall through to plain title-bar drag.
pub fn hit_test(record: &WindowRecord, pointer: PointerPos) -> HeaderAction {
    let rect = record.geometry;
    if !rect.contains(pointer.x, pointer.y) {
        return HeaderAction::None;
    }
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    if pointer.x == right && pointer.y == bottom && record.constraints.resizable {
        return HeaderAction::Resize;
    }
    if pointer.y == rect.y && rect.width >= 7 {
        if pointer.x == right - BTN_CLOSE_OFFSET && record.constraints.closable {
            return HeaderAction::Close;
        }
        if pointer.x == right - BTN_MAX_OFFSET && record.constraints.maximizable {
            return HeaderAction::Maximize;
        }
        if pointer.x == right - BTN_MIN_OFFSET && record.constraints.minimizable {
            return HeaderAction::Minimize;
        }
        return HeaderAction::Drag;
    }
    if pointer.y == rect.y {
        return HeaderAction::Drag;
    }
    HeaderAction::None
}

/// Content area inside the chrome (one cell of border on each side plus the
/// title row), still in signed window space.
pub fn content_rect(geometry: WinRect) -> WinRect {
    WinRect::new(
        geometry.x + 1,
        geometry.y + 1,
        geometry.width.saturating_sub(2),
        geometry.height.saturating_sub(2),
    )
}

/// Intersect a signed window-space rectangle with the screen-space bounds.
pub fn visible_rect(rect: WinRect, bounds: Rect) -> Option<Rect> {
    let left = rect.x.max(i32::from(bounds.x));
    let top = rect.y.max(i32::from(bounds.y));
    let right = rect.right().min(i32::from(bounds.x) + i32::from(bounds.width));
    let bottom = rect
        .bottom()
        .min(i32::from(bounds.y) + i32::from(bounds.height));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect {
        x: left as u16,
        y: top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    })
}

/// Draw one window's chrome and blank interior. Windows are painted bottom
/// to top in stacking order, so plain overdraw handles occlusion.
pub fn render_window(frame: &mut UiFrame<'_>, record: &WindowRecord, bounds: Rect, focused: bool) {
    let rect = record.geometry;
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let header_style = if focused {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    };
    let border_style = Style::default().fg(if focused {
        Color::White
    } else {
        Color::DarkGray
    });
    let body_style = Style::default().bg(Color::Reset).fg(Color::Reset);

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let in_bounds = |x: i32, y: i32| {
        x >= i32::from(bounds.x)
            && x < i32::from(bounds.x) + i32::from(bounds.width)
            && y >= i32::from(bounds.y)
            && y < i32::from(bounds.y) + i32::from(bounds.height)
    };

    // Interior fill first so stale content underneath never shows through.
    for y in (rect.y + 1)..bottom {
        for x in (rect.x + 1)..right {
            if in_bounds(x, y) {
                frame.set_cell(x, y, " ", body_style);
            }
        }
    }

    // Title row doubles as the top border.
    for x in rect.x..=right {
        if in_bounds(x, rect.y) {
            frame.set_cell(x, rect.y, " ", header_style);
        }
    }
    let title_limit = (i32::from(rect.width) - 7).max(0) as usize;
    for (idx, ch) in record.title.chars().take(title_limit).enumerate() {
        let x = rect.x + 1 + idx as i32;
        if in_bounds(x, rect.y) {
            frame.set_cell(x, rect.y, &ch.to_string(), header_style);
        }
    }
    if rect.width >= 7 {
        let buttons = [
            (BTN_MIN_OFFSET, "_", record.constraints.minimizable),
            (BTN_MAX_OFFSET, "□", record.constraints.maximizable),
            (BTN_CLOSE_OFFSET, "x", record.constraints.closable),
        ];
        for (offset, glyph, enabled) in buttons {
            if enabled && in_bounds(right - offset, rect.y) {
                frame.set_cell(right - offset, rect.y, glyph, header_style);
            }
        }
    }

    // Side and bottom borders.
    for y in (rect.y + 1)..bottom {
        if in_bounds(rect.x, y) {
            frame.set_cell(rect.x, y, "│", border_style);
        }
        if in_bounds(right, y) {
            frame.set_cell(right, y, "│", border_style);
        }
    }
    for x in rect.x..=right {
        if in_bounds(x, bottom) {
            let symbol = if x == rect.x {
                "└"
            } else if x == right {
                if record.constraints.resizable { "◢" } else { "┘" }
            } else {
                "─"
            };
            frame.set_cell(x, bottom, symbol, border_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{WindowId, WindowOptions, WindowRecord};

    fn record() -> WindowRecord {
        WindowRecord::new(
            WindowId::new(1),
            WinRect::new(10, 5, 20, 8),
            1,
            WindowOptions::new("demo"),
        )
    }

    #[test]
    fn hit_test_classifies_chrome_regions() {
        let record = record();
        // geometry spans x 10..30, y 5..13; title row y=5, right col 29
        assert_eq!(hit_test(&record, PointerPos::new(12, 5)), HeaderAction::Drag);
        assert_eq!(
            hit_test(&record, PointerPos::new(25, 5)),
            HeaderAction::Minimize
        );
        assert_eq!(
            hit_test(&record, PointerPos::new(26, 5)),
            HeaderAction::Maximize
        );
        assert_eq!(
            hit_test(&record, PointerPos::new(27, 5)),
            HeaderAction::Close
        );
        assert_eq!(
            hit_test(&record, PointerPos::new(29, 12)),
            HeaderAction::Resize
        );
        assert_eq!(
            hit_test(&record, PointerPos::new(15, 8)),
            HeaderAction::None
        );
        assert_eq!(hit_test(&record, PointerPos::new(0, 0)), HeaderAction::None);
    }

    #[test]
    fn disabled_buttons_fall_back_to_drag() {
        let mut record = record();
        record.constraints.closable = false;
        record.constraints.resizable = false;
        assert_eq!(
            hit_test(&record, PointerPos::new(27, 5)),
            HeaderAction::Drag
        );
        assert_eq!(
            hit_test(&record, PointerPos::new(29, 12)),
            HeaderAction::None
        );
    }

    #[test]
    fn visible_rect_clips_offscreen_windows() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let visible = visible_rect(WinRect::new(-5, -2, 20, 10), bounds).unwrap();
        assert_eq!((visible.x, visible.y), (0, 0));
        assert_eq!((visible.width, visible.height), (15, 8));
        assert!(visible_rect(WinRect::new(-30, 0, 20, 10), bounds).is_none());
    }

    #[test]
    fn content_rect_insets_chrome() {
        let content = content_rect(WinRect::new(10, 5, 20, 8));
        assert_eq!(content, WinRect::new(11, 6, 18, 6));
    }
}
