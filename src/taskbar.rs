//! Bottom taskbar strip: one button per open window (minimized ones
//! included), rebuilt every frame with per-button hit rectangles.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use crate::ui::{UiFrame, truncate_to_width};
use crate::window::WindowId;

#[derive(Debug, Clone, Copy)]
struct TaskbarHit {
    id: WindowId,
    rect: Rect,
}

/// One entry to render, produced by the shell from manager state.
#[derive(Debug, Clone)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub minimized: bool,
    pub active: bool,
}

#[derive(Debug)]
pub struct Taskbar {
    height: u16,
    area: Rect,
    hits: Vec<TaskbarHit>,
}

impl Default for Taskbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Taskbar {
    pub fn new() -> Self {
        Self {
            height: 1,
            area: Rect::default(),
            hits: Vec::new(),
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Split the frame into the desktop area and the taskbar strip at the
    /// bottom.
    pub fn split_area(&mut self, area: Rect) -> (Rect, Rect) {
        let bar_height = self.height.min(area.height);
        let desktop = Rect {
            height: area.height - bar_height,
            ..area
        };
        self.area = Rect {
            y: area.y + desktop.height,
            height: bar_height,
            ..area
        };
        (desktop, self.area)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let area = self.area;
        column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height
    }

    /// Window button under the pointer, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<WindowId> {
        self.hits
            .iter()
            .find(|hit| {
                column >= hit.rect.x
                    && column < hit.rect.x + hit.rect.width
                    && row >= hit.rect.y
                    && row < hit.rect.y + hit.rect.height
            })
            .map(|hit| hit.id)
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, entries: &[TaskbarEntry]) {
        self.hits.clear();
        let area = self.area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        let bar_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.x..area.x + area.width {
            frame.set_cell(i32::from(x), i32::from(area.y), " ", bar_style);
        }
        let mut x = area.x + 1;
        for entry in entries {
            let label = format!(" {} ", truncate_to_width(&entry.title, 12));
            let width = label.chars().count() as u16;
            if x + width >= area.x + area.width {
                break;
            }
            let style = if entry.active {
                bar_style.add_modifier(Modifier::BOLD).bg(Color::Blue)
            } else if entry.minimized {
                bar_style.add_modifier(Modifier::DIM)
            } else {
                bar_style
            };
            for (idx, ch) in label.chars().enumerate() {
                frame.set_cell(
                    i32::from(x + idx as u16),
                    i32::from(area.y),
                    &ch.to_string(),
                    style,
                );
            }
            self.hits.push(TaskbarHit {
                id: entry.id,
                rect: Rect {
                    x,
                    y: area.y,
                    width,
                    height: 1,
                },
            });
            x += width + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_area_reserves_bottom_strip() {
        let mut bar = Taskbar::new();
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (desktop, strip) = bar.split_area(area);
        assert_eq!(desktop.height, 23);
        assert_eq!(strip.y, 23);
        assert_eq!(strip.height, 1);
        assert!(bar.contains(5, 23));
        assert!(!bar.contains(5, 22));
    }

    #[test]
    fn split_area_handles_degenerate_height() {
        let mut bar = Taskbar::new();
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 0,
        };
        let (desktop, strip) = bar.split_area(area);
        assert_eq!(desktop.height, 0);
        assert_eq!(strip.height, 0);
    }
}
