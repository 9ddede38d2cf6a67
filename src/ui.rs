//! `UiFrame`: a thin wrapper around the ratatui buffer that clamps drawing
//! to the visible area.
//!
//! Window chrome routinely computes rectangles that drift partially or fully
//! outside the terminal buffer (windows can be dragged off-screen). Writing
//! out-of-bounds into the underlying `Buffer` panics, so all shell drawing
//! goes through this wrapper, which clips every draw call to the visible
//! area.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    /// Render a widget clipped to the visible area; silently drops draws
    /// that fall entirely outside it.
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        let clipped = area.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            return;
        }
        widget.render(clipped, self.buffer);
    }

    /// Write into a single cell if it is on screen. Coordinates are signed
    /// because window chrome may extend past the left/top edges.
    pub fn set_cell(&mut self, x: i32, y: i32, symbol: &str, style: ratatui::style::Style) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        if x >= self.area.x + self.area.width || y >= self.area.y + self.area.height {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((x, y)) {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }
}

/// Truncate a label to at most `width` characters, appending an ellipsis
/// when anything was cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_to_width;

    #[test]
    fn truncate_keeps_short_labels() {
        assert_eq!(truncate_to_width("Notes", 12), "Notes");
        assert_eq!(truncate_to_width("A long window title", 8), "A long …");
    }
}
