//! The demo desktop shell: routes terminal input to the window manager and
//! paints the managed windows plus taskbar each frame.
//!
//! This is the "collaborator" side of the engine boundary: everything here
//! goes through the manager's public lifecycle and pointer APIs and the
//! drained lifecycle events. The engine never calls back into the shell.

use std::collections::BTreeMap;

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEvent, MouseEventKind};
use indoc::indoc;
use ratatui::Frame;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::constants::TASKBAR_HEIGHT;
use crate::geometry::Viewport;
use crate::taskbar::{Taskbar, TaskbarEntry};
use crate::ui::UiFrame;
use crate::window::decorator::{self, HeaderAction};
use crate::window::{PointerPos, WindowEvent, WindowId, WindowManager, WindowOptions, WmError};

const DEMO_WINDOWS: &[(&str, &str)] = &[
    (
        "Welcome",
        indoc! {"
            Drag a title bar to move a window, grab the
            bottom-right corner to resize it.

            Title-bar buttons: _ minimize, □ maximize, x close.

            n  open another window
            q  quit
        "},
    ),
    (
        "Notes",
        indoc! {"
            Windows can be dragged partially off-screen
            and resized past the viewport; the shell clips
            the drawing, the engine keeps the real geometry.
        "},
    ),
    (
        "Stacking",
        indoc! {"
            Clicking any window raises it. The taskbar at
            the bottom lists every window; click a button
            to restore or minimize it.
        "},
    ),
];

pub struct Desktop {
    pub windows: WindowManager,
    taskbar: Taskbar,
    content: BTreeMap<WindowId, String>,
    spawn_index: usize,
}

impl Desktop {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            windows: WindowManager::new(viewport),
            taskbar: Taskbar::new(),
            content: BTreeMap::new(),
            spawn_index: 0,
        }
    }

    pub fn spawn_initial(&mut self, count: usize) {
        for _ in 0..count {
            self.spawn_next();
        }
    }

    /// Open the next demo window, cycling through the templates.
    pub fn spawn_next(&mut self) {
        let (title, body) = DEMO_WINDOWS[self.spawn_index % DEMO_WINDOWS.len()];
        self.spawn_index += 1;
        match self.windows.create_window(WindowOptions::new(title)) {
            Ok(id) => {
                self.content.insert(id, body.to_string());
            }
            Err(err) => tracing::warn!(%err, "could not open demo window"),
        }
    }

    /// Returns `true` when the event was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let handled = match event {
            Event::Resize(width, height) => {
                self.windows.set_viewport(
                    Viewport::new(*width, *height).with_taskbar(TASKBAR_HEIGHT),
                );
                true
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('n') => {
                    self.spawn_next();
                    true
                }
                KeyCode::Char('m') => self
                    .windows
                    .active_id()
                    .is_some_and(|id| self.windows.minimize_window(id).is_ok()),
                KeyCode::Char('f') => self
                    .windows
                    .active_id()
                    .is_some_and(|id| self.windows.maximize_window(id).is_ok()),
                KeyCode::Char('w') => self
                    .windows
                    .active_id()
                    .is_some_and(|id| self.windows.close_window(id).is_ok()),
                _ => false,
            },
            _ => false,
        };
        self.apply_lifecycle_events();
        handled
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        let pointer = PointerPos::new(i32::from(mouse.column), i32::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(_) => {
                if self.taskbar.contains(mouse.column, mouse.row) {
                    if let Some(id) = self.taskbar.hit_test(mouse.column, mouse.row) {
                        self.toggle_from_taskbar(id);
                    }
                    return true;
                }
                let Some(id) = self.windows.hit_test(pointer) else {
                    return false;
                };
                let Some(record) = self.windows.window(id) else {
                    return false;
                };
                match decorator::hit_test(record, pointer) {
                    HeaderAction::Close => {
                        let _ = self.windows.close_window(id);
                    }
                    HeaderAction::Minimize => {
                        let _ = self.windows.minimize_window(id);
                    }
                    HeaderAction::Maximize => {
                        let _ = self.windows.maximize_window(id);
                    }
                    HeaderAction::Drag => {
                        // A maximized window refuses the drag but a title-bar
                        // click should still raise it.
                        if let Err(WmError::ConstraintViolation) =
                            self.windows.begin_drag(id, pointer)
                        {
                            let _ = self.windows.focus_window(id);
                        }
                    }
                    HeaderAction::Resize => {
                        let _ = self.windows.begin_resize(id, pointer);
                    }
                    HeaderAction::None => {
                        let _ = self.windows.focus_window(id);
                    }
                }
                true
            }
            MouseEventKind::Drag(_) => self.windows.pointer_move(pointer),
            MouseEventKind::Up(_) => self.windows.end_gesture(),
            _ => false,
        }
    }

    /// Taskbar click: restore a minimized window, minimize the active one,
    /// otherwise just raise it.
    fn toggle_from_taskbar(&mut self, id: WindowId) {
        let Some(record) = self.windows.window(id) else {
            return;
        };
        if record.minimized {
            let _ = self.windows.restore_window(id);
        } else if self.windows.active_id() == Some(id) {
            let _ = self.windows.minimize_window(id);
        } else {
            let _ = self.windows.focus_window(id);
        }
    }

    fn apply_lifecycle_events(&mut self) {
        for event in self.windows.take_events() {
            if let WindowEvent::Closed(id) = event {
                self.content.remove(&id);
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let mut frame = UiFrame::new(frame);
        let (desktop_area, _) = self.taskbar.split_area(frame.area());

        // Desktop backdrop.
        let backdrop = Style::default().bg(Color::Indexed(23));
        for y in desktop_area.y..desktop_area.y + desktop_area.height {
            for x in desktop_area.x..desktop_area.x + desktop_area.width {
                frame.set_cell(i32::from(x), i32::from(y), " ", backdrop);
            }
        }

        // Windows bottom to top; overdraw handles occlusion.
        let active = self.windows.active_id();
        for id in self.windows.ids() {
            let Some(record) = self.windows.window(id) else {
                continue;
            };
            if !record.is_visible() {
                continue;
            }
            decorator::render_window(&mut frame, record, desktop_area, active == Some(id));
            if let Some(text) = self.content.get(&id)
                && let Some(area) =
                    decorator::visible_rect(decorator::content_rect(record.geometry), desktop_area)
            {
                frame.render_widget(Paragraph::new(text.as_str()), area);
            }
        }

        let mut entries: Vec<TaskbarEntry> = Vec::new();
        let mut ids = self.windows.ids();
        ids.sort_unstable(); // creation order for a stable taskbar
        for id in ids {
            if let Some(record) = self.windows.window(id) {
                entries.push(TaskbarEntry {
                    id,
                    title: record.title.clone(),
                    minimized: record.minimized,
                    active: active == Some(id),
                });
            }
        }
        self.taskbar.render(&mut frame, &entries);
    }
}
