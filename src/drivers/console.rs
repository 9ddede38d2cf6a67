use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;

use super::InputDriver;

/// Real-console input driver over crossterm's event queue.
#[derive(Debug, Default)]
pub struct ConsoleDriver {
    mouse_captured: bool,
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputDriver for ConsoleDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if self.mouse_captured == enabled {
            return Ok(());
        }
        self.mouse_captured = enabled;
        if enabled {
            execute!(stdout(), EnableMouseCapture)
        } else {
            execute!(stdout(), DisableMouseCapture)
        }
    }
}
