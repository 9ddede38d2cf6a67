use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use desk_wm::constants::TASKBAR_HEIGHT;
use desk_wm::desktop::Desktop;
use desk_wm::drivers::InputDriver;
use desk_wm::drivers::console::ConsoleDriver;
use desk_wm::event_loop::{ControlFlow, EventLoop};
use desk_wm::geometry::Viewport;
use desk_wm::tracing_sub;

#[derive(Debug, Parser)]
#[command(about = "Floating window manager demo desktop")]
struct Args {
    /// Number of windows to open at startup.
    #[arg(long, default_value_t = 3)]
    windows: usize,

    /// Poll interval in milliseconds (render tick).
    #[arg(long, default_value_t = 16)]
    poll_ms: u64,

    /// Write debug logs to this file (stdout/stderr are owned by the UI).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(path) = args.log_file.as_deref() {
        tracing_sub::init_file(path)?;
    }

    let (width, height) = terminal::size()?;
    let mut app = Desktop::new(Viewport::new(width, height).with_taskbar(TASKBAR_HEIGHT));
    app.spawn_initial(args.windows);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut driver = ConsoleDriver::new();
    driver.set_mouse_capture(true)?;
    let result = run(&mut terminal, driver, &mut app, args.poll_ms);

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    driver: ConsoleDriver,
    app: &mut Desktop,
    poll_ms: u64,
) -> io::Result<()> {
    let mut event_loop = EventLoop::new(driver, Duration::from_millis(poll_ms));
    event_loop.run(|_, event| {
        match event {
            None => {
                terminal.draw(|frame| app.render(frame)).map_err(io::Error::other)?;
            }
            Some(event) => {
                if let Event::Key(key) = &event
                    && key.kind == KeyEventKind::Press
                    && key.code == KeyCode::Char('q')
                {
                    return Ok(ControlFlow::Quit);
                }
                app.handle_event(&event);
            }
        }
        Ok(ControlFlow::Continue)
    })
}
