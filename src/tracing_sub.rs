use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Route tracing output to a log file. The alternate screen owns stdout and
/// stderr while the shell runs, so file logging is the only sink that does
/// not corrupt the display.
///
/// Safe to call multiple times; subsequent calls are no-ops for the global
/// subscriber.
pub fn init_file(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
