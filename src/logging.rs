//! tracing setup. Every formatted event goes through the stderr buffer so
//! nothing is written over the TUI while it owns the terminal.

use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// One formatted log event, handed to the stderr buffer when dropped.
struct BufferedLine(Vec<u8>);

impl Write for BufferedLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for BufferedLine {
    fn drop(&mut self) {
        if !self.0.is_empty() {
            let line = String::from_utf8_lossy(&self.0);
            crate::stderr_buffer::warn(line.trim_end().to_string());
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("colombia_geogame={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(|| BufferedLine(Vec::new()))
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}
