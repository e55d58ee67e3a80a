use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use kilo::app::{EditorLoop, ExitReason};
use kilo::kernel::services::adapters::load_settings;
use kilo::kernel::EditorState;
use kilo::models::TextBuffer;
use kilo::tui::terminal_guard::{install_panic_hook, install_termination_signals};
use kilo::tui::{query_window_size, RawStdout, StdinSource, TerminalGuard};

mod logging;

fn main() {
    let logging = logging::init();
    let code = match run() {
        Ok(reason) => reason.exit_code(),
        Err(err) => {
            // The terminal guard has been dropped by now, so this lands on a cooked terminal.
            tracing::error!(error = %err, "fatal");
            eprintln!("kilo: {}", err);
            1
        }
    };
    drop(logging);
    std::process::exit(code);
}

fn run() -> Result<ExitReason, Box<dyn Error>> {
    let config = load_settings();
    let buffer = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => open_file(&path, config.tab_stop())?,
        None => TextBuffer::with_tab_stop(config.tab_stop()),
    };

    let guard = TerminalGuard::enter_raw_mode(config.read_timeout())?;
    install_panic_hook(guard.restorer());

    let (signal_tx, signal_rx) = mpsc::channel();
    if let Err(err) = install_termination_signals(guard.restorer(), signal_tx) {
        tracing::warn!(error = %err, "termination signals not watched");
    }

    let mut input = StdinSource;
    let mut out = RawStdout;
    let (rows, cols) = query_window_size(&mut input, &mut out)?;

    let state = EditorState::new(buffer, rows, cols);
    let mut editor = EditorLoop::new(state, input, out, &config).with_signals(signal_rx);
    let reason = editor.run()?;

    guard.leave_raw_mode()?;
    Ok(reason)
}

/// Reads `path` line by line as raw bytes; invalid UTF-8 and NUL bytes are kept as they are.
fn open_file(path: &Path, tab_stop: usize) -> io::Result<TextBuffer> {
    let with_path =
        |err: io::Error| io::Error::new(err.kind(), format!("{}: {}", path.display(), err));

    let mut reader = BufReader::new(File::open(path).map_err(with_path)?);
    let mut buffer = TextBuffer::with_tab_stop(tab_stop);
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).map_err(with_path)? == 0 {
            break;
        }
        buffer.append_row(&line);
    }

    tracing::info!(path = %path.display(), rows = buffer.row_count(), "file loaded");
    Ok(buffer)
}
