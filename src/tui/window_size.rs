use std::io::Write;

use crossterm::{cursor, queue};

use super::error::{Result, TerminalError};
use super::stdin::ByteSource;

/// Longest cursor position report we are willing to buffer.
const REPORT_LIMIT: usize = 32;

/// Returns `(rows, cols)`.
///
/// Asks the kernel first; terminals that cannot answer get the cursor pushed into the
/// bottom-right corner and its position reported back through `input`.
pub fn query_window_size<S, W>(input: &mut S, out: &mut W) -> Result<(usize, usize)>
where
    S: ByteSource + ?Sized,
    W: Write,
{
    if let Some((rows, cols)) = ioctl_window_size(libc::STDOUT_FILENO) {
        tracing::info!(rows, cols, "window size from ioctl");
        return Ok((rows, cols));
    }

    let size = query_by_cursor_report(input, out)?;
    tracing::info!(rows = size.0, cols = size.1, "window size from cursor report");
    Ok(size)
}

// Not `crossterm::terminal::size()`: its `tput` fallback would answer before the cursor report.
fn ioctl_window_size(fd: libc::c_int) -> Option<(usize, usize)> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    if unsafe { libc::ioctl(fd, libc::TIOCGWINSZ as _, &mut ws) } == -1 {
        return None;
    }
    if ws.ws_row == 0 || ws.ws_col == 0 {
        return None;
    }
    Some((ws.ws_row as usize, ws.ws_col as usize))
}

pub fn query_by_cursor_report<S, W>(input: &mut S, out: &mut W) -> Result<(usize, usize)>
where
    S: ByteSource + ?Sized,
    W: Write,
{
    // The terminal clamps the move to the real bottom-right corner.
    queue!(out, cursor::MoveRight(999), cursor::MoveDown(999))
        .map_err(|e| TerminalError::io("write", e))?;
    out.write_all(b"\x1b[6n")
        .and_then(|()| out.flush())
        .map_err(|e| TerminalError::io("write", e))?;

    let report = read_cursor_report(input)?;
    let (rows, cols) = parse_cursor_report(&report)?;
    if rows == 0 || cols == 0 {
        return Err(TerminalError::WindowSize(format!(
            "terminal reported {}x{}",
            rows, cols
        )));
    }
    Ok((rows, cols))
}

/// Collects bytes up to, not including, the `R` terminator.
fn read_cursor_report<S: ByteSource + ?Sized>(input: &mut S) -> Result<Vec<u8>> {
    let mut report = Vec::with_capacity(REPORT_LIMIT);
    while report.len() < REPORT_LIMIT {
        match input.read_byte().map_err(|e| TerminalError::io("read", e))? {
            Some(b'R') => return Ok(report),
            Some(byte) => report.push(byte),
            None => break,
        }
    }
    Err(TerminalError::WindowSize(
        "no cursor position report".to_string(),
    ))
}

/// Parses `ESC [ <row> ; <col>` into `(row, col)`.
pub fn parse_cursor_report(report: &[u8]) -> Result<(usize, usize)> {
    let malformed = || {
        TerminalError::WindowSize(format!(
            "malformed cursor position report {:?}",
            String::from_utf8_lossy(report)
        ))
    };

    let body = report.strip_prefix(b"\x1b[").ok_or_else(malformed)?;
    let body = std::str::from_utf8(body).map_err(|_| malformed())?;
    let (row, col) = body.split_once(';').ok_or_else(malformed)?;
    let row = row.parse::<usize>().map_err(|_| malformed())?;
    let col = col.parse::<usize>().map_err(|_| malformed())?;
    Ok((row, col))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/window_size.rs"]
mod tests;
