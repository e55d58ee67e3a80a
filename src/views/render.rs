//! Frame composition.
//!
//! A frame is built in memory and handed to the terminal with one write: hide the cursor, home
//! it, draw every screen line (erasing whatever a previous frame left to its right), then place
//! and show the cursor.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    terminal::{Clear, ClearType},
};

use crate::kernel::EditorState;

/// Left-margin marker for screen lines past the end of the file.
pub const EMPTY_LINE_MARKER: u8 = b'~';

pub fn welcome_banner() -> String {
    format!("Kilo editor -- version {}", env!("CARGO_PKG_VERSION"))
}

pub struct Renderer {
    banner: Option<String>,
}

impl Renderer {
    pub fn new(show_welcome: bool) -> Self {
        Self {
            banner: show_welcome.then(welcome_banner),
        }
    }

    pub fn compose(&self, state: &EditorState) -> io::Result<Vec<u8>> {
        let viewport = &state.viewport;
        let rows = viewport.screen_rows();
        let cols = viewport.screen_cols();
        let mut frame = Vec::with_capacity(rows * (cols + 8) + 32);

        queue!(frame, cursor::Hide, cursor::MoveTo(0, 0))?;

        for y in 0..rows {
            let file_row = viewport.row_offset() + y;
            match state.buffer.row_at(file_row) {
                Ok(row) => draw_clipped(&mut frame, row.rendered(), viewport.col_offset(), cols),
                Err(_) => match &self.banner {
                    Some(banner) if state.buffer.is_empty() && y == rows / 3 => {
                        draw_banner(&mut frame, banner.as_bytes(), cols)
                    }
                    _ => frame.push(EMPTY_LINE_MARKER),
                },
            }

            queue!(frame, Clear(ClearType::UntilNewLine))?;
            if y + 1 < rows {
                // OPOST is off; the terminal no longer adds the carriage return for us.
                frame.extend_from_slice(b"\r\n");
            }
        }

        let (x, y) = viewport.screen_cursor();
        queue!(frame, cursor::MoveTo(to_u16(x), to_u16(y)), cursor::Show)?;
        Ok(frame)
    }

    /// Composes the frame for `state` and sends it in a single write.
    pub fn refresh<W: Write>(&self, out: &mut W, state: &EditorState) -> io::Result<()> {
        let frame = self.compose(state)?;
        out.write_all(&frame)?;
        out.flush()
    }
}

fn draw_clipped(frame: &mut Vec<u8>, rendered: &[u8], col_offset: usize, cols: usize) {
    if col_offset >= rendered.len() {
        return;
    }
    let end = rendered.len().min(col_offset + cols);
    frame.extend_from_slice(&rendered[col_offset..end]);
}

fn draw_banner(frame: &mut Vec<u8>, banner: &[u8], cols: usize) {
    let banner = &banner[..banner.len().min(cols)];
    let mut padding = (cols - banner.len()) / 2;
    if padding > 0 {
        frame.push(EMPTY_LINE_MARKER);
        padding -= 1;
    }
    frame.resize(frame.len() + padding, b' ');
    frame.extend_from_slice(banner);
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/views/render.rs"]
mod tests;
