//! 文本缓冲区模型
//!
//! Rows in file order. A buffer with no rows (new file) is not the same as a buffer holding
//! a single empty row (a file containing just a newline).

use super::row::{Row, DEFAULT_TAB_STOP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row index {} out of range for buffer of {} rows",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexError {}

#[derive(Debug, Clone)]
pub struct TextBuffer {
    rows: Vec<Row>,
    tab_stop: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::with_tab_stop(DEFAULT_TAB_STOP)
    }

    pub fn with_tab_stop(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            tab_stop: tab_stop.max(1),
        }
    }

    /// Builds a buffer from lines supplied by the caller, terminators optional.
    pub fn from_lines<I, L>(lines: I, tab_stop: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut buffer = Self::with_tab_stop(tab_stop);
        for line in lines {
            buffer.append_row(line.as_ref());
        }
        buffer
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Appends a line at the end, dropping one trailing `\n` or `\r\n`.
    pub fn append_row(&mut self, line: &[u8]) {
        let content = strip_line_terminator(line);
        self.rows.push(Row::new(content.to_vec(), self.tab_stop));
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_at(&self, index: usize) -> Result<&Row, IndexError> {
        self.rows.get(index).ok_or(IndexError {
            index,
            len: self.rows.len(),
        })
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
    if let Some(stripped) = line.strip_suffix(b"\r\n") {
        stripped
    } else if let Some(stripped) = line.strip_suffix(b"\n") {
        stripped
    } else {
        line
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
