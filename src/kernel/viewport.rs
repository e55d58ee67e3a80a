use crate::models::{Row, TextBuffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Cursor position in file coordinates plus the visible window onto the file.
///
/// `cx` may equal the row length (after the last byte) and `cy` may equal the row count (the
/// virtual line after the last one). The scroll offsets are only written by
/// [`ViewportState::scroll_to_cursor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportState {
    cx: usize,
    cy: usize,
    screen_rows: usize,
    screen_cols: usize,
    row_offset: usize,
    col_offset: usize,
}

impl ViewportState {
    pub fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            cx: 0,
            cy: 0,
            screen_rows,
            screen_cols,
            row_offset: 0,
            col_offset: 0,
        }
    }

    pub fn cx(&self) -> usize {
        self.cx
    }

    pub fn cy(&self) -> usize {
        self.cy
    }

    pub fn screen_rows(&self) -> usize {
        self.screen_rows
    }

    pub fn screen_cols(&self) -> usize {
        self.screen_cols
    }

    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    pub fn col_offset(&self) -> usize {
        self.col_offset
    }

    pub fn move_cursor(&mut self, direction: Direction, buffer: &TextBuffer) {
        let row_count = buffer.row_count();

        match direction {
            Direction::Left => {
                if self.cx > 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = row_len(buffer, self.cy);
                }
            }
            Direction::Right => {
                if self.cy < row_count {
                    if self.cx < row_len(buffer, self.cy) {
                        self.cx += 1;
                    } else if self.cy + 1 < row_count {
                        self.cy += 1;
                        self.cx = 0;
                    }
                }
            }
            Direction::Up => {
                self.cy = self.cy.saturating_sub(1);
            }
            Direction::Down => {
                if self.cy < row_count {
                    self.cy += 1;
                }
            }
        }

        // The row under the cursor may have changed and be shorter.
        self.cx = self.cx.min(row_len(buffer, self.cy));
    }

    pub fn page_move(&mut self, direction: Direction, page_size: usize, buffer: &TextBuffer) {
        for _ in 0..page_size {
            self.move_cursor(direction, buffer);
        }
    }

    pub fn move_to_line_start(&mut self) {
        self.cx = 0;
    }

    pub fn move_to_line_end(&mut self, buffer: &TextBuffer) {
        self.cx = row_len(buffer, self.cy);
    }

    /// Brings the cursor back inside the visible window.
    pub fn scroll_to_cursor(&mut self) {
        if self.cy < self.row_offset {
            self.row_offset = self.cy;
        }
        if self.screen_rows > 0 && self.cy >= self.row_offset + self.screen_rows {
            self.row_offset = self.cy + 1 - self.screen_rows;
        }

        if self.cx < self.col_offset {
            self.col_offset = self.cx;
        }
        if self.screen_cols > 0 && self.cx >= self.col_offset + self.screen_cols {
            self.col_offset = self.cx + 1 - self.screen_cols;
        }
    }

    /// Cursor relative to the top-left of the screen as `(x, y)`, zero based.
    pub fn screen_cursor(&self) -> (usize, usize) {
        (
            self.cx.saturating_sub(self.col_offset),
            self.cy.saturating_sub(self.row_offset),
        )
    }
}

/// Length of row `index`, or 0 for the virtual line past the end of the buffer.
fn row_len(buffer: &TextBuffer, index: usize) -> usize {
    buffer.row_at(index).map_or(0, Row::len)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/viewport.rs"]
mod tests;
