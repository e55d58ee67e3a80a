use crate::models::TextBuffer;

use super::viewport::ViewportState;

/// Everything the loop mutates: the file rows and the cursor/scroll window over them.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub buffer: TextBuffer,
    pub viewport: ViewportState,
}

impl EditorState {
    pub fn new(buffer: TextBuffer, screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            buffer,
            viewport: ViewportState::new(screen_rows, screen_cols),
        }
    }
}
