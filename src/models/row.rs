//! 单行文本
//!
//! `content` is the line exactly as stored in the file, minus its terminator. `rendered` is
//! what goes on screen; it is rebuilt from `content` on every change and never edited directly.

pub const DEFAULT_TAB_STOP: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    content: Vec<u8>,
    rendered: Vec<u8>,
}

impl Row {
    pub fn new(content: Vec<u8>, tab_stop: usize) -> Self {
        let rendered = render_tabs(&content, tab_stop);
        Self { content, rendered }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn rendered(&self) -> &[u8] {
        &self.rendered
    }

    pub fn set_content(&mut self, content: Vec<u8>, tab_stop: usize) {
        self.rendered = render_tabs(&content, tab_stop);
        self.content = content;
    }

    /// Length of `content` in bytes; the cursor's column range is `0..=len()`.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn rendered_len(&self) -> usize {
        self.rendered.len()
    }
}

/// Expands every tab to at least one space, stopping on the next multiple of `tab_stop`.
pub fn render_tabs(content: &[u8], tab_stop: usize) -> Vec<u8> {
    let tab_stop = tab_stop.max(1);
    let tabs = content.iter().filter(|&&b| b == b'\t').count();
    let mut rendered = Vec::with_capacity(content.len() + tabs * (tab_stop - 1));

    for &byte in content {
        if byte == b'\t' {
            rendered.push(b' ');
            while rendered.len() % tab_stop != 0 {
                rendered.push(b' ');
            }
        } else {
            rendered.push(byte);
        }
    }

    rendered
}
