use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Key;
use crate::models::DEFAULT_TAB_STOP;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub tab_stop: usize,
    /// How long a read waits for input; also bounds escape-sequence lookahead.
    pub read_timeout_ms: u64,
    /// Quit chord is Ctrl + this letter.
    pub quit_key: char,
    pub show_welcome: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
            read_timeout_ms: 100,
            quit_key: 'q',
            show_welcome: true,
        }
    }
}

impl EditorConfig {
    pub fn tab_stop(&self) -> usize {
        self.tab_stop.max(1)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Ctrl + `quit_key`; anything but an ASCII letter falls back to Ctrl-Q.
    pub fn quit_chord(&self) -> Key {
        if self.quit_key.is_ascii_alphabetic() {
            return Key::ctrl(self.quit_key);
        }
        let fallback = Self::default().quit_key;
        tracing::warn!(quit_key = %self.quit_key, %fallback, "quit_key is not an ASCII letter");
        Key::ctrl(fallback)
    }
}
