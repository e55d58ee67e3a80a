//! kilo - a small raw-terminal text viewer core.
//!
//! Module layout:
//! - tui: raw mode session, byte input, window size discovery
//! - core: key events and the escape-sequence decoder
//! - models: rows and the text buffer
//! - kernel: viewport/cursor state, editor state, configuration
//! - views: frame rendering
//! - app: the editor loop

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod tui;
pub mod views;
