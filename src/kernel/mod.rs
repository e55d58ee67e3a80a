//! Headless editor core: cursor/scroll state and configuration.

pub mod services;
pub mod state;
pub mod viewport;

pub use services::ports::EditorConfig;
pub use state::EditorState;
pub use viewport::{Direction, ViewportState};
