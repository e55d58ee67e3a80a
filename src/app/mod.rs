//! Application layer: the editor loop that ties input, state and rendering together.

pub mod editor_loop;

pub use editor_loop::{dispatch, DispatchResult, EditorLoop, ExitReason};
