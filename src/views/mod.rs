//! Views: turning editor state into terminal output.

pub mod render;

pub use render::Renderer;
