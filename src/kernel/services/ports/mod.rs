//! Service ports: data contracts.

pub mod config;

pub use config::EditorConfig;
