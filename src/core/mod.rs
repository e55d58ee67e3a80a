//! Input events.
//!
//! - event: the closed set of logical keys
//! - key_decoder: raw bytes → keys

pub mod event;
pub mod key_decoder;

pub use event::Key;
pub use key_decoder::KeyDecoder;
