//! Terminal integration layer (termios + crossterm commands).
//!
//! Everything that touches the real terminal device lives here; the rest of the crate only
//! sees `ByteSource` for input and `io::Write` for output.

pub mod error;
pub mod stdin;
pub mod stdout;
pub mod terminal_guard;
pub mod window_size;

pub use error::TerminalError;
pub use stdin::{ByteSource, StdinSource};
pub use stdout::RawStdout;
pub use terminal_guard::{TerminalGuard, TerminalRestorer, TerminationSignal};
pub use window_size::query_window_size;
