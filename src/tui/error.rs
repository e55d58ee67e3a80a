use std::io;

pub type Result<T> = std::result::Result<T, TerminalError>;

#[derive(Debug)]
pub enum TerminalError {
    /// stdin is a file or pipe, not an interactive terminal.
    NotATty,
    Io { op: &'static str, source: io::Error },
    WindowSize(String),
}

impl TerminalError {
    pub fn io(op: &'static str, source: io::Error) -> Self {
        TerminalError::Io { op, source }
    }

    /// Wraps `errno` from the syscall that just failed.
    pub fn last_os_error(op: &'static str) -> Self {
        Self::io(op, io::Error::last_os_error())
    }
}

impl std::fmt::Display for TerminalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalError::NotATty => write!(f, "stdin is not a terminal"),
            TerminalError::Io { op, source } => write!(f, "{}: {}", op, source),
            TerminalError::WindowSize(msg) => write!(f, "cannot determine window size: {}", msg),
        }
    }
}

impl std::error::Error for TerminalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerminalError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for TerminalError {
    fn from(e: io::Error) -> Self {
        TerminalError::io("io", e)
    }
}
