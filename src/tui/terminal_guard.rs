//! Raw mode session.
//!
//! The original terminal attributes are captured once when the guard is created and put back
//! when it is dropped, when a panic unwinds through `main`, or when a termination signal
//! arrives. Every path goes through [`TerminalRestorer`], which applies them at most once.

use std::os::unix::io::RawFd;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::error::{Result, TerminalError};

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> Result<()>;
    fn restore(&self) -> Result<()>;
}

/// Converts a read timeout into the terminal's `VTIME` unit (tenths of a second).
pub fn read_deadline_deciseconds(timeout: Duration) -> u8 {
    let tenths = (timeout.as_millis() + 99) / 100;
    tenths.clamp(1, u8::MAX as u128) as u8
}

/// Applies the raw-mode flag changes to a copy of the original attributes.
pub fn make_raw(termios: &mut libc::termios, read_deadline: u8) {
    termios.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    termios.c_oflag &= !libc::OPOST;
    termios.c_cflag |= libc::CS8;
    termios.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
    termios.c_cc[libc::VMIN] = 0;
    termios.c_cc[libc::VTIME] = read_deadline;
}

pub struct TermiosOps {
    fd: RawFd,
    read_deadline: u8,
    original: Mutex<Option<libc::termios>>,
}

impl TermiosOps {
    pub fn stdin(read_timeout: Duration) -> Self {
        Self {
            fd: libc::STDIN_FILENO,
            read_deadline: read_deadline_deciseconds(read_timeout),
            original: Mutex::new(None),
        }
    }

    fn apply(&self, termios: &libc::termios) -> Result<()> {
        // TCSAFLUSH drops input that was typed but not read yet.
        if unsafe { libc::tcsetattr(self.fd, libc::TCSAFLUSH, termios) } == -1 {
            return Err(TerminalError::last_os_error("tcsetattr"));
        }
        Ok(())
    }
}

impl TerminalOps for TermiosOps {
    fn setup(&self) -> Result<()> {
        if unsafe { libc::isatty(self.fd) } == 0 {
            return Err(TerminalError::NotATty);
        }

        let mut original: libc::termios = unsafe { std::mem::zeroed() };
        if unsafe { libc::tcgetattr(self.fd, &mut original) } == -1 {
            return Err(TerminalError::last_os_error("tcgetattr"));
        }
        *self.original.lock().unwrap_or_else(|e| e.into_inner()) = Some(original);

        let mut raw = original;
        make_raw(&mut raw, self.read_deadline);
        self.apply(&raw)
    }

    fn restore(&self) -> Result<()> {
        let original = *self.original.lock().unwrap_or_else(|e| e.into_inner());
        match original {
            Some(original) => self.apply(&original),
            None => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    /// Puts stdin into raw mode with the given read deadline.
    pub fn enter_raw_mode(read_timeout: Duration) -> Result<Self> {
        Self::with_ops(Arc::new(TermiosOps::stdin(read_timeout)))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> Result<Self> {
        ops.setup()?;
        tracing::info!("raw mode entered");
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }

    /// Safe to call any number of times, and before printing a fatal message.
    pub fn leave_raw_mode(&self) -> Result<()> {
        let first = !self.restorer.is_restored();
        self.restorer.restore()?;
        if first {
            tracing::info!("raw mode left");
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.leave_raw_mode();
    }
}

/// Restores the terminal before the previously installed hook prints the panic message.
pub fn install_panic_hook(restorer: TerminalRestorer) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restorer.restore();
        previous(info);
    }));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigTerm,
    SigHup,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigTerm => 128 + libc::SIGTERM,
            TerminationSignal::SigHup => 128 + libc::SIGHUP,
        }
    }
}

/// Ctrl-C no longer raises SIGINT in raw mode, so only external termination is watched.
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> std::io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGHUP, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGTERM, SIGHUP])?;
    Ok(std::thread::spawn(move || {
        for sig in signals.forever() {
            let signal = match sig {
                SIGTERM => TerminationSignal::SigTerm,
                SIGHUP => TerminationSignal::SigHup,
                _ => continue,
            };

            let _ = tx.send(signal);

            // Grace period: if the main loop is wedged, restore + hard-exit.
            std::thread::sleep(Duration::from_secs(2));
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
