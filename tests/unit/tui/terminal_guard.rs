use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalOps for MockOps {
    fn setup(&self) -> Result<()> {
        self.calls.lock().unwrap().push("setup");
        Ok(())
    }

    fn restore(&self) -> Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

struct NotATtyOps;

impl TerminalOps for NotATtyOps {
    fn setup(&self) -> Result<()> {
        Err(TerminalError::NotATty)
    }

    fn restore(&self) -> Result<()> {
        panic!("restore must not run when setup failed");
    }
}

#[test]
fn terminal_guard_restores_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn leave_raw_mode_twice_restores_once() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();

    guard.leave_raw_mode().unwrap();
    guard.leave_raw_mode().unwrap();
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn terminal_restorer_is_shared_with_guard() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    assert!(restorer.is_restored());
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn failed_setup_yields_no_guard() {
    let err = TerminalGuard::with_ops(Arc::new(NotATtyOps)).err().unwrap();
    assert!(matches!(err, TerminalError::NotATty));
}

#[test]
fn make_raw_disables_line_discipline() {
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };
    termios.c_iflag = libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON;
    termios.c_oflag = libc::OPOST;
    termios.c_lflag = libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG;
    termios.c_cc[libc::VMIN] = 1;

    make_raw(&mut termios, 1);

    assert_eq!(termios.c_iflag, 0);
    assert_eq!(termios.c_oflag & libc::OPOST, 0);
    assert_eq!(termios.c_lflag, 0);
    assert_eq!(termios.c_cflag & libc::CS8, libc::CS8);
    assert_eq!(termios.c_cc[libc::VMIN], 0);
    assert_eq!(termios.c_cc[libc::VTIME], 1);
}

#[test]
fn read_deadline_rounds_up_to_tenths() {
    assert_eq!(read_deadline_deciseconds(Duration::from_millis(100)), 1);
    assert_eq!(read_deadline_deciseconds(Duration::from_millis(150)), 2);
    assert_eq!(read_deadline_deciseconds(Duration::ZERO), 1);
    assert_eq!(read_deadline_deciseconds(Duration::from_secs(60)), 255);
}

#[test]
fn termination_exit_codes_follow_shell_convention() {
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
    assert_eq!(TerminationSignal::SigHup.exit_code(), 129);
}
