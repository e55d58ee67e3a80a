//! The top-level cycle: scroll → render → decode one key → dispatch.

use std::io::{self, Write};
use std::sync::mpsc::Receiver;

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};

use crate::core::{Key, KeyDecoder};
use crate::kernel::{Direction, EditorConfig, EditorState};
use crate::tui::{ByteSource, TerminationSignal};
use crate::views::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    Handled,
    Ignored,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    Signal(TerminationSignal),
}

impl ExitReason {
    pub fn exit_code(self) -> i32 {
        match self {
            ExitReason::Quit => 0,
            ExitReason::Signal(signal) => signal.exit_code(),
        }
    }
}

pub fn dispatch(state: &mut EditorState, key: Key, quit: Key) -> DispatchResult {
    if key == quit {
        return DispatchResult::Quit;
    }

    let EditorState { buffer, viewport } = state;
    match key {
        Key::ArrowUp => viewport.move_cursor(Direction::Up, buffer),
        Key::ArrowDown => viewport.move_cursor(Direction::Down, buffer),
        Key::ArrowLeft => viewport.move_cursor(Direction::Left, buffer),
        Key::ArrowRight => viewport.move_cursor(Direction::Right, buffer),
        Key::PageUp => {
            let page = viewport.screen_rows();
            viewport.page_move(Direction::Up, page, buffer);
        }
        Key::PageDown => {
            let page = viewport.screen_rows();
            viewport.page_move(Direction::Down, page, buffer);
        }
        Key::Home => viewport.move_to_line_start(),
        Key::End => viewport.move_to_line_end(buffer),
        _ => return DispatchResult::Ignored,
    }
    DispatchResult::Handled
}

pub struct EditorLoop<S, W> {
    state: EditorState,
    decoder: KeyDecoder<S>,
    out: W,
    renderer: Renderer,
    quit: Key,
    signals: Option<Receiver<TerminationSignal>>,
    dirty: bool,
}

impl<S: ByteSource, W: Write> EditorLoop<S, W> {
    pub fn new(state: EditorState, source: S, out: W, config: &EditorConfig) -> Self {
        Self {
            state,
            decoder: KeyDecoder::new(source),
            out,
            renderer: Renderer::new(config.show_welcome),
            quit: config.quit_chord(),
            signals: None,
            dirty: true,
        }
    }

    pub fn with_signals(mut self, signals: Receiver<TerminationSignal>) -> Self {
        self.signals = Some(signals);
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs one cycle. Returns the exit reason once the loop should stop.
    ///
    /// Every decoded key, handled or not, is followed by a fresh frame; a read that times out
    /// leaves the screen as it is.
    pub fn step(&mut self) -> io::Result<Option<ExitReason>> {
        if self.dirty {
            self.state.viewport.scroll_to_cursor();
            self.renderer.refresh(&mut self.out, &self.state)?;
            self.dirty = false;
        }

        let key = self.decoder.read_key()?;
        if let Some(signal) = self.pending_signal() {
            tracing::warn!(?signal, "termination signal received");
            return Ok(Some(ExitReason::Signal(signal)));
        }
        let Some(key) = key else {
            return Ok(None);
        };
        self.dirty = true;

        match dispatch(&mut self.state, key, self.quit) {
            DispatchResult::Quit => Ok(Some(ExitReason::Quit)),
            DispatchResult::Handled => Ok(None),
            DispatchResult::Ignored => {
                tracing::trace!(?key, "key ignored");
                Ok(None)
            }
        }
    }

    pub fn run(&mut self) -> io::Result<ExitReason> {
        loop {
            if let Some(reason) = self.step()? {
                tracing::info!(?reason, "leaving editor loop");
                self.clear_screen()?;
                return Ok(reason);
            }
        }
    }

    fn pending_signal(&self) -> Option<TerminationSignal> {
        self.signals.as_ref()?.try_recv().ok()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/editor_loop.rs"]
mod tests;
