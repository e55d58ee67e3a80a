//! Escape-sequence decoding.
//!
//! A bare Escape keypress and the first byte of an arrow key look the same; the only way to
//! tell them apart is whether more bytes follow before the read deadline. Every state below
//! reads at most one byte, so a sequence never takes longer than four deadlines to resolve.

use std::io;

use super::event::{Key, ESC};
use crate::tui::stdin::ByteSource;

/// Position inside an escape sequence, after the leading `ESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    Escape,
    /// `ESC [`
    Csi,
    /// `ESC [ <digit>`, waiting for `~`.
    CsiParam(u8),
    /// `ESC O`
    Ss3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue(DecodeState),
    Emit(Key),
}

/// Feeds one byte (or an expired deadline) into the decoder. Unknown input emits `Escape`.
pub fn advance(state: DecodeState, byte: Option<u8>) -> Transition {
    use DecodeState::*;
    use Transition::*;

    let Some(byte) = byte else {
        return Emit(Key::Escape);
    };

    match (state, byte) {
        (Escape, b'[') => Continue(Csi),
        (Escape, b'O') => Continue(Ss3),
        (Csi, b'A') => Emit(Key::ArrowUp),
        (Csi, b'B') => Emit(Key::ArrowDown),
        (Csi, b'C') => Emit(Key::ArrowRight),
        (Csi, b'D') => Emit(Key::ArrowLeft),
        (Csi, b'H') => Emit(Key::Home),
        (Csi, b'F') => Emit(Key::End),
        (Csi, digit @ b'0'..=b'9') => Continue(CsiParam(digit)),
        (CsiParam(digit), b'~') => Emit(match digit {
            b'1' | b'7' => Key::Home,
            b'3' => Key::Delete,
            b'4' | b'8' => Key::End,
            b'5' => Key::PageUp,
            b'6' => Key::PageDown,
            _ => Key::Escape,
        }),
        (Ss3, b'H') => Emit(Key::Home),
        (Ss3, b'F') => Emit(Key::End),
        _ => Emit(Key::Escape),
    }
}

pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Decodes one keypress. `Ok(None)` when the deadline passed with no input at all.
    pub fn read_key(&mut self) -> io::Result<Option<Key>> {
        let Some(first) = self.source.read_byte()? else {
            return Ok(None);
        };
        if first != ESC {
            return Ok(Some(Key::from_byte(first)));
        }

        let mut seen = vec![ESC];
        let mut state = DecodeState::Escape;
        loop {
            let byte = self.source.read_byte()?;
            seen.extend(byte);
            match advance(state, byte) {
                Transition::Continue(next) => state = next,
                Transition::Emit(key) => {
                    if key == Key::Escape && seen.len() > 1 {
                        tracing::debug!(bytes = ?seen, "unrecognized escape sequence");
                    }
                    return Ok(Some(key));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/key_decoder.rs"]
mod tests;
