pub const ESC: u8 = 0x1b;

/// One logical keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable byte (0x20..=0x7e) or any byte above 0x7f.
    Char(u8),
    /// A control byte (0x00..=0x1f, 0x7f) other than a lone escape.
    Ctrl(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
    Escape,
}

impl Key {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            ESC => Key::Escape,
            b if b.is_ascii_control() => Key::Ctrl(b),
            b => Key::Char(b),
        }
    }

    /// The byte a terminal sends for Ctrl + `letter`.
    pub fn ctrl(letter: char) -> Self {
        Key::Ctrl((letter as u8) & 0x1f)
    }
}
