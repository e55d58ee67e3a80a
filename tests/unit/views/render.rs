use super::*;
use crate::kernel::Direction;
use crate::models::TextBuffer;

const PREFIX: &[u8] = b"\x1b[?25l\x1b[1;1H";
const ERASE: &[u8] = b"\x1b[K";

/// Splits a frame into its screen lines and the trailing cursor commands.
fn screen_lines(frame: &[u8]) -> (Vec<Vec<u8>>, Vec<u8>) {
    let body = frame.strip_prefix(PREFIX).expect("frame prefix");
    let text = String::from_utf8_lossy(body).into_owned();
    let mut lines: Vec<Vec<u8>> = text.split("\r\n").map(|l| l.as_bytes().to_vec()).collect();

    let last = lines.pop().unwrap();
    let erase_at = find(&last, ERASE).expect("last line erase");
    let tail = last[erase_at + ERASE.len()..].to_vec();
    lines.push(last[..erase_at + ERASE.len()].to_vec());

    let lines = lines
        .into_iter()
        .map(|l| l.strip_suffix(ERASE).expect("line erase").to_vec())
        .collect();
    (lines, tail)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[test]
fn test_empty_buffer_shows_centered_banner() {
    let state = EditorState::new(TextBuffer::new(), 24, 80);
    let frame = Renderer::new(true).compose(&state).unwrap();
    let (lines, tail) = screen_lines(&frame);

    assert_eq!(lines.len(), 24);
    let banner = welcome_banner();
    let padding = (80 - banner.len()) / 2;
    let mut expected = vec![b'~'];
    expected.extend(std::iter::repeat(b' ').take(padding - 1));
    expected.extend_from_slice(banner.as_bytes());
    assert_eq!(lines[8], expected);

    for (y, line) in lines.iter().enumerate() {
        if y != 8 {
            assert_eq!(line, b"~", "line {}", y);
        }
    }
    assert_eq!(tail, b"\x1b[1;1H\x1b[?25h");
}

#[test]
fn test_banner_hidden_when_disabled_or_buffer_has_rows() {
    let state = EditorState::new(TextBuffer::new(), 24, 80);
    let (lines, _) = screen_lines(&Renderer::new(false).compose(&state).unwrap());
    assert!(lines.iter().all(|l| l == b"~"));

    let state = EditorState::new(TextBuffer::from_lines([""], 8), 24, 80);
    let (lines, _) = screen_lines(&Renderer::new(true).compose(&state).unwrap());
    assert_eq!(lines[0], b"");
    assert!(lines[1..].iter().all(|l| l == b"~"));
}

#[test]
fn test_banner_truncated_to_narrow_screen() {
    let state = EditorState::new(TextBuffer::new(), 3, 10);
    let (lines, _) = screen_lines(&Renderer::new(true).compose(&state).unwrap());

    assert_eq!(lines[1], &welcome_banner().as_bytes()[..10]);
}

#[test]
fn test_rows_render_tabs_and_clip_to_width() {
    let buffer = TextBuffer::from_lines(["a\tb", "0123456789abcdef"], 8);
    let state = EditorState::new(buffer, 4, 10);
    let (lines, _) = screen_lines(&Renderer::new(true).compose(&state).unwrap());

    assert_eq!(lines[0], b"a       b");
    assert_eq!(lines[1], b"0123456789");
    assert_eq!(lines[2], b"~");
    assert_eq!(lines[3], b"~");
}

#[test]
fn test_horizontal_offset_past_short_rows_draws_nothing() {
    let long = "x".repeat(30);
    let buffer = TextBuffer::from_lines([long.as_str(), "short"], 8);
    let mut state = EditorState::new(buffer, 3, 10);
    state.viewport.move_to_line_end(&state.buffer);
    state.viewport.scroll_to_cursor();
    assert_eq!(state.viewport.col_offset(), 21);

    let (lines, tail) = screen_lines(&Renderer::new(true).compose(&state).unwrap());
    assert_eq!(lines[0], b"xxxxxxxxx");
    assert_eq!(lines[1], b"");
    assert_eq!(tail, b"\x1b[1;10H\x1b[?25h");
}

#[test]
fn test_cursor_placed_relative_to_scroll() {
    let buffer = TextBuffer::from_lines((0..40).map(|i| format!("row {}", i)), 8);
    let mut state = EditorState::new(buffer, 24, 80);
    for _ in 0..30 {
        state.viewport.move_cursor(Direction::Down, &state.buffer);
    }
    state.viewport.move_cursor(Direction::Right, &state.buffer);
    state.viewport.scroll_to_cursor();

    let (lines, tail) = screen_lines(&Renderer::new(true).compose(&state).unwrap());
    assert_eq!(lines[0], b"row 7");
    assert_eq!(lines[23], b"row 30");
    assert_eq!(tail, b"\x1b[24;2H\x1b[?25h");
}

#[test]
fn test_refresh_is_a_single_write() {
    struct CountingWriter {
        writes: usize,
        bytes: Vec<u8>,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let state = EditorState::new(TextBuffer::from_lines(["hello"], 8), 24, 80);
    let renderer = Renderer::new(true);
    let mut out = CountingWriter {
        writes: 0,
        bytes: Vec::new(),
    };
    renderer.refresh(&mut out, &state).unwrap();

    assert_eq!(out.writes, 1);
    assert_eq!(out.bytes, renderer.compose(&state).unwrap());
}
