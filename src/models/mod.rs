//! 数据模型
//!
//! - Row: one line of file text and its rendered form
//! - TextBuffer: the ordered rows of a file

pub mod row;
pub mod text_buffer;

pub use row::{Row, DEFAULT_TAB_STOP};
pub use text_buffer::{IndexError, TextBuffer};
