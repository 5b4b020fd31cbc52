use std::ops::Range;

use xi_rope::Rope;
use xi_rope::delta::Builder;

use crate::editing::{EditError, Editor, Position, Selection};

/// In-memory editor over an xi-rope buffer
///
/// Document is the reference [`Editor`] implementation. It keeps:
///
/// - **Lossless storage**: the whole text in one `xi_rope::Rope` buffer
/// - **Char-based selection**: anchor and head as char offsets, so they line up
///   with the offsets the engine reasons in
/// - **Version counter**: bumped on every write, which makes skipped writes observable
///
/// ```rust
/// # use text_format_engine::{Document, Editor, Position};
/// let mut doc = Document::from_bytes("héllo\nwörld".as_bytes()).unwrap();
/// assert_eq!(doc.position_to_offset(Position::new(1, 2)).unwrap(), 8);
/// assert_eq!(doc.offset_to_position(8).unwrap(), Position::new(1, 2));
///
/// doc.set_selection_offsets(6, 11).unwrap();
/// doc.replace_selection("world");
/// assert_eq!(doc.text(), "héllo\nworld");
/// assert_eq!(doc.version(), 1);
/// ```
#[derive(Clone)]
pub struct Document {
    /// xi-rope buffer holding the text as UTF-8
    pub(crate) buffer: Rope,
    /// Buffer length in chars, kept in step with every write
    pub(crate) len: usize,
    /// Selection anchor as a char offset
    pub(crate) anchor: usize,
    /// Selection head (caret) as a char offset
    pub(crate) head: usize,
    /// Incremented on each write
    pub(crate) version: u64,
}

impl Document {
    /// Create a new document from raw bytes; the caret starts at the end
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        let buffer = Rope::from(text);
        let len = text.chars().count();

        Ok(Self {
            buffer,
            len,
            anchor: len,
            head: len,
            version: 0,
        })
    }

    /// Get the document's content as raw bytes (exact round-trip)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Document length in chars
    pub fn len_chars(&self) -> usize {
        self.len
    }

    /// Selection as (anchor, head) char offsets
    pub fn selection_offsets(&self) -> (usize, usize) {
        (self.anchor, self.head)
    }

    pub fn set_selection_offsets(&mut self, anchor: usize, head: usize) -> Result<(), EditError> {
        for offset in [anchor, head] {
            if offset > self.len {
                return Err(EditError::OffsetOutOfRange {
                    offset,
                    len: self.len,
                });
            }
        }
        self.anchor = anchor;
        self.head = head;
        Ok(())
    }

    /// Collapse the selection to a caret at `offset`
    pub fn set_cursor_offset(&mut self, offset: usize) -> Result<(), EditError> {
        self.set_selection_offsets(offset, offset)
    }

    /// Byte range of a line's content, excluding its newline
    fn line_bytes(&self, line: usize) -> Range<usize> {
        let start = self.buffer.offset_of_line(line);
        let end = if line < self.last_line() {
            self.buffer.offset_of_line(line + 1) - 1
        } else {
            self.buffer.len()
        };
        start..end
    }

    fn line_width(&self, line: usize) -> usize {
        self.chars_in(self.line_bytes(line))
    }

    /// Chars in a byte range, counted chunk by chunk
    fn chars_in(&self, range: Range<usize>) -> usize {
        self.buffer
            .iter_chunks(range)
            .map(|chunk| chunk.chars().count())
            .sum()
    }

    /// Byte offset of the `char_offset`-th char; the buffer length when it
    /// points at the end, `None` past it
    fn byte_of_char(&self, char_offset: usize) -> Option<usize> {
        if char_offset > self.len {
            return None;
        }
        let mut remaining = char_offset;
        let mut base = 0;
        for chunk in self.buffer.iter_chunks(0..self.buffer.len()) {
            if let Some((byte, _)) = chunk.char_indices().nth(remaining) {
                return Some(base + byte);
            }
            remaining -= chunk.chars().count();
            base += chunk.len();
        }
        Some(base)
    }

    /// Nearest valid offset for a possibly out-of-range position
    fn clamp_to_offset(&self, pos: Position) -> usize {
        if pos.line > self.last_line() {
            return self.len;
        }
        let column = pos.column.min(self.line_width(pos.line));
        self.position_to_offset(Position::new(pos.line, column))
            .unwrap_or(self.len)
    }

    /// Byte range for a char range, clamped to the document
    fn byte_range(&self, from: usize, to: usize) -> Range<usize> {
        let end_of_text = self.buffer.len();
        let start = self.byte_of_char(from).unwrap_or(end_of_text);
        let end = self.byte_of_char(to).unwrap_or(end_of_text).max(start);
        start..end
    }

    fn replace_chars(&mut self, from: usize, to: usize, text: &str) {
        let range = self.byte_range(from, to);
        let removed = self.chars_in(range.clone());
        let mut builder = Builder::new(self.buffer.len());
        builder.replace(range, Rope::from(text));
        let delta = builder.build();
        self.buffer = delta.apply(&self.buffer);
        self.len = self.len - removed + text.chars().count();
        self.version += 1;
    }
}

impl Editor for Document {
    fn selection(&self) -> Selection {
        // Offsets stored here are always in range
        let anchor = self.offset_to_position(self.anchor).unwrap_or_else(|_| self.document_end());
        let head = self.offset_to_position(self.head).unwrap_or_else(|_| self.document_end());
        Selection::new(anchor, head)
    }

    fn selected_text(&self) -> String {
        let range = self.byte_range(self.anchor.min(self.head), self.anchor.max(self.head));
        self.buffer.slice_to_cow(range).into_owned()
    }

    fn position_to_offset(&self, pos: Position) -> Result<usize, EditError> {
        if pos.line > self.last_line() || pos.column > self.line_width(pos.line) {
            return Err(EditError::position(pos));
        }
        let line_start = self.buffer.offset_of_line(pos.line);
        Ok(self.chars_in(0..line_start) + pos.column)
    }

    fn offset_to_position(&self, offset: usize) -> Result<Position, EditError> {
        let byte = self
            .byte_of_char(offset)
            .ok_or(EditError::OffsetOutOfRange {
                offset,
                len: self.len,
            })?;
        let line = self.buffer.line_of_offset(byte);
        let line_start = self.buffer.offset_of_line(line);
        Ok(Position::new(line, self.chars_in(line_start..byte)))
    }

    fn last_line(&self) -> usize {
        self.buffer.line_of_offset(self.buffer.len())
    }

    fn document_end(&self) -> Position {
        let line = self.last_line();
        Position::new(line, self.line_width(line))
    }

    fn set_selection(&mut self, anchor: Position, head: Position) {
        self.anchor = self.clamp_to_offset(anchor);
        self.head = self.clamp_to_offset(head);
    }

    fn replace_selection(&mut self, text: &str) {
        let from = self.anchor.min(self.head);
        let to = self.anchor.max(self.head);
        self.replace_chars(from, to, text);
        let caret = from + text.chars().count();
        self.anchor = caret;
        self.head = caret;
    }

    fn text(&self) -> String {
        self.buffer.to_string()
    }

    fn set_text(&mut self, text: &str) {
        self.replace_chars(0, self.len, text);
        self.anchor = self.anchor.min(self.len);
        self.head = self.head.min(self.len);
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        // Compare buffer content as strings since Node doesn't implement PartialEq
        self.buffer.to_string() == other.buffer.to_string()
            && self.anchor == other.anchor
            && self.head == other.head
            && self.version == other.version
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("text", &self.buffer.to_string())
            .field("len", &self.len)
            .field("anchor", &self.anchor)
            .field("head", &self.head)
            .field("version", &self.version)
            .finish()
    }
}
