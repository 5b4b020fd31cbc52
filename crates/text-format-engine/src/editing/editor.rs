use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A location in the document as (line, column), both 0-based
///
/// Ordering is lexicographic: line first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Start of the given line
    pub fn line_start(line: usize) -> Self {
        Self { line, column: 0 }
    }
}

/// An (anchor, head) pair; the head is where the caret sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    pub fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// An empty selection: a bare caret
    pub fn caret(at: Position) -> Self {
        Self {
            anchor: at,
            head: at,
        }
    }

    /// Smaller endpoint
    pub fn from(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// Larger endpoint
    pub fn to(&self) -> Position {
        self.anchor.max(self.head)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// Which end of the selection to ask the editor about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    From,
    To,
    Anchor,
    Head,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("position {line}:{column} is outside the document")]
    PositionOutOfRange { line: usize, column: usize },

    #[error("offset {offset} is past the end of the document ({len} chars)")]
    OffsetOutOfRange { offset: usize, len: usize },
}

impl EditError {
    pub(crate) fn position(pos: Position) -> Self {
        EditError::PositionOutOfRange {
            line: pos.line,
            column: pos.column,
        }
    }
}

/// The host editor as seen by the formatting engine
///
/// Offsets are character counts from the start of the document. All
/// conversions are relative to the document text at the time of the call.
pub trait Editor {
    /// Current selection; empty when the user only has a caret
    fn selection(&self) -> Selection;

    /// Text covered by the current selection
    fn selected_text(&self) -> String;

    fn position_to_offset(&self, pos: Position) -> Result<usize, EditError>;

    fn offset_to_position(&self, offset: usize) -> Result<Position, EditError>;

    /// Index of the last line (0 for a single-line document)
    fn last_line(&self) -> usize;

    /// Position just past the final character
    fn document_end(&self) -> Position;

    fn set_selection(&mut self, anchor: Position, head: Position);

    /// Replace the selected text; the selection collapses to the end of the insertion
    fn replace_selection(&mut self, text: &str);

    /// Full document text
    fn text(&self) -> String;

    /// Replace the full document text
    fn set_text(&mut self, text: &str);

    fn something_selected(&self) -> bool {
        !self.selection().is_empty()
    }

    fn cursor(&self, which: CursorKind) -> Position {
        let selection = self.selection();
        match which {
            CursorKind::From => selection.from(),
            CursorKind::To => selection.to(),
            CursorKind::Anchor => selection.anchor,
            CursorKind::Head => selection.head,
        }
    }
}
