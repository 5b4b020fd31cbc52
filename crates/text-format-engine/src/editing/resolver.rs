//! Decides which text a command operates on.
//!
//! An explicit selection is used as-is, except for block-oriented commands
//! which always snap to whole lines. A bare caret selects its whole line.

use crate::Command;
use crate::editing::{CursorKind, EditError, Editor, Position, Selection};

/// The span a command will transform, and the text it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpan {
    pub selection: Selection,
    pub text: String,
}

/// Resolve the span for `command` and select it in the editor
///
/// Never touches document content. Fails only when the editor reports a
/// cursor outside the document.
pub fn resolve<E: Editor + ?Sized>(
    editor: &mut E,
    command: Command,
) -> Result<ResolvedSpan, EditError> {
    let current = editor.selection();

    let selection = if command.is_block_oriented() {
        whole_lines(editor, current.from(), current.to())?
    } else if current.is_empty() {
        let caret = editor.cursor(CursorKind::Head);
        whole_lines(editor, caret, caret)?
    } else {
        current
    };

    if selection != current {
        editor.set_selection(selection.anchor, selection.head);
    }
    let text = editor.selected_text();
    log::debug!(
        "{command}: resolved {}:{}..{}:{} ({} chars)",
        selection.from().line,
        selection.from().column,
        selection.to().line,
        selection.to().column,
        text.chars().count()
    );

    Ok(ResolvedSpan { selection, text })
}

/// Every line from `first`'s line through `last`'s line, including the
/// trailing newline of the final line when it has one
fn whole_lines<E: Editor + ?Sized>(
    editor: &E,
    first: Position,
    last: Position,
) -> Result<Selection, EditError> {
    editor.position_to_offset(first)?;
    editor.position_to_offset(last)?;

    let anchor = Position::line_start(first.line);
    let head = if last.line < editor.last_line() {
        Position::line_start(last.line + 1)
    } else {
        editor.document_end()
    };
    Ok(Selection::new(anchor, head))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn doc_with_selection(text: &str, anchor: usize, head: usize) -> Document {
        let mut doc = Document::from_bytes(text.as_bytes()).unwrap();
        doc.set_selection_offsets(anchor, head).unwrap();
        doc
    }

    #[test]
    fn test_caret_on_inner_line_takes_line_and_newline() {
        let mut doc = doc_with_selection("first\nsecond\nthird", 8, 8);

        let span = resolve(&mut doc, Command::Uppercase).unwrap();

        assert_eq!(span.text, "second\n");
        assert_eq!(
            span.selection,
            Selection::new(Position::new(1, 0), Position::new(2, 0))
        );
        assert_eq!(doc.selection_offsets(), (6, 13));
    }

    #[test]
    fn test_caret_on_last_line_stops_at_document_end() {
        let mut doc = doc_with_selection("first\nsecond\nthird", 15, 15);

        let span = resolve(&mut doc, Command::Lowercase).unwrap();

        assert_eq!(span.text, "third");
        assert_eq!(
            span.selection,
            Selection::new(Position::new(2, 0), Position::new(2, 5))
        );
    }

    #[test]
    fn test_caret_on_empty_trailing_line() {
        let mut doc = doc_with_selection("text\n", 5, 5);

        let span = resolve(&mut doc, Command::Uppercase).unwrap();

        assert_eq!(span.text, "");
        assert!(span.selection.is_empty());
    }

    #[test]
    fn test_explicit_selection_used_verbatim() {
        let mut doc = doc_with_selection("alpha beta\ngamma", 3, 13);

        let span = resolve(&mut doc, Command::Uppercase).unwrap();

        assert_eq!(span.text, "ha beta\nga");
        assert_eq!(doc.selection_offsets(), (3, 13));
    }

    #[rstest]
    #[case(Command::FormatBulletList)]
    #[case(Command::FormatOrderedList)]
    #[case(Command::SplitByBlank)]
    fn test_block_commands_expand_partial_selection(#[case] command: Command) {
        let mut doc = doc_with_selection("intro\na) one\nb) two\noutro", 8, 15);

        let span = resolve(&mut doc, command).unwrap();

        assert_eq!(span.text, "a) one\nb) two\n");
        assert_eq!(
            span.selection,
            Selection::new(Position::new(1, 0), Position::new(3, 0))
        );
    }

    #[test]
    fn test_block_command_backwards_selection_reaching_last_line() {
        let mut doc = doc_with_selection("intro\na) one\nb) two", 16, 7);

        let span = resolve(&mut doc, Command::FormatOrderedList).unwrap();

        assert_eq!(span.text, "a) one\nb) two");
        assert_eq!(
            span.selection,
            Selection::new(Position::new(1, 0), Position::new(2, 6))
        );
    }

    #[test]
    fn test_block_command_with_caret_takes_its_line() {
        let mut doc = doc_with_selection("• a • b\nnext", 2, 2);

        let span = resolve(&mut doc, Command::FormatBulletList).unwrap();

        assert_eq!(span.text, "• a • b\n");
    }

    /// Editor stub whose caret points past the document
    struct BrokenCaret(Document);

    impl Editor for BrokenCaret {
        fn selection(&self) -> Selection {
            Selection::caret(Position::new(9, 0))
        }
        fn selected_text(&self) -> String {
            self.0.selected_text()
        }
        fn position_to_offset(&self, pos: Position) -> Result<usize, EditError> {
            self.0.position_to_offset(pos)
        }
        fn offset_to_position(&self, offset: usize) -> Result<Position, EditError> {
            self.0.offset_to_position(offset)
        }
        fn last_line(&self) -> usize {
            self.0.last_line()
        }
        fn document_end(&self) -> Position {
            self.0.document_end()
        }
        fn set_selection(&mut self, anchor: Position, head: Position) {
            self.0.set_selection(anchor, head)
        }
        fn replace_selection(&mut self, text: &str) {
            self.0.replace_selection(text)
        }
        fn text(&self) -> String {
            self.0.text()
        }
        fn set_text(&mut self, text: &str) {
            self.0.set_text(text)
        }
    }

    #[test]
    fn test_out_of_range_caret_is_reported() {
        let mut editor = BrokenCaret(Document::from_bytes(b"one line").unwrap());

        let err = resolve(&mut editor, Command::Uppercase).unwrap_err();

        assert_eq!(err, EditError::PositionOutOfRange { line: 9, column: 0 });
        assert_eq!(editor.text(), "one line");
    }
}
