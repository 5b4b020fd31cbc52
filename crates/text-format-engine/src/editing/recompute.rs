//! Repositions the selection after a command has written its output.

use crate::Command;
use crate::editing::{CursorKind, EditError, Editor, Selection};

/// Select the text a command just wrote
///
/// `from_offset` is the start of the resolved span captured before the write;
/// `replaced` is the text that now occupies it. Must be called after the
/// (possibly skipped) replacement.
pub fn recompute<E: Editor + ?Sized>(
    editor: &mut E,
    command: Command,
    from_offset: usize,
    replaced: &str,
) -> Result<Selection, EditError> {
    let selection = match command {
        // Merging changes line counts, so anchor at the original start
        Command::MergeParagraph => {
            let anchor = editor.offset_to_position(from_offset)?;
            Selection::new(anchor, editor.cursor(CursorKind::Head))
        }
        _ => {
            let to_offset = editor.position_to_offset(editor.cursor(CursorKind::To))?;
            let start = to_offset.saturating_sub(replaced.chars().count());
            Selection::new(
                editor.offset_to_position(start)?,
                editor.offset_to_position(to_offset)?,
            )
        }
    };

    editor.set_selection(selection.anchor, selection.head);
    Ok(selection)
}
