use crate::editing::{Editor, Patch, recompute, resolver};
use crate::{Command, EditError, Settings, transform};

/// Applies formatting commands to an editor
///
/// Holds only the settings; the document and selection stay with the editor.
#[derive(Debug, Clone, Default)]
pub struct TextFormat {
    settings: Settings,
}

impl TextFormat {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run `command` against the active editor, if there is one
    ///
    /// Without an editor this is a silent no-op returning `Ok(None)`.
    pub fn run<E: Editor + ?Sized>(
        &self,
        command: Command,
        editor: Option<&mut E>,
    ) -> Result<Option<Patch>, EditError> {
        match editor {
            Some(editor) => self.apply(command, editor).map(Some),
            None => {
                log::debug!("{command}: no active editor");
                Ok(None)
            }
        }
    }

    /// Resolve the span, transform it, write it back and select the result
    ///
    /// The write is skipped when the transform leaves the text unchanged; the
    /// selection is recomputed either way.
    pub fn apply<E: Editor + ?Sized>(
        &self,
        command: Command,
        editor: &mut E,
    ) -> Result<Patch, EditError> {
        let span = resolver::resolve(editor, command)?;
        let from_offset = editor.position_to_offset(span.selection.from())?;

        let replaced = transform::apply(command, &span.text, &self.settings);
        let changed = replaced != span.text;
        if changed {
            editor.replace_selection(&replaced);
        } else {
            log::debug!("{command}: text unchanged, skipping write");
        }

        let new_selection = recompute::recompute(editor, command, from_offset, &replaced)?;

        Ok(Patch {
            command,
            resolved: span.selection,
            changed,
            new_selection,
        })
    }

    /// Transform the whole document, ignoring the selection
    ///
    /// Returns whether the document changed.
    pub fn apply_to_document<E: Editor + ?Sized>(&self, command: Command, editor: &mut E) -> bool {
        let text = editor.text();
        let replaced = transform::apply(command, &text, &self.settings);
        if replaced == text {
            log::debug!("{command}: document unchanged");
            return false;
        }
        editor.set_text(&replaced);
        true
    }
}
