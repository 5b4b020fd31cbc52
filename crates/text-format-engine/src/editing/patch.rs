use serde::Serialize;

use crate::Command;
use crate::editing::Selection;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patch {
    pub command: Command,
    /// Span the command operated on, before replacement
    pub resolved: Selection,
    /// False when the transform left the text unchanged and no write happened
    pub changed: bool,
    pub new_selection: Selection,
}
