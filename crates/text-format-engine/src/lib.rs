pub mod command;
pub mod editing;
pub mod engine;
pub mod settings;
pub mod transform;

// Re-export key types for easier usage
pub use command::{Command, ParseCommandError};
pub use editing::{
    CursorKind, Document, EditError, Editor, Patch, Position, ResolvedSpan, Selection,
};
pub use engine::TextFormat;
pub use settings::{Settings, UnknownSetting};
