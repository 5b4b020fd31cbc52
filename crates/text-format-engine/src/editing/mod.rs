/*!
 * # Editing Module
 *
 * Everything that touches the host editor lives here. The transforms in
 * [`crate::transform`] only ever see plain strings; this module decides which
 * string they see and where the caret ends up afterwards.
 *
 * ## Architecture Overview
 *
 * ### 1. The Editor is borrowed, never owned
 * - The host's document and selection are reached through the [`Editor`] trait
 * - The engine keeps no copy of document text or selection between calls
 * - [`Document`] is an `xi_rope::Rope` backed implementation used by the CLI and tests
 *
 * ### 2. Offsets are characters
 * - A [`Position`] is `(line, column)`, an offset is a char count from document start
 * - Conversions go through the editor so they always reflect the current text
 *
 * ### 3. Three phases per command
 * - **`resolver`**: pick the span (implicit line selection, whole-line block expansion)
 * - transform (pure, see [`crate::transform`])
 * - **`recompute`**: select what was just written
 *
 * ## Usage Pattern
 *
 * ```rust
 * use text_format_engine::{Command, Document, Editor, Settings, TextFormat};
 *
 * let mut doc = Document::from_bytes(b"hello world\nsecond line").unwrap();
 * doc.set_cursor_offset(3).unwrap();
 *
 * let patch = TextFormat::new(Settings::default())
 *     .apply(Command::Uppercase, &mut doc)
 *     .unwrap();
 *
 * assert_eq!(doc.text(), "HELLO WORLD\nsecond line");
 * assert!(patch.changed);
 * ```
 */

pub mod document;
pub mod editor;
pub mod patch;
pub mod recompute;
pub mod resolver;

// Public API re-exports
pub use document::Document;
pub use editor::{CursorKind, EditError, Editor, Position, Selection};
pub use patch::Patch;
pub use resolver::ResolvedSpan;
