//! Pure text transforms, one per [`Command`].
//!
//! Every function here is total over arbitrary strings (the empty string
//! included) and performs no I/O.

pub mod case;
pub mod lists;
pub mod punctuation;
pub mod title;
pub mod whitespace;

use std::borrow::Cow;

use crate::{Command, Settings};

pub use case::{capitalize_sentence, capitalize_word, is_latin_or_cyrillic, lowercase, uppercase};
pub use lists::{format_bullet_list, format_ordered_list};
pub use punctuation::convert_chinese_punctuation;
pub use title::title_case;
pub use whitespace::{merge_paragraph, remove_spaces, split_by_blank};

/// Run the transform for `command` over `text`
pub fn apply(command: Command, text: &str, settings: &Settings) -> String {
    let text = prepare(command, text, settings);
    match command {
        Command::Lowercase => lowercase(&text),
        Command::Uppercase => uppercase(&text),
        Command::CapitalizeWord => capitalize_word(&text),
        Command::CapitalizeSentence => capitalize_sentence(&text),
        Command::Titlecase => title_case(&text),
        Command::RemoveSpaces => remove_spaces(&text),
        Command::MergeParagraph => merge_paragraph(&text, settings),
        Command::FormatBulletList => format_bullet_list(&text),
        Command::FormatOrderedList => format_ordered_list(&text),
        Command::SplitByBlank => split_by_blank(&text),
        Command::ConvertChinesePunctuation => convert_chinese_punctuation(&text),
    }
}

/// Optional lowercasing ahead of the capitalizing commands
fn prepare<'a>(command: Command, text: &'a str, settings: &Settings) -> Cow<'a, str> {
    if settings.lowercase_first && command.lowercases_first() {
        Cow::Owned(lowercase(text))
    } else {
        Cow::Borrowed(text)
    }
}
