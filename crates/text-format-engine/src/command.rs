use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A formatting command exposed to the host's command palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    Lowercase,
    Uppercase,
    CapitalizeWord,
    CapitalizeSentence,
    Titlecase,
    RemoveSpaces,
    MergeParagraph,
    FormatBulletList,
    FormatOrderedList,
    SplitByBlank,
    ConvertChinesePunctuation,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown command '{0}'")]
pub struct ParseCommandError(pub String);

impl Command {
    /// Every command, in palette order
    pub const ALL: [Command; 11] = [
        Command::Lowercase,
        Command::Uppercase,
        Command::CapitalizeWord,
        Command::CapitalizeSentence,
        Command::Titlecase,
        Command::RemoveSpaces,
        Command::MergeParagraph,
        Command::FormatBulletList,
        Command::FormatOrderedList,
        Command::SplitByBlank,
        Command::ConvertChinesePunctuation,
    ];

    /// Stable identifier used on the command line and in serialized form
    pub fn id(self) -> &'static str {
        match self {
            Command::Lowercase => "lowercase",
            Command::Uppercase => "uppercase",
            Command::CapitalizeWord => "capitalize-word",
            Command::CapitalizeSentence => "capitalize-sentence",
            Command::Titlecase => "titlecase",
            Command::RemoveSpaces => "remove-spaces",
            Command::MergeParagraph => "merge-paragraph",
            Command::FormatBulletList => "format-bullet-list",
            Command::FormatOrderedList => "format-ordered-list",
            Command::SplitByBlank => "split-by-blank",
            Command::ConvertChinesePunctuation => "convert-chinese-punctuation",
        }
    }

    /// Human-readable palette entry
    pub fn name(self) -> &'static str {
        match self {
            Command::Lowercase => "Lowercase selected text",
            Command::Uppercase => "Uppercase selected text",
            Command::CapitalizeWord => "Capitalize all words in selected text",
            Command::CapitalizeSentence => {
                "Capitalize only first word of sentence in selected text"
            }
            Command::Titlecase => "Title case selected text",
            Command::RemoveSpaces => "Remove redundant spaces in selection",
            Command::MergeParagraph => "Merge broken paragraph(s) in selection",
            Command::FormatBulletList => "Format bullet list",
            Command::FormatOrderedList => "Format ordered list",
            Command::SplitByBlank => "Split line(s) by blanks",
            Command::ConvertChinesePunctuation => "Convert to Chinese punctuation (,;:!?)",
        }
    }

    /// Commands that always operate on whole lines, even over a partial selection
    pub fn is_block_oriented(self) -> bool {
        matches!(
            self,
            Command::FormatBulletList | Command::FormatOrderedList | Command::SplitByBlank
        )
    }

    /// Commands whose output depends on the `lowercase_first` setting
    pub fn lowercases_first(self) -> bool {
        matches!(
            self,
            Command::CapitalizeWord | Command::CapitalizeSentence | Command::Titlecase
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.id() == s)
            .ok_or_else(|| ParseCommandError(s.to_string()))
    }
}
