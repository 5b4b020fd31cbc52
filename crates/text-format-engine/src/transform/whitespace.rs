//! Space and line-break normalization.

use regex::Regex;
use std::sync::OnceLock;

use crate::Settings;

fn repeated_spaces() -> &'static Regex {
    static REPEATED_SPACES: OnceLock<Regex> = OnceLock::new();
    REPEATED_SPACES.get_or_init(|| Regex::new(r" {2,}").expect("Invalid spaces regex"))
}

fn blank_line_run() -> &'static Regex {
    static BLANK_LINE_RUN: OnceLock<Regex> = OnceLock::new();
    BLANK_LINE_RUN.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid newlines regex"))
}

/// Collapse runs of spaces to a single space; tabs and newlines are untouched
pub fn remove_spaces(text: &str) -> String {
    repeated_spaces().replace_all(text, " ").into_owned()
}

/// Join soft-wrapped lines within paragraphs
///
/// A newline with no newline on either side becomes a space, so blank-line
/// paragraph breaks survive. The settings then optionally squeeze blank line
/// runs down to one blank line, and space runs down to one space.
pub fn merge_paragraph(text: &str, settings: &Settings) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut merged: String = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let soft_break = c == '\n'
                && (i == 0 || chars[i - 1] != '\n')
                && chars.get(i + 1) != Some(&'\n');
            if soft_break { ' ' } else { c }
        })
        .collect();

    if settings.merge_remove_extra_newlines {
        merged = blank_line_run().replace_all(&merged, "\n\n").into_owned();
    }
    if settings.merge_remove_extra_spaces {
        merged = remove_spaces(&merged);
    }
    merged
}

/// One word per line: every space becomes a newline
pub fn split_by_blank(text: &str) -> String {
    text.replace(' ', "\n")
}
