//! Reformatting of inline or ragged lists into one item per line.

use regex::{Match, Regex};
use std::sync::OnceLock;

/// A `•` with any spaces around it
fn bullet_marker() -> &'static Regex {
    static BULLET_MARKER: OnceLock<Regex> = OnceLock::new();
    BULLET_MARKER.get_or_init(|| Regex::new(r" *• *").expect("Invalid bullet regex"))
}

/// An ordinal such as `a)`, `iv)`, `step:one)` or `3.`, with the spaces after it
fn ordinal_marker() -> &'static Regex {
    static ORDINAL_MARKER: OnceLock<Regex> = OnceLock::new();
    ORDINAL_MARKER.get_or_init(|| {
        Regex::new(r"(?:[^\s\[\]()]+\)|[0-9A-Za-z_]+[:;][0-9A-Za-z_]+\)|[0-9]\.) *")
            .expect("Invalid ordinal regex")
    })
}

fn newline_run() -> &'static Regex {
    static NEWLINE_RUN: OnceLock<Regex> = OnceLock::new();
    NEWLINE_RUN.get_or_init(|| Regex::new(r"\n+").expect("Invalid newline regex"))
}

/// Turn `•` bullets into `- ` items, one per line
pub fn format_bullet_list(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;

    for marker in bullet_marker()
        .find_iter(text)
        .filter(|m| is_bullet_boundary(text, m))
    {
        out.push_str(&text[last..marker.start()]);
        out.push_str("\n- ");
        last = marker.end();
    }
    out.push_str(&text[last..]);

    tidy_lines(&out)
}

/// A bullet counts when it opens the text or follows whitespace
fn is_bullet_boundary(text: &str, marker: &Match<'_>) -> bool {
    marker.as_str().starts_with(' ') || follows_whitespace(text, marker)
}

/// True at text start or right after a whitespace char of `text`
fn follows_whitespace(text: &str, marker: &Match<'_>) -> bool {
    text[..marker.start()]
        .chars()
        .next_back()
        .is_none_or(char::is_whitespace)
}

/// Renumber ordinal markers as `1. `, `2. `, ... one item per line
///
/// A marker counts at text start or after whitespace; the whitespace before it
/// is dropped.
pub fn format_ordered_list(text: &str) -> String {
    let (mut out, last) = ordinal_marker()
        .find_iter(text)
        .filter(|m| follows_whitespace(text, m))
        .enumerate()
        .fold(
            (String::with_capacity(text.len() + 8), 0),
            |(mut out, last), (index, marker)| {
                out.push_str(text[last..marker.start()].trim_end());
                out.push_str(&format!("\n{}. ", index + 1));
                (out, marker.end())
            },
        );
    out.push_str(&text[last..]);

    tidy_lines(&out)
}

/// Collapse newline runs to one and drop a leading newline
fn tidy_lines(text: &str) -> String {
    let collapsed = newline_run().replace_all(text, "\n");
    let collapsed: &str = &collapsed;
    collapsed.strip_prefix('\n').unwrap_or(collapsed).to_string()
}
