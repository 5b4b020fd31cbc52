//! English title case.
//!
//! Follows the widely used "to-title-case" rules: minor words stay lowercase
//! except at the start or end of the title or around a subtitle colon, and
//! words that already carry deliberate capitals or dots are left alone.

use regex::Regex;
use std::sync::OnceLock;

/// Chars that split a title into words; they are kept in the output
const WORD_SEPARATORS: [char; 5] = [' ', ':', '–', '—', '-'];

fn small_word() -> &'static Regex {
    static SMALL_WORD: OnceLock<Regex> = OnceLock::new();
    SMALL_WORD.get_or_init(|| {
        Regex::new(
            r"(?i)^(a|an|and|as|at|but|by|en|for|if|in|nor|of|on|or|per|the|to|v.?|vs.?|via)$",
        )
        .expect("Invalid small word regex")
    })
}

fn intentional_capitals() -> &'static Regex {
    static INTENTIONAL: OnceLock<Regex> = OnceLock::new();
    INTENTIONAL.get_or_init(|| Regex::new(r"[A-Z]|\..").expect("Invalid capitals regex"))
}

pub fn title_case(text: &str) -> String {
    let parts = split_keeping_separators(text);
    (0..parts.len())
        .map(|index| title_case_part(&parts, index))
        .collect()
}

/// Alternating word/separator pieces; always an odd count, words at even indices
fn split_keeping_separators(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if WORD_SEPARATORS.contains(&c) {
            let end = i + c.len_utf8();
            parts.push(&text[start..i]);
            parts.push(&text[i..end]);
            start = end;
        }
    }
    parts.push(&text[start..]);
    parts
}

fn title_case_part(parts: &[&str], index: usize) -> String {
    let current = parts[index];
    let back = |n: usize| index.checked_sub(n).map(|i| parts[i]);
    let ahead = |n: usize| parts.get(index + n).copied();

    let is_minor = small_word().is_match(current)
        && index != 0
        && index != parts.len() - 1
        // title end and subtitle start
        && back(3) != Some(":")
        && ahead(1) != Some(":")
        // minor words that open a hyphenated phrase
        && (ahead(1) != Some("-") || (back(1) == Some("-") && ahead(1) == Some("-")));
    if is_minor {
        return current.to_lowercase();
    }

    let rest: String = current.chars().skip(1).collect();
    if intentional_capitals().is_match(&rest) {
        return current.to_string();
    }

    // URL schemes and similar "word:thing" prefixes
    if ahead(1) == Some(":") && ahead(2) != Some("") {
        return current.to_string();
    }

    capitalize_first_alphanumeric(current)
}

fn capitalize_first_alphanumeric(word: &str) -> String {
    let is_alphanumeric =
        |c: char| c.is_ascii_alphanumeric() || ('\u{00C0}'..='\u{00FF}').contains(&c);

    match word.char_indices().find(|&(_, c)| is_alphanumeric(c)) {
        Some((i, c)) => {
            let mut out = String::with_capacity(word.len());
            out.push_str(&word[..i]);
            out.extend(c.to_uppercase());
            out.push_str(&word[i + c.len_utf8()..]);
            out
        }
        None => word.to_string(),
    }
}
